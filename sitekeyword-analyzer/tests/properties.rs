//! Property-based tests using proptest

use proptest::prelude::*;
use sitekeyword_analyzer::{
    DictionaryNormalizer, Extraction, Identity, Language, Normalizer, ScoreBoard, Source,
    contains_japanese, detect_language, extract_keywords, rank_keywords,
};
use sitekeyword_config::{AnalyzerConfig, ScoreWeights};
use std::collections::{HashMap, HashSet};

fn english_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z][a-z0-9-]{0,7}[,.!]?", 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn kana_and_kanji_are_always_detected(
        prefix in "[a-zA-Z0-9 ]{0,12}",
        c in prop::sample::select(vec!['ぁ', 'ん', 'ァ', 'ヶ', 'ー', '一', '語', '龯']),
    ) {
        let text = format!("{prefix}{c}");
        prop_assert!(contains_japanese(&text));
        prop_assert_eq!(detect_language(&text), Language::Japanese);
    }

    #[test]
    fn ascii_is_never_japanese(text in "[ -~]{0,64}") {
        prop_assert!(!contains_japanese(&text));
        prop_assert_eq!(detect_language(&text), Language::English);
    }

    #[test]
    fn english_candidates_are_never_short_or_dashes(words in english_words()) {
        let text = words.join(" ");
        let extraction = extract_keywords(&text, &HashSet::new(), &Identity);
        for c in extraction.candidates() {
            prop_assert!(c.keyword.chars().count() > 1, "kept {:?}", c.keyword);
            prop_assert_ne!(c.keyword.as_str(), "-");
            prop_assert_eq!(c.keyword.to_lowercase(), c.keyword.clone());
        }
    }

    #[test]
    fn stop_words_never_survive(words in english_words()) {
        let config = AnalyzerConfig::default();
        let normalizer = DictionaryNormalizer::from_config(&config);
        let text = format!("the {} and of", words.join(" "));
        let extraction = extract_keywords(&text, &config.english_stop_words, &normalizer);
        for c in extraction.candidates() {
            prop_assert!(!config.english_stop_words.contains(&c.keyword));
        }
    }

    #[test]
    fn dictionary_folding_is_idempotent(word in "[a-z]{2,10}") {
        let config = AnalyzerConfig::default();
        let normalizer = DictionaryNormalizer::from_config(&config);
        let once = normalizer.normalize(&word);
        prop_assert_eq!(normalizer.normalize(&once), once);
    }

    #[test]
    fn scores_do_not_depend_on_source_order(
        texts in prop::collection::vec(english_words(), 4),
        order in Just(Source::ORDER.to_vec()).prop_shuffle(),
    ) {
        let weights = ScoreWeights::default();
        let extractions: HashMap<Source, Extraction> = Source::ORDER
            .iter()
            .zip(&texts)
            .map(|(s, words)| (*s, extract_keywords(&words.join(" "), &HashSet::new(), &Identity)))
            .collect();

        let mut forward = ScoreBoard::new();
        for source in Source::ORDER {
            forward.add_source(source, &extractions[&source], &weights);
        }
        let mut shuffled = ScoreBoard::new();
        for source in &order {
            shuffled.add_source(*source, &extractions[source], &weights);
        }

        prop_assert_eq!(forward.len(), shuffled.len());
        for e in extractions.values() {
            for c in e.candidates() {
                prop_assert_eq!(forward.score(&c.keyword), shuffled.score(&c.keyword));
            }
        }
    }

    #[test]
    fn ranking_is_bounded_and_non_increasing(
        scores in prop::collection::hash_map("[a-z]{2,6}", 1u64..100, 0..40),
        n in 0usize..30,
    ) {
        let spellings: HashMap<String, String> =
            scores.keys().map(|k| (k.clone(), k.clone())).collect();
        let ranked = rank_keywords(&scores, &spellings, n);

        prop_assert_eq!(ranked.len(), n.min(scores.len()));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].keyword < pair[1].keyword);
            }
        }
        prop_assert!(ranked.iter().all(|k| k.score > 0));
    }
}
