//! Weighted score aggregation across text sources, and ranking.
//!
//! Scores are plain sums of per-occurrence weights, so they do not depend on the
//! order sources are added. The displayed spelling of a keyword does: the longest
//! surface form wins and the first one added wins ties. Sources are therefore
//! always added in [`Source::ORDER`].

use crate::keywords::Extraction;
use crate::types::KeywordWithScore;
use sitekeyword_config::ScoreWeights;
use sitekeyword_web::MetaTags;
use std::cmp::Ordering;
use std::collections::HashMap;

/// A weighted channel of page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Title,
    MetaKeywords,
    Description,
    MainContent,
}

impl Source {
    pub const ORDER: [Source; 4] = [
        Source::Title,
        Source::MetaKeywords,
        Source::Description,
        Source::MainContent,
    ];

    pub fn weight(self, weights: &ScoreWeights) -> u32 {
        match self {
            Source::Title => weights.title,
            Source::MetaKeywords => weights.meta_keyword,
            Source::Description => weights.description,
            Source::MainContent => weights.main_content,
        }
    }

    /// Short strings count each keyword once; main content counts every occurrence.
    pub fn counts_occurrences(self) -> bool {
        matches!(self, Source::MainContent)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Source::Title => "title",
            Source::MetaKeywords => "meta_keywords",
            Source::Description => "description",
            Source::MainContent => "main_content",
        }
    }
}

/// `description`, replaced by `og:description` only when that one is strictly longer.
pub fn select_description(meta: &MetaTags) -> Option<&str> {
    let desc = meta.get("description").map(String::as_str);
    let og = meta.get("og:description").map(String::as_str);
    let len = |s: Option<&str>| s.map_or(0, |s| s.chars().count());
    let chosen = if len(og) > len(desc) { og } else { desc };
    chosen.filter(|s| !s.is_empty())
}

/// Score map plus the spelling shown for each normalized keyword.
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    scores: HashMap<String, u64>,
    spellings: HashMap<String, String>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `weight` to `keyword` and remember `surface` if it is the longest seen.
    pub fn add(&mut self, keyword: &str, surface: &str, weight: u32) {
        *self.scores.entry(keyword.to_string()).or_insert(0) += u64::from(weight);
        match self.spellings.get_mut(keyword) {
            Some(existing) => {
                if surface.chars().count() > existing.chars().count() {
                    *existing = surface.to_string();
                }
            }
            None => {
                self.spellings.insert(keyword.to_string(), surface.to_string());
            }
        }
    }

    /// Score an extraction once per distinct keyword. Returns the number of keywords scored.
    pub fn add_unique(&mut self, extraction: &Extraction, weight: u32) -> usize {
        let unique = extraction.unique();
        for c in &unique {
            self.add(&c.keyword, &c.surface, weight);
        }
        unique.len()
    }

    /// Score every occurrence in an extraction. Returns the number of occurrences scored.
    pub fn add_occurrences(&mut self, extraction: &Extraction, weight: u32) -> usize {
        for c in extraction.candidates() {
            self.add(&c.keyword, &c.surface, weight);
        }
        extraction.len()
    }

    pub fn add_source(
        &mut self,
        source: Source,
        extraction: &Extraction,
        weights: &ScoreWeights,
    ) -> usize {
        let weight = source.weight(weights);
        if source.counts_occurrences() {
            self.add_occurrences(extraction, weight)
        } else {
            self.add_unique(extraction, weight)
        }
    }

    pub fn score(&self, keyword: &str) -> Option<u64> {
        self.scores.get(keyword).copied()
    }

    pub fn spelling(&self, keyword: &str) -> Option<&str> {
        self.spellings.get(keyword).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn rank(&self, n: usize) -> Vec<KeywordWithScore> {
        rank_keywords(&self.scores, &self.spellings, n)
    }
}

/// Order for ranked output: score descending, then keyword, then the normalized key.
pub(crate) fn compare_ranked(a: (&str, u64, &str), b: (&str, u64, &str)) -> Ordering {
    b.1.cmp(&a.1)
        .then_with(|| a.0.cmp(b.0))
        .then_with(|| a.2.cmp(b.2))
}

/// Top `n` keywords by descending score, labelled with their recorded spelling.
///
/// Equal scores are ordered by spelling, then by normalized key, so the output is
/// reproducible run to run.
pub fn rank_keywords(
    scores: &HashMap<String, u64>,
    spellings: &HashMap<String, String>,
    n: usize,
) -> Vec<KeywordWithScore> {
    let mut ranked: Vec<(&str, u64, &str)> = scores
        .iter()
        .map(|(key, &score)| {
            let label = spellings.get(key).map_or(key.as_str(), String::as_str);
            (label, score, key.as_str())
        })
        .collect();
    ranked.sort_by(|a, b| compare_ranked(*a, *b));
    ranked.truncate(n);

    tracing::debug!(
        candidates = scores.len(),
        returned = ranked.len(),
        top_score = ?ranked.first().map(|r| r.1),
        "analyzer.rank"
    );

    ranked
        .into_iter()
        .map(|(label, score, _)| KeywordWithScore::new(label, score))
        .collect()
}
