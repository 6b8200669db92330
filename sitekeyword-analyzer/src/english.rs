//! Whitespace tokenizer with stop-word filtering and plural folding.

use crate::keywords::{Candidate, Extraction};
use crate::normalize::Normalizer;
use std::collections::HashSet;

/// Tokenize lowercased `text` on whitespace and keep the tokens that survive
/// filtering both before and after normalization.
///
/// A token is dropped when it is a stop word, is at most one character long, or is
/// a lone `-`. Leading and trailing non-alphanumeric characters are trimmed first,
/// so `"go,"` yields `go` while `x-ray` keeps its inner hyphen.
pub fn extract<N>(text: &str, stop_words: &HashSet<String>, normalizer: &N) -> Extraction
where
    N: Normalizer + ?Sized,
{
    let lowered = text.to_lowercase();
    let candidates = lowered
        .split_whitespace()
        .map(trim_token)
        .filter(|token| !is_discarded(token, stop_words))
        .filter_map(|token| {
            let keyword = normalizer.normalize(token);
            (!is_discarded(&keyword, stop_words)).then(|| Candidate::new(keyword, token))
        })
        .collect();
    Extraction::from_candidates(candidates)
}

fn trim_token(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

fn is_discarded(word: &str, stop_words: &HashSet<String>) -> bool {
    word == "-" || word.chars().count() <= 1 || stop_words.contains(word)
}
