//! Keyword candidates and the language-routed entry point.

use crate::language::{Language, detect_language};
use crate::normalize::Normalizer;
use crate::types::KeywordWithScore;
use crate::{english, japanese};
use std::collections::{HashMap, HashSet};

/// One surviving token: the key it aggregates under and how it was spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub keyword: String,
    pub surface: String,
}

impl Candidate {
    pub fn new(keyword: impl Into<String>, surface: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            surface: surface.into(),
        }
    }
}

/// Every candidate of one text, in text order.
///
/// Tokenization happens once; [`Extraction::unique`] and [`Extraction::frequencies`]
/// are two views over the same candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    candidates: Vec<Candidate>,
}

impl Extraction {
    pub(crate) fn from_candidates(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// One candidate per keyword, in first-occurrence order, carrying the longest
    /// surface seen for it (first one on equal length).
    pub fn unique(&self) -> Vec<Candidate> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut out: Vec<Candidate> = Vec::new();
        for c in &self.candidates {
            match index.get(c.keyword.as_str()) {
                Some(&i) => {
                    if c.surface.chars().count() > out[i].surface.chars().count() {
                        out[i].surface = c.surface.clone();
                    }
                }
                None => {
                    index.insert(&c.keyword, out.len());
                    out.push(c.clone());
                }
            }
        }
        out
    }

    /// Distinct keywords in first-occurrence order.
    pub fn keywords(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.candidates
            .iter()
            .filter(|c| seen.insert(c.keyword.as_str()))
            .map(|c| c.keyword.clone())
            .collect()
    }

    /// Occurrence counts per keyword, in first-occurrence order.
    ///
    /// Each entry is labelled with the keyword's most frequent surface form (first
    /// seen on ties) and scored with its raw occurrence count.
    pub fn frequencies(&self) -> Vec<KeywordWithScore> {
        struct Tally<'a> {
            count: u64,
            surfaces: Vec<(&'a str, u64)>,
        }

        let mut order: Vec<&str> = Vec::new();
        let mut tallies: HashMap<&str, Tally<'_>> = HashMap::new();
        for c in &self.candidates {
            let tally = tallies.entry(c.keyword.as_str()).or_insert_with(|| {
                order.push(c.keyword.as_str());
                Tally {
                    count: 0,
                    surfaces: Vec::new(),
                }
            });
            tally.count += 1;
            match tally.surfaces.iter_mut().find(|(s, _)| *s == c.surface) {
                Some((_, n)) => *n += 1,
                None => tally.surfaces.push((c.surface.as_str(), 1)),
            }
        }

        order
            .into_iter()
            .filter_map(|keyword| {
                let tally = tallies.get(keyword)?;
                let mut best = ("", 0u64);
                for &(surface, n) in &tally.surfaces {
                    if n > best.1 {
                        best = (surface, n);
                    }
                }
                Some(KeywordWithScore::new(best.0, tally.count))
            })
            .collect()
    }
}

/// Extract candidates from `text`, routing Japanese text to the Japanese segmenter.
///
/// Stop words and the normalizer only apply on the English path.
pub fn extract_keywords<N>(text: &str, stop_words: &HashSet<String>, normalizer: &N) -> Extraction
where
    N: Normalizer + ?Sized,
{
    match detect_language(text) {
        Language::Japanese => japanese::extract(text),
        Language::English => english::extract(text, stop_words, normalizer),
    }
}
