//! Plural to singular folding.
//!
//! Folding is dictionary driven: an exact table lookup, with invariant words exempt.
//! There are no suffix heuristics, so `bus` never becomes `bu`.

use sitekeyword_config::AnalyzerConfig;
use std::collections::{HashMap, HashSet};

/// Maps a lowercase token to the key it is aggregated under.
pub trait Normalizer {
    fn normalize(&self, word: &str) -> String;
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, word: &str) -> String {
        self(word)
    }
}

/// Leaves every word untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Normalizer for Identity {
    fn normalize(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Table-driven folding backed by the configured word lists.
#[derive(Debug, Clone, Copy)]
pub struct DictionaryNormalizer<'a> {
    plural_singular: &'a HashMap<String, String>,
    invariant: &'a HashSet<String>,
}

impl<'a> DictionaryNormalizer<'a> {
    pub fn new(
        plural_singular: &'a HashMap<String, String>,
        invariant: &'a HashSet<String>,
    ) -> Self {
        Self {
            plural_singular,
            invariant,
        }
    }

    pub fn from_config(config: &'a AnalyzerConfig) -> Self {
        Self::new(&config.plural_singular_map, &config.invariant_words)
    }
}

impl Normalizer for DictionaryNormalizer<'_> {
    fn normalize(&self, word: &str) -> String {
        if self.invariant.contains(word) {
            return word.to_string();
        }
        match self.plural_singular.get(word) {
            Some(singular) => singular.clone(),
            None => word.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_only_mapped_plurals() {
        let cfg = AnalyzerConfig::default();
        let n = DictionaryNormalizer::from_config(&cfg);
        assert_eq!(n.normalize("tests"), "test");
        assert_eq!(n.normalize("children"), "child");
        assert_eq!(n.normalize("cats"), "cats");
        assert_eq!(n.normalize("bus"), "bus");
    }

    #[test]
    fn invariant_words_win_over_the_table() {
        let map = HashMap::from([("news".to_string(), "new".to_string())]);
        let invariant = HashSet::from(["news".to_string()]);
        let n = DictionaryNormalizer::new(&map, &invariant);
        assert_eq!(n.normalize("news"), "news");
    }

    #[test]
    fn default_tables_are_idempotent() {
        let cfg = AnalyzerConfig::default();
        let n = DictionaryNormalizer::from_config(&cfg);
        for word in cfg
            .plural_singular_map
            .keys()
            .chain(cfg.invariant_words.iter())
        {
            let once = n.normalize(word);
            assert_eq!(n.normalize(&once), once, "{word}");
        }
    }

    #[test]
    fn closures_are_normalizers() {
        let upper = |w: &str| w.to_uppercase();
        assert_eq!(upper.normalize("go"), "GO");
        assert_eq!(Identity.normalize("tests"), "tests");
    }
}
