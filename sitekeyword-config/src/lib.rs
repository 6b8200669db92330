//! Analyzer configuration: data model, built-in defaults and a YAML + environment loader.
//!
//! Precedence, lowest first: built-in defaults, files/inline YAML in the order they were
//! attached, then `SITEKEYWORD_`-prefixed environment variables (`__` separates nested
//! keys, e.g. `SITEKEYWORD_SCORE_WEIGHTS__TITLE=8`). Maps such as
//! `plural_singular_map` merge with the defaults; lists such as `english_stop_words`
//! replace them. `${VAR}` references inside string values are expanded after merging.
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub mod defaults;

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;
const ENV_PREFIX: &str = "SITEKEYWORD";

/// Per-source score weights. Each keyword occurrence adds its source's weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub title: u32,
    pub meta_keyword: u32,
    pub description: u32,
    pub main_content: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title: 5,
            meta_keyword: 5,
            description: 3,
            main_content: 1,
        }
    }
}

/// Read-only settings for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Page fetch timeout in seconds.
    pub timeout_secs: u64,
    /// Retry budget of the fetch collaborator (429/5xx/network only).
    pub retries: usize,
    pub user_agent: String,
    /// Used whenever a caller asks for zero keywords.
    pub max_keywords: usize,
    pub score_weights: ScoreWeights,
    pub english_stop_words: HashSet<String>,
    pub plural_singular_map: HashMap<String, String>,
    pub invariant_words: HashSet<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            retries: 2,
            user_agent: concat!("sitekeyword/", env!("CARGO_PKG_VERSION")).to_string(),
            max_keywords: 20,
            score_weights: ScoreWeights::default(),
            english_stop_words: defaults::ENGLISH_STOP_WORDS
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
            plural_singular_map: defaults::PLURAL_SINGULAR
                .iter()
                .map(|(plural, singular)| ((*plural).to_string(), (*singular).to_string()))
                .collect(),
            invariant_words: defaults::INVARIANT_WORDS
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
        }
    }
}

/// Reasons a merged configuration is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidConfig {
    #[error("score weight `{0}` must be a positive integer")]
    NonPositiveWeight(&'static str),
    #[error("max_keywords must be at least 1")]
    ZeroMaxKeywords,
    #[error("timeout_secs must be at least 1")]
    ZeroTimeout,
}

impl AnalyzerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Requested keyword count, with `0` meaning "use the configured default".
    ///
    /// ```
    /// use sitekeyword_config::AnalyzerConfig;
    ///
    /// let cfg = AnalyzerConfig::default();
    /// assert_eq!(cfg.resolve_max_keywords(0), 20);
    /// assert_eq!(cfg.resolve_max_keywords(3), 3);
    /// ```
    pub fn resolve_max_keywords(&self, requested: usize) -> usize {
        if requested == 0 {
            self.max_keywords
        } else {
            requested
        }
    }

    pub fn validate(&self) -> Result<(), InvalidConfig> {
        let w = &self.score_weights;
        for (name, value) in [
            ("title", w.title),
            ("meta_keyword", w.meta_keyword),
            ("description", w.description),
            ("main_content", w.main_content),
        ] {
            if value == 0 {
                return Err(InvalidConfig::NonPositiveWeight(name));
            }
        }
        if self.max_keywords == 0 {
            return Err(InvalidConfig::ZeroMaxKeywords);
        }
        if self.timeout_secs == 0 {
            return Err(InvalidConfig::ZeroTimeout);
        }
        Ok(())
    }
}

/// `<config_dir>/sitekeyword/sitekeyword.yaml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sitekeyword").join("sitekeyword.yaml"))
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder over the `config` crate sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<&'static str>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Defaults plus `SITEKEYWORD_` environment overrides.
    ///
    /// ```
    /// use sitekeyword_config::ConfigLoader;
    ///
    /// let cfg = ConfigLoader::new()
    ///     .with_yaml_str("max_keywords: 5")
    ///     .load()
    ///     .expect("valid config");
    ///
    /// assert_eq!(cfg.max_keywords, 5);
    /// assert_eq!(cfg.score_weights.title, 5);
    /// assert!(cfg.english_stop_words.contains("the"));
    /// ```
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
            env_prefix: Some(ENV_PREFIX),
        }
    }

    /// Skip the environment overlay entirely.
    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Like [`ConfigLoader::with_file`] but a missing file is not an error.
    pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Merge an inline YAML snippet.
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, FileFormat::Yaml));
        self
    }

    /// Merge all sources over the defaults, expand `${VAR}` references and validate.
    ///
    /// ```
    /// use sitekeyword_config::ConfigLoader;
    ///
    /// let err = ConfigLoader::new()
    ///     .without_env()
    ///     .with_yaml_str("score_weights:\n  title: 0")
    ///     .load()
    ///     .unwrap_err();
    /// assert!(err.to_string().contains("title"));
    /// ```
    pub fn load(self) -> Result<AnalyzerConfig, ConfigError> {
        let overlays = self.builder.build()?;

        let mut merged = Config::builder()
            .add_source(Config::try_from(&AnalyzerConfig::default())?)
            .add_source(overlays);
        if let Some(prefix) = self.env_prefix {
            merged = merged.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        let mut v: Value = merged.build()?.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: AnalyzerConfig =
            serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))?;
        typed
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        Ok(typed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(AnalyzerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn title_and_meta_outweigh_other_sources() {
        let w = ScoreWeights::default();
        assert!(w.title >= w.description && w.title >= w.main_content);
        assert!(w.meta_keyword >= w.description && w.meta_keyword >= w.main_content);
    }

    #[test]
    fn plural_table_is_idempotent() {
        let cfg = AnalyzerConfig::default();
        for singular in cfg.plural_singular_map.values() {
            assert!(
                !cfg.plural_singular_map.contains_key(singular),
                "{singular} is both a singular and a plural"
            );
        }
    }

    #[test]
    fn zero_weight_is_rejected() {
        let mut cfg = AnalyzerConfig::default();
        cfg.score_weights.description = 0;
        assert_eq!(
            cfg.validate(),
            Err(InvalidConfig::NonPositiveWeight("description"))
        );
    }

    #[test]
    fn zero_max_keywords_is_rejected() {
        let cfg = AnalyzerConfig {
            max_keywords: 0,
            ..AnalyzerConfig::default()
        };
        assert_eq!(cfg.validate(), Err(InvalidConfig::ZeroMaxKeywords));
    }

    #[test]
    fn expands_in_array_and_object() {
        temp_env::with_vars([("CITY", Some("Winston")), ("STATE", Some("NC"))], || {
            let mut v = json!(["hello-$CITY", { "loc": "${CITY}-${STATE}" }, 42, null]);
            expand_env_in_value(&mut v);
            assert_eq!(v, json!(["hello-Winston", { "loc": "Winston-NC" }, 42, null]));
        });
    }

    #[test]
    fn stops_on_cycles() {
        temp_env::with_vars([("A", Some("${B}")), ("B", Some("${A}"))], || {
            let mut v = json!("x=${A}-y");
            expand_env_in_value(&mut v);
            let s = v.as_str().unwrap();
            assert!(s.starts_with("x=") && s.ends_with("-y"));
            assert!(s.contains("${"));
        });
    }

    #[test]
    fn unknown_vars_are_left_as_is() {
        let mut v = json!("hi-${SITEKEYWORD_DOES_NOT_EXIST}");
        expand_env_in_value(&mut v);
        assert_eq!(v, json!("hi-${SITEKEYWORD_DOES_NOT_EXIST}"));
    }
}
