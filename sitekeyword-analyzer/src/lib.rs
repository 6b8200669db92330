//! Keyword extraction and scoring for a single web page.
//!
//! An [`Analyzer`] fetches one URL, parses it, and pulls four weighted signals out of
//! it: the title, the `keywords` meta tag, the description and the heading text. Each
//! is segmented by language ([`english`] or [`japanese`]), folded to a normalized key
//! and scored; [`scoring`] sums the weights and ranks the result.
//!
//! # Examples
//! ```
//! use sitekeyword_analyzer::Analyzer;
//! use sitekeyword_config::AnalyzerConfig;
//!
//! let html = r#"<title>Rust Weekly</title>
//!     <meta name="keywords" content="rust, newsletter">
//!     <h1>Rust releases</h1>"#;
//! let analyzer = Analyzer::from_html("https://example.com", html, AnalyzerConfig::default());
//! let result = analyzer.analysis_result(3)?;
//! assert_eq!(result.title, "Rust Weekly");
//! assert_eq!(result.keywords[0].keyword, "rust");
//! # Ok::<(), sitekeyword_analyzer::AnalyzerError>(())
//! ```
pub mod analyzer;
pub mod english;
pub mod error;
pub mod japanese;
pub mod keywords;
pub mod language;
pub mod normalize;
pub mod scoring;
pub mod types;

pub use analyzer::Analyzer;
pub use error::{AnalyzerError, ErrorKind, Result};
pub use keywords::{Candidate, Extraction, extract_keywords};
pub use language::{Language, contains_japanese, detect_language};
pub use normalize::{DictionaryNormalizer, Identity, Normalizer};
pub use scoring::{ScoreBoard, Source, rank_keywords, select_description};
pub use types::{AnalysisResult, KeywordWithScore, KeywordsOnly, PageData};
