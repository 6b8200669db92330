use sitekeyword_http::HttpError;
use sitekeyword_web::DocumentError;
use thiserror::Error;

/// Result type alias for analyzer operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The page could not be fetched; no analyzer is built.
    #[error("fetch failed: {0}")]
    Fetch(#[from] HttpError),

    /// The fetched body is not a usable HTML document; no analyzer is built.
    #[error("parse failed: {0}")]
    Parse(#[from] DocumentError),

    /// One extraction step failed. Other steps still run.
    #[error("extracting {step} failed: {message}")]
    Extraction { step: &'static str, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    Parse,
    Extraction,
}

impl AnalyzerError {
    pub fn extraction(step: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Extraction {
            step,
            message: err.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Fetch(_) => ErrorKind::Fetch,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Extraction { .. } => ErrorKind::Extraction,
        }
    }
}
