use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use serde::Serialize;
use sitekeyword_analyzer::AnalysisResult;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.4f [%:z]";

/// Extract and rank keywords from a web page.
///
/// Fetches the page title, meta tags and headings, and prints the top keywords
/// with their relevance scores as JSON.
#[derive(Debug, Parser)]
#[command(name = "sitekeyword", version)]
pub struct Cli {
    /// Page to analyze (required)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Number of keywords to print; 0 or less uses the configured default
    #[arg(short = 'n', long, default_value_t = 0, allow_negative_numbers = true)]
    pub max_keywords: i64,

    /// Configuration file (YAML, TOML or JSON)
    #[arg(short, long, env = "SITEKEYWORD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Print title and meta tags as well as keywords
    #[arg(short, long)]
    pub detail: bool,
}

impl Cli {
    /// Requested keyword count, with `0` standing for the configured default.
    pub fn keyword_limit(&self) -> usize {
        usize::try_from(self.max_keywords.max(0)).unwrap_or(usize::MAX)
    }
}

/// Serialize `result` the way the flags ask for.
pub fn render(result: &AnalysisResult, detail: bool, pretty: bool) -> serde_json::Result<String> {
    if detail {
        to_json(result, pretty)
    } else {
        to_json(&result.keywords_only(), pretty)
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// One-line error report: `<timestamp> [ERROR <stage>]: <error>`.
pub fn error_line(stage: &str, err: &dyn std::fmt::Display) -> String {
    format!(
        "{} [ERROR {stage}]: {err}",
        Local::now().format(TIME_FORMAT)
    )
}
