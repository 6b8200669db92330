//! Per-page orchestration: fetch, parse, extract, score, rank.
//!
//! An [`Analyzer`] is built for exactly one URL. Construction fetches and parses the
//! page and fails fast with [`AnalyzerError::Fetch`] or [`AnalyzerError::Parse`].
//! After that every extraction step runs independently: a failing step is logged and
//! remembered, the others carry on, and the first error is only returned when nothing
//! at all could be extracted.

use crate::error::{AnalyzerError, Result};
use crate::keywords::{Extraction, extract_keywords};
use crate::normalize::{DictionaryNormalizer, Normalizer};
use crate::scoring::{ScoreBoard, Source, compare_ranked, select_description};
use crate::types::{AnalysisResult, KeywordWithScore, PageData};
use sitekeyword_config::AnalyzerConfig;
use sitekeyword_http::HttpClient;
use sitekeyword_web::{Document, DocumentError, HtmlDocument, MetaTags, PageFetcher};
use std::collections::HashSet;

const HEADING_TAGS: [&str; 3] = ["h1", "h2", "h3"];
const HEADING_REPEAT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnalysisState {
    Analyzing,
    Completed,
    Failed,
}

/// Collects step results for [`Analyzer::analysis_result`], keeping the first error.
struct Assembly {
    state: AnalysisState,
    result: AnalysisResult,
    first_error: Option<AnalyzerError>,
}

impl Assembly {
    fn start(url: &str) -> Self {
        tracing::debug!(%url, state = ?AnalysisState::Analyzing, "analyzer.state");
        Self {
            state: AnalysisState::Analyzing,
            result: AnalysisResult::default(),
            first_error: None,
        }
    }

    fn record<T>(&mut self, step: &'static str, outcome: Result<T>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(step, error = %err, "analyzer.step.failed");
                self.first_error.get_or_insert(err);
                None
            }
        }
    }

    fn finish(mut self, url: &str) -> Result<AnalysisResult> {
        if !self.result.is_empty() {
            self.state = AnalysisState::Completed;
            if let Some(err) = &self.first_error {
                tracing::debug!(%url, error = %err, "analyzer.partial_result");
            }
            tracing::info!(
                %url,
                state = ?self.state,
                keywords = self.result.keywords.len(),
                meta_tags = self.result.meta_tags.len(),
                "analyzer.finished"
            );
            return Ok(self.result);
        }
        match self.first_error {
            Some(err) => {
                self.state = AnalysisState::Failed;
                tracing::warn!(%url, state = ?self.state, error = %err, "analyzer.finished");
                Err(err)
            }
            None => {
                self.state = AnalysisState::Completed;
                tracing::info!(%url, state = ?self.state, "analyzer.finished.empty");
                Ok(self.result)
            }
        }
    }
}

/// Keyword analysis of one fetched and parsed page.
#[derive(Debug)]
pub struct Analyzer<D = HtmlDocument> {
    url: String,
    document: D,
    config: AnalyzerConfig,
}

impl Analyzer<HtmlDocument> {
    /// Fetch `url` over HTTP and parse it.
    pub async fn new(url: &str, config: AnalyzerConfig) -> Result<Self> {
        let client = HttpClient::new(&config.user_agent)?
            .with_timeout(config.timeout())
            .with_retries(config.retries);
        Self::with_fetcher(&client, url, config).await
    }

    /// Fetch `url` with a caller-supplied fetcher and parse it.
    pub async fn with_fetcher<F>(fetcher: &F, url: &str, config: AnalyzerConfig) -> Result<Self>
    where
        F: PageFetcher + ?Sized,
    {
        let page = fetcher.fetch(url, config.timeout()).await?;
        ensure_markup(page.content_type.as_deref())?;
        let document = HtmlDocument::parse(&page.body)?;
        tracing::debug!(
            requested = %url,
            effective = %page.url,
            bytes = page.body.len(),
            "analyzer.created"
        );
        Ok(Self::from_document(page.url.as_str(), document, config))
    }

    /// Analyze markup that is already in memory.
    pub fn from_html(url: &str, html: &str, config: AnalyzerConfig) -> Self {
        Self::from_document(url, HtmlDocument::parse_str(html), config)
    }
}

impl<D: Document> Analyzer<D> {
    pub fn from_document(url: impl Into<String>, document: D, config: AnalyzerConfig) -> Self {
        Self {
            url: url.into(),
            document,
            config,
        }
    }

    /// The effective URL, after redirects.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Text of the first `<title>`, or empty.
    pub fn fetch_title(&self) -> Result<String> {
        let titles = self
            .document
            .tag_texts("title")
            .map_err(|e| AnalyzerError::extraction("title", e))?;
        Ok(titles.into_iter().next().unwrap_or_default())
    }

    pub fn fetch_meta_tags(&self) -> Result<MetaTags> {
        self.document
            .meta_tags()
            .map_err(|e| AnalyzerError::extraction("meta tags", e))
    }

    /// Heading text from `h1`, `h2` and `h3`, in that order, each non-empty heading
    /// repeated three times.
    pub fn fetch_main_content(&self) -> Result<String> {
        let mut content = String::new();
        for tag in HEADING_TAGS {
            let headings = self
                .document
                .tag_texts(tag)
                .map_err(|e| AnalyzerError::extraction("main content", e))?;
            for heading in headings.iter().filter(|h| !h.is_empty()) {
                for _ in 0..HEADING_REPEAT {
                    content.push_str(heading);
                    content.push(' ');
                }
            }
        }
        Ok(content)
    }

    /// All page signals at once; a failing step contributes an empty value.
    pub fn collect_page_data(&self) -> PageData {
        PageData {
            title: self.fetch_title().unwrap_or_else(|e| empty_on_error("title", e)),
            meta_tags: self
                .fetch_meta_tags()
                .unwrap_or_else(|e| empty_on_error("meta tags", e)),
            main_content: self
                .fetch_main_content()
                .unwrap_or_else(|e| empty_on_error("main content", e)),
        }
    }

    /// Score title, meta keywords, description and main content and return the top
    /// `n` keywords (`0` means the configured default).
    pub fn top_keywords<N>(
        &self,
        n: usize,
        stop_words: &HashSet<String>,
        normalizer: &N,
    ) -> Result<Vec<KeywordWithScore>>
    where
        N: Normalizer + ?Sized,
    {
        let n = self.config.resolve_max_keywords(n);
        let weights = &self.config.score_weights;
        let mut board = ScoreBoard::new();
        let mut first_error: Option<AnalyzerError> = None;
        let mut note = |err: AnalyzerError| {
            tracing::warn!(error = %err, "analyzer.source.skipped");
            first_error.get_or_insert(err);
        };

        let title = self.fetch_title().unwrap_or_else(|e| {
            note(e);
            String::new()
        });
        let meta = self.fetch_meta_tags().unwrap_or_else(|e| {
            note(e);
            MetaTags::new()
        });
        let content = self.fetch_main_content().unwrap_or_else(|e| {
            note(e);
            String::new()
        });

        for source in Source::ORDER {
            let text = match source {
                Source::Title => Some(title.as_str()),
                Source::MetaKeywords => meta.get("keywords").map(String::as_str),
                Source::Description => select_description(&meta),
                Source::MainContent => Some(content.as_str()),
            };
            let Some(text) = text.filter(|t| !t.is_empty()) else {
                continue;
            };
            let extraction = extract_keywords(text, stop_words, normalizer);
            let scored = board.add_source(source, &extraction, weights);
            tracing::debug!(
                source = source.as_str(),
                candidates = extraction.len(),
                scored,
                "analyzer.source.scored"
            );
        }

        if board.is_empty() {
            if let Some(err) = first_error {
                return Err(err);
            }
        }
        Ok(board.rank(n))
    }

    /// [`Analyzer::top_keywords`] with the configured stop words and plural folding.
    pub fn top_keywords_auto(&self, n: usize) -> Result<Vec<KeywordWithScore>> {
        let normalizer = DictionaryNormalizer::from_config(&self.config);
        self.top_keywords(n, &self.config.english_stop_words, &normalizer)
    }

    /// Raw occurrence counts over main content only, highest first, at most `n`
    /// entries (`0` means the configured default).
    pub fn content_keyword_frequencies(&self, n: usize) -> Result<Vec<KeywordWithScore>> {
        let content = self.fetch_main_content()?;
        let normalizer = DictionaryNormalizer::from_config(&self.config);
        let extraction: Extraction =
            extract_keywords(&content, &self.config.english_stop_words, &normalizer);

        let mut counts = extraction.frequencies();
        counts.sort_by(|a, b| {
            compare_ranked(
                (a.keyword.as_str(), a.score, ""),
                (b.keyword.as_str(), b.score, ""),
            )
        });
        counts.truncate(self.config.resolve_max_keywords(n));
        Ok(counts)
    }

    /// Title, meta tags and top keywords, assembled best-effort.
    ///
    /// Returns an error only when every part came back empty and at least one step
    /// failed; an empty result with no failure is a valid, empty analysis.
    pub fn analysis_result(&self, max_keywords: usize) -> Result<AnalysisResult> {
        let mut assembly = Assembly::start(&self.url);

        if let Some(title) = assembly.record("title", self.fetch_title()) {
            assembly.result.title = title;
        }
        if let Some(meta) = assembly.record("meta tags", self.fetch_meta_tags()) {
            assembly.result.meta_tags = meta;
        }
        if let Some(keywords) = assembly.record("keywords", self.top_keywords_auto(max_keywords)) {
            assembly.result.keywords = keywords;
        }

        assembly.finish(&self.url)
    }
}

fn empty_on_error<T: Default>(step: &'static str, err: AnalyzerError) -> T {
    tracing::warn!(step, error = %err, "analyzer.step.failed");
    T::default()
}

/// Reject responses whose declared type is clearly not markup.
fn ensure_markup(content_type: Option<&str>) -> std::result::Result<(), DocumentError> {
    let Some(ct) = content_type else {
        return Ok(());
    };
    let essence = ct
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    if essence.is_empty()
        || essence.starts_with("text/")
        || essence.contains("html")
        || essence.contains("xml")
    {
        Ok(())
    } else {
        Err(DocumentError::NotHtml(format!("content type `{essence}`")))
    }
}
