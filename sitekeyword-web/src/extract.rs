use scraper::{Html, Selector};
use std::collections::BTreeMap;
use thiserror::Error;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Meta-tag `name`/`property` to `content`.
pub type MetaTags = BTreeMap<String, String>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("response is not an HTML document: {0}")]
    NotHtml(String),
    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },
}

/// Read-only queries the analyzer needs from a parsed page.
pub trait Document {
    /// Whitespace-collapsed text of every `tag` element, in document order.
    fn tag_texts(&self, tag: &str) -> Result<Vec<String>, DocumentError>;

    /// All `<meta>` tags keyed by `name`, falling back to `property`.
    fn meta_tags(&self) -> Result<MetaTags, DocumentError>;
}

/// An HTML page parsed with html5ever's error-recovering tree builder.
#[derive(Debug)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a raw response body.
    ///
    /// Bytes are decoded as UTF-8 (lossily, after dropping a BOM). Bodies with NUL
    /// bytes are binary payloads and are rejected.
    pub fn parse(body: &[u8]) -> Result<Self, DocumentError> {
        let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
        if let Some(offset) = body.iter().position(|b| *b == 0) {
            return Err(DocumentError::NotHtml(format!(
                "binary content (NUL byte at offset {offset})"
            )));
        }
        Ok(Self::parse_str(&String::from_utf8_lossy(body)))
    }

    pub fn parse_str(html: &str) -> Self {
        let html = Html::parse_document(html);
        if !html.errors.is_empty() {
            tracing::trace!(count = html.errors.len(), "html.parse.recovered_errors");
        }
        Self { html }
    }
}

impl Document for HtmlDocument {
    fn tag_texts(&self, tag: &str) -> Result<Vec<String>, DocumentError> {
        let selector = Selector::parse(tag).map_err(|e| DocumentError::Selector {
            selector: tag.to_string(),
            message: e.to_string(),
        })?;
        Ok(self
            .html
            .select(&selector)
            .map(|el| collapse_whitespace(&el.text().collect::<String>()))
            .collect())
    }

    fn meta_tags(&self) -> Result<MetaTags, DocumentError> {
        let selector = Selector::parse("meta").map_err(|e| DocumentError::Selector {
            selector: "meta".into(),
            message: e.to_string(),
        })?;

        let mut tags = MetaTags::new();
        for meta in self.html.select(&selector) {
            let el = meta.value();
            let Some(key) = el.attr("name").or_else(|| el.attr("property")) else {
                continue;
            };
            let Some(content) = el.attr("content") else {
                continue;
            };
            let key = key.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            // later duplicates overwrite earlier ones
            tags.insert(key, content.trim().to_string());
        }
        Ok(tags)
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
