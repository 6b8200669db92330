use serde::{Deserialize, Serialize};
use sitekeyword_web::MetaTags;

/// A ranked keyword: its displayed spelling and accumulated score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordWithScore {
    pub keyword: String,
    pub score: u64,
}

impl KeywordWithScore {
    pub fn new(keyword: impl Into<String>, score: u64) -> Self {
        Self {
            keyword: keyword.into(),
            score,
        }
    }
}

/// The textual signals pulled out of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageData {
    pub title: String,
    pub meta_tags: MetaTags,
    /// Heading texts (`h1`, then `h2`, then `h3`), each repeated three times.
    pub main_content: String,
}

/// Everything one analysis produced.
///
/// Serializes as `{"title": ..., "metaTags": {...}, "keywords": [{"keyword", "score"}]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub title: String,
    pub meta_tags: MetaTags,
    pub keywords: Vec<KeywordWithScore>,
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.meta_tags.is_empty() && self.keywords.is_empty()
    }

    /// The `{"keywords": [...]}` view.
    pub fn keywords_only(&self) -> KeywordsOnly<'_> {
        KeywordsOnly {
            keywords: &self.keywords,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct KeywordsOnly<'a> {
    pub keywords: &'a [KeywordWithScore],
}
