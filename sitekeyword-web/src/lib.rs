//! Page acquisition and HTML querying.
//!
//! - [`fetch::PageFetcher`]: async seam for getting a page's bytes, with the
//!   reqwest-backed [`sitekeyword_http::HttpClient`] as the production implementation
//! - [`extract::Document`]: tag text and meta-tag lookups, implemented by
//!   [`extract::HtmlDocument`] on top of `scraper`

pub mod extract;
pub mod fetch;

pub use extract::{Document, DocumentError, HtmlDocument, MetaTags};
pub use fetch::PageFetcher;
pub use sitekeyword_http::{FetchedPage, HttpError};
