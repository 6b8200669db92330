use async_trait::async_trait;
use sitekeyword_http::{FetchOpts, FetchedPage, HttpClient, HttpError};
use std::time::Duration;

/// Gets the raw bytes of a page and the URL they were served from.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchedPage, HttpError>;
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchedPage, HttpError> {
        let opts = FetchOpts {
            timeout: Some(timeout),
            ..Default::default()
        };
        self.fetch_page(url, opts).await
    }
}
