//! Page fetching over HTTP with timeouts, retries and safe logging.
//!
//! - One GET per page; redirects are followed and the effective URL is reported
//! - Retries 429/5xx and transport failures with exponential backoff and
//!   `Retry-After` support; any other non-success status is returned as an error
//! - Sensitive query params are redacted before they reach the logs
//!
//! Example (no_run):
//! ```rust
//! # async fn demo() -> Result<(), sitekeyword_http::HttpError> {
//! let client = sitekeyword_http::HttpClient::new("sitekeyword/0.1")?;
//! let page = client
//!     .fetch_page("https://example.com", sitekeyword_http::FetchOpts::default())
//!     .await?;
//! println!("{} bytes from {}", page.body.len(), page.url);
//! # Ok(()) }
//! ```
//!
//! Observability: structured `tracing` events are emitted for request start,
//! response headers, body snippets (trace level), retries and final errors.

use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderMap, RETRY_AFTER};
use reqwest::{Client, StatusCode, Url};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;

const MAX_REDIRECTS: usize = 10;
const SNIPPET_LEN: usize = 500;

static REQUEST_SEQ: AtomicU64 = AtomicU64::new(1);

// ==============================
// Errors
// ==============================

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("client build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status} for {url}: {message}")]
    Status {
        status: StatusCode,
        url: String,
        message: String,
    },
}

impl HttpError {
    /// True for failures where the request never produced a response (DNS, connect, timeout).
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

// ==============================
// Request options
// ==============================

/// Per-request tuning knobs.
///
/// ```
/// use sitekeyword_http::FetchOpts;
/// use std::time::Duration;
///
/// let opts = FetchOpts {
///     timeout: Some(Duration::from_secs(3)),
///     retries: Some(0),
///     ..Default::default()
/// };
/// assert_eq!(opts.timeout.unwrap().as_secs(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FetchOpts {
    pub timeout: Option<Duration>,
    pub retries: Option<usize>,
}

/// A fetched response body together with the URL it was finally served from.
#[derive(Clone, Debug)]
pub struct FetchedPage {
    pub url: Url,
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

// ==============================
// Client
// ==============================

#[derive(Clone)]
pub struct HttpClient {
    inner: Client,
    pub default_timeout: Duration,
    pub max_retries: usize,
}

impl HttpClient {
    /// Build a client that identifies itself with `user_agent`.
    ///
    /// ```no_run
    /// use sitekeyword_http::{HttpClient, HttpError};
    /// use std::time::Duration;
    ///
    /// let client = HttpClient::new("sitekeyword/0.1")?;
    /// assert_eq!(client.default_timeout, Duration::from_secs(15));
    /// assert_eq!(client.max_retries, 2);
    /// # Ok::<(), HttpError>(())
    /// ```
    pub fn new(user_agent: &str) -> Result<Self, HttpError> {
        let inner = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(Duration::from_secs(5))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(Self {
            inner,
            default_timeout: Duration::from_secs(15),
            max_retries: 2,
        })
    }

    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.default_timeout = dur;
        self
    }

    pub fn with_retries(mut self, n: usize) -> Self {
        self.max_retries = n;
        self
    }

    /// GET `url` and return its body and effective URL.
    pub async fn fetch_page(&self, url: &str, opts: FetchOpts) -> Result<FetchedPage, HttpError> {
        let url = Url::parse(url).map_err(|e| HttpError::Url(format!("{url}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(HttpError::Url(format!(
                "unsupported scheme `{}` in {url}",
                url.scheme()
            )));
        }

        let timeout = opts.timeout.unwrap_or(self.default_timeout);
        let max_retries = opts.retries.unwrap_or(self.max_retries);
        let req_id = format!("r{:x}", REQUEST_SEQ.fetch_add(1, Ordering::Relaxed));
        let (host_path, redacted_q) = redact_query(&url);
        let mut attempt = 0usize;

        loop {
            let rb = self.inner.get(url.clone()).timeout(timeout);

            tracing::debug!(
                req_id=%req_id,
                attempt=attempt + 1,
                max_retries,
                host_path=%host_path,
                query=?redacted_q,
                timeout_ms=timeout.as_millis() as u64,
                "http.request.start"
            );

            // ----- Send -----
            let t0 = std::time::Instant::now();
            let resp = match rb.send().await {
                Ok(resp) => resp,
                Err(err) => {
                    let message = err.to_string();
                    if attempt < max_retries {
                        attempt += 1;
                        let delay = backoff(attempt);
                        tracing::warn!(
                            req_id=%req_id,
                            attempt,
                            max_retries,
                            backoff_ms=delay.as_millis() as u64,
                            message=%message,
                            "http.retrying.network_send"
                        );
                        sleep(delay).await;
                        continue;
                    }
                    tracing::warn!(req_id=%req_id, attempt, message=%message, "http.network_error.send");
                    return Err(HttpError::Network(message));
                }
            };
            let status = resp.status();
            let effective_url = resp.url().clone();
            let headers = resp.headers().clone();
            let bytes = match resp.bytes().await {
                Ok(bytes) => bytes,
                Err(err) => {
                    let message = err.to_string();
                    if attempt < max_retries {
                        attempt += 1;
                        let delay = backoff(attempt);
                        tracing::warn!(
                            req_id=%req_id,
                            attempt,
                            max_retries,
                            backoff_ms=delay.as_millis() as u64,
                            message=%message,
                            "http.retrying.network_body"
                        );
                        sleep(delay).await;
                        continue;
                    }
                    tracing::warn!(req_id=%req_id, attempt, message=%message, "http.network_error.body");
                    return Err(HttpError::Network(message));
                }
            };
            let dur_ms = t0.elapsed().as_millis() as u64;
            let content_type = headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            tracing::debug!(
                req_id=%req_id,
                %status,
                duration_ms=dur_ms,
                body_len=bytes.len(),
                effective_url=%effective_url,
                content_type=?content_type,
                "http.response.headers"
            );
            tracing::trace!(
                req_id=%req_id,
                body_snippet=%snip_body(&bytes),
                "http.response.body_snippet"
            );

            if status.is_success() {
                return Ok(FetchedPage {
                    url: effective_url,
                    status,
                    content_type,
                    body: bytes,
                });
            }

            // ----- Non-success: maybe retry -----
            let is_429 = status == StatusCode::TOO_MANY_REQUESTS;
            let is_5xx = status.is_server_error();

            if (is_429 || is_5xx) && attempt < max_retries {
                attempt += 1;
                let retry_after = retry_after_delay_secs(&headers);
                let delay = match retry_after {
                    Some(secs) => Duration::from_secs(secs),
                    // default floor for 429 when no Retry-After is present
                    None if is_429 => backoff(attempt).max(Duration::from_millis(1100)),
                    None => backoff(attempt),
                };
                tracing::warn!(
                    req_id=%req_id,
                    %status,
                    attempt,
                    max_retries,
                    backoff_ms=delay.as_millis() as u64,
                    retry_after_secs=?retry_after,
                    "http.retrying"
                );
                sleep(delay).await;
                continue;
            }

            let message = snip_body(&bytes);
            tracing::warn!(
                req_id=%req_id,
                %status,
                effective_url=%effective_url,
                body_snippet=%message,
                "http.error"
            );
            return Err(HttpError::Status {
                status,
                url: effective_url.to_string(),
                message,
            });
        }
    }
}

// ==============================
// Helpers
// ==============================

fn backoff(attempt: usize) -> Duration {
    let shift = attempt.saturating_sub(1).min(16) as u32;
    Duration::from_millis(200u64.saturating_mul(1u64 << shift))
}

fn retry_after_delay_secs(h: &HeaderMap) -> Option<u64> {
    h.get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())?
        .trim()
        .parse()
        .ok()
}

fn snip_body(body: &[u8]) -> String {
    let mut snip = String::from_utf8_lossy(body).to_string();
    if snip.len() > SNIPPET_LEN {
        let mut cut = SNIPPET_LEN;
        while !snip.is_char_boundary(cut) {
            cut -= 1;
        }
        snip.truncate(cut);
        snip.push_str("...");
    }
    snip
}

fn redact_query(url: &Url) -> (String, Vec<(String, String)>) {
    let host_path = format!("{}{}", url.host_str().unwrap_or("-"), url.path());
    let redacted = url
        .query_pairs()
        .map(|(k, v)| {
            let k = k.to_string();
            let is_secret = matches!(
                k.to_ascii_lowercase().as_str(),
                "access_token"
                    | "authorization"
                    | "auth"
                    | "key"
                    | "api_key"
                    | "token"
                    | "secret"
                    | "client_secret"
                    | "password"
                    | "sig"
            );
            let v = if is_secret {
                "<redacted>".to_string()
            } else {
                v.to_string()
            };
            (k, v)
        })
        .collect::<Vec<_>>();
    (host_path, redacted)
}
