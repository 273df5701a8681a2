//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client (user agent, timeout, decompression)
//! - GET requests for page content
//! - Classifying failures into explicit result variants

use crate::config::FetcherConfig;
use async_trait::async_trait;
use reqwest::Client;

/// Result of a fetch operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Decoded page body
        body: String,
    },

    /// The server answered with a non-2xx status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Transport failure (connection refused, timeout, undecodable body, ...)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Describes why the fetch failed, or `None` on success
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            Self::Success { .. } => None,
            Self::HttpError { status_code } => Some(format!("HTTP {}", status_code)),
            Self::NetworkError { error } => Some(error.clone()),
        }
    }
}

/// Source of page HTML
///
/// The crawl engine only depends on this trait; tests substitute scripted
/// fetchers for the HTTP one.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches a single URL. Never retries.
    async fn fetch(&self, url: &str) -> FetchResult;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetcher configuration
///
/// # Returns
///
/// * `Ok(Client)` - Client sending the configured `User-Agent`, bounded by the
///   configured timeout and transparently decompressing gzip and deflate bodies
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use cyrillic_crawler::config::FetcherConfig;
/// use cyrillic_crawler::crawler::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .gzip(true)
        .deflate(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the outcome
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx with decodable body | `Success` |
/// | Any other status | `HttpError` |
/// | Timeout | `NetworkError("Request timeout")` |
/// | Connection failure | `NetworkError("Connection failed: ...")` |
/// | Body read/decode failure | `NetworkError` |
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return classify_error(e),
    };

    let status = response.status();
    if !status.is_success() {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    let final_url = response.url().to_string();
    match response.text().await {
        Ok(body) => FetchResult::Success {
            final_url,
            status_code: status.as_u16(),
            body,
        },
        Err(e) => FetchResult::NetworkError {
            error: format!("Failed to read body: {}", e),
        },
    }
}

fn classify_error(e: reqwest::Error) -> FetchResult {
    let error = if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        e.to_string()
    };

    FetchResult::NetworkError { error }
}

/// [`PageFetcher`] backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::from_client(build_http_client(config)?))
    }

    /// Wraps an already configured client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        fetch_url(&self.client, url).await
    }
}
