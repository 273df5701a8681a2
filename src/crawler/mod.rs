//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching without retries
//! - Visible text and link extraction
//! - Pacing between requests
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod pacing;
mod parser;
mod text;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, fetch_url, FetchResult, HttpFetcher, PageFetcher};
pub use pacing::{pace, FixedDelay, NoDelay, PacingPolicy};
pub use parser::{extract_document_links, extract_links};
pub use text::{extract_text, normalize_whitespace, EXCLUDED_ELEMENTS};
