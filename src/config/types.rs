use serde::Deserialize;
use std::time::Duration;

/// Default number of pages to accept before stopping
pub const DEFAULT_TARGET_PAGES: u64 = 100;

/// Default minimum number of Cyrillic words per page
pub const DEFAULT_MIN_WORDS: usize = 1000;

/// Default pause after each fetched URL (milliseconds)
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Default per-request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default `User-Agent` header
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// URLs forming the first level of the crawl
    #[serde(default)]
    pub seeds: Vec<String>,

    /// Number of accepted pages after which the crawl stops
    #[serde(rename = "target-pages", default = "default_target_pages")]
    pub target_pages: u64,

    /// Minimum Cyrillic word count for a page to be kept
    #[serde(rename = "min-words", default = "default_min_words")]
    pub min_words: usize,

    /// Pause after each fetched URL (milliseconds)
    #[serde(rename = "delay-ms", default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl CrawlerConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            seeds: Vec::new(),
            target_pages: DEFAULT_TARGET_PAGES,
            min_words: DEFAULT_MIN_WORDS,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// Value of the `User-Agent` header
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl FetcherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the index file (truncated at the start of every crawl)
    #[serde(rename = "index-path", default = "default_index_path")]
    pub index_path: String,

    /// Directory receiving one text file per accepted page
    #[serde(rename = "pages-dir", default = "default_pages_dir")]
    pub pages_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            index_path: default_index_path(),
            pages_dir: default_pages_dir(),
        }
    }
}

fn default_target_pages() -> u64 {
    DEFAULT_TARGET_PAGES
}

fn default_min_words() -> usize {
    DEFAULT_MIN_WORDS
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_index_path() -> String {
    "index.txt".to_string()
}

fn default_pages_dir() -> String {
    "pages".to_string()
}
