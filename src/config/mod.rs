//! Configuration module
//!
//! Settings come from an optional TOML file and from command-line flags,
//! flags taking precedence.
//!
//! # Example
//!
//! ```no_run
//! use cyrillic_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawler.toml")).unwrap();
//! println!("Will stop after {} pages", config.crawler.target_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, FetcherConfig, OutputConfig, DEFAULT_DELAY_MS, DEFAULT_MIN_WORDS,
    DEFAULT_TARGET_PAGES, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, read_config, read_config_with_hash};
pub use validation::validate;

/// Values given on the command line, applied on top of the file configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Appended to the seeds from the file
    pub seeds: Vec<String>,
    pub target_pages: Option<u64>,
    pub min_words: Option<usize>,
    pub delay_ms: Option<u64>,
    pub index_path: Option<String>,
    pub pages_dir: Option<String>,
}

impl Config {
    /// Merges command-line values into this configuration
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        self.crawler.seeds.extend(overrides.seeds);

        if let Some(target_pages) = overrides.target_pages {
            self.crawler.target_pages = target_pages;
        }
        if let Some(min_words) = overrides.min_words {
            self.crawler.min_words = min_words;
        }
        if let Some(delay_ms) = overrides.delay_ms {
            self.crawler.delay_ms = delay_ms;
        }
        if let Some(index_path) = overrides.index_path {
            self.output.index_path = index_path;
        }
        if let Some(pages_dir) = overrides.pages_dir {
            self.output.pages_dir = pages_dir;
        }
    }

    /// Builds a validated configuration from seeds alone, everything else default
    pub fn from_seeds<I, S>(seeds: I) -> Result<Self, crate::ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        config.crawler.seeds = seeds.into_iter().map(Into::into).collect();
        validate(&config)?;
        Ok(config)
    }
}
