use crate::config::types::{Config, CrawlerConfig, FetcherConfig, OutputConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawler configuration
///
/// Seeds are not parsed here: a malformed seed is a per-URL fetch failure
/// during the crawl, not a configuration error.
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.seeds.is_empty() {
        return Err(ConfigError::NoSeeds);
    }

    if config.target_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "target_pages must be >= 1, got {}",
            config.target_pages
        )));
    }

    if config.min_words < 1 {
        return Err(ConfigError::Validation(format!(
            "min_words must be >= 1, got {}",
            config.min_words
        )));
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.index_path.is_empty() {
        return Err(ConfigError::Validation(
            "index_path cannot be empty".to_string(),
        ));
    }

    if config.pages_dir.is_empty() {
        return Err(ConfigError::Validation(
            "pages_dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}
