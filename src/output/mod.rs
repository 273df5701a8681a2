//! Output module for crawl summaries and reports
//!
//! This module handles:
//! - The end-of-crawl report
//! - Statistics for an existing index and pages directory

pub mod stats;

pub use stats::{format_report, print_index_summary, print_report, CrawlReport};

use crate::storage::{verify_index, IndexSummary};
use crate::CrawlerError;
use std::path::Path;

/// Loads and checks the output of a previous crawl
///
/// # Arguments
///
/// * `index_path` - Path of the index file
/// * `pages_dir` - Directory with the page records
///
/// # Returns
///
/// * `Ok(IndexSummary)` - Entries plus any inconsistencies found
/// * `Err(CrawlerError)` - The index could not be read
pub fn load_index_summary(index_path: &Path, pages_dir: &Path) -> Result<IndexSummary, CrawlerError> {
    Ok(verify_index(index_path, pages_dir)?)
}
