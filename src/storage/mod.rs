//! Storage module for persisting accepted pages
//!
//! This module handles:
//! - Numbering accepted pages
//! - Writing one text file per page
//! - Maintaining the append-only index of record number to URL
//! - Reading the output back for verification

mod files;
mod index;
mod traits;

pub use files::{record_file_name, FilePageStore};
pub use index::{load_records, read_index, read_record, verify_index, IndexEntry, IndexSummary};
pub use traits::{PageStore, StorageError, StorageResult};

use std::path::Path;

/// Creates a file store for a fresh run
///
/// # Arguments
///
/// * `index_path` - Path of the index file (truncated)
/// * `pages_dir` - Directory for record files (created if missing)
///
/// # Returns
///
/// * `Ok(FilePageStore)` - Store ready to accept pages
/// * `Err(StorageError)` - Failed to prepare the output locations
pub fn open_store(index_path: &Path, pages_dir: &Path) -> StorageResult<FilePageStore> {
    FilePageStore::create(index_path, pages_dir)
}

/// A persisted page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// Sequence number, starting at 1
    pub record_id: u64,
    /// Source URL
    pub url: String,
    /// Normalized text
    pub text: String,
}
