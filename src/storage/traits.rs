//! Storage traits and error types
//!
//! This module defines the trait interface for page sinks and the
//! associated error types.

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed index line {line}: {content}")]
    MalformedIndex { line: usize, content: String },

    #[error("Record not found: {0}")]
    RecordNotFound(u64),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for page sink implementations
///
/// A store hands out sequence numbers itself: the number returned by
/// [`PageStore::store`] is the record identifier, starting at 1 and growing by
/// one per successful call.
pub trait PageStore: Send {
    /// Persists an accepted page
    ///
    /// # Arguments
    ///
    /// * `url` - The source URL of the page
    /// * `text` - The normalized text that passed the content policy
    ///
    /// # Returns
    ///
    /// The record identifier assigned to the page. On error no identifier is
    /// consumed.
    fn store(&mut self, url: &str, text: &str) -> StorageResult<u64>;

    /// Number of pages stored so far in this run
    fn pages_stored(&self) -> u64;
}
