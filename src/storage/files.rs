//! File-backed page store
//!
//! Layout of a run's output:
//!
//! ```text
//! index.txt           1\thttps://example.com/\n2\thttps://example.com/a\n ...
//! pages/page_1.txt    normalized text of record 1
//! pages/page_2.txt    normalized text of record 2
//! ```

use crate::storage::traits::{PageStore, StorageError, StorageResult};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Returns the file name of a page record
pub fn record_file_name(record_id: u64) -> String {
    format!("page_{}.txt", record_id)
}

/// Page store writing one text file per record and an append-only index
#[derive(Debug)]
pub struct FilePageStore {
    index_path: PathBuf,
    pages_dir: PathBuf,
    stored: u64,
}

impl FilePageStore {
    /// Creates the store for a fresh run
    ///
    /// Creates the pages directory if needed and truncates the index, so
    /// entries from a previous run never mix with this one.
    ///
    /// # Arguments
    ///
    /// * `index_path` - Path of the index file
    /// * `pages_dir` - Directory receiving `page_<n>.txt` files
    ///
    /// # Returns
    ///
    /// * `Ok(FilePageStore)` - Store ready to accept pages
    /// * `Err(StorageError)` - Directory or index could not be prepared
    pub fn create(index_path: &Path, pages_dir: &Path) -> StorageResult<Self> {
        fs::create_dir_all(pages_dir).map_err(|e| io_error(pages_dir, e))?;

        if let Some(parent) = index_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
            }
        }

        fs::write(index_path, "").map_err(|e| io_error(index_path, e))?;

        tracing::debug!(
            "Page store ready: index {}, pages in {}",
            index_path.display(),
            pages_dir.display()
        );

        Ok(Self {
            index_path: index_path.to_path_buf(),
            pages_dir: pages_dir.to_path_buf(),
            stored: 0,
        })
    }

    /// Path of the file holding the given record
    pub fn record_path(&self, record_id: u64) -> PathBuf {
        self.pages_dir.join(record_file_name(record_id))
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    pub fn pages_dir(&self) -> &Path {
        &self.pages_dir
    }

    fn append_index_line(&self, record_id: u64, url: &str) -> StorageResult<()> {
        let mut index = OpenOptions::new()
            .append(true)
            .open(&self.index_path)
            .map_err(|e| io_error(&self.index_path, e))?;

        writeln!(index, "{}\t{}", record_id, url).map_err(|e| io_error(&self.index_path, e))
    }
}

impl PageStore for FilePageStore {
    fn store(&mut self, url: &str, text: &str) -> StorageResult<u64> {
        let record_id = self.stored + 1;

        let record_path = self.record_path(record_id);
        fs::write(&record_path, text).map_err(|e| io_error(&record_path, e))?;

        self.append_index_line(record_id, url)?;
        self.stored = record_id;

        Ok(record_id)
    }

    fn pages_stored(&self) -> u64 {
        self.stored
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        source,
    }
}
