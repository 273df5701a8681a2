//! Reading back the output of a run
//!
//! Used by the `--stats` mode and by tests to check that every index line has
//! a matching record file and that identifiers run from 1 without gaps.

use crate::storage::files::record_file_name;
use crate::storage::traits::{StorageError, StorageResult};
use crate::storage::PageRecord;
use std::fs;
use std::path::Path;

/// One line of the index file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub record_id: u64,
    pub url: String,
}

/// Result of checking an index against its pages directory
#[derive(Debug, Clone, Default)]
pub struct IndexSummary {
    /// Entries in file order
    pub entries: Vec<IndexEntry>,

    /// Identifiers listed in the index without a record file
    pub missing_records: Vec<u64>,

    /// Line numbers (1-based) whose identifier is not the expected next value
    pub out_of_sequence: Vec<usize>,
}

impl IndexSummary {
    /// Returns true if identifiers are exactly `1..=n` and all records exist
    pub fn is_consistent(&self) -> bool {
        self.missing_records.is_empty() && self.out_of_sequence.is_empty()
    }
}

/// Parses the index file
///
/// # Arguments
///
/// * `index_path` - Path of the index file
///
/// # Returns
///
/// * `Ok(Vec<IndexEntry>)` - Entries in file order
/// * `Err(StorageError)` - The file could not be read or a line is malformed
pub fn read_index(index_path: &Path) -> StorageResult<Vec<IndexEntry>> {
    let content = fs::read_to_string(index_path).map_err(|e| StorageError::Io {
        path: index_path.display().to_string(),
        source: e,
    })?;

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(idx, line)| parse_index_line(idx + 1, line))
        .collect()
}

fn parse_index_line(line_no: usize, line: &str) -> StorageResult<IndexEntry> {
    let malformed = || StorageError::MalformedIndex {
        line: line_no,
        content: line.to_string(),
    };

    let (id, url) = line.split_once('\t').ok_or_else(malformed)?;
    let record_id = id.parse::<u64>().map_err(|_| malformed())?;

    Ok(IndexEntry {
        record_id,
        url: url.to_string(),
    })
}

/// Reads the text of one record
pub fn read_record(pages_dir: &Path, record_id: u64) -> StorageResult<String> {
    let path = pages_dir.join(record_file_name(record_id));
    if !path.is_file() {
        return Err(StorageError::RecordNotFound(record_id));
    }

    fs::read_to_string(&path).map_err(|e| StorageError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// Loads every indexed page together with its text
pub fn load_records(index_path: &Path, pages_dir: &Path) -> StorageResult<Vec<PageRecord>> {
    read_index(index_path)?
        .into_iter()
        .map(|entry| {
            let text = read_record(pages_dir, entry.record_id)?;
            Ok(PageRecord {
                record_id: entry.record_id,
                url: entry.url,
                text,
            })
        })
        .collect()
}

/// Checks an index against its pages directory
pub fn verify_index(index_path: &Path, pages_dir: &Path) -> StorageResult<IndexSummary> {
    let entries = read_index(index_path)?;

    let mut summary = IndexSummary::default();
    for (idx, entry) in entries.iter().enumerate() {
        if entry.record_id != idx as u64 + 1 {
            summary.out_of_sequence.push(idx + 1);
        }
        if !pages_dir.join(record_file_name(entry.record_id)).is_file() {
            summary.missing_records.push(entry.record_id);
        }
    }
    summary.entries = entries;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_output(dir: &TempDir, index: &str, records: &[(u64, &str)]) {
        fs::write(dir.path().join("index.txt"), index).unwrap();
        let pages = dir.path().join("pages");
        fs::create_dir_all(&pages).unwrap();
        for (id, text) in records {
            fs::write(pages.join(record_file_name(*id)), text).unwrap();
        }
    }

    #[test]
    fn test_read_index_entries() {
        let dir = TempDir::new().unwrap();
        write_output(&dir, "1\thttps://x/a\n2\thttps://x/b?q=1\n", &[]);

        let entries = read_index(&dir.path().join("index.txt")).unwrap();
        assert_eq!(
            entries,
            vec![
                IndexEntry {
                    record_id: 1,
                    url: "https://x/a".to_string()
                },
                IndexEntry {
                    record_id: 2,
                    url: "https://x/b?q=1".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_malformed_line() {
        let dir = TempDir::new().unwrap();
        write_output(&dir, "1\thttps://x/a\nnot-a-number\thttps://x/b\n", &[]);

        let result = read_index(&dir.path().join("index.txt"));
        assert!(matches!(
            result.unwrap_err(),
            StorageError::MalformedIndex { line: 2, .. }
        ));
    }

    #[test]
    fn test_verify_consistent_output() {
        let dir = TempDir::new().unwrap();
        write_output(
            &dir,
            "1\thttps://x/a\n2\thttps://x/b\n",
            &[(1, "один"), (2, "два")],
        );

        let summary = verify_index(&dir.path().join("index.txt"), &dir.path().join("pages")).unwrap();
        assert!(summary.is_consistent());
        assert_eq!(summary.entries.len(), 2);
    }

    #[test]
    fn test_verify_detects_gap_and_missing_record() {
        let dir = TempDir::new().unwrap();
        write_output(&dir, "1\thttps://x/a\n3\thttps://x/c\n", &[(1, "один")]);

        let summary = verify_index(&dir.path().join("index.txt"), &dir.path().join("pages")).unwrap();
        assert!(!summary.is_consistent());
        assert_eq!(summary.out_of_sequence, vec![2]);
        assert_eq!(summary.missing_records, vec![3]);
    }

    #[test]
    fn test_load_records() {
        let dir = TempDir::new().unwrap();
        write_output(&dir, "1\thttps://x/a\n", &[(1, "один два")]);

        let records = load_records(&dir.path().join("index.txt"), &dir.path().join("pages")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].url, "https://x/a");
        assert_eq!(records[0].text, "один два");
    }

    #[test]
    fn test_read_missing_record() {
        let dir = TempDir::new().unwrap();
        write_output(&dir, "", &[]);

        let result = read_record(&dir.path().join("pages"), 7);
        assert!(matches!(result.unwrap_err(), StorageError::RecordNotFound(7)));
    }
}
