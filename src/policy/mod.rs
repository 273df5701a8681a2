//! Content acceptance policies
//!
//! A policy looks at the extracted text of a page and decides whether the page
//! is worth persisting. The crawl engine only sees the [`ContentPolicy`] trait,
//! so the heuristic can be replaced without touching the traversal.

mod cyrillic;

pub use cyrillic::{accepts, count_cyrillic_words, CyrillicWordPolicy};

/// Decision of a content policy for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the page should be persisted
    pub accepted: bool,

    /// Number of qualifying words found
    pub word_count: usize,
}

/// Trait for content acceptance predicates
pub trait ContentPolicy: Send + Sync {
    /// Evaluates the normalized text of a page
    fn evaluate(&self, text: &str) -> Verdict;

    /// Short human-readable description used in log lines
    fn describe(&self) -> String;
}
