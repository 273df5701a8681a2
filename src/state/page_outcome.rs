/// Outcome definitions for a single URL processing step
///
/// Every URL taken from the current frontier level ends in exactly one of
/// these outcomes.
use std::fmt;

/// Represents what happened to one URL during a crawl level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    // ===== No Work Done =====
    /// URL was already visited earlier in the run
    Skipped,

    // ===== Not Downloaded =====
    /// Transport error, timeout, non-2xx status or undecodable body
    FetchFailed {
        /// Error description
        reason: String,
    },

    /// Page was fetched but no visible text remained after extraction
    Empty,

    // ===== Downloaded =====
    /// Text was below the word threshold
    Rejected {
        /// Number of words counted by the content policy
        word_count: usize,
    },

    /// Text passed the threshold and was persisted
    Accepted {
        /// Sequence number assigned by the page store
        record_id: u64,
        /// Number of words counted by the content policy
        word_count: usize,
    },

    /// Text passed the threshold but the page store could not write it
    StoreFailed {
        /// Number of words counted by the content policy
        word_count: usize,
        /// Storage error description
        error: String,
    },
}

impl PageOutcome {
    /// Returns true if the page HTML was obtained and had text
    ///
    /// Downloaded pages contribute their links to the next frontier level,
    /// whether or not they passed the content policy.
    pub fn is_downloaded(&self) -> bool {
        matches!(
            self,
            Self::Rejected { .. } | Self::Accepted { .. } | Self::StoreFailed { .. }
        )
    }

    /// Returns a short label for the outcome kind
    pub fn label(&self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::FetchFailed { .. } => "fetch_failed",
            Self::Empty => "empty",
            Self::Rejected { .. } => "rejected",
            Self::Accepted { .. } => "accepted",
            Self::StoreFailed { .. } => "store_failed",
        }
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
