use crate::state::PageOutcome;
use crate::url::normalize_seed;
use std::collections::HashSet;

/// Mutable state of one crawl run
///
/// Owns the visited set, the two frontier levels and the counters. The engine
/// holds the only `&mut` to it for the whole run, so none of these are shared.
#[derive(Debug, Clone, Default)]
pub struct CrawlState {
    /// Every URL a fetch was attempted for, successful or not
    visited: HashSet<String>,

    /// Level being drained
    current: HashSet<String>,

    /// Level being filled from links found in `current`
    next: HashSet<String>,

    /// Pages persisted so far; drives the stop condition
    pages_accepted: u64,

    /// Pages downloaded but below the word threshold
    pages_rejected: u64,

    /// Fetch or store failures
    pages_failed: u64,

    /// Pages with no text after extraction
    pages_empty: u64,

    /// Number of fully drained levels
    levels_completed: u32,
}

impl CrawlState {
    /// Creates a state whose first level holds the normalized seeds
    pub fn from_seeds<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let current = seeds
            .into_iter()
            .map(|seed| normalize_seed(seed.as_ref()))
            .collect();

        Self {
            current,
            ..Self::default()
        }
    }

    /// Marks a URL as visited
    ///
    /// # Returns
    ///
    /// * `true` - The URL was not visited before and may be fetched
    /// * `false` - The URL was already visited
    pub fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    /// Takes the current level out for draining
    pub fn take_level(&mut self) -> HashSet<String> {
        std::mem::take(&mut self.current)
    }

    /// Adds discovered links to the next level
    pub fn enqueue<I>(&mut self, links: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.next.extend(links);
    }

    /// Swaps levels: unvisited links of `next` become the new current level
    pub fn advance_level(&mut self) {
        let next = std::mem::take(&mut self.next);
        let visited = &self.visited;
        self.current = next
            .into_iter()
            .filter(|url| !visited.contains(url))
            .collect();
        self.levels_completed += 1;
    }

    /// Updates counters for a finished URL
    pub fn record(&mut self, outcome: &PageOutcome) {
        match outcome {
            PageOutcome::Accepted { .. } => self.pages_accepted += 1,
            PageOutcome::Rejected { .. } => self.pages_rejected += 1,
            PageOutcome::FetchFailed { .. } | PageOutcome::StoreFailed { .. } => {
                self.pages_failed += 1
            }
            PageOutcome::Empty => self.pages_empty += 1,
            PageOutcome::Skipped => {}
        }
    }

    /// Returns true once `target` pages have been accepted
    pub fn budget_met(&self, target: u64) -> bool {
        self.pages_accepted >= target
    }

    /// Returns true if there is still work in the current level
    pub fn has_pending(&self) -> bool {
        !self.current.is_empty()
    }

    pub fn pages_accepted(&self) -> u64 {
        self.pages_accepted
    }

    pub fn pages_rejected(&self) -> u64 {
        self.pages_rejected
    }

    pub fn pages_failed(&self) -> u64 {
        self.pages_failed
    }

    pub fn pages_empty(&self) -> u64 {
        self.pages_empty
    }

    pub fn levels_completed(&self) -> u32 {
        self.levels_completed
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Size of the level waiting to be drained
    pub fn current_len(&self) -> usize {
        self.current.len()
    }

    /// Size of the level being filled
    pub fn next_len(&self) -> usize {
        self.next.len()
    }
}
