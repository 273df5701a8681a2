//! Crawl statistics and summaries
//!
//! This module provides the end-of-crawl report and the statistics shown for
//! an existing output directory.

use crate::state::CrawlState;
use crate::storage::IndexSummary;
use chrono::{DateTime, Utc};

/// Summary of a finished crawl
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Pages persisted
    pub pages_accepted: u64,

    /// Pages downloaded but below the word threshold
    pub pages_rejected: u64,

    /// Fetch or store failures
    pub pages_failed: u64,

    /// Pages with no visible text
    pub pages_empty: u64,

    /// Distinct URLs a fetch was attempted for
    pub urls_visited: usize,

    /// Number of fully processed frontier levels
    pub levels_completed: u32,

    /// Page budget of the run
    pub target_pages: u64,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    /// Builds a report from the final state of a run
    pub fn from_state(
        state: &CrawlState,
        target_pages: u64,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            pages_accepted: state.pages_accepted(),
            pages_rejected: state.pages_rejected(),
            pages_failed: state.pages_failed(),
            pages_empty: state.pages_empty(),
            urls_visited: state.visited_count(),
            levels_completed: state.levels_completed(),
            target_pages,
            started_at,
            finished_at,
        }
    }

    /// True if the crawl stopped because the page budget was reached
    pub fn budget_met(&self) -> bool {
        self.pages_accepted >= self.target_pages
    }

    /// Wall-clock duration of the crawl in seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }

    /// Share of visited URLs that were persisted, in percent
    pub fn acceptance_rate(&self) -> f64 {
        if self.urls_visited == 0 {
            0.0
        } else {
            (self.pages_accepted as f64 / self.urls_visited as f64) * 100.0
        }
    }
}

/// Formats a crawl report for the console
pub fn format_report(report: &CrawlReport) -> String {
    let stop_reason = if report.budget_met() {
        "page target reached"
    } else {
        "frontier exhausted"
    };

    let mut out = String::new();
    out.push_str("=== Crawl Summary ===\n\n");
    out.push_str(&format!(
        "  Pages saved: {} / {} ({})\n",
        report.pages_accepted, report.target_pages, stop_reason
    ));
    out.push_str(&format!("  Pages rejected: {}\n", report.pages_rejected));
    out.push_str(&format!("  Empty pages: {}\n", report.pages_empty));
    out.push_str(&format!("  Failed URLs: {}\n", report.pages_failed));
    out.push_str(&format!("  URLs visited: {}\n", report.urls_visited));
    out.push_str(&format!("  Levels completed: {}\n", report.levels_completed));
    out.push_str(&format!(
        "  Acceptance rate: {:.1}%\n",
        report.acceptance_rate()
    ));
    out.push_str(&format!(
        "  Duration: {} seconds\n",
        report.duration_seconds()
    ));
    out
}

/// Prints a crawl report to stdout
pub fn print_report(report: &CrawlReport) {
    print!("{}", format_report(report));
}

/// Prints the statistics of an existing output directory to stdout
pub fn print_index_summary(summary: &IndexSummary) {
    println!("=== Output Statistics ===\n");
    println!("  Indexed pages: {}", summary.entries.len());

    let mut hosts: Vec<String> = summary
        .entries
        .iter()
        .filter_map(|entry| url::Url::parse(&entry.url).ok())
        .filter_map(|url| url.host_str().map(|h| h.to_string()))
        .collect();
    hosts.sort();
    hosts.dedup();
    println!("  Distinct hosts: {}", hosts.len());

    if summary.is_consistent() {
        println!("\n✓ Index and page records are consistent");
        return;
    }

    if !summary.missing_records.is_empty() {
        println!("\nMissing records ({}):", summary.missing_records.len());
        for id in &summary.missing_records {
            println!("  - {}", id);
        }
    }

    if !summary.out_of_sequence.is_empty() {
        println!(
            "\nOut-of-sequence index lines ({}):",
            summary.out_of_sequence.len()
        );
        for line in &summary.out_of_sequence {
            println!("  - line {}", line);
        }
    }
}
