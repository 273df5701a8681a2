//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlState`: visited set, frontier pair and counters of one run
//! - `CrawlPhase`: lifecycle of the engine (idle, running, done)
//! - `PageOutcome`: what happened to a single URL

mod crawl_phase;
mod crawl_state;
mod page_outcome;

// Re-export main types
pub use crawl_phase::CrawlPhase;
pub use crawl_state::CrawlState;
pub use page_outcome::PageOutcome;
