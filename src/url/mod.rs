//! URL handling module
//!
//! This module decides which addresses the crawler may fetch and turns raw
//! hrefs into the canonical strings used for visited-tracking.

mod normalize;
mod validate;

// Re-export main functions
pub use normalize::{normalize_seed, resolve_link, strip_fragment};
pub use validate::{check_crawlable, is_crawlable, EXCLUDED_EXTENSIONS};
