//! HTML link extraction
//!
//! Collects the outbound links of a page that the crawler is allowed to
//! follow.

use crate::url::resolve_link;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts crawlable links from a page
///
/// # Link Extraction Rules
///
/// - Only `<a href="...">` elements are considered
/// - Each href is resolved against `base_url`
/// - Fragments are dropped, so links differing only by `#...` collapse
/// - Links failing the URL validator (non-HTTP schemes, excluded file
///   extensions) are skipped, as are hrefs that cannot be resolved
///
/// Never fails: if `base_url` itself is unusable the cause is logged and the
/// page contributes no links.
///
/// # Arguments
///
/// * `html` - The HTML content
/// * `base_url` - URL of the page the HTML came from
///
/// # Example
///
/// ```
/// use cyrillic_crawler::crawler::extract_links;
///
/// let html = r##"<a href="/a#top">A</a><a href="/a#end">A again</a><a href="/doc.pdf">PDF</a>"##;
/// let links = extract_links(html, "https://example.com/");
/// assert_eq!(links.len(), 1);
/// assert!(links.contains("https://example.com/a"));
/// ```
pub fn extract_links(html: &str, base_url: &str) -> HashSet<String> {
    let base = match Url::parse(base_url) {
        Ok(base) => base,
        Err(e) => {
            tracing::warn!("Cannot extract links from {}: {}", base_url, e);
            return HashSet::new();
        }
    };

    let document = Html::parse_document(html);
    extract_document_links(&document, &base)
}

/// Extracts crawlable links from an already parsed document
pub fn extract_document_links(document: &Html, base_url: &Url) -> HashSet<String> {
    let mut links = HashSet::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                match resolve_link(href, base_url) {
                    Some(absolute_url) => {
                        links.insert(absolute_url);
                    }
                    None => tracing::trace!("Skipping link {:?} on {}", href, base_url),
                }
            }
        }
    }

    links
}
