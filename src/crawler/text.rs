//! Visible text extraction
//!
//! Turns page HTML into the plain text that is counted by the content policy
//! and written to page records.

use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Elements whose whole subtree is dropped before text is read
pub const EXCLUDED_ELEMENTS: &[&str] = &["script", "style", "nav", "footer", "head", "iframe"];

/// Extracts the visible text of an HTML document
///
/// Text nodes outside the excluded elements are concatenated in document
/// order, then every whitespace run is collapsed to a single space and the
/// result is trimmed. Comments are not text.
///
/// # Example
///
/// ```
/// use cyrillic_crawler::crawler::extract_text;
///
/// let html = "<html><head><title>Заголовок</title></head>
///             <body><nav>Меню</nav><p>Привет,\n\t мир!</p><script>x()</script></body></html>";
/// assert_eq!(extract_text(html), "Привет, мир!");
/// ```
pub fn extract_text(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let document = Html::parse_document(html);
    let mut raw = String::new();
    collect_text(document.root_element(), &mut raw);

    normalize_whitespace(&raw)
}

/// Collapses whitespace runs into single spaces and trims both ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    if EXCLUDED_ELEMENTS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}
