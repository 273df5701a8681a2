use crate::{UrlError, UrlResult};
use url::{Position, Url};

/// File extensions that are never fetched, matched against the end of path and query
pub const EXCLUDED_EXTENSIONS: &[&str] = &[".pdf", ".jpg", ".png", ".gif", ".zip", ".doc", ".docx"];

/// Checks whether a URL may be crawled and reports why it may not
///
/// # Rules
///
/// 1. The string must parse as an absolute URL
/// 2. The scheme must be `http` or `https`
/// 3. Path and query together must not end with an excluded extension
///    (case-insensitive); the fragment is ignored
///
/// A trailing query hides the extension, so `https://x/file.pdf?ok=1` is
/// crawlable while `https://x/file.pdf#page=2` is not.
///
/// # Arguments
///
/// * `url_str` - The candidate URL
///
/// # Returns
///
/// * `Ok(Url)` - The parsed URL
/// * `Err(UrlError)` - The rule that rejected it
pub fn check_crawlable(url_str: &str) -> UrlResult<Url> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    let tail = url[Position::BeforePath..Position::AfterQuery].to_ascii_lowercase();
    if let Some(ext) = EXCLUDED_EXTENSIONS.iter().find(|ext| tail.ends_with(*ext)) {
        return Err(UrlError::ExcludedExtension(ext.to_string()));
    }

    Ok(url)
}

/// Returns true if the URL passes every rule of [`check_crawlable`]
///
/// # Examples
///
/// ```
/// use cyrillic_crawler::url::is_crawlable;
///
/// assert!(is_crawlable("https://example.com/page"));
/// assert!(!is_crawlable("https://example.com/report.PDF"));
/// assert!(!is_crawlable("mailto:someone@example.com"));
/// ```
pub fn is_crawlable(url_str: &str) -> bool {
    check_crawlable(url_str).is_ok()
}
