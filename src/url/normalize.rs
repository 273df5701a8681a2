use crate::url::validate::is_crawlable;
use url::Url;

/// Removes everything from the first `#` onwards
///
/// Works on raw strings so that seeds which do not parse still reach the
/// fetcher (and fail there, visibly) instead of being dropped silently.
///
/// # Examples
///
/// ```
/// use cyrillic_crawler::url::strip_fragment;
///
/// assert_eq!(strip_fragment("https://example.com/page#a"), "https://example.com/page");
/// assert_eq!(strip_fragment("https://example.com/page"), "https://example.com/page");
/// ```
pub fn strip_fragment(url_str: &str) -> &str {
    match url_str.find('#') {
        Some(idx) => &url_str[..idx],
        None => url_str,
    }
}

/// Canonical form of a seed URL
///
/// Seeds that parse are serialized the same way as discovered links (so
/// `https://example.com` and a link to `https://example.com/` are one URL);
/// seeds that do not parse only lose their fragment.
pub fn normalize_seed(seed: &str) -> String {
    let seed = seed.trim();
    match Url::parse(seed) {
        Ok(mut url) => {
            url.set_fragment(None);
            url.to_string()
        }
        Err(_) => strip_fragment(seed).to_string(),
    }
}

/// Resolves an href against the page URL into a crawlable absolute URL
///
/// # Steps
///
/// 1. Join the href onto `base_url`
/// 2. Drop the fragment, so `/page#a` and `/page#b` become one link
/// 3. Keep the result only if it is crawlable
///
/// # Arguments
///
/// * `href` - The raw `href` attribute value
/// * `base_url` - The URL of the page the href was found on
///
/// # Returns
///
/// * `Some(String)` - Absolute, fragment-free, crawlable URL
/// * `None` - The href could not be resolved or is not crawlable
pub fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let mut absolute = base_url.join(href).ok()?;
    absolute.set_fragment(None);

    let absolute = absolute.to_string();
    if is_crawlable(&absolute) {
        Some(absolute)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/dir/page").unwrap()
    }

    #[test]
    fn test_strip_fragment_variants() {
        assert_eq!(strip_fragment("https://x/page#a"), "https://x/page");
        assert_eq!(strip_fragment("https://x/page#"), "https://x/page");
        assert_eq!(strip_fragment("https://x/page?q=1#a#b"), "https://x/page?q=1");
        assert_eq!(strip_fragment("#only"), "");
        assert_eq!(strip_fragment("not a url"), "not a url");
    }

    #[test]
    fn test_normalize_seed() {
        assert_eq!(normalize_seed("https://example.com"), "https://example.com/");
        assert_eq!(normalize_seed(" https://example.com/a#top "), "https://example.com/a");
        assert_eq!(normalize_seed("HTTPS://Example.COM/Путь"), "https://example.com/%D0%9F%D1%83%D1%82%D1%8C");
        assert_eq!(normalize_seed("not a url#frag"), "not a url");
    }

    #[test]
    fn test_fragments_resolve_to_same_link() {
        let a = resolve_link("https://x/page#a", &base_url());
        let b = resolve_link("https://x/page#b", &base_url());
        assert_eq!(a, Some("https://x/page".to_string()));
        assert_eq!(a, b);
    }

    #[test]
    fn test_relative_links() {
        assert_eq!(
            resolve_link("/root", &base_url()),
            Some("https://example.com/root".to_string())
        );
        assert_eq!(
            resolve_link("sibling", &base_url()),
            Some("https://example.com/dir/sibling".to_string())
        );
        assert_eq!(
            resolve_link("../up", &base_url()),
            Some("https://example.com/up".to_string())
        );
    }

    #[test]
    fn test_fragment_only_link_resolves_to_base() {
        assert_eq!(
            resolve_link("#section", &base_url()),
            Some("https://example.com/dir/page".to_string())
        );
    }

    #[test]
    fn test_non_crawlable_links_dropped() {
        assert_eq!(resolve_link("mailto:a@example.com", &base_url()), None);
        assert_eq!(resolve_link("javascript:void(0)", &base_url()), None);
        assert_eq!(resolve_link("/files/report.pdf", &base_url()), None);
    }

    #[test]
    fn test_unresolvable_link_dropped() {
        assert_eq!(resolve_link("http://[::1", &base_url()), None);
    }
}
