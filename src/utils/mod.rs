//! Utility functions and helpers.

pub mod http;

use scraper::ElementRef;
use url::Url;

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Text of an element with every text node trimmed, then concatenated.
pub fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Like `stripped_text`, but `None` when nothing is left.
pub fn non_empty_text(element: ElementRef<'_>) -> Option<String> {
    Some(stripped_text(element)).filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = Url::parse("https://example.com/path/").unwrap();
        assert_eq!(
            resolve_url(&base, "page.html"),
            "https://example.com/path/page.html"
        );
        assert_eq!(
            resolve_url(&base, "/root.html"),
            "https://example.com/root.html"
        );
        assert_eq!(
            resolve_url(&base, "https://other.com/x"),
            "https://other.com/x"
        );
    }

    #[test]
    fn test_stripped_text_joins_trimmed_nodes() {
        let doc = Html::parse_fragment("<span>  12/03/1995 <b> (28) </b>\n</span>");
        let sel = Selector::parse("span").unwrap();
        let span = doc.select(&sel).next().unwrap();
        assert_eq!(stripped_text(span), "12/03/1995(28)");
    }

    #[test]
    fn test_non_empty_text() {
        let doc = Html::parse_fragment("<p>   </p>");
        let sel = Selector::parse("p").unwrap();
        assert_eq!(non_empty_text(doc.select(&sel).next().unwrap()), None);
    }
}
