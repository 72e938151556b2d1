//! LinkHarvest - Link extraction module
//!
//! Lexical link scanning over raw clipboard payloads. This is not an HTML
//! parser: `href` values that do not follow the quoting convention are missed,
//! and non-anchor tags such as `<link href=...>` are matched too.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::clipboard::ContentFormat;

/// Quoted value following `href=`, up to the next quote, space or `>`
static HREF_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"href=['"]([^'" >]+)"#).expect("href pattern is valid")
});

/// `http://` or `https://` up to whitespace, a quote or an angle bracket
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"https?://[^\s'"<>]+"#).expect("url pattern is valid")
});

/// Extract candidate links from `content` interpreted as `format`.
///
/// Links are returned in the order they appear, duplicates included.
pub fn extract(content: &str, format: ContentFormat) -> Vec<String> {
    match format {
        ContentFormat::Html => extract_html(content),
        ContentFormat::PlainText => extract_plain_text(content),
    }
}

/// Extract `href` attribute values from HTML markup
pub fn extract_html(html: &str) -> Vec<String> {
    HREF_PATTERN
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract `http(s)://` URLs from plain text
pub fn extract_plain_text(text: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_double_and_single_quotes_in_order() {
        let html = r#"<a href="http://a.com">x</a><a href='http://b.com'>y</a>"#;
        assert_eq!(extract_html(html), vec!["http://a.com", "http://b.com"]);
    }

    #[test]
    fn html_value_stops_at_space_quote_or_bracket() {
        assert_eq!(extract_html(r#"<a href="http://a.com/x y">"#), vec!["http://a.com/x"]);
        assert_eq!(extract_html(r#"<a href='http://a.com/x"y'>"#), vec!["http://a.com/x"]);
        assert_eq!(extract_html(r#"<a href="http://a.com/x>y">"#), vec!["http://a.com/x"]);
    }

    #[test]
    fn html_keeps_duplicates_and_relative_values() {
        let html = r##"<a href="/docs">d</a><a href="/docs">d</a><a href="#top">t</a>"##;
        assert_eq!(extract_html(html), vec!["/docs", "/docs", "#top"]);
    }

    #[test]
    fn html_matches_non_anchor_tags() {
        let html = r#"<link href="style.css" rel="stylesheet"><a href="https://x.org">x</a>"#;
        assert_eq!(extract_html(html), vec!["style.css", "https://x.org"]);
    }

    #[test]
    fn html_ignores_unquoted_and_empty_values() {
        assert!(extract_html("<a href=http://a.com>x</a>").is_empty());
        assert!(extract_html(r#"<a href="">x</a>"#).is_empty());
        assert!(extract_html(r#"<a href = "http://a.com">x</a>"#).is_empty());
    }

    #[test]
    fn html_is_case_sensitive_on_attribute_name() {
        assert!(extract_html(r#"<a HREF="http://a.com">x</a>"#).is_empty());
    }

    #[test]
    fn plain_text_finds_urls_with_duplicates() {
        let text = "see https://x.org/page and https://x.org/page again";
        assert_eq!(
            extract_plain_text(text),
            vec!["https://x.org/page", "https://x.org/page"]
        );
    }

    #[test]
    fn plain_text_terminators() {
        let text = "a http://one.com\tb 'http://two.com' \"http://three.com\" <http://four.com>";
        assert_eq!(
            extract_plain_text(text),
            vec!["http://one.com", "http://two.com", "http://three.com", "http://four.com"]
        );
    }

    #[test]
    fn plain_text_keeps_trailing_punctuation() {
        assert_eq!(extract_plain_text("go to https://x.org/a, then"), vec!["https://x.org/a,"]);
    }

    #[test]
    fn plain_text_requires_scheme_and_body() {
        assert!(extract_plain_text("www.example.com ftp://example.com").is_empty());
        assert!(extract_plain_text("http:// nothing").is_empty());
    }

    #[test]
    fn plain_text_mode_ignores_href_markup_outside_urls() {
        assert!(extract_plain_text(r#"<a href="/relative">x</a>"#).is_empty());
    }

    #[test]
    fn extract_dispatches_on_format() {
        let html = r#"<a href="http://a.com">http://b.com</a>"#;
        assert_eq!(extract(html, ContentFormat::Html), vec!["http://a.com"]);
        assert_eq!(
            extract(html, ContentFormat::PlainText),
            vec!["http://a.com", "http://b.com"]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(extract("", ContentFormat::Html).is_empty());
        assert!(extract("", ContentFormat::PlainText).is_empty());
    }
}
