// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Page document loader.
//!
//! Wraps a parsed `scraper::Html` tree with the handful of queries the
//! analyzers need. Parsing is total: html5ever repairs unclosed or invalid
//! markup into a best-effort tree, and an empty input still produces an
//! `<html><head></head><body></body></html>` skeleton, so analyzers never
//! special-case malformed pages.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// A parsed page, read-only for the lifetime of one analysis
pub struct PageDocument {
    html: Html,
    body_text: String,
    lower_text: String,
}

impl PageDocument {
    /// Parse raw HTML. Never fails.
    pub fn parse(content: &str) -> Self {
        let html = Html::parse_document(content);

        let body_sel = Selector::parse("body").expect("valid selector");
        let body_text = match html.select(&body_sel).next() {
            Some(body) => body.text().collect::<String>(),
            None => html.root_element().text().collect::<String>(),
        };
        let lower_text = body_text.to_lowercase();

        Self {
            html,
            body_text,
            lower_text,
        }
    }

    /// All elements matching a CSS selector, in document order.
    ///
    /// An unparseable selector matches nothing.
    pub fn select(&self, css: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(css) {
            Ok(sel) => self.html.select(&sel).collect(),
            Err(e) => {
                warn!("Ignoring invalid selector {:?}: {}", css, e);
                Vec::new()
            }
        }
    }

    /// Number of elements matching a selector
    pub fn count(&self, css: &str) -> usize {
        self.select(css).len()
    }

    /// Whether any element matches a selector
    pub fn exists(&self, css: &str) -> bool {
        self.count(css) > 0
    }

    /// Attribute of the first element matching `css`
    pub fn first_attr(&self, css: &str, name: &str) -> Option<String> {
        self.select(css)
            .first()
            .and_then(|el| el.value().attr(name))
            .map(str::to_string)
    }

    /// Text content of `<body>` as written
    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    /// Lowercased text content of `<body>`
    pub fn text(&self) -> &str {
        &self.lower_text
    }

    /// Whether the lowercased body text contains any of `needles`
    pub fn text_contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.lower_text.contains(n))
    }

    /// Number of whitespace-separated words in the body text
    pub fn word_count(&self) -> usize {
        self.body_text.split_whitespace().count()
    }

    /// Lowercased `href` of every `<a>`; anchors without one yield `""`
    pub fn link_hrefs(&self) -> Vec<String> {
        self.select("a")
            .iter()
            .map(|el| el.value().attr("href").unwrap_or("").to_lowercase())
            .collect()
    }

    /// Lowercased visible text of every `<a>`
    pub fn link_texts(&self) -> Vec<String> {
        self.select("a")
            .iter()
            .map(|el| el.text().collect::<String>().to_lowercase())
            .collect()
    }

    /// Raw contents of every JSON-LD script block, in document order
    pub fn json_ld_blocks(&self) -> Vec<String> {
        self.select(r#"script[type="application/ld+json"]"#)
            .iter()
            .map(|el| el.text().collect::<String>())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_empty_body() {
        let doc = PageDocument::parse("");
        assert_eq!(doc.body_text(), "");
        assert_eq!(doc.word_count(), 0);
        assert!(doc.exists("body"));
    }

    #[test]
    fn test_unclosed_tags_are_repaired() {
        let doc = PageDocument::parse("<div><p>Hello <b>World</div><span> again");
        assert_eq!(doc.word_count(), 3);
        assert!(doc.text().contains("hello world"));
    }

    #[test]
    fn test_text_is_lowercased_but_body_text_is_not() {
        let doc = PageDocument::parse("<body><p>I Tested It</p></body>");
        assert_eq!(doc.body_text(), "I Tested It");
        assert_eq!(doc.text(), "i tested it");
        assert!(doc.text_contains_any(&["nothing", "i tested"]));
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let doc = PageDocument::parse("<p>x</p>");
        assert!(doc.select("p[").is_empty());
    }

    #[test]
    fn test_link_queries() {
        let doc = PageDocument::parse(
            r#"<a href="/About">About Us</a><a>No Href</a><a href="HTTPS://x.com">Privacy</a>"#,
        );
        assert_eq!(doc.link_hrefs(), vec!["/about", "", "https://x.com"]);
        assert_eq!(doc.link_texts(), vec!["about us", "no href", "privacy"]);
    }

    #[test]
    fn test_first_attr() {
        let doc = PageDocument::parse(
            r#"<head><link rel="canonical" href="https://a.com/"><link rel="canonical" href="http://b.com/"></head>"#,
        );
        assert_eq!(
            doc.first_attr(r#"link[rel="canonical"]"#, "href").as_deref(),
            Some("https://a.com/")
        );
        assert_eq!(doc.first_attr("meta", "content"), None);
    }

    #[test]
    fn test_json_ld_blocks_keep_raw_text() {
        let doc = PageDocument::parse(
            r#"<script type="application/ld+json">{"@type": "Person"}</script><script>var x = 1;</script>"#,
        );
        assert_eq!(doc.json_ld_blocks(), vec![r#"{"@type": "Person"}"#]);
    }
}
