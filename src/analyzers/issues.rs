// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! E-E-A-T issue detector
//!
//! Runs a fixed battery of presence checks. Every check runs on every page
//! and issues are reported in check order:
//! 1. meta description
//! 2. author
//! 3. publication date
//! 4. citations
//! 5. contact information
//! 6. thin content

use super::{Dimension, Issue, Severity};
use crate::document::PageDocument;

/// Pages with fewer words than this are reported as thin
pub const THIN_CONTENT_WORDS: usize = 300;

/// Run every issue check against the page
pub fn detect_issues(doc: &PageDocument) -> Vec<Issue> {
    let mut issues = Vec::new();

    check_meta_description(doc, &mut issues);
    check_author(doc, &mut issues);
    check_publication_date(doc, &mut issues);
    check_citations(doc, &mut issues);
    check_contact(doc, &mut issues);
    check_thin_content(doc, &mut issues);

    issues
}

fn check_meta_description(doc: &PageDocument, issues: &mut Vec<Issue>) {
    let description = doc.first_attr(r#"meta[name="description"]"#, "content");
    if description.map_or(true, |d| d.trim().is_empty()) {
        issues.push(
            Issue::new(
                Dimension::Trustworthiness,
                Severity::High,
                "Missing meta description",
                "Add meta description (150-160 characters) summarizing page content for search engines.",
            )
            .with_element("head"),
        );
    }
}

fn check_author(doc: &PageDocument, issues: &mut Vec<Issue>) {
    if !doc.exists(r#"[rel="author"]"#) && !doc.exists(".author") {
        issues.push(
            Issue::new(
                Dimension::Expertise,
                Severity::High,
                "No author information found",
                "Add author byline with rel=\"author\" attribute. Include author bio and credentials.",
            )
            .with_element("article"),
        );
    }
}

fn check_publication_date(doc: &PageDocument, issues: &mut Vec<Issue>) {
    if !doc.exists("time") {
        issues.push(
            Issue::new(
                Dimension::Trustworthiness,
                Severity::Medium,
                "No publication or update date found",
                "Add <time> element with datetime attribute showing when content was published/updated.",
            )
            .with_element("article"),
        );
    }
}

fn check_citations(doc: &PageDocument, issues: &mut Vec<Issue>) {
    if !doc.exists(r#"cite, blockquote, [href*="doi.org"], [href*="ncbi"]"#) {
        issues.push(Issue::new(
            Dimension::Expertise,
            Severity::Medium,
            "No citations or references found",
            "Add citations to authoritative sources. Use <cite> tags and link to original research.",
        ));
    }
}

fn check_contact(doc: &PageDocument, issues: &mut Vec<Issue>) {
    if !doc.exists(r#"a[href^="mailto:"]"#) && !doc.exists("address") {
        issues.push(Issue::new(
            Dimension::Trustworthiness,
            Severity::High,
            "No contact information found",
            "Add contact email, phone, or contact form. Include physical address if applicable.",
        ));
    }
}

fn check_thin_content(doc: &PageDocument, issues: &mut Vec<Issue>) {
    let words = doc.word_count();
    if words < THIN_CONTENT_WORDS {
        issues.push(Issue::new(
            Dimension::Experience,
            Severity::Critical,
            &format!("Thin content detected ({} words)", words),
            "Expand content to at least 1000 words with detailed, valuable information.",
        ));
    }
}
