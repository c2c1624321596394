// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Trustworthiness scorer
//!
//! | Rule            | Points | Signal                                          |
//! |-----------------|--------|-------------------------------------------------|
//! | https-canonical | 20     | canonical link starting with `https://`         |
//! | privacy-link    | 15     | link text mentioning "privacy"                  |
//! | terms-link      | 10     | link text mentioning "terms"                    |
//! | email           | 15     | an email-like `@host.tld` in the page text      |
//! | transparency    | 15     | "updated", "disclosure", "affiliate"            |
//! | security        | 10     | image alt containing "secure", or "ssl"         |
//! | clean-structure | 15     | no `<img>` without `src`, 2+ header/nav/footer  |

use super::{Dimension, Rule, SignalScorer};
use crate::document::PageDocument;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)@[a-z0-9.-]+\.[a-z]{2,}").expect("valid regex"));

const TRANSPARENCY_PHRASES: &[&str] = &["updated", "disclosure", "affiliate"];

static RULES: &[Rule] = &[
    Rule {
        id: "https-canonical",
        weight: 20,
        check: has_https_canonical,
    },
    Rule {
        id: "privacy-link",
        weight: 15,
        check: links_privacy_policy,
    },
    Rule {
        id: "terms-link",
        weight: 10,
        check: links_terms,
    },
    Rule {
        id: "email",
        weight: 15,
        check: shows_email,
    },
    Rule {
        id: "transparency",
        weight: 15,
        check: is_transparent,
    },
    Rule {
        id: "security",
        weight: 10,
        check: shows_security,
    },
    Rule {
        id: "clean-structure",
        weight: 15,
        check: has_clean_structure,
    },
];

/// Scores trust and transparency signals
pub struct TrustworthinessScorer;

impl SignalScorer for TrustworthinessScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Trustworthiness
    }

    fn rules(&self) -> &'static [Rule] {
        RULES
    }
}

fn has_https_canonical(doc: &PageDocument) -> bool {
    doc.first_attr(r#"link[rel="canonical"]"#, "href")
        .is_some_and(|href| href.starts_with("https://"))
}

fn links_privacy_policy(doc: &PageDocument) -> bool {
    doc.link_texts().iter().any(|t| t.contains("privacy"))
}

fn links_terms(doc: &PageDocument) -> bool {
    doc.link_texts().iter().any(|t| t.contains("terms"))
}

fn shows_email(doc: &PageDocument) -> bool {
    EMAIL_PATTERN.is_match(doc.text())
}

fn is_transparent(doc: &PageDocument) -> bool {
    doc.text_contains_any(TRANSPARENCY_PHRASES)
}

fn shows_security(doc: &PageDocument) -> bool {
    doc.exists(r#"img[alt*="secure"]"#) || doc.text().contains("ssl")
}

fn has_clean_structure(doc: &PageDocument) -> bool {
    doc.count("img:not([src])") == 0 && doc.count("header, nav, footer") >= 2
}
