// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Expertise scorer
//!
//! Looks for a visible author, credentials, citations, depth and structure.
//! Keyword checks are plain substring matches, so "md" also fires inside
//! longer words.

use super::{Dimension, Rule, SignalScorer};
use crate::document::PageDocument;

/// Selectors that indicate an author byline or bio
pub const AUTHOR_SELECTORS: &[&str] = &[
    r#"[rel="author"]"#,
    ".author-bio",
    "#author",
    ".author",
    r#"[itemprop="author"]"#,
];

const CREDENTIALS: &[&str] = &["phd", "md", "certified", "expert", "professional", "specialist"];
const REFERENCE_PHRASES: &[&str] = &["source:", "references"];

/// Word count above which content counts as in-depth
const DEPTH_WORDS: usize = 1000;

static RULES: &[Rule] = &[
    Rule {
        id: "author",
        weight: 30,
        check: has_author,
    },
    Rule {
        id: "credentials",
        weight: 25,
        check: has_credentials,
    },
    Rule {
        id: "citations",
        weight: 20,
        check: has_citations,
    },
    Rule {
        id: "depth",
        weight: 15,
        check: is_in_depth,
    },
    Rule {
        id: "structure",
        weight: 10,
        check: is_structured,
    },
];

/// Scores author expertise signals
pub struct ExpertiseScorer;

impl SignalScorer for ExpertiseScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Expertise
    }

    fn rules(&self) -> &'static [Rule] {
        RULES
    }
}

fn has_author(doc: &PageDocument) -> bool {
    AUTHOR_SELECTORS.iter().any(|sel| doc.exists(sel))
}

fn has_credentials(doc: &PageDocument) -> bool {
    doc.text_contains_any(CREDENTIALS)
}

fn has_citations(doc: &PageDocument) -> bool {
    doc.exists("cite") || doc.exists("blockquote") || doc.text_contains_any(REFERENCE_PHRASES)
}

fn is_in_depth(doc: &PageDocument) -> bool {
    doc.word_count() > DEPTH_WORDS
}

fn is_structured(doc: &PageDocument) -> bool {
    doc.count("h2, h3, h4") >= 5
}
