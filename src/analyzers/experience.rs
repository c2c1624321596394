// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Experience scorer
//!
//! | Rule             | Points | Signal                                        |
//! |------------------|--------|-----------------------------------------------|
//! | first-person     | 25     | "i tested", "i tried", "in my experience"     |
//! | images-many      | 20     | 5 or more `<img>`                             |
//! | images-some      | 10     | 2 to 4 `<img>`                                |
//! | process          | 15     | "step", "how to", "tutorial"                  |
//! | dated            | 20     | `<time>` element, "updated", "published"      |
//! | specific-results | 20     | a digit plus "results", "tested" or "data"    |

use super::{Dimension, Rule, SignalScorer};
use crate::document::PageDocument;

const FIRST_PERSON_PHRASES: &[&str] = &["i tested", "i tried", "in my experience"];
const PROCESS_PHRASES: &[&str] = &["step", "how to", "tutorial"];
const DATE_PHRASES: &[&str] = &["updated", "published"];
const METRIC_WORDS: &[&str] = &["results", "tested", "data"];

static RULES: &[Rule] = &[
    Rule {
        id: "first-person",
        weight: 25,
        check: has_first_person,
    },
    Rule {
        id: "images-many",
        weight: 20,
        check: has_many_images,
    },
    Rule {
        id: "images-some",
        weight: 10,
        check: has_some_images,
    },
    Rule {
        id: "process",
        weight: 15,
        check: describes_process,
    },
    Rule {
        id: "dated",
        weight: 20,
        check: is_dated,
    },
    Rule {
        id: "specific-results",
        weight: 20,
        check: has_specific_results,
    },
];

/// Scores first-hand experience signals
pub struct ExperienceScorer;

impl SignalScorer for ExperienceScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Experience
    }

    fn rules(&self) -> &'static [Rule] {
        RULES
    }
}

fn has_first_person(doc: &PageDocument) -> bool {
    doc.text_contains_any(FIRST_PERSON_PHRASES)
}

fn has_many_images(doc: &PageDocument) -> bool {
    doc.count("img") >= 5
}

fn has_some_images(doc: &PageDocument) -> bool {
    (2..5).contains(&doc.count("img"))
}

fn describes_process(doc: &PageDocument) -> bool {
    doc.text_contains_any(PROCESS_PHRASES)
}

fn is_dated(doc: &PageDocument) -> bool {
    doc.exists("time") || doc.text_contains_any(DATE_PHRASES)
}

fn has_specific_results(doc: &PageDocument) -> bool {
    doc.text().chars().any(|c| c.is_ascii_digit()) && doc.text_contains_any(METRIC_WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(html: &str) -> u32 {
        ExperienceScorer.score(&PageDocument::parse(html))
    }

    fn images(n: usize) -> String {
        "<img src=\"a.png\">".repeat(n)
    }

    #[test]
    fn test_first_person_account() {
        // "tested" and the digit also trigger specific-results
        let doc = PageDocument::parse("<p>I tested this product for 6 months</p>");
        assert_eq!(
            ExperienceScorer.fired(&doc),
            vec!["first-person", "specific-results"]
        );
        assert_eq!(ExperienceScorer.score(&doc), 45);
    }

    #[test]
    fn test_image_tiers_are_exclusive() {
        assert_eq!(score(&images(1)), 0);
        assert_eq!(score(&images(2)), 10);
        assert_eq!(score(&images(4)), 10);
        assert_eq!(score(&images(5)), 20);
        assert_eq!(score(&images(9)), 20);
    }

    #[test]
    fn test_time_element_counts_as_dated() {
        let doc = PageDocument::parse(r#"<time datetime="2025-01-01">Jan</time>"#);
        assert_eq!(ExperienceScorer.fired(&doc), vec!["dated"]);
    }

    #[test]
    fn test_metrics_need_a_digit() {
        assert_eq!(score("<p>our results were great</p>"), 0);
        assert_eq!(score("<p>our results were 3x better</p>"), 20);
    }

    #[test]
    fn test_everything_caps_at_100() {
        let html = format!(
            "<p>In my experience, step one. Updated 2025. Results: 42.</p>{}",
            images(6)
        );
        assert_eq!(score(&html), 100);
    }

    #[test]
    fn test_empty_page_scores_zero() {
        assert_eq!(score(""), 0);
    }
}
