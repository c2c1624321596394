// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Authoritativeness scorer
//!
//! Checks for entity markup, about/contact pages, social profiles and
//! outbound references. Link checks run on lowercased `href` values.

use super::structured_data::parse_block;
use super::{Dimension, Rule, SignalScorer};
use crate::document::PageDocument;

/// Schema types that identify who stands behind the page
const ENTITY_TYPES: &[&str] = &["Organization", "Person"];

const SOCIAL_HOSTS: &[&str] = &["linkedin", "twitter"];

static RULES: &[Rule] = &[
    Rule {
        id: "entity-schema",
        weight: 30,
        check: has_entity_schema,
    },
    Rule {
        id: "about-page",
        weight: 20,
        check: links_about,
    },
    Rule {
        id: "contact",
        weight: 15,
        check: has_contact,
    },
    Rule {
        id: "social-profiles",
        weight: 15,
        check: links_social,
    },
    Rule {
        id: "external-references",
        weight: 20,
        check: has_external_references,
    },
];

/// Scores site and author authority signals
pub struct AuthoritativenessScorer;

impl SignalScorer for AuthoritativenessScorer {
    fn dimension(&self) -> Dimension {
        Dimension::Authoritativeness
    }

    fn rules(&self) -> &'static [Rule] {
        RULES
    }
}

/// Only a top-level string `@type` counts; invalid blocks never match
fn has_entity_schema(doc: &PageDocument) -> bool {
    doc.json_ld_blocks().iter().any(|raw| {
        parse_block(raw).ok().is_some_and(|json| {
            json.get("@type")
                .and_then(|t| t.as_str())
                .is_some_and(|t| ENTITY_TYPES.contains(&t))
        })
    })
}

fn links_about(doc: &PageDocument) -> bool {
    doc.link_hrefs().iter().any(|href| href.contains("about"))
}

fn has_contact(doc: &PageDocument) -> bool {
    doc.link_hrefs().iter().any(|href| href.contains("contact")) || doc.exists("address")
}

fn links_social(doc: &PageDocument) -> bool {
    doc.link_hrefs()
        .iter()
        .any(|href| SOCIAL_HOSTS.iter().any(|host| href.contains(host)))
}

fn has_external_references(doc: &PageDocument) -> bool {
    doc.link_hrefs()
        .iter()
        .filter(|href| href.starts_with("http"))
        .count()
        >= 3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fired(html: &str) -> Vec<&'static str> {
        AuthoritativenessScorer.fired(&PageDocument::parse(html))
    }

    #[test]
    fn test_organization_schema() {
        let html = r#"<html><head>
            <script type="application/ld+json">
            {
              "@context": "https://schema.org",
              "@type": "Organization",
              "name": "Test Company"
            }
            </script>
            </head><body><h1>Test</h1></body></html>"#;
        let doc = PageDocument::parse(html);
        assert_eq!(AuthoritativenessScorer.fired(&doc), vec!["entity-schema"]);
        assert_eq!(AuthoritativenessScorer.score(&doc), 30);
    }

    #[test]
    fn test_person_schema_in_second_block() {
        let html = r#"<script type="application/ld+json">{"@type": "Article"}</script>
            <script type="application/ld+json">{"@type": "Person"}</script>"#;
        assert_eq!(fired(html), vec!["entity-schema"]);
    }

    #[test]
    fn test_invalid_schema_is_not_a_match() {
        let html = r#"<script type="application/ld+json">{"@type": "Organization",</script>"#;
        assert!(fired(html).is_empty());
    }

    #[test]
    fn test_link_rules() {
        assert_eq!(fired(r#"<a href="/About-Us">x</a>"#), vec!["about-page"]);
        assert_eq!(fired(r#"<a href="/contact">x</a>"#), vec!["contact"]);
        assert_eq!(fired("<address>1 Main St</address>"), vec!["contact"]);
        assert_eq!(
            fired(r#"<a href="/in/LinkedIn-profile">x</a>"#),
            vec!["social-profiles"]
        );
    }

    #[test]
    fn test_external_references_need_three() {
        let two = r#"<a href="http://a.org">a</a><a href="https://b.org">b</a><a href="/c">c</a>"#;
        assert!(fired(two).is_empty());

        let three = r#"<a href="http://a.org">a</a><a href="https://b.org">b</a><a href="HTTP://c.org">c</a>"#;
        assert_eq!(fired(three), vec!["external-references"]);
    }
}
