// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! eeatbot: E-E-A-T and Answer Engine Optimization analyzer
//!
//! Scores a single web page for the heuristic signals behind:
//!
//! - Experience (first-hand accounts, screenshots, dated results)
//! - Expertise (author bios, credentials, citations, depth)
//! - Authoritativeness (entity schema, about/contact pages, references)
//! - Trustworthiness (HTTPS, policies, contact details, transparency)
//!
//! and derives answer-engine readiness estimates, a rule-based issue list,
//! a JSON-LD audit and recommendations from them.
//!
//! Analysis is a pure, total function of the HTML: the same input always
//! produces the same [`AnalysisResult`], and empty or malformed markup
//! degrades the scores instead of failing.

pub mod analyzers;
pub mod config;
pub mod document;
pub mod error;
pub mod fetch;
pub mod report;

pub use analyzers::{
    aeo::AeoReadiness,
    structured_data::{SchemaSeverity, StructuredDataIssue, StructuredDataReport},
    AnalysisResult, Dimension, EeatScore, Issue, Severity,
};
pub use config::Config;
pub use document::PageDocument;
pub use error::{EeatError, Result};

use tracing::info;

/// Analyze one page of HTML. `url` identifies the page in the result.
pub fn analyze(html: &str, url: &str) -> AnalysisResult {
    let doc = PageDocument::parse(html);

    let eat_score = analyzers::score_page(&doc);
    let issues = analyzers::issues::detect_issues(&doc);
    let structured_data = analyzers::structured_data::audit_structured_data(&doc);
    let recommendations = analyzers::recommendations::generate_recommendations(&eat_score, &issues);
    let aeo_readiness = analyzers::aeo::estimate_readiness(&doc, &eat_score);

    info!(
        url,
        overall = eat_score.overall(),
        issues = issues.len(),
        "Analysis complete"
    );

    AnalysisResult {
        url: url.to_string(),
        eat_score,
        issues,
        structured_data,
        recommendations,
        aeo_readiness,
    }
}
