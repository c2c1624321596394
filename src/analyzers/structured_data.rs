// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Structured data (JSON-LD) auditor
//!
//! Every `<script type="application/ld+json">` block is parsed on its own.
//! A block that fails to parse becomes an error issue and is otherwise
//! ignored; the rest of the audit carries on.

use crate::document::PageDocument;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Schema types every article page should carry, in report order
pub const RECOMMENDED_TYPES: &[&str] = &["Article", "Person", "Organization", "BreadcrumbList"];

/// Fields an `Article` block must provide
const ARTICLE_REQUIRED_FIELDS: &[&str] = &["author", "datePublished"];

/// Severity levels for structured data issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaSeverity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredDataIssue {
    /// Schema type the issue belongs to, or "JSON-LD" for syntax errors
    #[serde(rename = "type")]
    pub schema_type: String,
    pub severity: SchemaSeverity,
    pub message: String,
    pub fix: String,
}

impl StructuredDataIssue {
    fn new(schema_type: &str, severity: SchemaSeverity, message: &str, fix: &str) -> Self {
        Self {
            schema_type: schema_type.to_string(),
            severity,
            message: message.to_string(),
            fix: fix.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredDataReport {
    /// Schema types present, one entry per block (duplicates kept)
    pub found: Vec<String>,
    /// Recommended types not present
    pub missing: Vec<String>,
    pub issues: Vec<StructuredDataIssue>,
}

impl StructuredDataReport {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == SchemaSeverity::Error)
    }
}

/// Parse one JSON-LD block. An empty block reads as `{}`.
pub fn parse_block(raw: &str) -> serde_json::Result<Value> {
    if raw.is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_str(raw)
}

/// Audit the page's JSON-LD blocks
pub fn audit_structured_data(doc: &PageDocument) -> StructuredDataReport {
    let mut report = StructuredDataReport::default();
    let mut blocks = Vec::new();

    for raw in doc.json_ld_blocks() {
        match parse_block(&raw) {
            Ok(json) => {
                report.found.extend(schema_types(&json));
                blocks.push(json);
            }
            Err(e) => {
                debug!("Invalid JSON-LD block: {}", e);
                report.issues.push(StructuredDataIssue::new(
                    "JSON-LD",
                    SchemaSeverity::Error,
                    "Invalid JSON-LD syntax",
                    "Fix JSON syntax errors in structured data",
                ));
            }
        }
    }

    report.missing = RECOMMENDED_TYPES
        .iter()
        .filter(|t| !report.found.iter().any(|f| f == *t))
        .map(|t| t.to_string())
        .collect();

    let article = blocks
        .iter()
        .find(|json| json.get("@type").and_then(Value::as_str) == Some("Article"));
    if let Some(article) = article {
        check_required_fields(article, &mut report);
    }

    report
}

/// Type names declared by a block's `@type`
fn schema_types(json: &Value) -> Vec<String> {
    match json.get("@type") {
        Some(Value::String(t)) if !t.is_empty() => vec![t.clone()],
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn check_required_fields(article: &Value, report: &mut StructuredDataReport) {
    for field in ARTICLE_REQUIRED_FIELDS {
        if !article.get(*field).is_some_and(is_present) {
            report.issues.push(StructuredDataIssue::new(
                "Article",
                SchemaSeverity::Warning,
                &format!("Article schema missing {}", field),
                &format!("Add \"{}\" field to Article schema", field),
            ));
        }
    }
}

/// Null, false, zero and empty strings count as absent
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
