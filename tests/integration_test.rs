// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integration tests for eeatbot

use eeatbot::report::{generate_report, OutputFormat};
use eeatbot::{analyze, AnalysisResult, Dimension, SchemaSeverity, Severity};
use std::path::Path;

fn analyze_fixture(name: &str) -> AnalysisResult {
    let path = Path::new("tests/fixtures").join(name);
    let html = std::fs::read_to_string(&path).expect("fixture should exist");
    analyze(&html, &path.display().to_string())
}

fn assert_in_range(result: &AnalysisResult) {
    let s = &result.eat_score;
    for value in [
        s.experience(),
        s.expertise(),
        s.authoritativeness(),
        s.trustworthiness(),
        s.overall(),
        result.aeo_readiness.chatgpt,
        result.aeo_readiness.perplexity,
        result.aeo_readiness.google_ai,
    ] {
        assert!(value <= 100, "score out of range: {}", value);
    }
}

fn expected_overall(result: &AnalysisResult) -> u32 {
    let s = &result.eat_score;
    let sum = s.experience() + s.expertise() + s.authoritativeness() + s.trustworthiness();
    (sum as f64 / 4.0).round() as u32
}

#[test]
fn test_high_eeat_page() {
    let result = analyze_fixture("high_eeat.html");
    let score = &result.eat_score;

    assert_eq!(score.experience(), 100);
    assert!(score.expertise() >= 85, "expertise {}", score.expertise());
    assert_eq!(score.authoritativeness(), 100);
    assert_eq!(score.trustworthiness(), 100);
    assert!(score.overall() >= 60, "overall {}", score.overall());
    assert_eq!(score.overall(), expected_overall(&result));

    // Only the length check should fire on this page
    let messages: Vec<&str> = result.issues.iter().map(|i| i.message.as_str()).collect();
    assert_eq!(messages.len(), 1, "unexpected issues: {:?}", messages);
    assert!(messages[0].starts_with("Thin content detected"));

    assert_eq!(result.structured_data.found, vec!["Organization", "Article"]);
    assert_eq!(result.structured_data.missing, vec!["Person", "BreadcrumbList"]);
    assert!(result.structured_data.issues.is_empty());

    assert!(result.recommendations.is_empty());
    assert!(result.aeo_readiness.chatgpt >= 90);
    assert!(result.aeo_readiness.perplexity >= 89);
    assert!(result.aeo_readiness.google_ai >= 90);
    assert_in_range(&result);
}

#[test]
fn test_thin_page() {
    let result = analyze_fixture("thin.html");

    assert!(result.eat_score.overall() < 60);
    assert_eq!(result.issues.len(), 6);
    assert_eq!(result.issues_for(Dimension::Trustworthiness).len(), 3);
    assert_eq!(result.issues_for(Dimension::Expertise).len(), 2);
    assert_eq!(result.issues_by_severity(Severity::High).len(), 3);
    let thin = result.issues.last().unwrap();
    assert_eq!(thin.category, Dimension::Experience);
    assert_eq!(thin.severity, Severity::Critical);
    assert_eq!(result.structured_data.missing.len(), 4);
    assert!(!result.recommendations.is_empty());
    assert_in_range(&result);
}

#[test]
fn test_malformed_page_degrades_gracefully() {
    let result = analyze_fixture("malformed.html");

    // .author is still found inside the unclosed div
    assert!(!result
        .issues
        .iter()
        .any(|i| i.message == "No author information found"));

    let sd = &result.structured_data;
    assert!(sd.found.is_empty());
    assert_eq!(sd.issues.len(), 1);
    assert_eq!(sd.issues[0].severity, SchemaSeverity::Error);
    assert_eq!(sd.issues[0].message, "Invalid JSON-LD syntax");
    assert_in_range(&result);
}

#[test]
fn test_empty_html() {
    let result = analyze("", "empty");

    assert_eq!(result.url, "empty");
    assert!(result
        .issues
        .iter()
        .any(|i| i.message == "Thin content detected (0 words)"));
    assert_eq!(result.eat_score.overall(), 0);
    assert_eq!(result.recommendations.len(), 11);
    assert_in_range(&result);
}

#[test]
fn test_first_person_experience() {
    let result = analyze(
        "<html><body><p>I tested this product for 6 months</p></body></html>",
        "http://test.com",
    );
    assert!(result.eat_score.experience() > 0);
}

#[test]
fn test_author_bio_expertise() {
    let html = r#"<html><body>
        <div class="author-bio">
          <p>Dr. John Smith is a certified expert with a PhD in Computer Science</p>
        </div>
        </body></html>"#;
    let result = analyze(html, "http://test.com");
    assert!(result.eat_score.expertise() >= 30);
}

#[test]
fn test_https_canonical_trust() {
    let html = r#"<html><head>
        <link rel="canonical" href="https://secure-site.com/page" />
        </head><body><h1>Test</h1></body></html>"#;
    let result = analyze(html, "http://test.com");
    assert!(result.eat_score.trustworthiness() >= 20);
}

#[test]
fn test_bare_article_schema() {
    let html = r#"<script type="application/ld+json">{"@type":"Article"}</script>"#;
    let result = analyze(html, "http://test.com");

    let sd = &result.structured_data;
    assert!(sd.found.contains(&"Article".to_string()));
    let warnings: Vec<&str> = sd
        .issues
        .iter()
        .filter(|i| i.severity == SchemaSeverity::Warning)
        .map(|i| i.message.as_str())
        .collect();
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().any(|m| m.contains("author")));
    assert!(warnings.iter().any(|m| m.contains("datePublished")));
}

#[test]
fn test_analysis_is_deterministic() {
    let html = std::fs::read_to_string("tests/fixtures/high_eeat.html").unwrap();
    let first = generate_report(&analyze(&html, "page"), OutputFormat::Json, false);
    let second = generate_report(&analyze(&html, "page"), OutputFormat::Json, false);
    assert_eq!(first, second);
}

#[test]
fn test_json_round_trip() {
    let result = analyze_fixture("high_eeat.html");
    let json = generate_report(&result, OutputFormat::Json, false);
    let parsed: AnalysisResult = serde_json::from_str(&json).expect("valid result JSON");
    assert_eq!(parsed, result);
}

#[test]
fn test_analyses_on_separate_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let html = format!("<p>I tried {} things</p>", i);
                analyze(&html, &format!("page-{}", i))
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("analysis thread panicked");
        assert_eq!(result.eat_score.experience(), 25);
    }
}
