// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Report generation for analysis results.
//!
//! Supports two output formats:
//! - Text: human-readable scorecard, issues and recommendations
//! - JSON: the full `AnalysisResult` for programmatic consumption
//!
//! Every helper here is a pure function of its inputs. Colour is decided by
//! the caller and passed in; no global terminal state is touched.

use crate::analyzers::{AnalysisResult, Severity};
use colored::{ColoredString, Colorize};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Qualitative band of a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreStatus {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreStatus::Excellent => "✓ Excellent",
            ScoreStatus::Good => "⚠ Good",
            ScoreStatus::NeedsWork => "✗ Needs Work",
        }
    }
}

/// Band a score: 80+ excellent, 60+ good, otherwise needs work
pub fn score_status(score: u32) -> ScoreStatus {
    if score >= 80 {
        ScoreStatus::Excellent
    } else if score >= 60 {
        ScoreStatus::Good
    } else {
        ScoreStatus::NeedsWork
    }
}

const RULE: &str = "══════════════════════════════════════════════════════════════════";

const BANNER: &str = r"
╔════════════════════════════════════════════════════════════════╗
║                                                                ║
║   ███████╗███████╗ █████╗ ████████╗                            ║
║   ██╔════╝██╔════╝██╔══██╗╚══██╔══╝                            ║
║   █████╗  █████╗  ███████║   ██║                               ║
║   ██╔══╝  ██╔══╝  ██╔══██║   ██║                               ║
║   ███████╗███████╗██║  ██║   ██║     eeatbot                   ║
║   ╚══════╝╚══════╝╚═╝  ╚═╝   ╚═╝                               ║
║                                                                ║
║   E-E-A-T & Answer Engine Optimization                         ║
║   Experience · Expertise · Authoritativeness · Trust           ║
║                                                                ║
╚════════════════════════════════════════════════════════════════╝
";

/// Applies colour only when enabled
#[derive(Debug, Clone, Copy)]
struct Painter {
    color: bool,
}

impl Painter {
    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        self.paint(text, |s| s.cyan())
    }

    fn status(&self, text: &str, status: ScoreStatus) -> String {
        match status {
            ScoreStatus::Excellent => self.paint(text, |s| s.green()),
            ScoreStatus::Good => self.paint(text, |s| s.yellow()),
            ScoreStatus::NeedsWork => self.paint(text, |s| s.red()),
        }
    }

    fn severity(&self, severity: Severity) -> String {
        let tag = format!("[{}]", severity.to_string().to_uppercase());
        match severity {
            Severity::Critical => self.paint(&tag, |s| s.red().bold()),
            Severity::High => self.paint(&tag, |s| s.magenta().bold()),
            Severity::Medium => self.paint(&tag, |s| s.yellow().bold()),
            Severity::Low => self.paint(&tag, |s| s.blue().bold()),
        }
    }

    fn good(&self, text: &str) -> String {
        self.paint(text, |s| s.green())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |s| s.bright_black())
    }
}

/// The banner shown before text reports
pub fn banner(color: bool) -> String {
    Painter { color }.heading(BANNER)
}

/// Generate a report in the requested format
pub fn generate_report(result: &AnalysisResult, format: OutputFormat, color: bool) -> String {
    match format {
        OutputFormat::Text => generate_text_report(result, color),
        OutputFormat::Json => generate_json_report(result),
    }
}

/// Serialize the full result as pretty JSON
pub fn generate_json_report(result: &AnalysisResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize analysis result: {}\"}}", e)
    })
}

/// Three-line overview: overall score, issue and recommendation counts
pub fn generate_summary(result: &AnalysisResult, color: bool) -> String {
    let p = Painter { color };
    format!(
        "{}{}\n{}{}\n{}{}\n",
        p.heading("📊 E-E-A-T Score: "),
        result.eat_score.overall(),
        p.heading("Issues Found: "),
        result.issues.len(),
        p.heading("Recommendations: "),
        result.recommendations.len()
    )
}

fn score_row(p: &Painter, label: &str, score: u32, width: usize) -> String {
    let status = score_status(score);
    format!(
        "  {:<width$} {} {}\n",
        label,
        p.status(&format!("{:>5}", score), status),
        p.status(status.label(), status),
        width = width
    )
}

/// Full human-readable report
pub fn generate_text_report(result: &AnalysisResult, color: bool) -> String {
    let p = Painter { color };
    let score = &result.eat_score;
    let mut output = String::new();

    output.push_str(&format!("Analysis of {}\n\n", result.url));

    output.push_str(&p.heading("📊 E-E-A-T Score Analysis"));
    output.push_str("\n\n");
    output.push_str(&format!("  {:<24} {:>5} {}\n", "Metric", "Score", "Status"));
    output.push_str(&score_row(&p, "Experience", score.experience(), 24));
    output.push_str(&score_row(&p, "Expertise", score.expertise(), 24));
    output.push_str(&score_row(&p, "Authoritativeness", score.authoritativeness(), 24));
    output.push_str(&score_row(&p, "Trustworthiness", score.trustworthiness(), 24));
    output.push_str(&score_row(&p, "Overall E-E-A-T", score.overall(), 24));

    let aeo = &result.aeo_readiness;
    output.push('\n');
    output.push_str(&p.heading("🤖 Answer Engine Optimization (AEO) Readiness"));
    output.push_str("\n\n");
    output.push_str(&format!("  {:<24} {:>5} {}\n", "Platform", "Score", "Readiness"));
    output.push_str(&score_row(&p, "ChatGPT", aeo.chatgpt, 24));
    output.push_str(&score_row(&p, "Perplexity", aeo.perplexity, 24));
    output.push_str(&score_row(&p, "Google AI Overviews", aeo.google_ai, 24));

    if !result.issues.is_empty() {
        output.push('\n');
        output.push_str(&p.heading("⚠️  Issues Found"));
        output.push_str("\n\n");

        for (idx, issue) in result.issues.iter().enumerate() {
            output.push_str(&format!(
                "{}. {} {}\n",
                idx + 1,
                p.severity(issue.severity),
                issue.message
            ));
            if let Some(ref element) = issue.element {
                output.push_str(&format!("   {} {}\n", p.dim("Element:"), element));
            }
            output.push_str(&format!("   {} {}\n\n", p.good("Fix:"), issue.fix));
        }
    }

    let sd = &result.structured_data;
    if !sd.found.is_empty() || !sd.missing.is_empty() {
        output.push('\n');
        output.push_str(&p.heading("📐 Structured Data Analysis"));
        output.push_str("\n\n");

        if !sd.found.is_empty() {
            output.push_str(&format!("{}{}\n", p.good("✓ Found: "), sd.found.join(", ")));
        }
        if !sd.missing.is_empty() {
            output.push_str(&format!(
                "{}{}\n",
                p.status("⚠ Missing: ", ScoreStatus::Good),
                sd.missing.join(", ")
            ));
        }
        if !sd.issues.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                p.status("Structured Data Issues:", ScoreStatus::NeedsWork)
            ));
            for (idx, issue) in sd.issues.iter().enumerate() {
                output.push_str(&format!(
                    "  {}. [{}] {}\n",
                    idx + 1,
                    issue.schema_type,
                    issue.message
                ));
                output.push_str(&format!("     {} {}\n", p.good("Fix:"), issue.fix));
            }
        }
    }

    if !result.recommendations.is_empty() {
        output.push('\n');
        output.push_str(&p.heading("💡 Recommendations"));
        output.push_str("\n\n");
        for (idx, rec) in result.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", idx + 1, rec));
        }
    }

    output.push_str(&format!("\n{}\n\n", RULE));
    let verdict = match score_status(score.overall()) {
        ScoreStatus::Excellent => format!(
            "{}{}",
            p.status("✓ EXCELLENT", ScoreStatus::Excellent),
            p.dim(" - Strong E-E-A-T signals detected")
        ),
        ScoreStatus::Good => format!(
            "{}{}",
            p.status("⚠ GOOD", ScoreStatus::Good),
            p.dim(" - Solid foundation, room for improvement")
        ),
        ScoreStatus::NeedsWork => format!(
            "{}{}",
            p.status("✗ NEEDS WORK", ScoreStatus::NeedsWork),
            p.dim(" - Significant E-E-A-T improvements needed")
        ),
    };
    output.push_str(&verdict);
    output.push('\n');

    output
}
