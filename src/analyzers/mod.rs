// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Analyzers for E-E-A-T and answer engine readiness
//!
//! Each signal scorer is a fixed table of weighted [`Rule`]s. Rules are
//! evaluated independently against the same [`PageDocument`] and the weights
//! of the rules that fire are summed and capped at 100. No rule subtracts.

pub mod aeo;
pub mod authoritativeness;
pub mod experience;
pub mod expertise;
pub mod issues;
pub mod recommendations;
pub mod structured_data;
pub mod trustworthiness;

use crate::document::PageDocument;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use aeo::AeoReadiness;
use structured_data::StructuredDataReport;

/// Upper bound of every score
pub const MAX_SCORE: u32 = 100;

/// The four E-E-A-T dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Experience,
    Expertise,
    Authoritativeness,
    Trustworthiness,
}

impl Dimension {
    /// All dimensions in report order
    pub const ALL: [Dimension; 4] = [
        Dimension::Experience,
        Dimension::Expertise,
        Dimension::Authoritativeness,
        Dimension::Trustworthiness,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Experience => "Experience",
            Dimension::Expertise => "Expertise",
            Dimension::Authoritativeness => "Authoritativeness",
            Dimension::Trustworthiness => "Trustworthiness",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

/// Severity levels for E-E-A-T issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        };
        f.write_str(s)
    }
}

/// A single rule-based issue found on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Dimension the issue weakens
    pub category: Dimension,
    pub severity: Severity,
    pub message: String,
    /// Where on the page the fix belongs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    /// Suggested fix
    pub fix: String,
}

impl Issue {
    /// Create a new issue
    pub fn new(category: Dimension, severity: Severity, message: &str, fix: &str) -> Self {
        Self {
            category,
            severity,
            message: message.to_string(),
            element: None,
            fix: fix.to_string(),
        }
    }

    /// Add the element label
    pub fn with_element(mut self, element: &str) -> Self {
        self.element = Some(element.to_string());
        self
    }
}

/// Round half-up and clamp into `[0, MAX_SCORE]`.
///
/// `f64::round` rounds half away from zero, which is half-up for the
/// non-negative values scores are built from.
pub fn clamp_score(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, MAX_SCORE as f64) as u32
}

/// E-E-A-T scorecard
///
/// `overall` is derived in [`EeatScore::new`] and on deserialization, so it
/// always equals the rounded mean of the four dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DimensionScores")]
pub struct EeatScore {
    experience: u32,
    expertise: u32,
    authoritativeness: u32,
    trustworthiness: u32,
    overall: u32,
}

#[derive(Deserialize)]
struct DimensionScores {
    experience: u32,
    expertise: u32,
    authoritativeness: u32,
    trustworthiness: u32,
}

impl From<DimensionScores> for EeatScore {
    fn from(s: DimensionScores) -> Self {
        EeatScore::new(s.experience, s.expertise, s.authoritativeness, s.trustworthiness)
    }
}

impl EeatScore {
    /// Build a scorecard, clamping each dimension to 100
    pub fn new(experience: u32, expertise: u32, authoritativeness: u32, trustworthiness: u32) -> Self {
        let experience = experience.min(MAX_SCORE);
        let expertise = expertise.min(MAX_SCORE);
        let authoritativeness = authoritativeness.min(MAX_SCORE);
        let trustworthiness = trustworthiness.min(MAX_SCORE);
        let sum = experience + expertise + authoritativeness + trustworthiness;

        Self {
            experience,
            expertise,
            authoritativeness,
            trustworthiness,
            overall: clamp_score(sum as f64 / 4.0),
        }
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn expertise(&self) -> u32 {
        self.expertise
    }

    pub fn authoritativeness(&self) -> u32 {
        self.authoritativeness
    }

    pub fn trustworthiness(&self) -> u32 {
        self.trustworthiness
    }

    pub fn overall(&self) -> u32 {
        self.overall
    }

    /// Score for one dimension
    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Experience => self.experience,
            Dimension::Expertise => self.expertise,
            Dimension::Authoritativeness => self.authoritativeness,
            Dimension::Trustworthiness => self.trustworthiness,
        }
    }
}

/// One weighted scoring heuristic
pub struct Rule {
    /// Stable identifier, used in logs
    pub id: &'static str,
    /// Points added when the rule fires
    pub weight: u32,
    pub check: fn(&PageDocument) -> bool,
}

/// Trait for the four signal scorers
pub trait SignalScorer {
    /// Dimension this scorer produces
    fn dimension(&self) -> Dimension;

    /// The scorer's rule table
    fn rules(&self) -> &'static [Rule];

    /// Ids of the rules that fire for this page
    fn fired(&self, doc: &PageDocument) -> Vec<&'static str> {
        self.rules()
            .iter()
            .filter(|rule| (rule.check)(doc))
            .map(|rule| rule.id)
            .collect()
    }

    /// Sum of fired rule weights, capped at 100
    fn score(&self, doc: &PageDocument) -> u32 {
        let mut total: u32 = 0;
        let mut fired = Vec::new();
        for rule in self.rules() {
            if (rule.check)(doc) {
                total += rule.weight;
                fired.push(rule.id);
            }
        }
        let score = total.min(MAX_SCORE);
        debug!(dimension = %self.dimension(), score, ?fired, "scored signal");
        score
    }
}

/// Run all four signal scorers
pub fn score_page(doc: &PageDocument) -> EeatScore {
    EeatScore::new(
        experience::ExperienceScorer.score(doc),
        expertise::ExpertiseScorer.score(doc),
        authoritativeness::AuthoritativenessScorer.score(doc),
        trustworthiness::TrustworthinessScorer.score(doc),
    )
}

/// Complete analysis of one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// URL or file path the page came from
    pub url: String,
    pub eat_score: EeatScore,
    pub issues: Vec<Issue>,
    pub structured_data: StructuredDataReport,
    pub recommendations: Vec<String>,
    pub aeo_readiness: AeoReadiness,
}

impl AnalysisResult {
    /// Issues of one severity
    pub fn issues_by_severity(&self, severity: Severity) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.severity == severity).collect()
    }

    /// Issues affecting one dimension
    pub fn issues_for(&self, dimension: Dimension) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.category == dimension).collect()
    }
}
