// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Answer Engine Optimization readiness
//!
//! Three platform estimates derived from the E-E-A-T scorecard plus a few
//! page checks:
//! - ChatGPT favours conversational Q&A and lists
//! - Perplexity favours cited sources
//! - Google AI Overviews favour strong E-E-A-T and headed sections

use super::{clamp_score, EeatScore};
use crate::document::PageDocument;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AeoReadiness {
    pub chatgpt: u32,
    pub perplexity: u32,
    #[serde(rename = "googleAI")]
    pub google_ai: u32,
}

/// Estimate readiness; each score is rounded half-up and clamped to [0, 100]
pub fn estimate_readiness(doc: &PageDocument, score: &EeatScore) -> AeoReadiness {
    let text = doc.body_text();
    let has_clear_answers = text.contains('?') && text.contains(':');
    let has_lists = doc.exists("ul, ol");
    let has_citations = doc.exists("cite, blockquote");
    let has_sections = doc.count("h2, h3") >= 3;

    let mut chatgpt = score.overall() as f64 * 0.6;
    if has_clear_answers {
        chatgpt += 20.0;
    }
    if has_lists {
        chatgpt += 20.0;
    }

    let mut perplexity = score.expertise() as f64 * 0.7;
    if has_citations {
        perplexity += 30.0;
    }

    let mut google_ai = score.overall() as f64 * 0.8;
    if has_sections {
        google_ai += 20.0;
    }

    AeoReadiness {
        chatgpt: clamp_score(chatgpt),
        perplexity: clamp_score(perplexity),
        google_ai: clamp_score(google_ai),
    }
}
