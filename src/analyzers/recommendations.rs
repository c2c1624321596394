// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Recommendation generator

use super::{Dimension, EeatScore, Issue};

/// Dimensions scoring below this get recommendations
pub const RECOMMENDATION_THRESHOLD: u32 = 60;

fn advice(dimension: Dimension) -> &'static [&'static str] {
    match dimension {
        Dimension::Experience => &[
            "Add first-person experiences, case studies, and specific examples",
            "Include images, screenshots, or videos showing real results",
        ],
        Dimension::Expertise => &[
            "Add author bio with credentials and expertise",
            "Include citations to authoritative sources",
            "Add technical depth and detailed explanations",
        ],
        Dimension::Authoritativeness => &[
            "Add Organization or Person schema markup",
            "Create detailed About and Contact pages",
            "Link to authoritative external sources",
        ],
        Dimension::Trustworthiness => &[
            "Add publication/update dates to all content",
            "Include privacy policy and terms of service",
            "Add clear contact information",
        ],
    }
}

/// Advice for every dimension below the threshold, in dimension order.
///
/// Issues are accepted for future issue-driven advice but do not currently
/// change the output.
pub fn generate_recommendations(score: &EeatScore, _issues: &[Issue]) -> Vec<String> {
    Dimension::ALL
        .iter()
        .filter(|d| score.get(**d) < RECOMMENDATION_THRESHOLD)
        .flat_map(|d| advice(*d).iter().map(|s| s.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_low_scores() {
        let recs = generate_recommendations(&EeatScore::new(0, 0, 0, 0), &[]);
        assert_eq!(recs.len(), 11);
        assert_eq!(recs[0], "Add first-person experiences, case studies, and specific examples");
        assert_eq!(recs[10], "Add clear contact information");
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let recs = generate_recommendations(&EeatScore::new(60, 60, 60, 60), &[]);
        assert!(recs.is_empty());

        let recs = generate_recommendations(&EeatScore::new(60, 59, 100, 100), &[]);
        assert_eq!(
            recs,
            vec![
                "Add author bio with credentials and expertise",
                "Include citations to authoritative sources",
                "Add technical depth and detailed explanations",
            ]
        );
    }

    #[test]
    fn test_dimension_order_is_kept() {
        let recs = generate_recommendations(&EeatScore::new(10, 100, 100, 10), &[]);
        assert_eq!(recs.len(), 5);
        assert!(recs[0].starts_with("Add first-person"));
        assert!(recs[2].starts_with("Add publication/update dates"));
    }
}
