//! Partner Match - pairs students by schedule overlap and preference compatibility
//!
//! This library scores every candidate pair under hard eligibility rules,
//! builds an eligibility graph at a cutoff, and computes a maximum-cardinality
//! matching on it (Edmonds' blossom algorithm). A cutoff search finds the
//! strictest threshold that still pairs everyone.

pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, EligibilityGraph, maximum_matching, search_full_matching};
pub use models::{Student, Availability, EligibilityRules, RosterLayout, ScoreMatrix, Matching, CutoffChoice, MatchReport, FullMatchSearch};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let graph = EligibilityGraph::from_edges(2, &[(0, 1)]);
        assert_eq!(maximum_matching(&graph).pair_count(), 1);
    }
}
