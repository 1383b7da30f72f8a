use crate::models::{Student, EligibilityRules, ScoreMatrix, Matching, CutoffChoice, MatchReport, FullMatchSearch};
use crate::core::{
    scoring::build_score_matrix,
    search::{match_at_cutoff, search_full_matching},
};

/// Main pairing orchestrator
///
/// # Pipeline Stages
/// 1. Suitability scoring under the hard eligibility rules
/// 2. Eligibility graph at a cutoff
/// 3. Maximum-cardinality matching
/// 4. Optional cutoff search wrapping stages 2 and 3
#[derive(Debug, Clone)]
pub struct Matcher {
    rules: EligibilityRules,
}

impl Matcher {
    pub fn new(rules: EligibilityRules) -> Self {
        Self { rules }
    }

    pub fn with_default_rules() -> Self {
        Self {
            rules: EligibilityRules::default(),
        }
    }

    pub fn rules(&self) -> &EligibilityRules {
        &self.rules
    }

    /// Score every pair of participants
    pub fn score(&self, students: &[Student]) -> ScoreMatrix {
        build_score_matrix(students, &self.rules)
    }

    /// Maximum matching at a caller-chosen cutoff; partial results are fine
    pub fn match_at_cutoff(&self, matrix: &ScoreMatrix, cutoff: u32) -> Matching {
        match_at_cutoff(matrix, cutoff)
    }

    /// Strictest cutoff admitting a full matching
    pub fn search_full_matching(&self, matrix: &ScoreMatrix) -> FullMatchSearch {
        search_full_matching(matrix)
    }

    /// Pair a roster end to end
    ///
    /// # Arguments
    /// * `students` - The loaded roster
    /// * `choice` - Search for the best cutoff, or use an explicit one
    ///
    /// # Returns
    /// MatchReport describing the mode, cutoff and matching (if any)
    pub fn run(&self, students: &[Student], choice: CutoffChoice) -> MatchReport {
        let matrix = self.score(students);
        self.run_with_matrix(&matrix, choice)
    }

    /// Same as `run`, reusing an already computed score matrix
    pub fn run_with_matrix(&self, matrix: &ScoreMatrix, choice: CutoffChoice) -> MatchReport {
        match choice {
            CutoffChoice::Search => MatchReport::search(self.search_full_matching(matrix)),
            CutoffChoice::Explicit(cutoff) => {
                let matching = self.match_at_cutoff(matrix, cutoff);
                tracing::info!(
                    "Matched {} of {} participants using cutoff {}",
                    matching.matched_count(),
                    matrix.len(),
                    cutoff
                );
                MatchReport::explicit(cutoff, matching)
            }
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
