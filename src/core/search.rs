use crate::core::{blossom::maximum_matching, graph::EligibilityGraph};
use crate::models::{FullMatch, FullMatchSearch, Matching, ScoreMatrix};

/// Matching produced at a single cutoff
pub fn match_at_cutoff(matrix: &ScoreMatrix, cutoff: u32) -> Matching {
    let graph = EligibilityGraph::build(matrix, cutoff);
    maximum_matching(&graph)
}

/// Number of participants a full matching must cover
#[inline]
pub fn full_matching_target(participants: usize) -> usize {
    participants / 2 * 2
}

/// Find the strictest cutoff whose eligibility graph still admits a full matching
///
/// Scans from the upper bound (min over participants of their best score)
/// down to 1 and stops at the first cutoff whose maximum matching covers
/// everyone, or everyone but one when the count is odd. Failure is an
/// ordinary outcome, reported through `found == None`.
pub fn search_full_matching(matrix: &ScoreMatrix) -> FullMatchSearch {
    let participants = matrix.len();
    let target = full_matching_target(participants);
    let odd_count = participants % 2 == 1;
    let upper_bound = matrix.full_matching_upper_bound();

    if odd_count {
        tracing::warn!(
            "Odd number of participants ({}), matching everyone except one",
            participants
        );
    }

    let mut attempts = 0;
    let mut found = None;

    for cutoff in (1..=upper_bound).rev() {
        attempts += 1;
        let matching = match_at_cutoff(matrix, cutoff);
        tracing::debug!(
            "Cutoff {}: {} of {} participants matched",
            cutoff,
            matching.matched_count(),
            target
        );

        if matching.matched_count() >= target {
            found = Some(FullMatch { cutoff, matching });
            break;
        }
    }

    match &found {
        Some(full) => tracing::info!(
            "Full matching found at cutoff {} after {} attempts",
            full.cutoff,
            attempts
        ),
        None => tracing::info!(
            "No full matching possible (upper bound {}, {} attempts)",
            upper_bound,
            attempts
        ),
    }

    FullMatchSearch {
        target,
        odd_count,
        upper_bound,
        attempts,
        found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_rounds_down_to_even() {
        assert_eq!(full_matching_target(0), 0);
        assert_eq!(full_matching_target(3), 2);
        assert_eq!(full_matching_target(8), 8);
    }

    #[test]
    fn test_finds_strictest_cutoff() {
        // A-B overlap 3, C-D overlap 2, nothing across
        let matrix = ScoreMatrix::from_rows(vec![
            vec![0, 3, 0, 0],
            vec![3, 0, 0, 0],
            vec![0, 0, 0, 2],
            vec![0, 0, 2, 0],
        ])
        .unwrap();

        let search = search_full_matching(&matrix);

        assert_eq!(search.upper_bound, 2);
        let found = search.found.unwrap();
        assert_eq!(found.cutoff, 2);
        assert_eq!(found.matching.pairs().collect::<Vec<_>>(), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn test_scans_below_upper_bound() {
        // Everyone has a 5 somewhere, but the 5s all involve participant 0
        let matrix = ScoreMatrix::from_rows(vec![
            vec![0, 5, 5, 5],
            vec![5, 0, 1, 1],
            vec![5, 1, 0, 1],
            vec![5, 1, 1, 0],
        ])
        .unwrap();

        let search = search_full_matching(&matrix);

        assert_eq!(search.upper_bound, 5);
        assert_eq!(search.found.as_ref().map(|f| f.cutoff), Some(1));
        assert_eq!(search.attempts, 5);
    }

    #[test]
    fn test_no_edges_reports_impossible() {
        let search = search_full_matching(&ScoreMatrix::zeros(4));

        assert_eq!(search.upper_bound, 0);
        assert_eq!(search.attempts, 0);
        assert!(!search.is_possible());
    }

    #[test]
    fn test_odd_count_targets_all_but_one() {
        let matrix = ScoreMatrix::from_rows(vec![
            vec![0, 3, 1],
            vec![3, 0, 2],
            vec![1, 2, 0],
        ])
        .unwrap();

        let search = search_full_matching(&matrix);

        assert!(search.odd_count);
        assert_eq!(search.target, 2);
        let found = search.found.unwrap();
        assert_eq!(found.cutoff, 2);
        assert_eq!(found.matching.matched_count(), 2);
    }
}
