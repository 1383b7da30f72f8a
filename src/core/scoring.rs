use crate::models::{Student, EligibilityRules, ScoreMatrix};
use crate::core::filters::is_eligible_pair;

/// Calculate the suitability score of a single pair
///
/// score = number of time slots where both are available,
/// or 0 when the pair fails a hard eligibility rule.
#[inline]
pub fn pair_score(a: &Student, b: &Student, rules: &EligibilityRules) -> u32 {
    if !is_eligible_pair(a, b, rules) {
        return 0;
    }
    a.availability.overlap(&b.availability)
}

/// Build the N x N suitability matrix for a roster
///
/// The diagonal is always 0. Each unordered pair is scored once and
/// mirrored, so the matrix is symmetric by construction.
pub fn build_score_matrix(students: &[Student], rules: &EligibilityRules) -> ScoreMatrix {
    let mut matrix = ScoreMatrix::zeros(students.len());

    for (i, a) in students.iter().enumerate() {
        for (j, b) in students.iter().enumerate().skip(i + 1) {
            let score = pair_score(a, b, rules);
            matrix.set(i, j, score);
            matrix.set(j, i, score);
        }
    }

    tracing::debug!(
        "Built {}x{} suitability matrix (upper bound {})",
        matrix.len(),
        matrix.len(),
        matrix.full_matching_upper_bound()
    );

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;

    fn create_test_student(id: &str, start_preference: u32, priority: u32, bits: &[u8]) -> Student {
        Student::new(
            format!("Student {}", id),
            format!("{}@uni.edu", id),
            "",
            start_preference,
            priority,
            Availability::from_bits(bits),
        )
    }

    #[test]
    fn test_pair_score_counts_overlap() {
        let rules = EligibilityRules::default();
        let a = create_test_student("a", 1, 1, &[1, 1, 1, 0]);
        let b = create_test_student("b", 1, 1, &[0, 1, 1, 1]);

        assert_eq!(pair_score(&a, &b, &rules), 2);
    }

    #[test]
    fn test_ineligible_pair_scores_zero() {
        let rules = EligibilityRules::default();
        let a = create_test_student("a", 0, 1, &[1, 1, 1, 1]);
        let b = create_test_student("b", 2, 1, &[1, 1, 1, 1]);

        assert_eq!(pair_score(&a, &b, &rules), 0);
    }

    #[test]
    fn test_matrix_symmetric_with_zero_diagonal() {
        let rules = EligibilityRules::default();
        let students = vec![
            create_test_student("a", 0, 0, &[1, 0, 1, 1]),
            create_test_student("b", 1, 0, &[1, 1, 1, 0]),
            create_test_student("c", 2, 1, &[0, 1, 1, 1]),
            create_test_student("d", 1, 3, &[1, 1, 1, 1]),
        ];

        let matrix = build_score_matrix(&students, &rules);

        for i in 0..students.len() {
            assert_eq!(matrix.get(i, i), 0);
            for j in 0..students.len() {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
        assert_eq!(matrix.get(0, 1), 2);
        // preference gap of 2
        assert_eq!(matrix.get(0, 2), 0);
        // priority gap of 3
        assert_eq!(matrix.get(1, 3), 0);
    }

    #[test]
    fn test_identical_students_do_not_pair_with_themselves() {
        let rules = EligibilityRules::default();
        let student = create_test_student("a", 1, 1, &[1, 1, 1, 1]);
        let students = vec![student.clone(), student];

        let matrix = build_score_matrix(&students, &rules);

        assert_eq!(matrix.get(0, 0), 0);
        assert_eq!(matrix.get(0, 1), 4);
    }
}
