use crate::models::{Student, EligibilityRules};

#[inline]
fn within(a: u32, b: u32, max_diff: u32) -> bool {
    a.abs_diff(b) <= max_diff
}

/// Check whether two distinct participants may be paired at all
///
/// These are exclusionary filters applied before any overlap is counted;
/// a pair failing them scores 0 regardless of availability.
#[inline]
pub fn is_eligible_pair(
    a: &Student,
    b: &Student,
    rules: &EligibilityRules,
) -> bool {
    // Start preferences too far apart
    if !within(a.start_preference, b.start_preference, rules.pref_max_diff) {
        return false;
    }

    // Priorities too far apart
    if !within(a.priority, b.priority, rules.prio_max_diff) {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;

    fn create_test_student(start_preference: u32, priority: u32) -> Student {
        Student::new(
            "Test Student",
            "test@uni.edu",
            "555-0100",
            start_preference,
            priority,
            Availability::empty(28),
        )
    }

    #[test]
    fn test_eligible_within_thresholds() {
        let rules = EligibilityRules::default();
        let a = create_test_student(2, 3);
        let b = create_test_student(3, 2);

        assert!(is_eligible_pair(&a, &b, &rules));
        assert!(is_eligible_pair(&b, &a, &rules));
    }

    #[test]
    fn test_preference_gap_excludes() {
        let rules = EligibilityRules::default();
        let a = create_test_student(1, 1);
        let b = create_test_student(3, 1);

        assert!(!is_eligible_pair(&a, &b, &rules));
    }

    #[test]
    fn test_priority_gap_excludes() {
        let rules = EligibilityRules::default();
        let a = create_test_student(1, 0);
        let b = create_test_student(1, 2);

        assert!(!is_eligible_pair(&a, &b, &rules));
    }

    #[test]
    fn test_custom_thresholds() {
        let rules = EligibilityRules { pref_max_diff: 0, prio_max_diff: 5 };
        let a = create_test_student(1, 0);

        assert!(is_eligible_pair(&a, &create_test_student(1, 5), &rules));
        assert!(!is_eligible_pair(&a, &create_test_student(2, 0), &rules));
    }
}
