/// Default time-of-day slots, in availability-vector order
pub const DEFAULT_TIME_SLOTS: [&str; 4] = [
    "Morning (7am-noon)",
    "Afternoon (noon-6pm)",
    "Evening (6pm-midnight)",
    "Night (midnight-7am)",
];

/// Weekly availability over a discretized time grid (day-major)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    slots: Vec<bool>,
}

impl Availability {
    /// All slots unavailable
    pub fn empty(len: usize) -> Self {
        Self { slots: vec![false; len] }
    }

    /// Build from a 0/1 vector, any non-zero entry counts as available
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            slots: bits.iter().map(|&b| b != 0).collect(),
        }
    }

    pub fn set(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = true;
        }
    }

    pub fn is_available(&self, index: usize) -> bool {
        self.slots.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots where both are available (dot product of the 0/1 vectors)
    #[inline]
    pub fn overlap(&self, other: &Availability) -> u32 {
        self.slots
            .iter()
            .zip(other.slots.iter())
            .filter(|(a, b)| **a && **b)
            .count() as u32
    }
}

/// One participant, created once at load time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: String,
    pub email: String,
    /// Email local part, unique per participant
    pub netid: String,
    pub contact: String,
    pub start_preference: u32,
    pub priority: u32,
    pub availability: Availability,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        contact: impl Into<String>,
        start_preference: u32,
        priority: u32,
        availability: Availability,
    ) -> Self {
        let email = email.into();
        let netid = netid_from_email(&email);
        Self {
            name: name.into(),
            email,
            netid,
            contact: contact.into(),
            start_preference,
            priority,
            availability,
        }
    }
}

/// Portion of the email address before the first '@'
pub fn netid_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

/// Hard eligibility thresholds applied by the scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityRules {
    /// Maximum allowed difference between start preferences
    pub pref_max_diff: u32,
    /// Maximum allowed difference between priorities
    pub prio_max_diff: u32,
}

impl Default for EligibilityRules {
    fn default() -> Self {
        Self {
            pref_max_diff: 1,
            prio_max_diff: 1,
        }
    }
}

/// Column positions and slot names of the roster table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterLayout {
    pub name: usize,
    pub email: usize,
    pub contact: usize,
    pub start_preference: usize,
    /// One column per day, in day order
    pub availability: Vec<usize>,
    pub priority: usize,
    /// Time-of-day slot names, in slot order
    pub time_slots: Vec<String>,
}

impl RosterLayout {
    /// Length of every availability vector under this layout
    pub fn grid_len(&self) -> usize {
        self.availability.len() * self.time_slots.len()
    }

    /// Highest column index a row must contain
    pub fn max_column(&self) -> usize {
        self.availability
            .iter()
            .copied()
            .chain([
                self.name,
                self.email,
                self.contact,
                self.start_preference,
                self.priority,
            ])
            .max()
            .unwrap_or(0)
    }
}

impl Default for RosterLayout {
    fn default() -> Self {
        Self {
            name: 1,
            email: 2,
            contact: 3,
            start_preference: 4,
            availability: (5..12).collect(),
            priority: 12,
            time_slots: DEFAULT_TIME_SLOTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Square matrix of pairwise suitability scores, 0 meaning ineligible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreMatrix {
    size: usize,
    scores: Vec<u32>,
}

impl ScoreMatrix {
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            scores: vec![0; size * size],
        }
    }

    /// Build from explicit rows; the rows must form a square matrix
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self {
            size,
            scores: rows.into_iter().flatten().collect(),
        })
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, score: u32) {
        self.scores[i * self.size + j] = score;
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.scores[i * self.size + j]
    }

    /// Number of participants
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Best score any participant can offer participant `j`
    pub fn column_max(&self, j: usize) -> u32 {
        (0..self.size).map(|i| self.get(i, j)).max().unwrap_or(0)
    }

    /// Highest cutoff at which every participant still has at least one option
    pub fn full_matching_upper_bound(&self) -> u32 {
        (0..self.size)
            .map(|j| self.column_max(j))
            .min()
            .unwrap_or(0)
    }
}

/// Pairing of participant indices; symmetric, each index matched at most once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matching {
    partners: Vec<Option<usize>>,
}

impl Matching {
    /// Nobody matched
    pub fn empty(size: usize) -> Self {
        Self {
            partners: vec![None; size],
        }
    }

    /// Build from a mate array; the caller guarantees symmetry
    pub(crate) fn from_partners(partners: Vec<Option<usize>>) -> Self {
        Self { partners }
    }

    /// Build from unordered pairs, rejecting out-of-range or reused indices
    pub fn from_pairs(size: usize, pairs: &[(usize, usize)]) -> Option<Self> {
        let mut partners = vec![None; size];
        for &(a, b) in pairs {
            if a == b || a >= size || b >= size {
                return None;
            }
            if partners[a].is_some() || partners[b].is_some() {
                return None;
            }
            partners[a] = Some(b);
            partners[b] = Some(a);
        }
        Some(Self { partners })
    }

    pub fn partner(&self, index: usize) -> Option<usize> {
        self.partners.get(index).copied().flatten()
    }

    /// Number of participants covered (twice the number of pairs)
    pub fn matched_count(&self) -> usize {
        self.partners.iter().filter(|p| p.is_some()).count()
    }

    pub fn pair_count(&self) -> usize {
        self.matched_count() / 2
    }

    /// Each pair once, smaller index first
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.partners
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.filter(|&j| i < j).map(|j| (i, j)))
    }

    /// Participants with no partner, ascending
    pub fn unmatched(&self) -> impl Iterator<Item = usize> + '_ {
        self.partners
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_none())
            .map(|(i, _)| i)
    }

    /// Number of participants the matching was computed over
    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_netid_derivation() {
        assert_eq!(netid_from_email("ab123@school.edu"), "ab123");
        assert_eq!(netid_from_email("no-at-sign"), "no-at-sign");
        let student = Student::new("A", "xy9@uni.edu", "", 0, 0, Availability::empty(28));
        assert_eq!(student.netid, "xy9");
    }

    #[test]
    fn test_overlap_counts_shared_slots() {
        let a = Availability::from_bits(&[1, 1, 0, 1, 0]);
        let b = Availability::from_bits(&[1, 0, 0, 1, 1]);
        assert_eq!(a.overlap(&b), 2);
        assert_eq!(b.overlap(&a), 2);
        assert_eq!(a.overlap(&Availability::empty(5)), 0);
    }

    #[test]
    fn test_upper_bound_is_min_of_column_max() {
        let matrix = ScoreMatrix::from_rows(vec![
            vec![0, 5, 1],
            vec![5, 0, 2],
            vec![1, 2, 0],
        ])
        .unwrap();
        assert_eq!(matrix.column_max(0), 5);
        assert_eq!(matrix.column_max(2), 2);
        assert_eq!(matrix.full_matching_upper_bound(), 2);
        assert_eq!(ScoreMatrix::zeros(0).full_matching_upper_bound(), 0);
    }

    #[test]
    fn test_matching_from_pairs() {
        let matching = Matching::from_pairs(5, &[(3, 1), (0, 4)]).unwrap();
        assert_eq!(matching.partner(1), Some(3));
        assert_eq!(matching.partner(3), Some(1));
        assert_eq!(matching.matched_count(), 4);
        assert_eq!(matching.pairs().collect::<Vec<_>>(), vec![(0, 4), (1, 3)]);
        assert_eq!(matching.unmatched().collect::<Vec<_>>(), vec![2]);

        assert!(Matching::from_pairs(3, &[(0, 1), (1, 2)]).is_none());
        assert!(Matching::from_pairs(3, &[(0, 0)]).is_none());
        assert!(Matching::from_pairs(3, &[(0, 3)]).is_none());
    }

    #[test]
    fn test_default_layout_grid() {
        let layout = RosterLayout::default();
        assert_eq!(layout.grid_len(), 28);
        assert_eq!(layout.max_column(), 12);
    }
}
