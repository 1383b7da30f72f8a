use serde::{Deserialize, Serialize};
use crate::models::domain::{Matching, Student};

/// A full matching found by the cutoff search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullMatch {
    pub cutoff: u32,
    pub matching: Matching,
}

/// Outcome of the cutoff search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullMatchSearch {
    /// Participants that must be covered: N, or N - 1 when N is odd
    pub target: usize,
    /// True when N is odd and one participant is expected to stay unmatched
    pub odd_count: bool,
    /// First cutoff tried (min over participants of their best score)
    pub upper_bound: u32,
    /// Cutoffs evaluated before stopping
    pub attempts: u32,
    pub found: Option<FullMatch>,
}

impl FullMatchSearch {
    pub fn is_possible(&self) -> bool {
        self.found.is_some()
    }
}

/// Mode a report was produced in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchMode {
    Search(FullMatchSearch),
    Explicit { cutoff: u32 },
}

/// Result of a complete run, consumed by the console report and export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub mode: MatchMode,
    /// Cutoff that produced `matching`, if any
    pub cutoff: Option<u32>,
    pub matching: Option<Matching>,
}

impl MatchReport {
    pub fn explicit(cutoff: u32, matching: Matching) -> Self {
        Self {
            mode: MatchMode::Explicit { cutoff },
            cutoff: Some(cutoff),
            matching: Some(matching),
        }
    }

    pub fn search(search: FullMatchSearch) -> Self {
        let (cutoff, matching) = match &search.found {
            Some(found) => (Some(found.cutoff), Some(found.matching.clone())),
            None => (None, None),
        };
        Self {
            mode: MatchMode::Search(search),
            cutoff,
            matching,
        }
    }
}

/// One exported row: a participant followed by their partner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerRow {
    pub email: String,
    pub name: String,
    pub partner_email: String,
    pub partner_name: String,
    pub partner_contact: String,
}

impl PartnerRow {
    pub fn new(student: &Student, partner: &Student) -> Self {
        Self {
            email: student.email.clone(),
            name: student.name.clone(),
            partner_email: partner.email.clone(),
            partner_name: partner.name.clone(),
            partner_contact: partner.contact.clone(),
        }
    }
}
