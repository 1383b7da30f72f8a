// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Availability, Student, EligibilityRules, RosterLayout, ScoreMatrix, Matching, DEFAULT_TIME_SLOTS};
pub use requests::{CutoffChoice, ExportChoice, ExportRequest};
pub use responses::{FullMatch, FullMatchSearch, MatchMode, MatchReport, PartnerRow};
