// Core algorithm exports
pub mod blossom;
pub mod filters;
pub mod graph;
pub mod matcher;
pub mod scoring;
pub mod search;

pub use blossom::maximum_matching;
pub use filters::is_eligible_pair;
pub use graph::EligibilityGraph;
pub use matcher::Matcher;
pub use scoring::{build_score_matrix, pair_score};
pub use search::{match_at_cutoff, search_full_matching, full_matching_target};
