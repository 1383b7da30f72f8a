use validator::Validate;

/// How the eligibility threshold is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutoffChoice {
    /// Search for the strictest cutoff admitting a full matching
    Search,
    /// Use the given cutoff as-is; partial matchings are acceptable
    Explicit(u32),
}

impl CutoffChoice {
    /// Sentinel typed at the prompt to request the search
    pub const SEARCH_SENTINEL: i64 = -1;

    /// Interpret a raw integer answer; any other value is an explicit cutoff,
    /// negatives behaving like 0
    pub fn from_raw(value: i64) -> Self {
        if value == Self::SEARCH_SENTINEL {
            Self::Search
        } else {
            Self::Explicit(value.clamp(0, i64::from(u32::MAX)) as u32)
        }
    }
}

/// Request to persist the pairing to a delimited file
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ExportRequest {
    #[validate(length(min = 1))]
    pub path: String,
}

/// Whether the run should export its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportChoice {
    Skip,
    Export(ExportRequest),
}

impl ExportChoice {
    pub fn request(&self) -> Option<&ExportRequest> {
        match self {
            ExportChoice::Skip => None,
            ExportChoice::Export(request) => Some(request),
        }
    }
}
