use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;

use crate::models::{EligibilityRules, RosterLayout, DEFAULT_TIME_SLOTS};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct Settings {
    #[validate(nested)]
    pub roster: RosterSettings,
    pub matching: MatchingSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct RosterSettings {
    pub path: String,
    #[validate(nested)]
    pub columns: ColumnSettings,
    #[validate(length(min = 1))]
    pub time_slots: Vec<String>,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            path: default_roster_path(),
            columns: ColumnSettings::default(),
            time_slots: DEFAULT_TIME_SLOTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn default_roster_path() -> String { "partner_data.csv".to_string() }

/// Zero-based column positions in the roster table
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct ColumnSettings {
    pub name: usize,
    pub email: usize,
    pub contact: usize,
    pub start_preference: usize,
    #[validate(length(min = 1))]
    pub availability: Vec<usize>,
    pub priority: usize,
}

impl Default for ColumnSettings {
    fn default() -> Self {
        let layout = RosterLayout::default();
        Self {
            name: layout.name,
            email: layout.email,
            contact: layout.contact,
            start_preference: layout.start_preference,
            availability: layout.availability,
            priority: layout.priority,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_pref_max_diff")]
    pub pref_max_diff: u32,
    #[serde(default = "default_prio_max_diff")]
    pub prio_max_diff: u32,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            pref_max_diff: default_pref_max_diff(),
            prio_max_diff: default_prio_max_diff(),
        }
    }
}

fn default_pref_max_diff() -> u32 { 1 }
fn default_prio_max_diff() -> u32 { 1 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PAIRING__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PAIRING__MATCHING__PREF_MAX_DIFF -> matching.pref_max_diff
            .add_source(env_source())
            .build()?;

        Self::finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        Self::finish(settings)
    }

    fn finish(settings: Config) -> Result<Self, ConfigError> {
        let settings: Settings = settings.try_deserialize()?;
        settings
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid settings: {}", e)))?;
        Ok(settings)
    }

    /// Hard eligibility thresholds for the scorer
    pub fn eligibility_rules(&self) -> EligibilityRules {
        EligibilityRules {
            pref_max_diff: self.matching.pref_max_diff,
            prio_max_diff: self.matching.prio_max_diff,
        }
    }

    /// Column layout for the roster loader
    pub fn roster_layout(&self) -> RosterLayout {
        let columns = &self.roster.columns;
        RosterLayout {
            name: columns.name,
            email: columns.email,
            contact: columns.contact,
            start_preference: columns.start_preference,
            availability: columns.availability.clone(),
            priority: columns.priority,
            time_slots: self.roster.time_slots.clone(),
        }
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("PAIRING")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
