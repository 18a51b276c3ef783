//! Calculator configuration

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use scout_protocol::StatLine;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Tunable constants shared by the calculators and report builders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalcConfig {
    /// Level used for every combatant (doubles formats run at 50)
    pub level: u8,

    /// Max HP assumed for a defender whose real max HP is unknown
    pub reference_max_hp: u32,

    /// EV spread assumed for creatures whose spread is unknown
    pub estimate_evs: StatLine,

    /// IV assumed for every stat of an unknown spread
    pub estimate_ivs: u16,

    /// Minimum damage (% of our max HP) for an opposing move to count as a threat
    pub threat_threshold: f32,

    /// Maximum number of opposing moves considered in a turn report
    pub max_opponent_moves: usize,

    /// Number of opposing leads considered in lead matchups
    pub lead_candidates: usize,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            level: 50,
            reference_max_hp: 175,
            estimate_evs: StatLine::uniform(84),
            estimate_ivs: 31,
            threat_threshold: 30.0,
            max_opponent_moves: 5,
            lead_candidates: 3,
        }
    }
}

impl CalcConfig {
    /// Parse a config from JSON, filling absent keys with defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CalcConfig = serde_json::from_str(json).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.level) {
            return Err(ConfigError::Invalid(format!("level must be 1-100, got {}", self.level)));
        }
        if self.reference_max_hp == 0 {
            return Err(ConfigError::Invalid("reference_max_hp must be positive".to_string()));
        }
        if self.estimate_ivs > 31 {
            return Err(ConfigError::Invalid(format!(
                "estimate_ivs must be 0-31, got {}",
                self.estimate_ivs
            )));
        }
        if !(0.0..=100.0).contains(&self.threat_threshold) {
            return Err(ConfigError::Invalid(format!(
                "threat_threshold must be 0-100, got {}",
                self.threat_threshold
            )));
        }
        Ok(())
    }
}
