//! Analysis configuration.
//!
//! Loads stat definitions, physics column patterns and the frame cap from
//! TOML. Every field is optional; anything omitted falls back to the
//! built-in defaults.
//!
//! ```toml
//! max_frames = 5000
//!
//! [physics]
//! worker_pattern = "Chaos.*Worker.*"
//!
//! [[stats]]
//! name = "Frame Time"
//! add = ["GameThread/FEngineLoopTick"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::definitions::{default_stat_definitions, AggregateStatDefinition};
use super::physics::PhysicsMatcher;
use crate::utils::config::{
    DEFAULT_EXCLUSIVE_PHYSICS_PATTERN, DEFAULT_WORKER_PATTERN, MAX_FRAMES_TO_PROCESS,
};
use crate::utils::error::ConfigError;

/// Complete analysis configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Maximum number of frames processed per run
    #[serde(default = "default_max_frames")]
    pub max_frames: usize,

    /// Column patterns summed into the composite physics series
    #[serde(default)]
    pub physics: PhysicsPatterns,

    /// Aggregate stats, in display order
    #[serde(default = "default_stat_definitions")]
    pub stats: Vec<AggregateStatDefinition>,
}

/// Two independent column-name predicates, unioned
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhysicsPatterns {
    #[serde(default = "default_worker_pattern")]
    pub worker_pattern: String,

    #[serde(default = "default_exclusive_pattern")]
    pub exclusive_pattern: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_frames: MAX_FRAMES_TO_PROCESS,
            physics: PhysicsPatterns::default(),
            stats: default_stat_definitions(),
        }
    }
}

impl Default for PhysicsPatterns {
    fn default() -> Self {
        Self {
            worker_pattern: default_worker_pattern(),
            exclusive_pattern: default_exclusive_pattern(),
        }
    }
}

fn default_max_frames() -> usize {
    MAX_FRAMES_TO_PROCESS
}

fn default_worker_pattern() -> String {
    DEFAULT_WORKER_PATTERN.to_string()
}

fn default_exclusive_pattern() -> String {
    DEFAULT_EXCLUSIVE_PHYSICS_PATTERN.to_string()
}

impl AnalysisConfig {
    /// Check the configuration for problems the engine cannot tolerate
    ///
    /// # Errors
    /// * `ConfigError::ZeroFrameLimit` - `max_frames` is 0
    /// * `ConfigError::DuplicateStat` - two stats share a name
    /// * `ConfigError::InvalidStat` - empty name or no add columns
    /// * `ConfigError::InvalidPattern` - a physics pattern is not a valid regex
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_frames == 0 {
            return Err(ConfigError::ZeroFrameLimit);
        }

        let mut seen = HashSet::new();
        for stat in &self.stats {
            if stat.name.trim().is_empty() {
                return Err(ConfigError::InvalidStat {
                    name: stat.name.clone(),
                    reason: "name is empty".to_string(),
                });
            }
            if stat.add.is_empty() {
                return Err(ConfigError::InvalidStat {
                    name: stat.name.clone(),
                    reason: "no columns to add".to_string(),
                });
            }
            if !seen.insert(stat.name.as_str()) {
                return Err(ConfigError::DuplicateStat(stat.name.clone()));
            }
        }

        PhysicsMatcher::new(&self.physics)?;

        Ok(())
    }
}

/// Load and validate a configuration from a TOML file
///
/// # Errors
/// * `ConfigError::ReadFailed` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
/// * Any error from [`AnalysisConfig::validate`]
pub fn load_config(path: impl AsRef<Path>) -> Result<AnalysisConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse and validate a configuration from TOML text
pub fn parse_config(contents: &str) -> Result<AnalysisConfig, ConfigError> {
    let config: AnalysisConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}
