//! Configuration system for TeamDraw.
//!
//! Load draw configuration from TOML or YAML files to control the seed, room
//! size and pairing rules without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use teamdraw_config::DrawConfig;
//!
//! let config = DrawConfig::from_toml_str(r#"
//!     random_seed = 42
//!     room_size = 4
//!
//!     [[rules]]
//!     type = "exclude"
//!     names = ["Kim", "Park"]
//!
//!     [[rules]]
//!     type = "include"
//!     names = ["Lee", "Choi"]
//!     seed_divisible_by = 3
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(42));
//! assert_eq!(config.rule_book().len(), 2);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use teamdraw_config::DrawConfig;
//!
//! let config = DrawConfig::load("draw.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! assert_eq!(config.room_size, 4);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use teamdraw_core::{Rule, RuleBook, RuleKind, SeedCondition};
use thiserror::Error;

/// Default preferred room size.
pub const DEFAULT_ROOM_SIZE: usize = 4;

/// Smallest and largest accepted room size.
pub const ROOM_SIZE_RANGE: std::ops::RangeInclusive<usize> = 2..=6;

/// Default cap on "other" rebalancing swaps.
pub const DEFAULT_MAX_REBALANCE_STEPS: usize = 64;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main draw configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DrawConfig {
    /// Random seed for reproducible results. A time-derived seed is used
    /// when absent.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Preferred room size for the room packer.
    #[serde(default = "default_room_size")]
    pub room_size: usize,

    /// Maximum donor/receiver swaps while rebalancing the "other" group.
    #[serde(default = "default_max_rebalance_steps")]
    pub max_rebalance_steps: usize,

    /// Pairing rules, evaluated in order.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

fn default_room_size() -> usize {
    DEFAULT_ROOM_SIZE
}

fn default_max_rebalance_steps() -> usize {
    DEFAULT_MAX_REBALANCE_STEPS
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            room_size: DEFAULT_ROOM_SIZE,
            max_rebalance_steps: DEFAULT_MAX_REBALANCE_STEPS,
            rules: Vec::new(),
        }
    }
}

impl DrawConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// validation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the preferred room size.
    pub fn with_room_size(mut self, size: usize) -> Self {
        self.room_size = size;
        self
    }

    /// Sets the rebalancing swap cap.
    pub fn with_max_rebalance_steps(mut self, steps: usize) -> Self {
        self.max_rebalance_steps = steps;
        self
    }

    /// Adds a pairing rule.
    pub fn with_rule(mut self, rule: RuleConfig) -> Self {
        self.rules.push(rule);
        self
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !ROOM_SIZE_RANGE.contains(&self.room_size) {
            return Err(ConfigError::Invalid(format!(
                "room_size must be between {} and {}, got {}",
                ROOM_SIZE_RANGE.start(),
                ROOM_SIZE_RANGE.end(),
                self.room_size
            )));
        }
        for rule in &self.rules {
            rule.validate()?;
        }
        Ok(())
    }

    /// Builds the rule table evaluated by the repair engine.
    pub fn rule_book(&self) -> RuleBook {
        self.rules.iter().map(RuleConfig::to_rule).collect()
    }
}

/// Rule type as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    /// Keep the pair on different teams.
    Exclude,
    /// Keep the pair on the same team.
    Include,
}

/// One pairing rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RuleConfig {
    /// Whether the pair is separated or co-located.
    #[serde(rename = "type")]
    pub rule_type: RuleType,

    /// The two participant names.
    pub names: [String; 2],

    /// Apply only when the seed is divisible by this value.
    #[serde(default)]
    pub seed_divisible_by: Option<u64>,
}

impl RuleConfig {
    pub fn exclude(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            rule_type: RuleType::Exclude,
            names: [a.into(), b.into()],
            seed_divisible_by: None,
        }
    }

    pub fn include(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            rule_type: RuleType::Include,
            names: [a.into(), b.into()],
            seed_divisible_by: None,
        }
    }

    pub fn when_seed_divisible_by(mut self, n: u64) -> Self {
        self.seed_divisible_by = Some(n);
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let [a, b] = &self.names;
        if a.trim().is_empty() || b.trim().is_empty() {
            return Err(ConfigError::Invalid("rule names must not be empty".into()));
        }
        if a.trim() == b.trim() {
            return Err(ConfigError::Invalid(format!(
                "rule pairs {} with itself",
                a.trim()
            )));
        }
        if self.seed_divisible_by == Some(0) {
            return Err(ConfigError::Invalid(
                "seed_divisible_by must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Converts into the core rule type.
    pub fn to_rule(&self) -> Rule {
        let kind = match self.rule_type {
            RuleType::Exclude => RuleKind::Exclude,
            RuleType::Include => RuleKind::Include,
        };
        let condition = match self.seed_divisible_by {
            Some(n) => SeedCondition::DivisibleBy(n),
            None => SeedCondition::Always,
        };
        Rule::new(kind, self.names[0].trim(), self.names[1].trim()).with_condition(condition)
    }
}

#[cfg(test)]
mod tests;
