//! Progression policy configuration with documented constants
//!
//! All policy numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use crate::core::error::{KeikoError, Result};
use crate::core::types::MasteryLevel;
use std::path::Path;

/// Policy constants for grade gating and completion weighting
///
/// These values mirror the dojo's published grading policy. Changing them
/// changes what learners see as reachable, so hosts should override them
/// only deliberately (e.g. a summer-camp syllabus with a lower bar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressionConfig {
    /// Completion percentage of the previous grade required to unlock a grade
    ///
    /// At 80, a learner with five techniques can leave one untouched and
    /// still move on once the other four are mastered. Only the immediately
    /// preceding grade is ever consulted.
    pub grade_unlock_threshold: u8,

    /// Weight of a mastered technique in the completion average
    ///
    /// Pinned to 100 so a fully mastered grade reads exactly 100%.
    pub weight_mastered: u32,

    /// Weight of a practiced technique
    ///
    /// At 75, practiced work counts for three quarters of mastery: a grade
    /// of all-practiced techniques sits just below the unlock threshold.
    pub weight_practiced: u32,

    /// Weight of a technique still being learned
    ///
    /// At 25, picking up a technique moves the bar visibly without
    /// suggesting real progress toward the next grade.
    pub weight_learning: u32,

    /// Weight of an untouched technique
    ///
    /// Pinned to 0 so absent ledger keys and explicit not_started agree.
    pub weight_not_started: u32,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            grade_unlock_threshold: 80,
            weight_mastered: 100,
            weight_practiced: 75,
            weight_learning: 25,
            weight_not_started: 0,
        }
    }
}

impl ProgressionConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight contributed by one technique at the given level
    pub fn weight(&self, level: MasteryLevel) -> u32 {
        match level {
            MasteryLevel::NotStarted => self.weight_not_started,
            MasteryLevel::Learning => self.weight_learning,
            MasteryLevel::Practiced => self.weight_practiced,
            MasteryLevel::Mastered => self.weight_mastered,
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.grade_unlock_threshold > 100 {
            return Err(format!(
                "grade_unlock_threshold ({}) must be <= 100",
                self.grade_unlock_threshold
            ));
        }

        // Weights must ascend strictly or the levels stop being ordered
        if !(self.weight_not_started < self.weight_learning
            && self.weight_learning < self.weight_practiced
            && self.weight_practiced < self.weight_mastered)
        {
            return Err(format!(
                "level weights must ascend strictly: {} < {} < {} < {}",
                self.weight_not_started,
                self.weight_learning,
                self.weight_practiced,
                self.weight_mastered
            ));
        }

        // The endpoints anchor the 0-100 completion scale
        if self.weight_not_started != 0 {
            return Err(format!(
                "weight_not_started ({}) must be 0",
                self.weight_not_started
            ));
        }
        if self.weight_mastered != 100 {
            return Err(format!(
                "weight_mastered ({}) must be 100",
                self.weight_mastered
            ));
        }

        Ok(())
    }

    /// Load a policy override from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse_toml(&content)?;
        tracing::debug!("progression config loaded from {}", path.display());
        Ok(config)
    }

    /// Parse a policy override from TOML content
    ///
    /// Keys live under a `[progression]` table; missing keys keep their
    /// defaults. The parsed config is validated before being returned.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let toml: toml::Value = content
            .parse()
            .map_err(|e| KeikoError::InvalidConfig(format!("invalid TOML: {}", e)))?;

        let mut config = Self::default();

        if let Some(table) = toml.get("progression").and_then(|v| v.as_table()) {
            if let Some(value) = table
                .get("grade_unlock_threshold")
                .and_then(|v| v.as_integer())
            {
                config.grade_unlock_threshold = value as u8;
            }
            if let Some(value) = table.get("weight_mastered").and_then(|v| v.as_integer()) {
                config.weight_mastered = value as u32;
            }
            if let Some(value) = table.get("weight_practiced").and_then(|v| v.as_integer()) {
                config.weight_practiced = value as u32;
            }
            if let Some(value) = table.get("weight_learning").and_then(|v| v.as_integer()) {
                config.weight_learning = value as u32;
            }
            if let Some(value) = table.get("weight_not_started").and_then(|v| v.as_integer()) {
                config.weight_not_started = value as u32;
            }
        }

        config.validate().map_err(KeikoError::InvalidConfig)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ProgressionConfig::default().validate().is_ok());
    }

    #[test]
    fn default_weights() {
        let config = ProgressionConfig::default();
        assert_eq!(config.weight(MasteryLevel::Mastered), 100);
        assert_eq!(config.weight(MasteryLevel::Practiced), 75);
        assert_eq!(config.weight(MasteryLevel::Learning), 25);
        assert_eq!(config.weight(MasteryLevel::NotStarted), 0);
    }

    #[test]
    fn threshold_above_100_rejected() {
        let config = ProgressionConfig {
            grade_unlock_threshold: 101,
            ..ProgressionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unordered_weights_rejected() {
        let config = ProgressionConfig {
            weight_learning: 80,
            ..ProgressionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unanchored_endpoints_rejected() {
        let config = ProgressionConfig {
            weight_mastered: 90,
            weight_practiced: 75,
            ..ProgressionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn parse_toml_overrides_threshold() {
        let config = ProgressionConfig::parse_toml(
            "[progression]\ngrade_unlock_threshold = 70\nweight_learning = 30\n",
        )
        .unwrap();
        assert_eq!(config.grade_unlock_threshold, 70);
        assert_eq!(config.weight_learning, 30);
        assert_eq!(config.weight_practiced, 75);
    }

    #[test]
    fn parse_toml_empty_content_keeps_defaults() {
        let config = ProgressionConfig::parse_toml("").unwrap();
        assert_eq!(config, ProgressionConfig::default());
    }

    #[test]
    fn parse_toml_invalid_override_rejected() {
        let result = ProgressionConfig::parse_toml("[progression]\nweight_mastered = 50\n");
        assert!(matches!(result, Err(KeikoError::InvalidConfig(_))));
    }

    #[test]
    fn parse_toml_garbage_rejected() {
        assert!(matches!(
            ProgressionConfig::parse_toml("not toml at ==="),
            Err(KeikoError::InvalidConfig(_))
        ));
    }
}
