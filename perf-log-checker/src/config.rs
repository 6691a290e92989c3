//! Checker configuration types
//!
//! This module defines the knobs that change how logs are compared. Every
//! default reproduces the historical report exactly; the other settings are
//! opt-in corrections.

use crate::types::{CheckerError, Result};
use serde::{Deserialize, Serialize};

/// Default multiplicative threshold: a candidate may be up to 20x the baseline
pub const DEFAULT_THRESHOLD: u32 = 20;

/// Configuration for the checker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Candidate passes while `candidate <= baseline * threshold`
    #[serde(default = "default_threshold")]
    pub threshold: u32,

    /// Compare the last baseline entry too (historically it is skipped,
    /// which also skips the empty entry after a trailing newline)
    #[serde(default)]
    pub include_final_entry: bool,

    /// Stop with an error when all three line counts differ, instead of
    /// reporting `Error` and carrying on
    #[serde(default)]
    pub halt_on_count_mismatch: bool,
}

fn default_threshold() -> u32 {
    DEFAULT_THRESHOLD
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            include_final_entry: false,
            halt_on_count_mismatch: false,
        }
    }
}

impl CheckerConfig {
    /// Create a new checker configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the multiplicative threshold
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder method: compare every baseline entry
    pub fn with_final_entry(mut self, enabled: bool) -> Self {
        self.include_final_entry = enabled;
        self
    }

    /// Builder method: make a count mismatch fatal
    pub fn with_halt_on_mismatch(mut self, enabled: bool) -> Self {
        self.halt_on_count_mismatch = enabled;
        self
    }

    /// Reject settings that cannot produce a meaningful report
    pub fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(CheckerError::InvalidConfig(
                "threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of entries the comparison loop visits for a baseline log of
    /// `baseline_len` entries
    pub fn iterations(&self, baseline_len: usize) -> usize {
        if self.include_final_entry {
            baseline_len
        } else {
            baseline_len.saturating_sub(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_config_builder() {
        let config = CheckerConfig::new()
            .with_threshold(5)
            .with_final_entry(true)
            .with_halt_on_mismatch(true);

        assert_eq!(config.threshold, 5);
        assert!(config.include_final_entry);
        assert!(config.halt_on_count_mismatch);
    }

    #[test]
    fn test_defaults_match_serde_defaults() {
        let from_serde: CheckerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(from_serde, CheckerConfig::default());
        assert_eq!(from_serde.threshold, 20);
    }

    #[test]
    fn test_iterations_skip_last_entry_by_default() {
        let config = CheckerConfig::new();
        assert_eq!(config.iterations(3), 2);
        assert_eq!(config.iterations(1), 0);
        assert_eq!(config.iterations(0), 0);

        let config = config.with_final_entry(true);
        assert_eq!(config.iterations(3), 3);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let config = CheckerConfig::new().with_threshold(0);
        assert!(matches!(
            config.validate(),
            Err(CheckerError::InvalidConfig(_))
        ));
        assert!(CheckerConfig::new().validate().is_ok());
    }
}
