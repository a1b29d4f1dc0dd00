use crate::points::{MAX_DISTRIBUTION_POINTS, MAX_HCP};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Thresholds for the opening decision.
///
/// The defaults are the standard simplified table: open with 14 or more total
/// points, and open 1NT when the hand carries at most one distribution point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpeningRules {
    /// Minimum total points (HCP + distribution) needed to open.
    pub opening_threshold: u32,
    /// Highest distribution count still treated as balanced.
    pub balanced_max_distribution: u32,
}

impl Default for OpeningRules {
    fn default() -> Self {
        Self {
            opening_threshold: 14,
            balanced_max_distribution: 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to parse opening rules: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("opening threshold {0} can never be reached (max total is 52)")]
    UnreachableThreshold(u32),
}

impl OpeningRules {
    /// Loads rules from YAML. Missing keys keep their default values.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RulesError> {
        let rules: OpeningRules = serde_yaml::from_str(yaml)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        let max_total = MAX_HCP + MAX_DISTRIBUTION_POINTS;
        if self.opening_threshold > max_total {
            return Err(RulesError::UnreachableThreshold(self.opening_threshold));
        }
        Ok(())
    }
}
