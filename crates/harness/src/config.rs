//! Harness configuration, optionally loaded from JSON.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Knobs for a scoring session. The scene itself (masses, lengths,
/// gravity) is fixed by [`physics::SeesawConfig`]; these are the
/// harness-level tunables.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Number of scored trials per session.
    pub trials: usize,
    /// Hard cap on ticks per trial; a trial that never fails ends here
    /// and keeps its accrued score.
    pub max_ticks: u32,
    /// Control torque magnitude handed to the policy.
    pub torque_magnitude: f32,
    /// Ball-speed deadband handed to the policy.
    pub speed_deadband: f32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            trials: 10,
            max_ticks: 36_000,
            torque_magnitude: 500_000.0,
            speed_deadband: 1.0,
        }
    }
}

impl HarnessConfig {
    /// Parse a config from JSON text; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid harness config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = HarnessConfig::from_json("{}").unwrap();
        assert_eq!(config, HarnessConfig::default());
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config = HarnessConfig::from_json(r#"{"trials": 3, "max_ticks": 600}"#).unwrap();
        assert_eq!(config.trials, 3);
        assert_eq!(config.max_ticks, 600);
        assert_eq!(config.torque_magnitude, 500_000.0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(HarnessConfig::from_json(r#"{"torque": 1.0}"#).is_err());
    }
}
