//! Resolver configuration.
//!
//! `ResolverConfig::default()` and deserialization share one set of defaults:
//! a field missing from the serialized form falls back to its environment
//! variable, then to the built-in value.

use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use crate::matrix::pseudoinverse::{DEFAULT_PIVOT_TOLERANCE, validate_tolerance};

/// Env var naming a JSON calibration table to use instead of the built-in one.
pub const CALIBRATION_PATH_ENV: &str = "CAMCOLOR_CALIBRATION";
/// Env var overriding [`ResolverConfig::pivot_tolerance`].
pub const PIVOT_TOLERANCE_ENV: &str = "CAMCOLOR_PIVOT_TOLERANCE";

/// How a model name is matched against table prefixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// The first entry in table order whose prefix starts the model name wins.
    /// Table order is significant: `"E-1"` listed before `"E-10"` shadows it.
    #[default]
    FirstMatch,
    /// The longest matching prefix wins; ties go to the earlier entry.
    LongestPrefix,
}

/// Runtime configuration for a [`crate::ModelResolver`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// JSON calibration table to load. `None` selects the built-in table.
    #[serde(default = "calibration_path_from_env")]
    pub calibration_path: Option<PathBuf>,
    #[serde(default)]
    pub match_policy: MatchPolicy,
    /// Elimination pivots with a magnitude at or below this are reported as
    /// singular. Must be finite and non-negative.
    #[serde(
        default = "pivot_tolerance_from_env",
        deserialize_with = "deserialize_pivot_tolerance"
    )]
    pub pivot_tolerance: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            calibration_path: calibration_path_from_env(),
            match_policy: MatchPolicy::default(),
            pivot_tolerance: pivot_tolerance_from_env(),
        }
    }
}

/// Value of [`CALIBRATION_PATH_ENV`], if set.
pub fn calibration_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CALIBRATION_PATH_ENV).map(PathBuf::from)
}

/// Value of [`PIVOT_TOLERANCE_ENV`] when it parses to a valid tolerance,
/// [`DEFAULT_PIVOT_TOLERANCE`] otherwise.
pub fn pivot_tolerance_from_env() -> f64 {
    let Ok(raw) = std::env::var(PIVOT_TOLERANCE_ENV) else {
        return DEFAULT_PIVOT_TOLERANCE;
    };
    match raw.parse::<f64>().ok().map(validate_tolerance) {
        Some(Ok(tolerance)) => tolerance,
        _ => {
            tracing::warn!(
                value = %raw,
                "ignoring invalid {PIVOT_TOLERANCE_ENV}, using default pivot tolerance"
            );
            DEFAULT_PIVOT_TOLERANCE
        }
    }
}

fn deserialize_pivot_tolerance<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let tolerance = f64::deserialize(deserializer)?;
    validate_tolerance(tolerance).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_policy_defaults_to_first_match() {
        assert_eq!(MatchPolicy::default(), MatchPolicy::FirstMatch);
    }

    #[test]
    fn test_deserialize_missing_fields_match_default() {
        let config: ResolverConfig = serde_json::from_str("{}").expect("valid json");
        assert_eq!(config, ResolverConfig::default());
        assert_eq!(config.calibration_path, calibration_path_from_env());
        assert_eq!(config.pivot_tolerance, pivot_tolerance_from_env());
    }

    #[test]
    fn test_deserialize_policy_and_path() {
        let json = r#"{
            "calibration_path": "/tmp/olympus.json",
            "match_policy": "longest_prefix",
            "pivot_tolerance": 1e-9
        }"#;
        let config: ResolverConfig = serde_json::from_str(json).expect("valid json");
        assert_eq!(
            config.calibration_path.as_deref(),
            Some(std::path::Path::new("/tmp/olympus.json"))
        );
        assert_eq!(config.match_policy, MatchPolicy::LongestPrefix);
        assert_eq!(config.pivot_tolerance, 1e-9);
    }

    #[test]
    fn test_deserialize_rejects_negative_tolerance() {
        let result = serde_json::from_str::<ResolverConfig>(r#"{ "pivot_tolerance": -1.0 }"#);
        let err = result.expect_err("negative tolerance must be rejected");
        assert!(err.to_string().contains("pivot tolerance"), "{err}");
    }

    #[test]
    fn test_deserialize_accepts_zero_tolerance() {
        let config: ResolverConfig =
            serde_json::from_str(r#"{ "pivot_tolerance": 0.0 }"#).expect("valid json");
        assert_eq!(config.pivot_tolerance, 0.0);
    }
}
