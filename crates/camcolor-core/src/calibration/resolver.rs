//! Camera model lookup and profile derivation.
//!
//! The resolver matches a model name against an injected [`CalibrationTable`]
//! and feeds the matching entry through [`derive_coefficients_with_tolerance`].
//! An unmatched model is an explicit [`ColorCoeffError::UnknownModel`]; no
//! default or identity profile is ever substituted.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::calibration::entry::CalibrationEntry;
use crate::calibration::table::CalibrationTable;
use crate::coefficients::{RgbCoefficient, derive_coefficients_with_tolerance};
use crate::config::{MatchPolicy, ResolverConfig};
use crate::error::ColorCoeffError;
use crate::matrix::ColorMatrix;
use crate::matrix::pseudoinverse::{DEFAULT_PIVOT_TOLERANCE, validate_tolerance};

/// Result of deriving a color profile for one camera model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraColorProfile {
    /// Model name as queried.
    pub model: String,
    /// Prefix of the calibration entry that matched.
    pub prefix: String,
    /// Per-channel white-balance multipliers.
    pub coefficients: RgbCoefficient,
    /// Camera RGB → working RGB matrix.
    pub rgb_cam: ColorMatrix,
}

/// Resolves camera model names against a calibration table.
#[derive(Debug, Clone)]
pub struct ModelResolver {
    table: CalibrationTable,
    policy: MatchPolicy,
    pivot_tolerance: f64,
}

impl ModelResolver {
    /// First-match resolver with the default pivot tolerance.
    pub fn new(table: CalibrationTable) -> Self {
        Self {
            table,
            policy: MatchPolicy::FirstMatch,
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }

    /// Resolver using the policy and tolerance from `config`.
    ///
    /// `config.calibration_path` is not read here; loading the table is the
    /// caller's job. Fails with [`ColorCoeffError::InvalidTolerance`] when the
    /// pivot tolerance is negative or non-finite.
    pub fn with_config(
        table: CalibrationTable,
        config: &ResolverConfig,
    ) -> Result<Self, ColorCoeffError> {
        let pivot_tolerance = validate_tolerance(config.pivot_tolerance)?;
        Ok(Self {
            table,
            policy: config.match_policy,
            pivot_tolerance,
        })
    }

    pub fn table(&self) -> &CalibrationTable {
        &self.table
    }

    /// Find the calibration entry for `model`, if any.
    pub fn resolve(&self, model: &str) -> Option<&CalibrationEntry> {
        let mut candidates = self.table.iter().filter(|entry| entry.matches(model));
        match self.policy {
            MatchPolicy::FirstMatch => candidates.next(),
            // `min_by_key` keeps the first of equal keys, so ties go to table order.
            MatchPolicy::LongestPrefix => {
                candidates.min_by_key(|entry| Reverse(entry.prefix.len()))
            }
        }
    }

    /// Look up `model` and derive its white-balance coefficients and
    /// camera → RGB matrix.
    pub fn derive(&self, model: &str) -> Result<CameraColorProfile, ColorCoeffError> {
        let Some(entry) = self.resolve(model) else {
            tracing::warn!(model, "no calibration entry for camera model");
            return Err(ColorCoeffError::UnknownModel(model.to_string()));
        };
        tracing::debug!(
            model,
            prefix = %entry.prefix,
            policy = ?self.policy,
            "matched calibration entry"
        );

        let (coefficients, rgb_cam) =
            derive_coefficients_with_tolerance(&entry.cam_xyz(), self.pivot_tolerance)?;

        Ok(CameraColorProfile {
            model: model.to_string(),
            prefix: entry.prefix.clone(),
            coefficients,
            rgb_cam,
        })
    }
}
