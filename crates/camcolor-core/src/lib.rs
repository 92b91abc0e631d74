//! camcolor core — derives camera color transforms from XYZ calibration data.
//!
//! Given a "camera RGB → XYZ" reference matrix, this crate composes it with the
//! fixed XYZ/RGB matrix, extracts per-channel white-balance coefficients and
//! inverts the result into a "camera RGB → working RGB" matrix. The calibration
//! table itself is injected by the caller; see `camcolor-tables` for the
//! built-in data.

pub mod calibration;
pub mod coefficients;
pub mod config;
pub mod error;
pub mod matrix;

// Re-exports for convenience.
pub use calibration::entry::CalibrationEntry;
pub use calibration::resolver::{CameraColorProfile, ModelResolver};
pub use calibration::table::{CalibrationTable, CalibrationTableBuilder};
pub use coefficients::{
    RgbCoefficient, XYZ_FROM_RGB, derive_coefficients, derive_coefficients_with_tolerance,
};
pub use config::{MatchPolicy, ResolverConfig};
pub use error::ColorCoeffError;
pub use matrix::ColorMatrix;
pub use matrix::pseudoinverse::{
    DEFAULT_PIVOT_TOLERANCE, pseudoinverse, pseudoinverse_with_tolerance,
};
