//! White-balance coefficients and camera → working RGB matrix derivation.
//!
//! # Algorithm
//! 1. `cam_rgb = cam_xyz · XYZ_FROM_RGB` (un-normalized camera → RGB)
//! 2. Per-channel coefficient = `1 / Σ cam_rgb[row]`, taken before normalizing
//! 3. Row-normalize `cam_rgb` so each row sums to 1
//! 4. Pseudoinvert the normalized matrix
//! 5. `rgb_cam` = transpose of the pseudoinverse result

use serde::{Deserialize, Serialize};

use crate::error::ColorCoeffError;
use crate::matrix::ColorMatrix;
use crate::matrix::pseudoinverse::{DEFAULT_PIVOT_TOLERANCE, pseudoinverse_with_tolerance};

/// Linear sRGB (D65) → CIE XYZ.
pub const XYZ_FROM_RGB: ColorMatrix = ColorMatrix([
    [0.412453, 0.357580, 0.180423],
    [0.212671, 0.715160, 0.072169],
    [0.019334, 0.119193, 0.950227],
]);

/// Per-channel white-balance multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbCoefficient {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RgbCoefficient {
    pub const fn as_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// Derive white-balance coefficients and the camera → RGB matrix from a
/// "camera RGB → XYZ" calibration matrix.
pub fn derive_coefficients(
    cam_xyz: &ColorMatrix,
) -> Result<(RgbCoefficient, ColorMatrix), ColorCoeffError> {
    derive_coefficients_with_tolerance(cam_xyz, DEFAULT_PIVOT_TOLERANCE)
}

/// Same as [`derive_coefficients`] with an explicit elimination pivot tolerance.
pub fn derive_coefficients_with_tolerance(
    cam_xyz: &ColorMatrix,
    pivot_tolerance: f64,
) -> Result<(RgbCoefficient, ColorMatrix), ColorCoeffError> {
    if !cam_xyz.is_finite() {
        return Err(ColorCoeffError::NonFinite);
    }

    let cam_rgb = cam_xyz.multiply(&XYZ_FROM_RGB);
    let sums = cam_rgb.row_sums();

    // Fails before any division if a row sums to zero.
    let normalized = cam_rgb.row_normalize()?;
    let coefficients = RgbCoefficient {
        r: 1.0 / sums[0],
        g: 1.0 / sums[1],
        b: 1.0 / sums[2],
    };

    let inverse = pseudoinverse_with_tolerance(&normalized, pivot_tolerance)?;
    let rgb_cam = inverse.transpose();
    tracing::trace!(?coefficients, ?rgb_cam, "derived camera coefficients");

    Ok((coefficients, rgb_cam))
}
