//! Generalized inverse of a 3x3 matrix via the normal equations.
//!
//! # Algorithm
//! 1. Build `N = Mᵗ·M` and augment it with the identity into a 3x6 work matrix
//! 2. Gauss-Jordan eliminate in row order (no pivoting) until the left block is
//!    the identity; the right block is then `N⁻¹`
//! 3. Recover `out[i][j] = Σₖ N⁻¹[j][k] · M[i][k]`, i.e. `M·N⁻¹`
//!
//! Because `N⁻¹` is symmetric, the result equals `(N⁻¹·Mᵗ)ᵗ`: the *transposed*
//! Moore-Penrose inverse. Transpose it to obtain the left inverse of `M`.

use crate::error::ColorCoeffError;
use crate::matrix::ColorMatrix;

/// Pivots with a magnitude at or below this are treated as zero.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// Compute the transposed pseudoinverse of `m` with [`DEFAULT_PIVOT_TOLERANCE`].
///
/// For a full-rank `m`, `pseudoinverse(m).transpose() · m ≈ I`.
pub fn pseudoinverse(m: &ColorMatrix) -> Result<ColorMatrix, ColorCoeffError> {
    pseudoinverse_with_tolerance(m, DEFAULT_PIVOT_TOLERANCE)
}

/// Accept `tolerance` only if it is finite and non-negative.
///
/// A NaN or negative tolerance never compares greater than a pivot, which would
/// let a zero pivot through to the division.
pub fn validate_tolerance(tolerance: f64) -> Result<f64, ColorCoeffError> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(tolerance)
    } else {
        Err(ColorCoeffError::InvalidTolerance(tolerance))
    }
}

/// Compute the transposed pseudoinverse of `m`, failing with
/// [`ColorCoeffError::SingularMatrix`] when an elimination pivot's magnitude
/// is at or below `tolerance`. A zero tolerance still rejects an exact zero pivot.
#[allow(clippy::needless_range_loop)]
pub fn pseudoinverse_with_tolerance(
    m: &ColorMatrix,
    tolerance: f64,
) -> Result<ColorMatrix, ColorCoeffError> {
    let tolerance = validate_tolerance(tolerance)?;
    if !m.is_finite() {
        return Err(ColorCoeffError::NonFinite);
    }
    let input = &m.0;

    let mut work = [[0.0_f64; 6]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                work[i][j] += input[k][i] * input[k][j];
            }
        }
        work[i][i + 3] = 1.0;
    }

    for i in 0..3 {
        let pivot = work[i][i];
        tracing::trace!(pivot_index = i, pivot, "gauss-jordan pivot");
        if !pivot.is_finite() || pivot.abs() <= tolerance {
            tracing::warn!(pivot_index = i, pivot, "singular matrix in pseudoinverse");
            return Err(ColorCoeffError::SingularMatrix {
                pivot: i,
                value: pivot,
            });
        }

        for j in 0..6 {
            work[i][j] /= pivot;
        }
        for k in 0..3 {
            if k == i {
                continue;
            }
            let factor = work[k][i];
            for j in 0..6 {
                work[k][j] -= work[i][j] * factor;
            }
        }
    }

    let mut out = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                out[i][j] += work[j][k + 3] * input[i][k];
            }
        }
    }

    let out = ColorMatrix(out);
    if !out.is_finite() {
        return Err(ColorCoeffError::NonFinite);
    }
    Ok(out)
}
