//! Fixed-size 3x3 matrix primitives used by the coefficient derivation.

pub mod pseudoinverse;

use std::ops::{Index, Mul};

use serde::{Deserialize, Serialize};

use crate::error::ColorCoeffError;

/// Row sums with a magnitude below this are treated as zero by [`ColorMatrix::row_normalize`].
pub const ROW_SUM_EPSILON: f64 = 1e-12;

/// A row-major 3x3 color matrix for linear color space conversions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorMatrix(pub [[f64; 3]; 3]);

#[allow(clippy::needless_range_loop)]
impl ColorMatrix {
    /// Returns the identity matrix (no-op transform).
    pub const fn identity() -> Self {
        Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Standard matrix product `self · rhs`.
    pub fn multiply(&self, rhs: &ColorMatrix) -> ColorMatrix {
        let mut out = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                let mut v = 0.0;
                for k in 0..3 {
                    v += self.0[i][k] * rhs.0[k][j];
                }
                out[i][j] = v;
            }
        }
        ColorMatrix(out)
    }

    pub fn transpose(&self) -> ColorMatrix {
        let mut out = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                out[i][j] = self.0[j][i];
            }
        }
        ColorMatrix(out)
    }

    /// Sum of each row, in row order.
    pub fn row_sums(&self) -> [f64; 3] {
        [sum(&self.0[0]), sum(&self.0[1]), sum(&self.0[2])]
    }

    /// Scale every row so that it sums to 1.
    ///
    /// Fails with [`ColorCoeffError::DegenerateRow`] when a row sums to (nearly)
    /// zero or to a non-finite value; nothing is divided in that case.
    pub fn row_normalize(&self) -> Result<ColorMatrix, ColorCoeffError> {
        let sums = self.row_sums();
        for (row, &s) in sums.iter().enumerate() {
            if !s.is_finite() || s.abs() < ROW_SUM_EPSILON {
                tracing::warn!(row, sum = s, "cannot normalize matrix row");
                return Err(ColorCoeffError::DegenerateRow { row, sum: s });
            }
        }

        let mut out = self.0;
        for (row, s) in out.iter_mut().zip(sums) {
            for v in row.iter_mut() {
                *v /= s;
            }
        }
        Ok(ColorMatrix(out))
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().flatten().all(|v| v.is_finite())
    }

    /// Element-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &ColorMatrix, tol: f64) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= tol)
    }
}

impl Index<usize> for ColorMatrix {
    type Output = [f64; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.0[row]
    }
}

impl Mul for ColorMatrix {
    type Output = ColorMatrix;

    fn mul(self, rhs: ColorMatrix) -> ColorMatrix {
        self.multiply(&rhs)
    }
}

/// Sum of a fixed-length numeric sequence.
pub fn sum(elements: &[f64]) -> f64 {
    elements.iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn sample() -> ColorMatrix {
        ColorMatrix([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]])
    }

    #[test]
    fn test_multiply_by_identity_is_noop() {
        let m = sample();
        assert_eq!(m.multiply(&ColorMatrix::identity()), m);
        assert_eq!(ColorMatrix::identity() * m, m);
    }

    #[test]
    fn test_multiply_known_product() {
        let a = ColorMatrix([[1.0, 2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 2.0]]);
        let b = ColorMatrix([[1.0, 0.0, 0.0], [3.0, 1.0, 0.0], [0.0, 0.0, 0.5]]);
        let expected = ColorMatrix([[7.0, 2.0, 0.0], [3.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(a * b, expected);
    }

    #[test]
    fn test_transpose_swaps_indices() {
        let t = sample().transpose();
        assert_eq!(t[0], [1.0, 4.0, 7.0]);
        assert_eq!(t[2], [3.0, 6.0, 10.0]);
    }

    #[test]
    fn test_double_transpose_is_exact() {
        let m = ColorMatrix([
            [0.412453, -0.357580, 1e-300],
            [f64::MAX, 0.715160, -0.072169],
            [0.019334, 0.119193, 0.950227],
        ]);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_row_normalize_rows_sum_to_one() {
        let m = ColorMatrix([[1.0894, -0.4095, -0.1074], [-0.5, 2.0, 0.25], [3.0, 3.0, 3.0]]);
        let n = m.row_normalize().expect("rows have non-zero sums");
        for s in n.row_sums() {
            assert!((s - 1.0).abs() < EPSILON, "row sum {s} != 1");
        }
        assert!((n[2][0] - 1.0 / 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_row_normalize_rejects_zero_sum_row() {
        let m = ColorMatrix([[1.0, 0.0, 0.0], [1.0, -1.0, 0.0], [0.0, 0.0, 1.0]]);
        match m.row_normalize() {
            Err(ColorCoeffError::DegenerateRow { row, sum }) => {
                assert_eq!(row, 1);
                assert_eq!(sum, 0.0);
            }
            other => panic!("expected DegenerateRow, got {other:?}"),
        }
    }

    #[test]
    fn test_row_normalize_rejects_nan_row() {
        let m = ColorMatrix([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [f64::NAN, 0.0, 1.0]]);
        assert!(matches!(
            m.row_normalize(),
            Err(ColorCoeffError::DegenerateRow { row: 2, .. })
        ));
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[]), 0.0);
        assert_eq!(sum(&[0.25, 0.5, 0.25]), 1.0);
    }

    #[test]
    fn test_approx_eq_respects_tolerance() {
        let a = ColorMatrix::identity();
        let mut b = a;
        b.0[1][2] = 1e-10;
        assert!(a.approx_eq(&b, 1e-9));
        assert!(!a.approx_eq(&b, 1e-11));
    }
}
