//! Algebraic properties of the matrix primitives over a deterministic sample set.

use camcolor_core::{ColorMatrix, derive_coefficients, pseudoinverse};

const TOL: f64 = 1e-9;

/// Diagonally dominant matrices in the range calibration data lives in.
fn sample_matrices() -> Vec<ColorMatrix> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1u64 << 53) as f64 - 0.5
    };

    (0..64)
        .map(|_| {
            let mut m = [[0.0; 3]; 3];
            for (i, row) in m.iter_mut().enumerate() {
                for (j, v) in row.iter_mut().enumerate() {
                    *v = next() * 0.8;
                    if i == j {
                        *v += 1.5;
                    }
                }
            }
            ColorMatrix(m)
        })
        .collect()
}

#[test]
fn transpose_is_an_involution() {
    for m in sample_matrices() {
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn row_normalize_yields_unit_row_sums() {
    for m in sample_matrices() {
        let n = m.row_normalize().expect("dominant diagonal keeps row sums positive");
        for s in n.row_sums() {
            assert!((s - 1.0).abs() < TOL, "row sum {s}");
        }
    }
}

#[test]
fn pseudoinverse_is_a_left_inverse() {
    for m in sample_matrices() {
        let p = pseudoinverse(&m).expect("full rank");
        assert!(p.transpose().multiply(&m).approx_eq(&ColorMatrix::identity(), TOL));
    }
}

#[test]
fn derived_matrix_inverts_normalized_input() {
    for m in sample_matrices() {
        // Feed `m` as camera → RGB by undoing the fixed XYZ matrix first.
        let xyz_inv = pseudoinverse(&camcolor_core::XYZ_FROM_RGB)
            .expect("invertible")
            .transpose();
        let cam_xyz = m.multiply(&xyz_inv);
        let (coeff, rgb_cam) = derive_coefficients(&cam_xyz).expect("derivable");

        let sums = m.row_sums();
        for (c, s) in coeff.as_array().iter().zip(sums) {
            assert!((c * s - 1.0).abs() < 1e-6, "coefficient {c} for row sum {s}");
        }
        let normalized = m.row_normalize().expect("non-zero rows");
        assert!(
            rgb_cam
                .multiply(&normalized)
                .approx_eq(&ColorMatrix::identity(), 1e-6)
        );
    }
}
