use serde::{Deserialize, Serialize};

use crate::matrix::ColorMatrix;

/// Fixed-point scale of [`CalibrationEntry::trans`].
pub const TRANS_SCALE: f64 = 10000.0;

/// One camera model's reference matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationEntry {
    /// Model-name prefix this entry applies to.
    pub prefix: String,
    /// Raw black level, 0 when unknown. Carried but not used by the derivation.
    pub black: u16,
    /// Raw saturation value, 0 when unknown. Carried but not used by the derivation.
    pub maximum: u16,
    /// Row-major "camera RGB → XYZ" matrix scaled by 10⁴.
    pub trans: [i16; 9],
}

impl CalibrationEntry {
    pub fn new(prefix: impl Into<String>, trans: [i16; 9]) -> Self {
        Self::with_levels(prefix, 0, 0, trans)
    }

    pub fn with_levels(
        prefix: impl Into<String>,
        black: u16,
        maximum: u16,
        trans: [i16; 9],
    ) -> Self {
        Self {
            prefix: prefix.into(),
            black,
            maximum,
            trans,
        }
    }

    /// Whether `model` starts with this entry's prefix (case-sensitive).
    pub fn matches(&self, model: &str) -> bool {
        model.starts_with(self.prefix.as_str())
    }

    /// The reference matrix rescaled to floating point.
    pub fn cam_xyz(&self) -> ColorMatrix {
        let mut out = [[0.0; 3]; 3];
        for (j, &v) in self.trans.iter().enumerate() {
            out[j / 3][j % 3] = f64::from(v) / TRANS_SCALE;
        }
        ColorMatrix(out)
    }
}
