#[derive(Debug, thiserror::Error)]
pub enum ColorCoeffError {
    #[error("no calibration entry matches camera model {0:?}")]
    UnknownModel(String),
    #[error("matrix is singular: pivot {pivot} is {value:e}")]
    SingularMatrix { pivot: usize, value: f64 },
    #[error("matrix row {row} sums to {sum:e}, cannot normalize")]
    DegenerateRow { row: usize, sum: f64 },
    #[error("pivot tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
    #[error("matrix contains non-finite values")]
    NonFinite,
    #[error("invalid calibration table: {0}")]
    InvalidTable(String),
    #[error("calibration table JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("calibration table I/O: {0}")]
    Io(#[from] std::io::Error),
}
