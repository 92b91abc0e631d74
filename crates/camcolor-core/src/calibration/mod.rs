//! Calibration data — per-camera "camera RGB → XYZ" matrices and model lookup.

pub mod entry;
pub mod resolver;
pub mod table;
