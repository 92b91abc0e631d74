//! Built-in calibration data for camcolor.
//!
//! Supplies the static Olympus table and binds it to a [`ModelResolver`].
//! Callers that bring their own data can skip this crate and hand a
//! [`CalibrationTable`] to `camcolor-core` directly.

mod olympus;

use std::sync::OnceLock;

use camcolor_core::{
    CalibrationEntry, CalibrationTable, CameraColorProfile, ColorCoeffError, ModelResolver,
    ResolverConfig,
};

/// The built-in table, in lookup order. Built once and shared read-only.
pub fn builtin_table() -> &'static CalibrationTable {
    static TABLE: OnceLock<CalibrationTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        let entries = olympus::OLYMPUS
            .iter()
            .map(|&(prefix, black, maximum, trans)| {
                CalibrationEntry::with_levels(prefix, black, maximum, trans)
            })
            .collect();
        let table = CalibrationTable::from_entries(entries)
            .unwrap_or_else(|e| unreachable!("built-in calibration table is invalid: {e}"));
        tracing::debug!(entries = table.len(), "built-in calibration table initialized");
        table
    })
}

/// First-match resolver over the built-in table.
pub fn builtin_resolver() -> &'static ModelResolver {
    static RESOLVER: OnceLock<ModelResolver> = OnceLock::new();
    RESOLVER.get_or_init(|| ModelResolver::new(builtin_table().clone()))
}

/// Build a resolver from `config`, loading `config.calibration_path` when set
/// and falling back to the built-in table otherwise.
pub fn resolver_from_config(config: &ResolverConfig) -> Result<ModelResolver, ColorCoeffError> {
    let table = match &config.calibration_path {
        Some(path) => CalibrationTable::from_path(path)?,
        None => builtin_table().clone(),
    };
    ModelResolver::with_config(table, config)
}

/// Derive the white-balance coefficients and camera → RGB matrix for
/// `model_name` from the built-in table.
///
/// Returns [`ColorCoeffError::UnknownModel`] when no entry matches.
pub fn derive_camera_color_profile(
    model_name: &str,
) -> Result<CameraColorProfile, ColorCoeffError> {
    builtin_resolver().derive(model_name)
}
