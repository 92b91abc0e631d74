//! Ordered calibration tables and their JSON representation.
//!
//! A table is an ordered list of [`CalibrationEntry`] records. Order is part of
//! the data: under [`crate::MatchPolicy::FirstMatch`] an earlier, shorter prefix
//! shadows every later entry it is a prefix of.
//!
//! JSON layout:
//!
//! ```text
//! [
//!   { "prefix": "E-10", "black": 0, "maximum": 4092,
//!     "trans": [12745, -4500, -1416, -6062, 14542, 1580, -1934, 2256, 6603] },
//!   ...
//! ]
//! ```
//!
//! `black` and `maximum` are optional and default to 0.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calibration::entry::CalibrationEntry;
use crate::error::ColorCoeffError;

/// An ordered, immutable list of calibration entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CalibrationTable {
    entries: Vec<CalibrationEntry>,
}

/// Entry as it appears in JSON, before validation.
#[derive(Debug, Deserialize)]
struct RawEntry {
    prefix: String,
    #[serde(default)]
    black: u16,
    #[serde(default)]
    maximum: u16,
    trans: Vec<i64>,
}

impl CalibrationTable {
    pub fn builder() -> CalibrationTableBuilder {
        CalibrationTableBuilder::default()
    }

    /// Build a table from already-constructed entries, validating each one.
    pub fn from_entries(entries: Vec<CalibrationEntry>) -> Result<Self, ColorCoeffError> {
        for (index, entry) in entries.iter().enumerate() {
            validate_prefix(index, &entry.prefix)?;
        }
        Ok(Self { entries })
    }

    pub fn from_json_str(json: &str) -> Result<Self, ColorCoeffError> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ColorCoeffError> {
        let raw: Vec<RawEntry> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    pub fn from_path(path: &Path) -> Result<Self, ColorCoeffError> {
        let file = std::fs::File::open(path)?;
        let table = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            entries = table.len(),
            "loaded calibration table"
        );
        Ok(table)
    }

    pub fn to_json_string(&self) -> Result<String, ColorCoeffError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalibrationEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[CalibrationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn from_raw(raw: Vec<RawEntry>) -> Result<Self, ColorCoeffError> {
        let entries = raw
            .into_iter()
            .enumerate()
            .map(|(index, r)| {
                let trans = convert_trans(index, &r.prefix, &r.trans)?;
                Ok(CalibrationEntry::with_levels(r.prefix, r.black, r.maximum, trans))
            })
            .collect::<Result<Vec<_>, ColorCoeffError>>()?;
        Self::from_entries(entries)
    }
}

impl<'a> IntoIterator for &'a CalibrationTable {
    type Item = &'a CalibrationEntry;
    type IntoIter = std::slice::Iter<'a, CalibrationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Incrementally assembles a [`CalibrationTable`], preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct CalibrationTableBuilder {
    entries: Vec<CalibrationEntry>,
}

impl CalibrationTableBuilder {
    pub fn entry(self, prefix: impl Into<String>, trans: [i16; 9]) -> Self {
        self.push(CalibrationEntry::new(prefix, trans))
    }

    pub fn entry_with_levels(
        self,
        prefix: impl Into<String>,
        black: u16,
        maximum: u16,
        trans: [i16; 9],
    ) -> Self {
        self.push(CalibrationEntry::with_levels(prefix, black, maximum, trans))
    }

    pub fn push(mut self, entry: CalibrationEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn build(self) -> Result<CalibrationTable, ColorCoeffError> {
        CalibrationTable::from_entries(self.entries)
    }
}

fn validate_prefix(index: usize, prefix: &str) -> Result<(), ColorCoeffError> {
    // An empty prefix would match every model name.
    if prefix.is_empty() {
        return Err(ColorCoeffError::InvalidTable(format!(
            "entry {index} has an empty prefix"
        )));
    }
    Ok(())
}

fn convert_trans(index: usize, prefix: &str, values: &[i64]) -> Result<[i16; 9], ColorCoeffError> {
    if values.len() != 9 {
        return Err(ColorCoeffError::InvalidTable(format!(
            "entry {index} ({prefix:?}) has {} matrix values, expected 9",
            values.len()
        )));
    }
    let mut trans = [0_i16; 9];
    for (slot, &v) in trans.iter_mut().zip(values) {
        *slot = i16::try_from(v).map_err(|_| {
            ColorCoeffError::InvalidTable(format!(
                "entry {index} ({prefix:?}) matrix value {v} is out of range"
            ))
        })?;
    }
    Ok(trans)
}
