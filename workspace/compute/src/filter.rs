//! Crop filtering and filter-option derivation.

use common::PredictionRecord;
use tracing::instrument;

/// Sentinel dropdown value selecting the full record sequence.
pub const ALL_CROPS: &str = "All";

/// The current dropdown selection, decoded from the select element's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CropFilter {
    All,
    Crop(String),
}

impl CropFilter {
    /// Maps a raw dropdown value to a filter. `"All"` is the sentinel; any
    /// other value selects that crop.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CROPS {
            Self::All
        } else {
            Self::Crop(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The dropdown value this selection corresponds to.
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_CROPS,
            Self::Crop(name) => name,
        }
    }
}

/// Recomputes the filtered view for `selection`.
///
/// Always returns a fresh copy of the matching records, preserving their
/// original relative order. The full sequence is rescanned on every call;
/// payloads are dozens to hundreds of records, so no index is kept.
#[instrument(skip(records))]
pub fn apply_filter(records: &[PredictionRecord], selection: &CropFilter) -> Vec<PredictionRecord> {
    match selection {
        CropFilter::All => records.to_vec(),
        CropFilter::Crop(name) => records
            .iter()
            .filter(|r| r.crop == *name)
            .cloned()
            .collect(),
    }
}

/// Distinct crop names in order of first occurrence, used to populate the
/// filter dropdown after the "All" choice.
pub fn distinct_crops(records: &[PredictionRecord]) -> Vec<String> {
    let mut crops: Vec<String> = Vec::new();
    for record in records {
        if !crops.iter().any(|c| c == &record.crop) {
            crops.push(record.crop.clone());
        }
    }
    crops
}
