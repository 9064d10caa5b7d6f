//! Pure data-shaping for the CropSight dashboard.
//!
//! Everything in this crate is browser-free: filtering, grouping, averaging
//! and payload decoding are plain functions over `PredictionRecord` slices,
//! so they can be unit-tested natively while the frontend crate stays a thin
//! adapter between them, the DOM and the charting library.

pub mod error;
pub mod filter;
pub mod payload;
pub mod stats;

pub use error::{ComputeError, Result};
pub use filter::{ALL_CROPS, CropFilter, apply_filter, distinct_crops};
pub use payload::parse_records;
pub use stats::{
    CropAverage, FertilizerSplit, SummaryStats, YieldAssessment, YieldLevel, assess_yield,
    crop_averages, fertilizer_split, summarize,
};
