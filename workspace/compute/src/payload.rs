//! Decoding of the embedded prediction payload.

use common::PredictionRecord;
use tracing::instrument;

use crate::error::Result;

/// Decodes the JSON array carried by the host page's data element.
///
/// An empty array is a valid payload; the caller decides whether anything
/// gets rendered for it.
#[instrument(skip(json))]
pub fn parse_records(json: &str) -> Result<Vec<PredictionRecord>> {
    Ok(serde_json::from_str(json)?)
}
