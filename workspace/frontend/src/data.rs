//! Loading of the embedded prediction payload from the host page.

use common::PredictionRecord;
use compute::parse_records;

/// DOM id of the element carrying the JSON-encoded record list.
pub const DATA_ELEMENT_ID: &str = "prediction-data";

/// Reads and decodes the embedded record list.
///
/// A missing data element, an empty text body and an empty array are all
/// valid "render nothing" inputs and yield `None`. A malformed payload is a
/// broken embedding, not a runtime condition, and panics.
pub fn load_embedded_records() -> Option<Vec<PredictionRecord>> {
    let document = web_sys::window()?.document()?;

    let element = match document.get_element_by_id(DATA_ELEMENT_ID) {
        Some(element) => element,
        None => {
            log::warn!("No #{DATA_ELEMENT_ID} element found, nothing to render");
            return None;
        }
    };

    let payload = element.text_content().unwrap_or_default();
    if payload.trim().is_empty() {
        log::info!("Prediction payload is empty, nothing to render");
        return None;
    }

    let records = parse_records(&payload).expect("malformed prediction payload");
    if records.is_empty() {
        log::info!("Prediction history is empty, nothing to render");
        return None;
    }

    log::debug!("Loaded {} prediction records", records.len());
    Some(records)
}
