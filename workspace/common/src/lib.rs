//! Shared data model for the CropSight dashboard.
//! These structs mirror the JSON payload the host page embeds in its
//! prediction-data element, so the compute layer and the frontend can
//! share one shape without duplicating it.

use serde::{Deserialize, Serialize};

/// A single upstream yield prediction, as embedded by the host page.
///
/// The loaded record sequence is the source of truth and is never mutated;
/// every derived view is a fresh copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRecord {
    pub crop: String,
    pub predicted_yield: f64,
    pub rainfall: f64,
    pub temperature: f64,
    pub fertilizer_used: bool,
    pub irrigation_used: bool,
    /// Present in full upstream payloads, absent from minimal embeddings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_to_harvest: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_payload_record() {
        let json = r#"{
            "crop": "Maize",
            "predicted_yield": 4.2,
            "rainfall": 612.5,
            "temperature": 26.1,
            "fertilizer_used": true,
            "irrigation_used": false,
            "days_to_harvest": 120
        }"#;

        let record: PredictionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.crop, "Maize");
        assert_eq!(record.predicted_yield, 4.2);
        assert_eq!(record.days_to_harvest, Some(120));
    }

    #[test]
    fn tolerates_missing_days_to_harvest() {
        let json = r#"{
            "crop": "Wheat",
            "predicted_yield": 3.1,
            "rainfall": 410.0,
            "temperature": 19.4,
            "fertilizer_used": false,
            "irrigation_used": true
        }"#;

        let record: PredictionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.days_to_harvest, None);
    }

    #[test]
    fn roundtrips_through_json() {
        let record = PredictionRecord {
            crop: "Cotton".to_string(),
            predicted_yield: 2.75,
            rainfall: 380.0,
            temperature: 31.0,
            fertilizer_used: true,
            irrigation_used: true,
            days_to_harvest: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: PredictionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        // Absent fields stay absent so minimal payloads survive a round trip.
        assert!(!json.contains("days_to_harvest"));
    }
}
