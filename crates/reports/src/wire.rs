//! JSON wire format for report batches.
//!
//! The format is transport-agnostic (WebSocket, HTTP poll, a file on disk —
//! whatever feeds the map). Decoding is strict about shape and lenient about
//! content: unknown incident tags become plain incidents, missing `reports`
//! means an empty batch, coordinates are not range-checked.

use serde::{Deserialize, Serialize};

use crate::model::{CityBounds, IncidentReport};

/// One ingest cycle's worth of data: the reports to display plus the city
/// they belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportBatch {
    #[serde(default)]
    pub reports: Vec<IncidentReport>,
    pub city: CityBounds,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    Malformed(String),
}

impl std::fmt::Display for WireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireError::Malformed(msg) => write!(f, "malformed report batch: {msg}"),
        }
    }
}

impl std::error::Error for WireError {}

impl ReportBatch {
    pub fn from_json(text: &str) -> Result<Self, WireError> {
        serde_json::from_str(text).map_err(|e| WireError::Malformed(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, WireError> {
        serde_json::to_string(self).map_err(|e| WireError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{ReportBatch, WireError};
    use crate::model::IncidentKind;
    use foundation::{GeoPoint, Timestamp};
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_batch() {
        let text = r#"{
            "reports": [
                {
                    "text": "two cars, left lane blocked",
                    "time": 1500000000000,
                    "coords": { "lat": 55.75, "lon": 37.61 },
                    "type": 0
                },
                {
                    "text": "slow traffic on the ring",
                    "time": 1500000000500,
                    "coords": { "lat": 55.76, "lon": 37.62 },
                    "type": 3
                }
            ],
            "city": {
                "name": "moscow",
                "bounds": {
                    "top_left": { "lat": 56.0, "lon": 37.3 },
                    "bottom_right": { "lat": 55.5, "lon": 38.0 }
                }
            }
        }"#;

        let batch = ReportBatch::from_json(text).unwrap();
        assert_eq!(batch.city.name, "moscow");
        assert_eq!(batch.reports.len(), 2);
        assert_eq!(batch.reports[0].kind, IncidentKind::Accident);
        assert_eq!(batch.reports[0].time, Timestamp(1_500_000_000_000));
        assert_eq!(batch.reports[0].coords, GeoPoint::new(55.75, 37.61));
        // Tag 3 is not an accident.
        assert_eq!(batch.reports[1].kind, IncidentKind::Other);
    }

    #[test]
    fn missing_reports_is_empty_batch() {
        let text = r#"{
            "city": {
                "name": "moscow",
                "bounds": {
                    "top_left": { "lat": 56.0, "lon": 37.3 },
                    "bottom_right": { "lat": 55.5, "lon": 38.0 }
                }
            }
        }"#;
        let batch = ReportBatch::from_json(text).unwrap();
        assert!(batch.reports.is_empty());
    }

    #[test]
    fn garbage_is_a_wire_error() {
        let err = ReportBatch::from_json("not json").unwrap_err();
        let WireError::Malformed(msg) = err;
        assert!(!msg.is_empty());
    }
}
