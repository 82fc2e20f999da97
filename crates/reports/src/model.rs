//! Incident report data model.
//!
//! Reports arrive in batches from whatever transport the application picked
//! (poll, push, manual refresh); nothing here constrains the cadence or the
//! carrier. One batch is one ingest cycle.

use foundation::{GeoBounds, GeoPoint, Timestamp};
use serde::{Deserialize, Serialize};

/// Report category.
///
/// On the wire this is an integer tag: `0` marks a road accident, any other
/// value a plain incident message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum IncidentKind {
    Accident,
    Other,
}

impl From<IncidentKind> for u8 {
    fn from(kind: IncidentKind) -> u8 {
        match kind {
            IncidentKind::Accident => 0,
            IncidentKind::Other => 1,
        }
    }
}

impl From<u8> for IncidentKind {
    fn from(tag: u8) -> Self {
        if tag == 0 {
            IncidentKind::Accident
        } else {
            IncidentKind::Other
        }
    }
}

/// A single geolocated incident report. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentReport {
    pub text: String,
    pub time: Timestamp,
    pub coords: GeoPoint,
    #[serde(rename = "type")]
    pub kind: IncidentKind,
}

impl IncidentReport {
    pub fn is_accident(&self) -> bool {
        self.kind == IncidentKind::Accident
    }
}

/// Projection of a report used for proximity grouping.
///
/// Produced fresh for every ingest cycle, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterPoint {
    pub text: String,
    pub time: Timestamp,
    pub coords: GeoPoint,
}

impl From<&IncidentReport> for ClusterPoint {
    fn from(report: &IncidentReport) -> Self {
        Self {
            text: report.text.clone(),
            time: report.time,
            coords: report.coords,
        }
    }
}

/// A named city and the viewport rectangle the map fits to on first show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityBounds {
    pub name: String,
    pub bounds: GeoBounds,
}

#[cfg(test)]
mod tests {
    use super::{ClusterPoint, IncidentKind, IncidentReport};
    use foundation::{GeoPoint, Timestamp};

    #[test]
    fn kind_tag_zero_is_accident() {
        assert_eq!(IncidentKind::from(0u8), IncidentKind::Accident);
        assert_eq!(IncidentKind::from(1u8), IncidentKind::Other);
        // Unknown tags degrade to plain incidents rather than failing.
        assert_eq!(IncidentKind::from(7u8), IncidentKind::Other);
    }

    #[test]
    fn cluster_point_keeps_text_time_coords() {
        let report = IncidentReport {
            text: "rear-end collision".to_string(),
            time: Timestamp(42),
            coords: GeoPoint::new(55.75, 37.61),
            kind: IncidentKind::Accident,
        };
        let point = ClusterPoint::from(&report);
        assert_eq!(point.text, report.text);
        assert_eq!(point.time, report.time);
        assert_eq!(point.coords, report.coords);
    }
}
