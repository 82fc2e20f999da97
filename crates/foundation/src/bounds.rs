use crate::geo::GeoPoint;

/// Lat/lon viewport rectangle, named by its screen corners.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoBounds {
    pub top_left: GeoPoint,
    pub bottom_right: GeoPoint,
}

impl GeoBounds {
    pub fn new(top_left: GeoPoint, bottom_right: GeoPoint) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }
}
