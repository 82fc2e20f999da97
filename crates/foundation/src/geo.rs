/// Mean Earth radius (kilometers).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geographic position in WGS84 degrees.
///
/// Values are taken as-is; range validation is the producer's job. NaN
/// coordinates propagate into distances, where every comparison against
/// them is false.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Great-circle distance between two points in kilometers.
///
/// Cos-form haversine on a spherical Earth. Callers compare the result
/// against fixed thresholds, so the same formula must be used on both sides
/// of every comparison.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let p = std::f64::consts::PI / 180.0;
    let h = 0.5 - ((b.lat - a.lat) * p).cos() / 2.0
        + (a.lat * p).cos() * (b.lat * p).cos() * (1.0 - ((b.lon - a.lon) * p).cos()) / 2.0;
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::{GeoPoint, haversine_km};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn zero_distance_to_self() {
        let p = GeoPoint::new(55.75, 37.61);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn symmetric() {
        let berlin = GeoPoint::new(52.52, 13.405);
        let paris = GeoPoint::new(48.8566, 2.3522);
        assert_close(
            haversine_km(berlin, paris),
            haversine_km(paris, berlin),
            1e-12,
        );
    }

    #[test]
    fn known_city_pair() {
        let berlin = GeoPoint::new(52.52, 13.405);
        let paris = GeoPoint::new(48.8566, 2.3522);
        // ~878 km
        assert_close(haversine_km(berlin, paris), 878.0, 5.0);
    }

    #[test]
    fn small_offset_at_equator() {
        // 0.005 deg of longitude on the equator is roughly 0.556 km.
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 0.005);
        assert_close(haversine_km(a, b), 0.556, 0.001);
    }

    #[test]
    fn nan_coordinates_yield_nan() {
        let a = GeoPoint::new(f64::NAN, 0.0);
        let b = GeoPoint::new(0.0, 0.0);
        let d = haversine_km(a, b);
        assert!(d.is_nan());
        // The property downstream code relies on: NaN never compares "near".
        assert!(!(d < 1.0));
    }
}
