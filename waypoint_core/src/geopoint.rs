use serde::{Deserialize, Serialize};

use crate::constants::EARTH_RADIUS_KM;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    /// Great-circle distance to `other`, in kilometers.
    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        haversine_distance(self.lat, self.lng, other.lat, other.lng)
    }

    /// Position on the unit sphere. Euclidean distance between two of these
    /// grows monotonically with the great-circle distance.
    pub(crate) fn unit_vector(&self) -> [f64; 3] {
        let lat = self.lat.to_radians();
        let lng = self.lng.to_radians();
        [lat.cos() * lng.cos(), lat.cos() * lng.sin(), lat.sin()]
    }
}

/// Great-circle distance in kilometers between two points given in degrees,
/// on a sphere of Earth's mean radius.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lon1_rad = lon1.to_radians();
    let lat2_rad = lat2.to_radians();
    let lon2_rad = lon2.to_radians();

    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = lon2_rad - lon1_rad;

    // Rounding can push `a` a hair outside [0, 1] for antipodal points
    let a = ((delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn same_point_is_zero() {
        assert_eq!(haversine_distance(30.27, 78.0, 30.27, 78.0), 0.0);
    }

    #[test]
    fn one_degree_on_the_equator() {
        // 2 * pi * 6371 / 360
        assert_close(haversine_distance(0.0, 0.0, 0.0, 1.0), 111.194_926_6, 1e-6);
        assert_close(haversine_distance(0.0, 0.0, 1.0, 0.0), 111.194_926_6, 1e-6);
    }

    #[test]
    fn is_symmetric() {
        let a = GeoPoint::new(47.0465, 21.9189);
        let b = GeoPoint::new(44.4268, 26.1025);
        assert_eq!(a.haversine_distance(&b), b.haversine_distance(&a));
    }

    #[test]
    fn antipodal_points_stay_finite() {
        let distance = haversine_distance(0.0, 0.0, 0.0, 180.0);
        assert!(distance.is_finite());
        assert_close(distance, std::f64::consts::PI * EARTH_RADIUS_KM, 1e-6);

        let distance = haversine_distance(90.0, 0.0, -90.0, 0.0);
        assert!(distance.is_finite());
        assert!(distance >= 0.0);
    }

    #[test]
    fn unit_vector_has_unit_length() {
        let [x, y, z] = GeoPoint::new(30.3165, 78.0322).unit_vector();
        assert_close(x * x + y * y + z * z, 1.0, 1e-12);
    }
}
