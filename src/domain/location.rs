// src/domain/location.rs
//
// Resolved postal location. Built only by a location lookup from a postal
// code; never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the Haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    pub postal_code: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(postal_code: String, address: String, latitude: f64, longitude: f64) -> Self {
        Self {
            postal_code,
            address,
            latitude,
            longitude,
        }
    }

    /// Great-circle distance in kilometres (Haversine)
    pub fn distance_to(&self, other: &GeoLocation) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        // clamp guards against a > 1 from rounding on antipodal points
        let c = 2.0 * a.sqrt().min(1.0).asin();

        EARTH_RADIUS_KM * c
    }
}

impl std::fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (S{})", self.address, self.postal_code)
    }
}
