//! Great-circle distance between geographic coordinates.
//!
//! Distances are computed with the haversine formula on a spherical Earth of
//! radius [`EARTH_RADIUS_KM`]. The functions here are pure: NaN inputs
//! propagate to NaN outputs, so range checking happens in
//! [`Coordinates::new`] before a point is admitted into a network.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Build a coordinate pair, rejecting values outside the valid
    /// latitude/longitude ranges (including NaN).
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        let coords = Self { lat, lon };
        coords.validate()?;
        Ok(coords)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::AirportDataValidation {
                message: format!("latitude must be within [-90, 90], got {}", self.lat),
            });
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(Error::AirportDataValidation {
                message: format!("longitude must be within [-180, 180], got {}", self.lon),
            });
        }
        Ok(())
    }

    /// Great-circle distance to another point in kilometres.
    pub fn distance_to(&self, other: &Self) -> f64 {
        haversine_distance(self.lat, self.lon, other.lat, other.lon)
    }
}

/// Haversine great-circle distance in kilometres between two points given in degrees.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Clamp guards asin against rounding just above 1.0 for antipodal points.
    let c = 2.0 * a.sqrt().clamp(0.0, 1.0).asin();

    EARTH_RADIUS_KM * c
}
