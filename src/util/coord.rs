use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::core::constants::{LAT_RANGE, LON_RANGE};
use crate::util::error::QthError;

/// Trait for types that can provide a longitude/latitude pair in degrees.
///
/// Implemented for `(f64, f64)` tuples (lon, lat), `geo_types::Point<f64>`
/// (x = lon, y = lat) and [`LatLon`]. This allows functions to accept any of them.
pub trait Coordinate {
    /// Returns the longitude in degrees.
    fn lon(&self) -> f64;
    /// Returns the latitude in degrees.
    fn lat(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lon(&self) -> f64 {
        self.0
    }
    fn lat(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn lon(&self) -> f64 {
        self.x()
    }
    fn lat(&self) -> f64 {
        self.y()
    }
}

/// A decimal latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Checks lat against [-90, 90] and lon against [-180, 180], both inclusive.
    ///
    /// NaN fails on either axis.
    pub fn validate(&self) -> Result<(), QthError> {
        let lat_ok = (LAT_RANGE[0]..=LAT_RANGE[1]).contains(&self.lat);
        let lon_ok = (LON_RANGE[0]..=LON_RANGE[1]).contains(&self.lon);
        if lat_ok && lon_ok {
            Ok(())
        } else {
            Err(QthError::InvalidCoordinate {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }

    /// Returns `(lat, lon)` in radians.
    pub fn to_radians(&self) -> (f64, f64) {
        (self.lat.to_radians(), self.lon.to_radians())
    }

    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl Coordinate for LatLon {
    fn lon(&self) -> f64 {
        self.lon
    }
    fn lat(&self) -> f64 {
        self.lat
    }
}

impl std::fmt::Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}
