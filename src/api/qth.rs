use crate::core::locator::{
    Cell, Precision, decode_cell, decode_locator, encode_position_with_precision,
};
use crate::util::coord::{Coordinate, LatLon};
use crate::util::error::QthError;
use geo_types::{Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// A converted location: canonical Maidenhead locator plus its coordinate.
///
/// Built either from a locator (the coordinate is the center of the named
/// cell) or from a position (the coordinate is echoed back unchanged).
///
/// # Example
///
/// ```
/// use qthgeo_rs::Qth;
///
/// # fn main() -> Result<(), qthgeo_rs::QthError> {
/// let qth = Qth::from_locator("jn76to")?;
/// assert_eq!(qth.locator(), "JN76TO");
///
/// let qth = Qth::from_position(46.604, 15.625)?;
/// assert_eq!(qth.locator(), "JN76TO");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QthRepr")]
pub struct Qth {
    locator: String,
    lat_lon: LatLon,
}

/// Unchecked wire form of [`Qth`]; only reaches callers through `TryFrom`.
#[derive(Deserialize)]
struct QthRepr {
    locator: String,
    lat_lon: LatLon,
}

impl TryFrom<QthRepr> for Qth {
    type Error = QthError;

    fn try_from(repr: QthRepr) -> Result<Self, Self::Error> {
        let (canonical, _) = decode_cell(&repr.locator)?;
        if canonical != repr.locator {
            return Err(QthError::NonCanonicalLocator(repr.locator));
        }
        repr.lat_lon.validate()?;
        Ok(Self {
            locator: canonical,
            lat_lon: repr.lat_lon,
        })
    }
}

impl Qth {
    /// Decode a 4 or 6 character locator, case-insensitive.
    pub fn from_locator(locator: &str) -> Result<Self, QthError> {
        let (locator, lat_lon) = decode_locator(locator)?;
        Ok(Self { locator, lat_lon })
    }

    /// Encode a position to a 6 character locator.
    pub fn from_position(lat: f64, lon: f64) -> Result<Self, QthError> {
        Self::from_position_with_precision(lat, lon, Precision::Subsquare)
    }

    pub fn from_position_with_precision(
        lat: f64,
        lon: f64,
        precision: Precision,
    ) -> Result<Self, QthError> {
        let locator = encode_position_with_precision(lat, lon, precision)?;
        Ok(Self {
            locator,
            lat_lon: LatLon::new(lat, lon),
        })
    }

    /// Encode anything that provides lon/lat, e.g. `(lon, lat)` or a `Point`.
    ///
    /// # Example
    /// ```
    /// use qthgeo_rs::Qth;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), qthgeo_rs::QthError> {
    /// let a = Qth::from_coordinate(&(-73.04, 42.48))?;
    /// let b = Qth::from_coordinate(&Point::new(-73.04, 42.48))?;
    /// assert_eq!(a.locator(), "FN32LL");
    /// assert_eq!(a, b);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_coordinate(coord: &impl Coordinate) -> Result<Self, QthError> {
        Self::from_position(coord.lat(), coord.lon())
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }

    pub fn lat_lon(&self) -> LatLon {
        self.lat_lon
    }

    pub fn lat(&self) -> f64 {
        self.lat_lon.lat
    }

    pub fn lon(&self) -> f64 {
        self.lat_lon.lon
    }

    /// The coordinate as a `geo_types::Point` (x = lon, y = lat).
    pub fn point(&self) -> Point<f64> {
        self.lat_lon.to_point()
    }

    /// Returns `(lat, lon)` in radians, for spherical geometry consumers.
    pub fn lat_lon_radians(&self) -> (f64, f64) {
        self.lat_lon.to_radians()
    }

    pub fn precision(&self) -> Precision {
        if self.locator.len() == Precision::Square.char_count() {
            Precision::Square
        } else {
            Precision::Subsquare
        }
    }

    fn cell(&self) -> Result<Cell, QthError> {
        decode_cell(&self.locator).map(|(_, cell)| cell)
    }

    /// Extent of the cell named by the locator.
    pub fn bounds(&self) -> Result<Rect<f64>, QthError> {
        Ok(self.cell()?.to_rect())
    }

    /// Converts the cell to a closed rectangular polygon.
    pub fn to_polygon(&self) -> Result<Polygon<f64>, QthError> {
        Ok(self.bounds()?.to_polygon())
    }
}

impl std::fmt::Display for Qth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.locator, self.lat_lon)
    }
}

impl std::str::FromStr for Qth {
    type Err = QthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_locator(s)
    }
}
