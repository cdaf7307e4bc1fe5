//! Assembles the field, square and subsquare tiers into 4 or 6 character locators.

use crate::core::{field, square, subsquare};
use crate::util::coord::LatLon;
use crate::util::error::QthError;
use geo_types::{Rect, coord};
use tracing::debug;

/// Number of tiers carried by a locator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Field + square, 4 characters
    Square,
    /// Field + square + subsquare, 6 characters
    #[default]
    Subsquare,
}

impl Precision {
    /// Locator length for this precision.
    pub fn char_count(self) -> usize {
        match self {
            Precision::Square => 4,
            Precision::Subsquare => 6,
        }
    }

    /// Maps a locator length to a precision; only 4 and 6 are valid.
    pub fn from_len(len: usize) -> Result<Self, QthError> {
        match len {
            4 => Ok(Precision::Square),
            6 => Ok(Precision::Subsquare),
            other => Err(QthError::InvalidLength(other)),
        }
    }
}

/// The lat/lon rectangle named by a locator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// South-west corner in degrees
    pub corner: LatLon,
    /// Half the cell size in degrees; corner + half is the center
    pub half: LatLon,
    pub precision: Precision,
}

impl Cell {
    pub fn center(&self) -> LatLon {
        LatLon::new(self.corner.lat + self.half.lat, self.corner.lon + self.half.lon)
    }

    /// Cell extent as a `geo_types::Rect` with x = lon, y = lat.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.corner.lon, y: self.corner.lat },
            coord! {
                x: self.corner.lon + 2.0 * self.half.lon,
                y: self.corner.lat + 2.0 * self.half.lat,
            },
        )
    }
}

/// Validates a locator and returns its canonical (uppercase) form with its cell.
pub fn decode_cell(locator: &str) -> Result<(String, Cell), QthError> {
    let chars: Vec<char> = locator.chars().collect();
    let precision = Precision::from_len(chars.len())?;

    let base = field::decode([chars[0], chars[1]])?;
    let offset = square::decode([chars[2], chars[3]])?;
    let mut corner = LatLon::new(base.lat + offset.lat, base.lon + offset.lon);

    let half = match precision {
        Precision::Square => square::center_offset(),
        Precision::Subsquare => {
            let (offset, half) = subsquare::decode([chars[4], chars[5]])?;
            corner.lat += offset.lat;
            corner.lon += offset.lon;
            half
        }
    };

    let canonical = chars.iter().map(char::to_ascii_uppercase).collect();
    Ok((
        canonical,
        Cell {
            corner,
            half,
            precision,
        },
    ))
}

/// Decodes a 4 or 6 character locator to the center of its cell.
///
/// Letters are accepted in any case; the returned locator is uppercase.
pub fn decode_locator(locator: &str) -> Result<(String, LatLon), QthError> {
    match decode_cell(locator) {
        Ok((canonical, cell)) => {
            let center = cell.center();
            debug!(locator, %canonical, lat = center.lat, lon = center.lon, "decoded locator");
            Ok((canonical, center))
        }
        Err(e) => {
            debug!(locator, error = %e, "rejected locator");
            Err(e)
        }
    }
}

/// Encodes a position to a full precision (6 character) locator.
pub fn encode_position(lat: f64, lon: f64) -> Result<String, QthError> {
    encode_position_with_precision(lat, lon, Precision::Subsquare)
}

/// Encodes a position, stopping after the tier selected by `precision`.
pub fn encode_position_with_precision(
    lat: f64,
    lon: f64,
    precision: Precision,
) -> Result<String, QthError> {
    if let Err(e) = LatLon::new(lat, lon).validate() {
        debug!(lat, lon, error = %e, "rejected position");
        return Err(e);
    }

    let (field_chars, rest) = field::encode(lat, lon);
    let (square_chars, rest) = square::encode(rest);

    let mut locator = String::with_capacity(precision.char_count());
    locator.extend(field_chars);
    locator.extend(square_chars);
    if precision == Precision::Subsquare {
        locator.extend(subsquare::encode(rest));
    }

    debug!(lat, lon, %locator, "encoded position");
    Ok(locator)
}
