//! Square tier: two digits 0-9, 2° longitude by 1° latitude, offset within a field.

use crate::core::constants::{SQUARE_ALPHABET, SQUARE_SIZE, alphabet_index, split_axis};
use crate::util::coord::LatLon;
use crate::util::error::QthError;

/// Encodes a field residual into square digits `[lon, lat]` plus the
/// residual inside the selected square.
pub fn encode(residual: LatLon) -> ([char; 2], LatLon) {
    let (lon_idx, lon_rest) = split_axis(residual.lon, SQUARE_SIZE[0], SQUARE_ALPHABET.len());
    let (lat_idx, lat_rest) = split_axis(residual.lat, SQUARE_SIZE[1], SQUARE_ALPHABET.len());

    let digits = [
        SQUARE_ALPHABET[lon_idx] as char,
        SQUARE_ALPHABET[lat_idx] as char,
    ];
    (digits, LatLon::new(lat_rest, lon_rest))
}

/// Decodes square digits `[lon, lat]` into the offset from the enclosing field's corner.
pub fn decode(digits: [char; 2]) -> Result<LatLon, QthError> {
    let lon_idx = alphabet_index(SQUARE_ALPHABET, digits[0]).ok_or(QthError::InvalidCharacter {
        position: 3,
        found: digits[0],
    })?;
    let lat_idx = alphabet_index(SQUARE_ALPHABET, digits[1]).ok_or(QthError::InvalidCharacter {
        position: 4,
        found: digits[1],
    })?;

    Ok(LatLon::new(
        lat_idx as f64 * SQUARE_SIZE[1],
        lon_idx as f64 * SQUARE_SIZE[0],
    ))
}

/// Half a square, added when a 4-character locator is decoded to its center.
pub fn center_offset() -> LatLon {
    LatLon::new(SQUARE_SIZE[1] / 2.0, SQUARE_SIZE[0] / 2.0)
}
