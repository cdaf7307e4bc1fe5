//! Field tier: two letters A-R, 20° longitude by 10° latitude.

use crate::core::constants::{
    FIELD_ALPHABET, FIELD_SIZE, LAT_RANGE, LON_RANGE, alphabet_index, split_axis,
};
use crate::util::coord::LatLon;
use crate::util::error::QthError;

/// Encodes an absolute position into field letters `[lon, lat]`.
///
/// Returns the letters and the residual offset inside the selected field,
/// within [0, 20] lon and [0, 10] lat, for the square tier.
pub fn encode(lat: f64, lon: f64) -> ([char; 2], LatLon) {
    let (lon_idx, lon_rest) = split_axis(lon - LON_RANGE[0], FIELD_SIZE[0], FIELD_ALPHABET.len());
    let (lat_idx, lat_rest) = split_axis(lat - LAT_RANGE[0], FIELD_SIZE[1], FIELD_ALPHABET.len());

    let letters = [
        FIELD_ALPHABET[lon_idx] as char,
        FIELD_ALPHABET[lat_idx] as char,
    ];
    (letters, LatLon::new(lat_rest, lon_rest))
}

/// Decodes field letters `[lon, lat]` into the field's south-west corner
/// in absolute degrees.
pub fn decode(letters: [char; 2]) -> Result<LatLon, QthError> {
    let lon_idx = alphabet_index(FIELD_ALPHABET, letters[0]).ok_or(QthError::InvalidCharacter {
        position: 1,
        found: letters[0],
    })?;
    let lat_idx = alphabet_index(FIELD_ALPHABET, letters[1]).ok_or(QthError::InvalidCharacter {
        position: 2,
        found: letters[1],
    })?;

    Ok(LatLon::new(
        LAT_RANGE[0] + lat_idx as f64 * FIELD_SIZE[1],
        LON_RANGE[0] + lon_idx as f64 * FIELD_SIZE[0],
    ))
}
