//! Subsquare tier: two letters A-X, 5' longitude by 2.5' latitude, offset within a square.

use crate::core::constants::{SUBSQUARE_ALPHABET, SUBSQUARE_SIZE, alphabet_index, split_axis};
use crate::util::coord::LatLon;
use crate::util::error::QthError;

/// Encodes a square residual into uppercase subsquare letters `[lon, lat]`.
pub fn encode(residual: LatLon) -> [char; 2] {
    let (lon_idx, _) = split_axis(residual.lon, SUBSQUARE_SIZE[0], SUBSQUARE_ALPHABET.len());
    let (lat_idx, _) = split_axis(residual.lat, SUBSQUARE_SIZE[1], SUBSQUARE_ALPHABET.len());

    [
        SUBSQUARE_ALPHABET[lon_idx] as char,
        SUBSQUARE_ALPHABET[lat_idx] as char,
    ]
}

/// Decodes subsquare letters `[lon, lat]`.
///
/// Returns `(offset, center_offset)`: the corner offset from the enclosing
/// square, and half a subsquare, which moves the corner to the cell center.
pub fn decode(letters: [char; 2]) -> Result<(LatLon, LatLon), QthError> {
    let lon_idx =
        alphabet_index(SUBSQUARE_ALPHABET, letters[0]).ok_or(QthError::InvalidCharacter {
            position: 5,
            found: letters[0],
        })?;
    let lat_idx =
        alphabet_index(SUBSQUARE_ALPHABET, letters[1]).ok_or(QthError::InvalidCharacter {
            position: 6,
            found: letters[1],
        })?;

    let offset = LatLon::new(
        lat_idx as f64 * SUBSQUARE_SIZE[1],
        lon_idx as f64 * SUBSQUARE_SIZE[0],
    );
    Ok((offset, center_offset()))
}

/// Half a subsquare, added when a 6-character locator is decoded to its center.
pub fn center_offset() -> LatLon {
    LatLon::new(SUBSQUARE_SIZE[1] / 2.0, SUBSQUARE_SIZE[0] / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode(LatLon::new(0.60416666333334, 1.625000003333334)), ['T', 'O']);
        assert_eq!(encode(LatLon::new(0.0, 0.0)), ['A', 'A']);
    }

    #[test]
    fn test_encode_square_upper_edge() {
        assert_eq!(encode(LatLon::new(1.0, 2.0)), ['X', 'X']);
        assert_eq!(encode(LatLon::new(0.999999999, 0.0)), ['A', 'X']);
    }

    #[test]
    fn test_decode() -> Result<(), QthError> {
        let (offset, center) = decode(['t', 'o'])?;
        assert!((offset.lon - 19.0 / 12.0).abs() < 1e-12);
        assert!((offset.lat - 14.0 / 24.0).abs() < 1e-12);
        assert!((center.lon - 1.0 / 24.0).abs() < 1e-12);
        assert!((center.lat - 1.0 / 48.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_decode_rejects_out_of_alphabet() {
        assert_eq!(
            decode(['Y', 'A']),
            Err(QthError::InvalidCharacter { position: 5, found: 'Y' })
        );
        assert_eq!(
            decode(['A', '1']),
            Err(QthError::InvalidCharacter { position: 6, found: '1' })
        );
    }
}
