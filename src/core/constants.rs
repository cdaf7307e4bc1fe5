/// Field letters, index 0-17
pub const FIELD_ALPHABET: &[u8; 18] = b"ABCDEFGHIJKLMNOPQR";

/// Square digits, index 0-9
pub const SQUARE_ALPHABET: &[u8; 10] = b"0123456789";

/// Subsquare letters, index 0-23
pub const SUBSQUARE_ALPHABET: &[u8; 24] = b"ABCDEFGHIJKLMNOPQRSTUVWX";

/// Field cell size [lon, lat] in degrees
pub const FIELD_SIZE: [f64; 2] = [20.0, 10.0];

/// Square cell size [lon, lat] in degrees
pub const SQUARE_SIZE: [f64; 2] = [2.0, 1.0];

/// Subsquare cell size [lon, lat] in degrees (5' x 2.5')
pub const SUBSQUARE_SIZE: [f64; 2] = [2.0 / 24.0, 1.0 / 24.0];

/// Latitude range [min, max] in degrees, inclusive
pub const LAT_RANGE: [f64; 2] = [-90.0, 90.0];

/// Longitude range [min, max] in degrees, inclusive
pub const LON_RANGE: [f64; 2] = [-180.0, 180.0];

/// Picks the cell index along one axis and returns it with the residual
/// left inside that cell. Indices are clamped so the upper edge of the
/// range (lat = 90, lon = 180) falls into the last cell.
pub(crate) fn split_axis(value: f64, size: f64, cells: usize) -> (usize, f64) {
    let max = (cells - 1) as f64;
    let index = (value / size).floor().clamp(0.0, max);
    let residual = (value - index * size).max(0.0);
    (index as usize, residual)
}

/// Position of `ch` in `alphabet`, ignoring ASCII case.
pub(crate) fn alphabet_index(alphabet: &[u8], ch: char) -> Option<usize> {
    if !ch.is_ascii() {
        return None;
    }
    let upper = ch.to_ascii_uppercase() as u8;
    alphabet.iter().position(|&c| c == upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_tile_their_parent() {
        assert_eq!(FIELD_SIZE[0] * 18.0, 360.0);
        assert_eq!(FIELD_SIZE[1] * 18.0, 180.0);
        assert_eq!(SQUARE_SIZE[0] * 10.0, FIELD_SIZE[0]);
        assert_eq!(SQUARE_SIZE[1] * 10.0, FIELD_SIZE[1]);
        assert!((SUBSQUARE_SIZE[0] * 24.0 - SQUARE_SIZE[0]).abs() < 1e-12);
        assert!((SUBSQUARE_SIZE[1] * 24.0 - SQUARE_SIZE[1]).abs() < 1e-12);
    }

    #[test]
    fn test_alphabet_index() {
        assert_eq!(alphabet_index(FIELD_ALPHABET, 'j'), Some(9));
        assert_eq!(alphabet_index(FIELD_ALPHABET, 'R'), Some(17));
        assert_eq!(alphabet_index(FIELD_ALPHABET, 'S'), None);
        assert_eq!(alphabet_index(SUBSQUARE_ALPHABET, 'x'), Some(23));
        assert_eq!(alphabet_index(SQUARE_ALPHABET, '7'), Some(7));
        assert_eq!(alphabet_index(SQUARE_ALPHABET, 'A'), None);
        assert_eq!(alphabet_index(FIELD_ALPHABET, 'Ä'), None);
    }

    #[test]
    fn test_split_axis() {
        let (index, residual) = split_axis(195.625, 20.0, 18);
        assert_eq!(index, 9);
        assert!((residual - 15.625).abs() < 1e-9);
    }

    #[test]
    fn test_split_axis_clamps_upper_edge() {
        let (index, residual) = split_axis(180.0, 10.0, 18);
        assert_eq!(index, 17);
        assert!((residual - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_split_axis_never_negative() {
        let (index, residual) = split_axis(-1e-15, 2.0, 10);
        assert_eq!(index, 0);
        assert_eq!(residual, 0.0);
    }
}
