/// Error type for qthgeo-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum QthError {
    /// The locator is not 4 or 6 characters long.
    InvalidLength(usize),
    /// A locator character is outside the alphabet of its tier (position is 1-based).
    InvalidCharacter { position: usize, found: char },
    /// A stored locator is valid but not in uppercase canonical form.
    NonCanonicalLocator(String),
    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    InvalidCoordinate { lat: f64, lon: f64 },
}

impl std::fmt::Display for QthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QthError::InvalidLength(len) => {
                write!(f, "Invalid locator length: {} (expected 4 or 6)", len)
            }
            QthError::InvalidCharacter { position, found } => {
                write!(f, "Invalid locator character {:?} at position {}", found, position)
            }
            QthError::NonCanonicalLocator(loc) => {
                write!(f, "Locator {:?} is not in canonical uppercase form", loc)
            }
            QthError::InvalidCoordinate { lat, lon } => {
                write!(f, "Invalid coordinate: lat {}, lon {}", lat, lon)
            }
        }
    }
}

impl std::error::Error for QthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            QthError::InvalidLength(5).to_string(),
            "Invalid locator length: 5 (expected 4 or 6)"
        );
        assert_eq!(
            QthError::InvalidCharacter { position: 1, found: '7' }.to_string(),
            "Invalid locator character '7' at position 1"
        );
        assert_eq!(
            QthError::NonCanonicalLocator("jn76".to_string()).to_string(),
            "Locator \"jn76\" is not in canonical uppercase form"
        );
        assert_eq!(
            QthError::InvalidCoordinate { lat: -90.5, lon: 0.0 }.to_string(),
            "Invalid coordinate: lat -90.5, lon 0"
        );
    }
}
