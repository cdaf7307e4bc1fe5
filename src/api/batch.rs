use crate::api::qth::Qth;
use crate::util::coord::Coordinate;
use crate::util::error::QthError;
use rayon::prelude::*;
use tracing::debug;

/// Configuration for bulk conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    pub parallel: bool,
    pub min_parallel_len: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_len: 1024,
        }
    }
}

impl BatchConfig {
    /// Create a config with defaults: parallel for inputs of 1024 items or more.
    ///
    /// # Example
    /// ```
    /// use qthgeo_rs::BatchConfig;
    ///
    /// let config = BatchConfig::new().parallel(false);
    /// let config = BatchConfig::new().min_parallel_len(64);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn min_parallel_len(mut self, len: usize) -> Self {
        self.min_parallel_len = len;
        self
    }

    fn use_parallel(&self, len: usize) -> bool {
        self.parallel && len >= self.min_parallel_len
    }
}

fn convert_all<T, F>(items: &[T], config: &BatchConfig, convert: F) -> Vec<Result<Qth, QthError>>
where
    T: Sync,
    F: Fn(&T) -> Result<Qth, QthError> + Sync + Send,
{
    let parallel = config.use_parallel(items.len());
    debug!(count = items.len(), parallel, "converting batch");

    if parallel {
        items.par_iter().map(convert).collect()
    } else {
        items.iter().map(convert).collect()
    }
}

/// Trait for decoding collections of locator strings.
///
/// Implemented for slices (and so `Vec`s) of anything that is `AsRef<str>`.
/// Output order matches input order; each item succeeds or fails on its own.
pub trait LocatorsToQth {
    fn decode_all(&self, config: &BatchConfig) -> Vec<Result<Qth, QthError>>;
}

impl<S: AsRef<str> + Sync> LocatorsToQth for [S] {
    fn decode_all(&self, config: &BatchConfig) -> Vec<Result<Qth, QthError>> {
        convert_all(self, config, |s| Qth::from_locator(s.as_ref()))
    }
}

/// Trait for encoding collections of positions.
///
/// Implemented for slices of `(lon, lat)` tuples, `Point`s and `LatLon`s.
pub trait PositionsToQth {
    fn encode_all(&self, config: &BatchConfig) -> Vec<Result<Qth, QthError>>;
}

impl<C: Coordinate + Sync> PositionsToQth for [C] {
    fn encode_all(&self, config: &BatchConfig) -> Vec<Result<Qth, QthError>> {
        convert_all(self, config, |c| Qth::from_coordinate(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::coord::LatLon;
    use geo_types::Point;

    #[test]
    fn test_locators_keep_order() {
        let locators = vec!["JN76", "76JN", "fn32ll", ""];
        let results = locators.decode_all(&BatchConfig::new());

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().map(|q| q.locator()), Ok("JN76"));
        assert!(matches!(results[1], Err(QthError::InvalidCharacter { .. })));
        assert_eq!(results[2].as_ref().map(|q| q.locator()), Ok("FN32LL"));
        assert_eq!(results[3], Err(QthError::InvalidLength(0)));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let positions: Vec<LatLon> = (0..2000)
            .map(|i| LatLon::new(-89.9 + (i as f64) * 0.0899, -179.9 + (i as f64) * 0.1799))
            .collect();

        let sequential = positions.encode_all(&BatchConfig::new().parallel(false));
        let parallel = positions.encode_all(&BatchConfig::new().min_parallel_len(1));

        assert_eq!(sequential, parallel);
        assert!(sequential.iter().all(|r| r.is_ok()));
    }

    #[test]
    fn test_points_and_tuples() {
        let points: [Point<f64>; 1] = [Point::new(15.625, 46.604)];
        let tuples: [(f64, f64); 2] = [(15.625, 46.604), (180.001, -90.0001)];

        let from_points = points.encode_all(&BatchConfig::default());
        let from_tuples = tuples.encode_all(&BatchConfig::default());

        assert_eq!(from_points[0], from_tuples[0]);
        assert_eq!(from_tuples[0].as_ref().map(|q| q.locator()), Ok("JN76TO"));
        assert!(matches!(from_tuples[1], Err(QthError::InvalidCoordinate { .. })));
    }

    #[test]
    fn test_use_parallel_threshold() {
        let config = BatchConfig::new().min_parallel_len(10);
        assert!(!config.use_parallel(9));
        assert!(config.use_parallel(10));
        assert!(!config.parallel(false).use_parallel(100));
    }
}
