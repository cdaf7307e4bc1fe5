//! # qthgeo-rs
//!
//! Maidenhead grid locator ("QTH locator") conversion. A locator names a
//! cell in three tiers: field (`JN`, 20° x 10°), square (`76`, 2° x 1°)
//! and an optional subsquare (`TO`, 5' x 2.5').
//!
//! There are currently three main entry points.
//!
//! ### 1. Plain conversion functions
//!
//! ```
//! use qthgeo_rs::{convert_coordinate_to_locator, convert_locator_to_coordinate};
//!
//! # fn main() -> Result<(), qthgeo_rs::QthError> {
//! let (locator, lat, lon) = convert_locator_to_coordinate("jn76")?;
//! assert_eq!(locator, "JN76");
//! assert_eq!((lat, lon), (46.5, 15.0));
//!
//! let locator = convert_coordinate_to_locator(42.479, -73.042)?;
//! assert_eq!(locator, "FN32LL");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Qth` - Single Result Object
//!
//! ```
//! use qthgeo_rs::Qth;
//!
//! # fn main() -> Result<(), qthgeo_rs::QthError> {
//! let qth = Qth::from_locator("FN32LL")?;
//! println!("{}", qth);
//! let cell = qth.to_polygon()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `LocatorsToQth` / `PositionsToQth` - Bulk Conversion
//!
//! ```
//! use qthgeo_rs::{BatchConfig, LocatorsToQth, PositionsToQth};
//!
//! let decoded = ["JN76TO", "FN32LL", "bad"].decode_all(&BatchConfig::new());
//! assert!(decoded[2].is_err());
//!
//! let encoded = [(15.625, 46.604)].encode_all(&BatchConfig::new().parallel(false));
//! assert_eq!(encoded[0].as_ref().map(|q| q.locator()), Ok("JN76TO"));
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use api::{BatchConfig, LocatorsToQth, PositionsToQth, Qth};
pub use core::{
    Cell, FIELD_SIZE, LAT_RANGE, LON_RANGE, Precision, SQUARE_SIZE, SUBSQUARE_SIZE, decode_cell,
    decode_locator, encode_position, encode_position_with_precision,
};
pub use util::{Coordinate, LatLon, QthError};

pub use geo_types;

/// Decodes a 4 or 6 character locator to `(canonical_locator, lat, lon)`.
///
/// The coordinate is the center of the named square or subsquare.
pub fn convert_locator_to_coordinate(locator: &str) -> Result<(String, f64, f64), QthError> {
    let (canonical, ll) = decode_locator(locator)?;
    Ok((canonical, ll.lat, ll.lon))
}

/// Encodes a latitude/longitude pair to a 6 character locator.
pub fn convert_coordinate_to_locator(latitude: f64, longitude: f64) -> Result<String, QthError> {
    encode_position(latitude, longitude)
}
