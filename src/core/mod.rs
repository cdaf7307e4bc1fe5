pub mod constants;
pub mod field;
pub mod locator;
pub mod square;
pub mod subsquare;

pub use constants::{
    FIELD_ALPHABET, FIELD_SIZE, LAT_RANGE, LON_RANGE, SQUARE_ALPHABET, SQUARE_SIZE,
    SUBSQUARE_ALPHABET, SUBSQUARE_SIZE,
};
pub use locator::{
    Cell, Precision, decode_cell, decode_locator, encode_position, encode_position_with_precision,
};
