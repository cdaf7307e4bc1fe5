pub mod batch;
pub mod qth;

pub use batch::{BatchConfig, LocatorsToQth, PositionsToQth};
pub use qth::Qth;
