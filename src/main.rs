use qthgeo_rs::{Qth, QthError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), QthError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let lat = 46.60416666333334;
    let lon = 15.625000003333334;

    let qth = Qth::from_position(lat, lon)?;
    println!("Locator: {}", qth.locator());
    println!("Position: {}", qth.lat_lon());

    let decoded = Qth::from_locator("fn32ll")?;
    println!("Decoded: {}", decoded);
    println!("Cell: {:?}", decoded.bounds()?);

    Ok(())
}
