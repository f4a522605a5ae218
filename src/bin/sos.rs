use chrono::Local;
use clap::Parser;
use std::error::Error;

use medassist::{
    sdk::config::IpStackConfig,
    sdk::directory::emergency_hospital,
    sdk::geo::distance::haversine_km,
    sdk::geo::rank::Located,
    sdk::locate::{locate_or_default, provider::IpStackProvider},
    sdk::util::{log::init_logging, rate_limit::ipstack_limiter},
};

/// Raise an emergency alert pointing at the nearest hospital
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    dotenvy::dotenv().ok();

    let _cli = Cli::parse();

    let config = IpStackConfig::from_env()?;
    let provider = IpStackProvider::new(config.access_key, ipstack_limiter());
    let location = locate_or_default(&provider);

    println!("User's location: {}, {}", location.city, location.country);
    println!(
        "User coordinates: {}, {}",
        location.latitude, location.longitude
    );

    let hospital = emergency_hospital();
    let mut distance = haversine_km(location.coord(), hospital.coord());
    // A caller standing on the hospital pin still gets a nonzero displayed
    // distance.
    if distance == 0.0 {
        distance = 0.02;
    }

    println!("Nearest Hospital: {}", hospital.name);
    println!("Address: {}", hospital.address);
    println!("Rating: {} stars", hospital.rating);
    println!("Distance: {:.2} km away", distance);

    log::info!("SOS raised at {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("SOS SENT!!");

    Ok(())
}
