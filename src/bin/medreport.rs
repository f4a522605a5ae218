use clap::Parser;
use std::{error::Error, fs, path::PathBuf};

use medassist::{
    sdk::config::OllamaConfig, sdk::report::client::ReportClient, sdk::util::log::init_logging,
};

/// Generate a medical report from a multi-day symptom journal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// [Optional] Path to a journal text file; uses a built-in sample when omitted
    #[arg(short, long)]
    journal: Option<PathBuf>,
}

const SAMPLE_JOURNAL: &str = "\
Day 1: Today, I woke up with a sore throat and a slight fever. My body feels achy, and I've been shivering on and off throughout the day.
Day 2: Today, my throat still hurts, and my fever hasn't gone down. I feel very tired and weak, and I've been coughing more than yesterday.
Day 3: My fever is slightly better today, but I'm still coughing a lot. My throat feels less sore, but now I have a headache that won't go away.";

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let journal = match &cli.journal {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE_JOURNAL.to_string(),
    };

    let config = OllamaConfig::from_env();
    log::info!("Using model \"{}\" at {}", config.model, config.base_url);
    let client = ReportClient::new(config);

    println!("Journal:");
    println!("{}", journal);

    let report = client.generate(&journal)?;
    println!("\nGenerated Medical Report:");
    println!("{}", report);

    Ok(())
}
