use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_ADDRESS: &str = "1600 Amphitheatre Parkway, Mountain View, CA";

/// Geocode an address and find the nearest known location
#[derive(Parser, Debug)]
#[command(name = "nearby")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Geocodes an address and finds the nearest location from a list", long_about = None)]
pub struct Args {
    /// Address to geocode
    #[arg(value_name = "ADDRESS", default_value = DEFAULT_ADDRESS)]
    pub address: String,

    /// Google Maps API key
    #[arg(long = "api-key", env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// JSON file mapping location names to {"lat", "lng"}
    #[arg(short = 'l', long = "locations", value_name = "FILE")]
    pub locations: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Parses command-line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
