use anyhow::Result;
use nearby_core::{Candidates, Geocoder, GeocoderConfig, GoogleMapsGeocoder, LocationFinder};

mod cli;

fn main() -> Result<()> {
    let args = cli::parse_args();

    // Initialize logger with appropriate level based on verbose flag
    if std::env::var("RUST_LOG").is_err() {
        if args.verbose {
            std::env::set_var("RUST_LOG", "debug");
        } else {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    let api_key = args.api_key.clone().ok_or_else(|| {
        anyhow::anyhow!("An API key is required. Pass --api-key or set GOOGLE_MAPS_API_KEY.")
    })?;

    let geocoder = GoogleMapsGeocoder::new(GeocoderConfig::with_api_key(api_key))?;

    let Some(path) = &args.locations else {
        let location = geocoder.geocode(&args.address)?;
        println!("Geocoded location for address '{}':", args.address);
        println!("Latitude: {:.6}", location.latitude);
        println!("Longitude: {:.6}", location.longitude);
        return Ok(());
    };

    let candidates = Candidates::load(path)?;
    if candidates.is_empty() {
        log::warn!("No candidate locations in {}", path.display());
    }
    log::info!("Searching {} candidate locations", candidates.len());

    let finder = LocationFinder::new(geocoder, candidates);
    match finder.find_nearest(&args.address)? {
        Some(nearest) => {
            println!("Nearest location to '{}':", args.address);
            println!("{} ({:.2} km)", nearest.name, nearest.distance_km);
        }
        None => println!("No candidate locations to compare against '{}'", args.address),
    }

    Ok(())
}
