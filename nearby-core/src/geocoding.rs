use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

use crate::location::Location;

/// Google Maps Geocoding API endpoint
pub const GOOGLE_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Converts a free-text address into coordinates
pub trait Geocoder {
    fn geocode(&self, address: &str) -> Result<Location>;
}

/// Configuration for the HTTP geocoder
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Endpoint receiving the `address` and `key` query parameters
    pub base_url: String,
    /// Provider API key
    pub api_key: String,
    /// Request timeout; None waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: GOOGLE_GEOCODE_URL.to_string(),
            api_key: String::new(),
            timeout: None,
        }
    }
}

impl GeocoderConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

/// Geocoding API response structure
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Vec<GeocodeResult>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

/// Geocoder backed by the Google Maps Geocoding API
pub struct GoogleMapsGeocoder {
    config: GeocoderConfig,
    client: Client,
}

impl GoogleMapsGeocoder {
    /// Create a geocoder with its own blocking HTTP client
    pub fn new(config: GeocoderConfig) -> Result<Self> {
        let user_agent = format!("nearby/{}", env!("CARGO_PKG_VERSION"));

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_client(config, client))
    }

    /// Create a geocoder that reuses an existing HTTP client
    ///
    /// The client's own settings apply; `config.timeout` is ignored here.
    pub fn with_client(config: GeocoderConfig, client: Client) -> Self {
        Self { config, client }
    }
}

impl Geocoder for GoogleMapsGeocoder {
    fn geocode(&self, address: &str) -> Result<Location> {
        log::debug!("Geocoding '{}' via {}", address, self.config.base_url);

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("address", address), ("key", self.config.api_key.as_str())])
            .send()
            .context("Failed to send geocoding request")?;

        let status = response.status();
        if status != StatusCode::OK {
            anyhow::bail!(
                "Geocoding API request failed with status code: {}",
                status.as_u16()
            );
        }

        let body = response
            .text()
            .context("Failed to read geocoding response")?;

        parse_geocode_response(address, &body)
    }
}

/// Extract the first result's location from a provider response body
fn parse_geocode_response(address: &str, body: &str) -> Result<Location> {
    let data: GeocodeResponse =
        serde_json::from_str(body).context("Failed to parse geocoding response")?;

    match data.results.first() {
        Some(result) => {
            if data.results.len() > 1 {
                log::debug!(
                    "{} results for '{}', using the first",
                    data.results.len(),
                    address
                );
            }
            Ok(result.geometry.location)
        }
        None => {
            let status = data.status.as_deref().unwrap_or("unknown status");
            match data.error_message {
                Some(msg) => anyhow::bail!(
                    "No results found for address: {} ({}: {})",
                    address,
                    status,
                    msg
                ),
                None => anyhow::bail!("No results found for address: {} ({})", address, status),
            }
        }
    }
}
