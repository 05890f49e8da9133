use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees
///
/// Serialized with the same field names the geocoding provider uses
/// (`lat`/`lng`), so provider responses and candidate files share one type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if latitude is within [-90, 90] and longitude within [-180, 180]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Formats a location as a compact hemisphere-tagged string
/// Example: "37.42N_122.08W"
pub fn format_location(loc: &Location) -> String {
    let lat_dir = if loc.latitude >= 0.0 { "N" } else { "S" };
    let lon_dir = if loc.longitude >= 0.0 { "E" } else { "W" };

    format!(
        "{:.2}{}_{:.2}{}",
        loc.latitude.abs(),
        lat_dir,
        loc.longitude.abs(),
        lon_dir
    )
}
