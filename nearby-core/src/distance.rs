use crate::location::Location;

/// Mean Earth radius in kilometers (spherical model)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the distance between two locations
pub trait DistanceCalculator {
    /// Distance in kilometers
    fn distance(&self, from: &Location, to: &Location) -> f64;
}

/// Great-circle distance on a sphere of radius [`EARTH_RADIUS_KM`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceCalculator for Haversine {
    fn distance(&self, from: &Location, to: &Location) -> f64 {
        haversine_km(from, to)
    }
}

/// Haversine formula over two points given in degrees
pub fn haversine_km(from: &Location, to: &Location) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lon1 = from.longitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let lon2 = to.longitude.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;
    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
