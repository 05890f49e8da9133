use anyhow::Result;

// Internal modules (private)
mod candidates;
mod distance;
mod geocoding;
mod location;

// Re-export public types
pub use candidates::Candidates;
pub use distance::{haversine_km, DistanceCalculator, Haversine, EARTH_RADIUS_KM};
pub use geocoding::{Geocoder, GeocoderConfig, GoogleMapsGeocoder, GOOGLE_GEOCODE_URL};
pub use location::{format_location, Location};

/// Result of a nearest-location lookup
#[derive(Debug, Clone, PartialEq)]
pub struct NearestLocation {
    pub name: String,
    /// Distance from the target in kilometers
    pub distance_km: f64,
}

/// Finds the candidate closest to a geocoded address
pub struct LocationFinder<G, D = Haversine> {
    geocoder: G,
    calculator: D,
    candidates: Candidates,
}

impl<G: Geocoder> LocationFinder<G, Haversine> {
    /// Create a finder using the Haversine distance
    pub fn new(geocoder: G, candidates: Candidates) -> Self {
        Self::with_calculator(geocoder, Haversine, candidates)
    }
}

impl<G: Geocoder, D: DistanceCalculator> LocationFinder<G, D> {
    /// Create a finder with a custom distance calculator
    pub fn with_calculator(geocoder: G, calculator: D, candidates: Candidates) -> Self {
        Self {
            geocoder,
            calculator,
            candidates,
        }
    }

    pub fn candidates(&self) -> &Candidates {
        &self.candidates
    }

    /// Geocode the address and return the closest candidate, or None when
    /// there are no candidates
    pub fn find_nearest(&self, address: &str) -> Result<Option<NearestLocation>> {
        let target = self.geocoder.geocode(address)?;
        log::debug!(
            "'{}' geocoded to {}",
            address,
            format_location(&target)
        );
        Ok(self.nearest_to(&target))
    }

    /// Linear scan over the candidates; ties keep the first name in order
    pub fn nearest_to(&self, target: &Location) -> Option<NearestLocation> {
        let mut nearest: Option<NearestLocation> = None;

        for (name, loc) in &self.candidates {
            let distance = self.calculator.distance(target, loc);
            log::debug!("{}: {:.3} km", name, distance);

            let closer = nearest
                .as_ref()
                .map(|best| distance < best.distance_km)
                .unwrap_or(true);
            if closer {
                nearest = Some(NearestLocation {
                    name: name.clone(),
                    distance_km: distance,
                });
            }
        }

        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Geocoder returning a fixed answer
    struct FixedGeocoder(Location);

    impl Geocoder for FixedGeocoder {
        fn geocode(&self, _address: &str) -> Result<Location> {
            Ok(self.0)
        }
    }

    struct FailingGeocoder;

    impl Geocoder for FailingGeocoder {
        fn geocode(&self, address: &str) -> Result<Location> {
            anyhow::bail!("No results found for address: {}", address)
        }
    }

    /// Distance ignoring geometry, so every candidate ties
    struct ConstantDistance;

    impl DistanceCalculator for ConstantDistance {
        fn distance(&self, _from: &Location, _to: &Location) -> f64 {
            42.0
        }
    }

    fn bay_area() -> Candidates {
        vec![
            ("Apple Park", Location::new(37.3349, -122.0090)),
            ("Googleplex", Location::new(37.4220, -122.0841)),
            ("Golden Gate Bridge", Location::new(37.8199, -122.4783)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_find_nearest_obvious_winner() {
        let target = Location::new(37.4224764, -122.0842499);
        let finder = LocationFinder::new(FixedGeocoder(target), bay_area());

        let nearest = finder
            .find_nearest("1600 Amphitheatre Parkway")
            .unwrap()
            .unwrap();
        assert_eq!(nearest.name, "Googleplex");
        assert!(nearest.distance_km < 0.1);
    }

    #[test]
    fn test_distance_matches_haversine() {
        let target = Location::new(37.7749, -122.4194);
        let finder = LocationFinder::new(FixedGeocoder(target), bay_area());

        let nearest = finder.find_nearest("San Francisco").unwrap().unwrap();
        assert_eq!(nearest.name, "Golden Gate Bridge");
        let expected = haversine_km(&target, &Location::new(37.8199, -122.4783));
        assert_eq!(nearest.distance_km, expected);
    }

    #[test]
    fn test_geocode_failure_propagates() {
        let finder = LocationFinder::new(FailingGeocoder, bay_area());
        let err = finder.find_nearest("Atlantis").unwrap_err();
        assert!(err.to_string().contains("Atlantis"));
    }

    #[test]
    fn test_empty_candidates() {
        let finder = LocationFinder::new(FixedGeocoder(Location::new(0.0, 0.0)), Candidates::new());

        assert_eq!(finder.find_nearest("anywhere").unwrap(), None);
    }

    #[test]
    fn test_unnamed_candidate_still_wins() {
        let candidates = Candidates::from_json(
            r#"{"": {"lat": 0.0, "lng": 0.0}, "far": {"lat": 10.0, "lng": 10.0}}"#,
        )
        .unwrap();
        let finder = LocationFinder::new(FixedGeocoder(Location::new(0.0, 0.0)), candidates);

        let nearest = finder.find_nearest("origin").unwrap();
        assert_eq!(
            nearest,
            Some(NearestLocation {
                name: String::new(),
                distance_km: 0.0,
            })
        );
    }

    #[test]
    fn test_tie_keeps_first_name() {
        let finder = LocationFinder::with_calculator(
            FixedGeocoder(Location::new(0.0, 0.0)),
            ConstantDistance,
            bay_area(),
        );

        let nearest = finder.nearest_to(&Location::new(0.0, 0.0)).unwrap();
        assert_eq!(nearest.name, "Apple Park");
        assert_eq!(nearest.distance_km, 42.0);
    }

    #[test]
    fn test_equidistant_candidates_resolve_by_name() {
        let candidates: Candidates = vec![
            ("north", Location::new(1.0, 0.0)),
            ("east", Location::new(0.0, 1.0)),
        ]
        .into_iter()
        .collect();
        let finder = LocationFinder::new(FixedGeocoder(Location::new(0.0, 0.0)), candidates);

        // 1 degree north and 1 degree east of the origin are the same distance
        let nearest = finder.nearest_to(&Location::new(0.0, 0.0)).unwrap();
        assert_eq!(nearest.name, "east");
    }

    #[test]
    fn test_nearest_to_skips_geocoding() {
        let finder = LocationFinder::new(FailingGeocoder, bay_area());
        let nearest = finder.nearest_to(&Location::new(37.33, -122.01)).unwrap();
        assert_eq!(nearest.name, "Apple Park");
    }
}
