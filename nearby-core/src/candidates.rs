use anyhow::{Context, Result};
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::location::Location;

/// Named locations to search, keyed by unique name
///
/// Stored sorted by name so scans visit candidates in a reproducible order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidates {
    entries: BTreeMap<String, Location>,
}

impl Candidates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load candidates from a JSON object mapping name to `{"lat", "lng"}`
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read candidates from {}", path.display()))?;
        let candidates = Self::from_json(&data)
            .with_context(|| format!("Invalid candidates file {}", path.display()))?;
        log::debug!(
            "Loaded {} candidates from {}",
            candidates.len(),
            path.display()
        );
        Ok(candidates)
    }

    /// Parse candidates from a JSON string, rejecting repeated names
    pub fn from_json(data: &str) -> Result<Self> {
        let candidates: Candidates = serde_json::from_str(data)?;

        for (name, loc) in &candidates {
            if !loc.is_valid() {
                log::warn!(
                    "Candidate '{}' has out-of-range coordinates {},{}",
                    name,
                    loc.latitude,
                    loc.longitude
                );
            }
        }

        Ok(candidates)
    }

    /// Add or replace a candidate, returning the previous location for that name
    pub fn insert(&mut self, name: impl Into<String>, location: Location) -> Option<Location> {
        self.entries.insert(name.into(), location)
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate candidates in name order
    pub fn iter(&self) -> btree_map::Iter<'_, String, Location> {
        self.entries.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, Location)> for Candidates {
    fn from_iter<I: IntoIterator<Item = (S, Location)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(name, loc)| (name.into(), loc)).collect(),
        }
    }
}

impl<'de> Deserialize<'de> for Candidates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CandidatesVisitor;

        impl<'de> Visitor<'de> for CandidatesVisitor {
            type Value = Candidates;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of location names to {\"lat\", \"lng\"}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = BTreeMap::new();
                while let Some((name, loc)) = map.next_entry::<String, Location>()? {
                    if entries.contains_key(&name) {
                        return Err(de::Error::custom(format!(
                            "duplicate location name '{}'",
                            name
                        )));
                    }
                    entries.insert(name, loc);
                }
                Ok(Candidates { entries })
            }
        }

        deserializer.deserialize_map(CandidatesVisitor)
    }
}

impl<'a> IntoIterator for &'a Candidates {
    type Item = (&'a String, &'a Location);
    type IntoIter = btree_map::Iter<'a, String, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
