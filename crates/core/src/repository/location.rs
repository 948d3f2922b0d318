use std::{collections::HashMap, sync::Arc};

use tracing::debug;

use super::{LocationRepository, StoreError};
use crate::models::{sample, Location, UnLocode};

/// Known locations, fixed when the store is built.
///
/// There is no write operation, so the map is shared between clones without
/// a lock.
#[derive(Debug, Clone, Default)]
pub struct InMemLocationRepository {
    locations: Arc<HashMap<UnLocode, Location>>,
}

impl InMemLocationRepository {
    /// Create a store that knows no locations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. A later location with the same code replaces an earlier one.
    pub fn with_locations(locations: impl IntoIterator<Item = Location>) -> Self {
        let locations: HashMap<_, _> = locations
            .into_iter()
            .map(|location| (location.unlocode.clone(), location))
            .collect();
        debug!(count = locations.len(), "seeded location store");
        Self {
            locations: Arc::new(locations),
        }
    }

    /// Store seeded with the sample locations.
    pub fn sample() -> Self {
        Self::with_locations(sample::locations())
    }

    /// Number of known locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// True when no locations are known.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl LocationRepository for InMemLocationRepository {
    fn find(&self, unlocode: &UnLocode) -> Result<Location, StoreError> {
        self.locations
            .get(unlocode)
            .cloned()
            .ok_or_else(|| StoreError::UnknownLocation(unlocode.clone()))
    }

    fn find_all(&self) -> Vec<Location> {
        self.locations.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn find_seeded_location() {
        let repo = InMemLocationRepository::with_locations([Location::new("SESO", "Stockholm")]);

        let found = repo.find(&UnLocode::new("SESO")).unwrap();
        assert_eq!(found.name, "Stockholm");
        assert_eq!(
            repo.find(&UnLocode::new("ZZZZ")),
            Err(StoreError::UnknownLocation(UnLocode::new("ZZZZ")))
        );
    }

    #[test]
    fn sample_store_knows_the_reference_ports() {
        let repo = InMemLocationRepository::sample();
        let names: HashSet<_> = repo.find_all().into_iter().map(|l| l.name).collect();
        let expected: HashSet<_> = [
            "Stockholm",
            "Melbourne",
            "Hongkong",
            "Tokyo",
            "Rotterdam",
            "Hamburg",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        assert_eq!(names, expected);
        assert!(repo.find(&sample::code(sample::USNYC)).is_err());
    }

    #[test]
    fn empty_store_finds_nothing() {
        let repo = InMemLocationRepository::new();
        assert!(repo.is_empty());
        assert!(repo.find_all().is_empty());
        assert!(repo.find(&sample::code(sample::SESTO)).is_err());
    }

    #[test]
    fn duplicate_seed_codes_keep_the_last_entry() {
        let repo = InMemLocationRepository::with_locations([
            Location::new("DEHAM", "Hamburg (old)"),
            Location::new("DEHAM", "Hamburg"),
        ]);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find(&UnLocode::new("DEHAM")).unwrap().name, "Hamburg");
    }
}
