use std::{collections::HashMap, sync::Arc};

use tracing::debug;

use super::{StoreError, VoyageRepository};
use crate::models::{sample, Voyage, VoyageNumber};

/// Known voyages, fixed when the store is built.
#[derive(Debug, Clone, Default)]
pub struct InMemVoyageRepository {
    voyages: Arc<HashMap<VoyageNumber, Voyage>>,
}

impl InMemVoyageRepository {
    /// Create a store that knows no voyages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. A later voyage with the same number replaces an earlier one.
    pub fn with_voyages(voyages: impl IntoIterator<Item = Voyage>) -> Self {
        let voyages: HashMap<_, _> = voyages
            .into_iter()
            .map(|voyage| (voyage.number.clone(), voyage))
            .collect();
        debug!(count = voyages.len(), "seeded voyage store");
        Self {
            voyages: Arc::new(voyages),
        }
    }

    /// Store seeded with V100, V300 and V400.
    pub fn sample() -> Self {
        Self::with_voyages(sample::voyages())
    }

    /// Number of known voyages.
    pub fn len(&self) -> usize {
        self.voyages.len()
    }

    /// True when no voyages are known.
    pub fn is_empty(&self) -> bool {
        self.voyages.is_empty()
    }
}

impl VoyageRepository for InMemVoyageRepository {
    fn find(&self, voyage_number: &VoyageNumber) -> Result<Voyage, StoreError> {
        self.voyages
            .get(voyage_number)
            .cloned()
            .ok_or_else(|| StoreError::UnknownVoyage(voyage_number.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_sample_voyage() {
        let repo = InMemVoyageRepository::sample();

        let v300 = repo.find(&VoyageNumber::new("V300")).unwrap();
        assert_eq!(v300, sample::v300());
        assert_eq!(v300.schedule.carrier_movements.len(), 4);
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn unknown_voyage_is_reported() {
        let repo = InMemVoyageRepository::sample();
        let missing = VoyageNumber::new("V999");
        assert_eq!(repo.find(&missing), Err(StoreError::UnknownVoyage(missing.clone())));
    }

    #[test]
    fn clones_share_the_seeded_voyages() {
        let repo = InMemVoyageRepository::with_voyages([sample::v100()]);
        let clone = repo.clone();
        assert!(clone.find(&VoyageNumber::new("V100")).is_ok());
        assert!(!clone.is_empty());
    }
}
