use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use tracing::debug;

use super::{CargoRepository, StoreError};
use crate::models::{Cargo, TrackingId};

/// Thread-safe cargo store. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemCargoRepository {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    cargos: HashMap<TrackingId, Cargo>,
}

impl InMemCargoRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct tracking ids stored.
    pub fn len(&self) -> usize {
        self.inner.read().cargos.len()
    }

    /// True when no cargo has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.inner.read().cargos.is_empty()
    }
}

impl CargoRepository for InMemCargoRepository {
    fn store(&self, cargo: Cargo) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        let replaced = inner
            .cargos
            .insert(cargo.tracking_id.clone(), cargo)
            .is_some();
        debug!(replaced, total = inner.cargos.len(), "stored cargo");
        Ok(())
    }

    fn find(&self, tracking_id: &TrackingId) -> Result<Cargo, StoreError> {
        self.inner
            .read()
            .cargos
            .get(tracking_id)
            .cloned()
            .ok_or_else(|| StoreError::UnknownCargo(tracking_id.clone()))
    }

    fn find_all(&self) -> Vec<Cargo> {
        self.inner.read().cargos.values().cloned().collect()
    }
}
