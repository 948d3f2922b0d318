//! Repository contracts and their in-memory implementations.
//!
//! Each store owns a single map keyed by a domain identifier. Stores never
//! call each other; callers compose lookups themselves (find a cargo, then
//! query its handling history, then resolve the locations and voyages it
//! refers to).

/// Cargo store keyed by tracking id.
pub mod cargo;
/// Append-only handling event store keyed by tracking id.
pub mod handling;
/// Location reference data keyed by UN/LOCODE.
pub mod location;
/// Voyage reference data keyed by voyage number.
pub mod voyage;

use anyhow::Result;
use thiserror::Error;
use tracing::info;

use crate::{
    config::AppConfig,
    models::{
        Cargo, HandlingEvent, HandlingHistory, Location, TrackingId, UnLocode, Voyage,
        VoyageNumber,
    },
    reference::ReferenceData,
};

pub use cargo::InMemCargoRepository;
pub use handling::InMemHandlingEventRepository;
pub use location::InMemLocationRepository;
pub use voyage::InMemVoyageRepository;

/// Lookup failures reported by the `find` operations.
///
/// Writes and handling history queries never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No cargo is stored under the tracking id.
    #[error("unknown cargo {0}")]
    UnknownCargo(TrackingId),
    /// The location code is not among the known locations.
    #[error("unknown location {0}")]
    UnknownLocation(UnLocode),
    /// The voyage number is not among the known voyages.
    #[error("unknown voyage {0}")]
    UnknownVoyage(VoyageNumber),
}

/// Storage of cargo by tracking id.
pub trait CargoRepository: Send + Sync {
    /// Insert or fully replace the cargo stored under its tracking id.
    fn store(&self, cargo: Cargo) -> Result<(), StoreError>;

    /// Current value stored for `tracking_id`.
    fn find(&self, tracking_id: &TrackingId) -> Result<Cargo, StoreError>;

    /// Snapshot of every stored cargo, in no particular order.
    fn find_all(&self) -> Vec<Cargo>;
}

/// Read access to known locations.
pub trait LocationRepository: Send + Sync {
    /// Location registered under `unlocode`.
    fn find(&self, unlocode: &UnLocode) -> Result<Location, StoreError>;

    /// Snapshot of every known location, in no particular order.
    fn find_all(&self) -> Vec<Location>;
}

/// Read access to known voyages.
pub trait VoyageRepository: Send + Sync {
    /// Voyage registered under `voyage_number`.
    fn find(&self, voyage_number: &VoyageNumber) -> Result<Voyage, StoreError>;
}

/// Append-only storage of handling events.
pub trait HandlingEventRepository: Send + Sync {
    /// Append `event` to the history of its cargo.
    fn store(&self, event: HandlingEvent);

    /// Every event recorded for `tracking_id`, oldest first.
    ///
    /// Unknown ids yield an empty history rather than an error.
    fn query_handling_history(&self, tracking_id: &TrackingId) -> HandlingHistory;
}

/// One instance of each store, sharing the lifetime of the enclosing service.
#[derive(Clone)]
pub struct Repositories {
    /// Cargo store.
    pub cargos: InMemCargoRepository,
    /// Location reference data.
    pub locations: InMemLocationRepository,
    /// Voyage reference data.
    pub voyages: InMemVoyageRepository,
    /// Handling event store.
    pub handling_events: InMemHandlingEventRepository,
}

impl Repositories {
    /// Build empty mutable stores next to the given reference data.
    pub fn new(reference: ReferenceData) -> Self {
        let ReferenceData { locations, voyages } = reference;
        let repositories = Self {
            cargos: InMemCargoRepository::new(),
            locations: InMemLocationRepository::with_locations(locations),
            voyages: InMemVoyageRepository::with_voyages(voyages),
            handling_events: InMemHandlingEventRepository::new(),
        };
        info!(
            locations = repositories.locations.len(),
            voyages = repositories.voyages.len(),
            "repositories ready"
        );
        repositories
    }

    /// Stores seeded with the built-in sample locations and voyages.
    pub fn sample() -> Self {
        Self::new(ReferenceData::sample())
    }

    /// Stores seeded according to `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let reference = ReferenceData::resolve(config)?;
        Ok(Self::new(reference))
    }
}
