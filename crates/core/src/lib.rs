#![warn(clippy::all, missing_docs)]

//! In-memory repositories backing the cargo shipping domain.
//!
//! This crate hosts the domain value types, the four repository contracts
//! (cargo, location, voyage, handling events) with their in-memory stores,
//! and the configuration and logging setup shared by the services that
//! embed them.

pub mod config;
pub mod logging;
pub mod models;
pub mod reference;
pub mod repository;

pub use crate::config::AppConfig;
pub use models::{
    Cargo, HandlingEvent, HandlingHistory, Location, TrackingId, UnLocode, Voyage, VoyageNumber,
};
pub use reference::ReferenceData;
pub use repository::{
    CargoRepository, HandlingEventRepository, InMemCargoRepository,
    InMemHandlingEventRepository, InMemLocationRepository, InMemVoyageRepository,
    LocationRepository, Repositories, StoreError, VoyageRepository,
};
