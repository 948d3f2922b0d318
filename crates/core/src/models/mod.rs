//! Shared domain models.
//!
//! Identifiers are opaque string newtypes: the repositories never inspect,
//! validate or rewrite them. Entities are plain values that are cloned in and
//! out of the stores.

mod cargo;
mod handling;
mod ids;
mod location;
pub mod sample;
mod voyage;

use thiserror::Error;

pub use cargo::{
    Cargo, Delivery, Itinerary, Leg, RouteSpecification, RoutingStatus, TransportStatus,
};
pub use handling::{HandlingActivity, HandlingEvent, HandlingEventType, HandlingHistory};
pub use ids::{TrackingId, UnLocode, VoyageNumber};
pub use location::Location;
pub use voyage::{CarrierMovement, Schedule, Voyage, VoyageBuilder};

/// Errors raised by the strict identifier constructors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The value does not have the `CCLLL` UN/LOCODE shape.
    #[error("invalid UN/LOCODE '{0}'")]
    InvalidUnLocode(String),
}
