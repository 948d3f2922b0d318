use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{UnLocode, VoyageNumber};

/// A single sailing between two locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierMovement {
    /// Where the vessel leaves from.
    pub departure_location: UnLocode,
    /// Where the vessel arrives.
    pub arrival_location: UnLocode,
    /// Scheduled departure.
    pub departure_time: DateTime<Utc>,
    /// Scheduled arrival.
    pub arrival_time: DateTime<Utc>,
}

/// Ordered carrier movements making up a voyage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schedule {
    /// Movements in sailing order.
    #[serde(default)]
    pub carrier_movements: Vec<CarrierMovement>,
}

/// A vessel trip along a fixed schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voyage {
    /// Identifier of the voyage.
    pub number: VoyageNumber,
    /// Sailing schedule.
    #[serde(default)]
    pub schedule: Schedule,
}

impl Voyage {
    /// Create a voyage from an already assembled schedule.
    pub fn new(number: impl Into<VoyageNumber>, schedule: Schedule) -> Self {
        Self {
            number: number.into(),
            schedule,
        }
    }

    /// Start building a voyage departing from `departure_location`.
    pub fn builder(
        number: impl Into<VoyageNumber>,
        departure_location: impl Into<UnLocode>,
    ) -> VoyageBuilder {
        VoyageBuilder {
            number: number.into(),
            next_departure: departure_location.into(),
            movements: Vec::new(),
        }
    }
}

/// Chains carrier movements so each one departs where the previous arrived.
#[derive(Debug, Clone)]
pub struct VoyageBuilder {
    number: VoyageNumber,
    next_departure: UnLocode,
    movements: Vec<CarrierMovement>,
}

impl VoyageBuilder {
    /// Append a movement from the current location to `arrival_location`.
    pub fn add_movement(
        mut self,
        arrival_location: impl Into<UnLocode>,
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
    ) -> Self {
        let arrival_location = arrival_location.into();
        let departure_location =
            std::mem::replace(&mut self.next_departure, arrival_location.clone());
        self.movements.push(CarrierMovement {
            departure_location,
            arrival_location,
            departure_time,
            arrival_time,
        });
        self
    }

    /// Finish the voyage.
    pub fn build(self) -> Voyage {
        Voyage {
            number: self.number,
            schedule: Schedule {
                carrier_movements: self.movements,
            },
        }
    }
}
