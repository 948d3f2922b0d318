#![allow(missing_docs)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TrackingId, UnLocode, VoyageNumber};

/// Where a cargo must go and by when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpecification {
    /// Location the cargo is received at.
    pub origin: UnLocode,
    /// Final destination.
    pub destination: UnLocode,
    /// Latest acceptable arrival.
    pub arrival_deadline: DateTime<Utc>,
}

impl RouteSpecification {
    /// Whether `itinerary` takes the cargo from the origin to the destination.
    pub fn is_satisfied_by(&self, itinerary: &Itinerary) -> bool {
        itinerary.initial_departure_location() == Some(&self.origin)
            && itinerary.final_arrival_location() == Some(&self.destination)
    }
}

/// One voyage segment of an itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    pub voyage_number: VoyageNumber,
    pub load_location: UnLocode,
    pub unload_location: UnLocode,
    pub load_time: DateTime<Utc>,
    pub unload_time: DateTime<Utc>,
}

/// Planned sequence of legs for a cargo.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Itinerary {
    /// Legs in travel order.
    #[serde(default)]
    pub legs: Vec<Leg>,
}

impl Itinerary {
    /// Build an itinerary from legs in travel order.
    pub fn new(legs: Vec<Leg>) -> Self {
        Self { legs }
    }

    /// True when no legs have been planned.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Load location of the first leg.
    pub fn initial_departure_location(&self) -> Option<&UnLocode> {
        self.legs.first().map(|leg| &leg.load_location)
    }

    /// Unload location of the last leg.
    pub fn final_arrival_location(&self) -> Option<&UnLocode> {
        self.legs.last().map(|leg| &leg.unload_location)
    }

    /// Unload time of the last leg.
    pub fn final_arrival_time(&self) -> Option<DateTime<Utc>> {
        self.legs.last().map(|leg| leg.unload_time)
    }
}

/// Whether the cargo has a route matching its specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoutingStatus {
    #[default]
    NotRouted,
    Routed,
    Misrouted,
}

/// Physical whereabouts of the cargo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransportStatus {
    #[default]
    NotReceived,
    InPort,
    OnboardCarrier,
    Claimed,
    Unknown,
}

/// Delivery progress as last computed by the application layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Delivery {
    pub routing_status: RoutingStatus,
    pub transport_status: TransportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_known_location: Option<UnLocode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_voyage: Option<VoyageNumber>,
    #[serde(default)]
    pub is_misdirected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<DateTime<Utc>>,
}

/// A booked shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cargo {
    /// Identity of the cargo; never changes after booking.
    pub tracking_id: TrackingId,
    /// Location the cargo was booked from.
    pub origin: UnLocode,
    /// Requested route.
    pub route_specification: RouteSpecification,
    /// Planned route, empty until one is assigned.
    #[serde(default)]
    pub itinerary: Itinerary,
    /// Current delivery state.
    #[serde(default)]
    pub delivery: Delivery,
}

impl Cargo {
    /// Book a new, unrouted cargo.
    pub fn new(tracking_id: TrackingId, route_specification: RouteSpecification) -> Self {
        Self {
            tracking_id,
            origin: route_specification.origin.clone(),
            route_specification,
            itinerary: Itinerary::default(),
            delivery: Delivery::default(),
        }
    }

    /// Replace the route specification, keeping the current itinerary.
    pub fn specify_new_route(&mut self, route_specification: RouteSpecification) {
        self.route_specification = route_specification;
        self.refresh_routing_status();
    }

    /// Attach a planned itinerary.
    pub fn assign_to_route(&mut self, itinerary: Itinerary) {
        self.itinerary = itinerary;
        self.refresh_routing_status();
    }

    fn refresh_routing_status(&mut self) {
        self.delivery.routing_status = if self.itinerary.is_empty() {
            RoutingStatus::NotRouted
        } else if self.route_specification.is_satisfied_by(&self.itinerary) {
            RoutingStatus::Routed
        } else {
            RoutingStatus::Misrouted
        };
        self.delivery.eta = match self.delivery.routing_status {
            RoutingStatus::Routed => self.itinerary.final_arrival_time(),
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2009, 3, day, 12, 0, 0).unwrap()
    }

    fn leg(voyage: &str, from: &str, to: &str, load: u32, unload: u32) -> Leg {
        Leg {
            voyage_number: VoyageNumber::new(voyage),
            load_location: UnLocode::new(from),
            unload_location: UnLocode::new(to),
            load_time: at(load),
            unload_time: at(unload),
        }
    }

    fn hongkong_to_stockholm() -> Cargo {
        Cargo::new(
            TrackingId::new("ABC123"),
            RouteSpecification {
                origin: UnLocode::new("CNHKG"),
                destination: UnLocode::new("SESTO"),
                arrival_deadline: at(28),
            },
        )
    }

    #[test]
    fn new_cargo_is_not_routed() {
        let cargo = hongkong_to_stockholm();
        assert_eq!(cargo.origin, UnLocode::new("CNHKG"));
        assert!(cargo.itinerary.is_empty());
        assert_eq!(cargo.delivery.routing_status, RoutingStatus::NotRouted);
        assert_eq!(cargo.delivery.transport_status, TransportStatus::NotReceived);
    }

    #[test]
    fn assigning_matching_itinerary_routes_cargo() {
        let mut cargo = hongkong_to_stockholm();
        cargo.assign_to_route(Itinerary::new(vec![
            leg("V100", "CNHKG", "JNTKO", 3, 5),
            leg("V300", "JNTKO", "DEHAM", 8, 11),
            leg("V400", "DEHAM", "SESTO", 14, 15),
        ]));
        assert_eq!(cargo.delivery.routing_status, RoutingStatus::Routed);
        assert_eq!(cargo.delivery.eta, Some(at(15)));
    }

    #[test]
    fn changing_destination_misroutes_existing_itinerary() {
        let mut cargo = hongkong_to_stockholm();
        cargo.assign_to_route(Itinerary::new(vec![leg("V100", "CNHKG", "SESTO", 3, 9)]));

        let mut spec = cargo.route_specification.clone();
        spec.destination = UnLocode::new("AUMEL");
        cargo.specify_new_route(spec);

        assert_eq!(cargo.delivery.routing_status, RoutingStatus::Misrouted);
        assert_eq!(cargo.delivery.eta, None);
    }
}
