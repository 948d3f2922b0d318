#![allow(missing_docs)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TrackingId, UnLocode, VoyageNumber};

/// Kind of handling a cargo went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlingEventType {
    NotHandled,
    Load,
    Unload,
    Receive,
    Claim,
    Customs,
}

/// What happened, where, and (for loads and unloads) on which voyage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlingActivity {
    pub event_type: HandlingEventType,
    pub location: UnLocode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voyage_number: Option<VoyageNumber>,
}

/// A recorded fact about a single cargo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlingEvent {
    /// Cargo the event belongs to.
    pub tracking_id: TrackingId,
    /// The handling that took place.
    pub activity: HandlingActivity,
    /// When the handling was completed.
    pub completed_at: DateTime<Utc>,
}

impl HandlingEvent {
    /// Create an event for `tracking_id`.
    pub fn new(
        tracking_id: TrackingId,
        activity: HandlingActivity,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            tracking_id,
            activity,
            completed_at,
        }
    }
}

/// Every handling event recorded for one cargo, in the order they were stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HandlingHistory {
    events: Vec<HandlingEvent>,
}

impl HandlingHistory {
    /// Wrap events that are already in recording order.
    pub fn new(events: Vec<HandlingEvent>) -> Self {
        Self { events }
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> &[HandlingEvent] {
        &self.events
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The last event that was recorded, if any.
    pub fn most_recently_completed_event(&self) -> Option<&HandlingEvent> {
        self.events.last()
    }

    /// Consume the history, returning the events.
    pub fn into_events(self) -> Vec<HandlingEvent> {
        self.events
    }
}

impl IntoIterator for HandlingHistory {
    type Item = HandlingEvent;
    type IntoIter = std::vec::IntoIter<HandlingEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
