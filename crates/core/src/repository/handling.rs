use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use tracing::debug;

use super::HandlingEventRepository;
use crate::models::{HandlingEvent, HandlingHistory, TrackingId};

/// Thread-safe, append-only handling event store.
///
/// Events are kept per tracking id in the order they were stored and are
/// never edited or removed.
#[derive(Debug, Clone, Default)]
pub struct InMemHandlingEventRepository {
    events: Arc<RwLock<HashMap<TrackingId, Vec<HandlingEvent>>>>,
}

impl InMemHandlingEventRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracking ids with at least one recorded event.
    pub fn tracked_cargo_count(&self) -> usize {
        self.events.read().len()
    }
}

impl HandlingEventRepository for InMemHandlingEventRepository {
    fn store(&self, event: HandlingEvent) {
        let mut events = self.events.write();
        let history = events.entry(event.tracking_id.clone()).or_default();
        history.push(event);
        debug!(recorded = history.len(), "appended handling event");
    }

    fn query_handling_history(&self, tracking_id: &TrackingId) -> HandlingHistory {
        let events = self
            .events
            .read()
            .get(tracking_id)
            .cloned()
            .unwrap_or_default();
        HandlingHistory::new(events)
    }
}
