use serde::{Deserialize, Serialize};

use super::UnLocode;

/// A port or other place a cargo can be handled at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Code the location is registered under.
    pub unlocode: UnLocode,
    /// Human-readable name (e.g. `Stockholm`).
    pub name: String,
}

impl Location {
    /// Create a location from its code and display name.
    pub fn new(unlocode: impl Into<UnLocode>, name: impl Into<String>) -> Self {
        Self {
            unlocode: unlocode.into(),
            name: name.into(),
        }
    }
}
