use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ModelError;

static UNLOCODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}[A-Z2-9]{3}$").expect("valid UN/LOCODE regex"));

/// Unique identifier of a single cargo shipment.
///
/// Assigned when the cargo is booked and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingId(String);

impl TrackingId {
    /// Wrap an existing identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Produce a fresh identifier such as `F3A2B1C0`.
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4().to_string().to_uppercase();
        let head = uuid.split('-').next().unwrap_or(uuid.as_str());
        Self(head.to_string())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackingId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// United Nations location code, e.g. `SESTO` for Stockholm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnLocode(String);

impl UnLocode {
    /// Wrap a code as-is.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Parse user input into a well-formed code.
    ///
    /// Surrounding whitespace is dropped and letters are upper-cased before
    /// the two-letter country / three-character location shape is checked.
    pub fn parse(input: &str) -> Result<Self, ModelError> {
        let normalized = input.trim().to_uppercase();
        if UNLOCODE_PATTERN.is_match(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(ModelError::InvalidUnLocode(input.to_string()))
        }
    }

    /// Whether the wrapped code has the standard UN/LOCODE shape.
    pub fn is_well_formed(&self) -> bool {
        UNLOCODE_PATTERN.is_match(&self.0)
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnLocode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnLocode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier of a scheduled voyage, e.g. `V100`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoyageNumber(String);

impl VoyageNumber {
    /// Wrap an existing voyage number.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoyageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VoyageNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
