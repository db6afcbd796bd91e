//! Definition of the [`StationId`] type.
//!
//! A station is an opaque, named vertex of the rail network. The id is
//! the only attribute the router needs; anything else a collaborator
//! knows about a station (zone, line, facilities) lives outside the
//! graph.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RouterError;

/// Validated identifier of a station.
///
/// Surrounding whitespace is trimmed and empty names are rejected, so two
/// ids that print the same always compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StationId(String);

impl StationId {
    /// Creates a station id from a name.
    ///
    /// # Errors
    /// [`RouterError::EmptyStationId`] if the trimmed name is empty.
    pub fn new(name: impl AsRef<str>) -> Result<StationId, RouterError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(RouterError::EmptyStationId);
        }
        Ok(StationId(name.to_string()))
    }

    /// Returns the station name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StationId {
    type Error = RouterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StationId::new(value)
    }
}

impl From<StationId> for String {
    fn from(value: StationId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod station_tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        let id = StationId::new("  Aluva ").unwrap();
        assert_eq!(id.as_str(), "Aluva");
        assert_eq!(id, StationId::new("Aluva").unwrap());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(StationId::new(""), Err(RouterError::EmptyStationId));
        assert_eq!(StationId::new("   "), Err(RouterError::EmptyStationId));
    }

    #[test]
    fn test_deserialize_validates() {
        let id: StationId = serde_json::from_str("\"Petta\"").unwrap();
        assert_eq!(id.to_string(), "Petta");
        assert!(serde_json::from_str::<StationId>("\" \"").is_err());
    }
}
