//! Error type shared by the network model and the optimizer.
//!
//! Every failure is raised at the point of the offending call, before
//! anything has been mutated.

use thiserror::Error;

use crate::station::StationId;

/// Errors raised while building a network or querying routes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouterError {
    /// A station with this id is already registered.
    #[error("station '{0}' already exists in the network")]
    DuplicateStation(StationId),

    /// The referenced station is not registered.
    #[error("station '{0}' not found in the network")]
    UnknownStation(String),

    /// A station id was empty or whitespace only.
    #[error("station id must not be empty")]
    EmptyStationId,

    /// An edge attribute was negative or not a finite number.
    #[error("edge attribute '{attribute}' must be a finite non-negative number, got {value}")]
    InvalidAttribute {
        attribute: &'static str,
        value: f64,
    },

    /// Both endpoints of an edge are the same station.
    #[error("edge endpoints must differ, got self-loop on '{0}'")]
    SelfLoop(StationId),

    /// An objective weight was negative or not a finite number.
    #[error("weight '{name}' must be a finite non-negative number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    /// A normalization divisor was not a finite positive number.
    #[error("normalization scale '{name}' must be a finite positive number, got {value}")]
    InvalidScale { name: &'static str, value: f64 },
}
