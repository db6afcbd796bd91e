//! Definition of the `Edge` type.
use serde::{Deserialize, Serialize};

use crate::station::StationId;

/// An edge is a bidirectional connection between two adjacent stations.
/// Traversing it in either direction incurs the same attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// One end of the edge.
    pub a: StationId,

    /// The other end of the edge.
    pub b: StationId,

    /// Fare for the hop, in currency units.
    pub cost: f64,

    /// Travel time for the hop, in minutes.
    pub time: f64,

    /// Number of stops counted for the hop, normally 1.
    pub stops: u32,
}

impl Edge {
    /// Returns the endpoint opposite to `from`, or `None` if `from` is
    /// not an endpoint of this edge.
    pub fn other_end(&self, from: &StationId) -> Option<&StationId> {
        if *from == self.a {
            Some(&self.b)
        } else if *from == self.b {
            Some(&self.a)
        } else {
            None
        }
    }
}
