//! Per-destination results of a route optimization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::station::StationId;

/// Best route from the source to one destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Stations on the route, source first and destination last.
    pub path: Vec<StationId>,

    /// Sum of the raw fares along the path.
    pub total_cost: f64,

    /// Sum of the raw travel times along the path, in minutes.
    pub total_time: f64,

    /// Sum of the stop counts along the path. Wider than a single edge's
    /// count so long paths of large counts cannot overflow.
    pub total_stops: u64,

    /// Sum of the composite edge weights along the path. This is the
    /// value the route was selected by.
    pub composite_score: f64,
}

impl RouteResult {
    /// The destination station.
    pub fn destination(&self) -> Option<&StationId> {
        self.path.last()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Routes keyed by destination. The source is never a key.
pub type RouteTable = HashMap<StationId, RouteResult>;

/// Orders the table best-first by composite score, the way results are
/// presented to a rider. Equal scores are ordered by station id.
pub fn rank_by_score(table: &RouteTable) -> Vec<(&StationId, &RouteResult)> {
    let mut ranked: Vec<_> = table.iter().collect();
    ranked.sort_by(|(id_a, a), (id_b, b)| {
        a.composite_score
            .total_cmp(&b.composite_score)
            .then_with(|| id_a.cmp(id_b))
    });
    ranked
}
