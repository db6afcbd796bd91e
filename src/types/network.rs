//! The static topology of the rail network.
//!
//! [`NetworkModel`] owns an undirected graph of stations and their
//! connecting edges plus a map from station id to its index in the
//! graph. It is built once through [`NetworkModel::add_station`] and
//! [`NetworkModel::add_edge`] and only read afterwards, so a single
//! instance can be shared by any number of concurrent route queries.

use std::collections::HashMap;

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::edge::Edge;
use crate::error::RouterError;
use crate::station::StationId;

/// A validated view of the network: stations plus bidirectional edges.
#[derive(Debug, Clone, Default)]
pub struct NetworkModel {
    graph: UnGraph<StationId, Edge>,
    node_indices: HashMap<StationId, NodeIndex>,
}

impl NetworkModel {
    /// Creates an empty network.
    pub fn new() -> NetworkModel {
        NetworkModel::default()
    }

    /// Registers a station.
    ///
    /// # Errors
    /// * [`RouterError::EmptyStationId`] if the name is blank.
    /// * [`RouterError::DuplicateStation`] if the id is already taken.
    pub fn add_station(&mut self, id: impl AsRef<str>) -> Result<NodeIndex, RouterError> {
        let id = StationId::new(id)?;
        if self.node_indices.contains_key(&id) {
            return Err(RouterError::DuplicateStation(id));
        }

        let index = self.graph.add_node(id.clone());
        debug!("added station {} at {:?}", id, index);
        self.node_indices.insert(id, index);
        Ok(index)
    }

    /// Registers a bidirectional edge between two existing stations.
    ///
    /// Every argument is validated before the graph is touched, so a
    /// failed call leaves the network unchanged.
    ///
    /// # Errors
    /// * [`RouterError::UnknownStation`] if either endpoint is missing.
    /// * [`RouterError::SelfLoop`] if both endpoints are the same station.
    /// * [`RouterError::InvalidAttribute`] if `cost` or `time` is negative
    ///   or not finite.
    pub fn add_edge(
        &mut self,
        a: &str,
        b: &str,
        cost: f64,
        time: f64,
        stops: u32,
    ) -> Result<EdgeIndex, RouterError> {
        let from = self.node_index(a)?;
        let to = self.node_index(b)?;
        if from == to {
            return Err(RouterError::SelfLoop(self.graph[from].clone()));
        }
        for (attribute, value) in [("cost", cost), ("time", time)] {
            if !value.is_finite() || value < 0.0 {
                return Err(RouterError::InvalidAttribute { attribute, value });
            }
        }

        let edge = Edge {
            a: self.graph[from].clone(),
            b: self.graph[to].clone(),
            cost,
            time,
            stops,
        };
        debug!("added edge {:?}", edge);
        Ok(self.graph.add_edge(from, to, edge))
    }

    /// One-hop neighbors of a station together with the connecting edge.
    ///
    /// # Errors
    /// [`RouterError::UnknownStation`] if the station is not registered.
    pub fn neighbors(
        &self,
        id: &str,
    ) -> Result<impl Iterator<Item = (&StationId, &Edge)> + '_, RouterError> {
        let index = self.node_index(id)?;
        Ok(self.graph.edges(index).map(move |edge| {
            let other = if edge.source() == index {
                edge.target()
            } else {
                edge.source()
            };
            (&self.graph[other], edge.weight())
        }))
    }

    /// All registered stations, in registration order.
    pub fn stations(&self) -> impl Iterator<Item = &StationId> + '_ {
        self.graph.node_weights()
    }

    /// All registered edges, in registration order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.graph.edge_weights()
    }

    /// Whether a station with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.node_indices.contains_key(id.trim())
    }

    /// Return the number of stations in the graph.
    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Case-insensitive substring search over station names, in
    /// registration order. An exact match (ignoring case) is returned
    /// alone so that a full name is never ambiguous.
    pub fn find_stations(&self, query: &str) -> Vec<&StationId> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        if let Some(exact) = self
            .stations()
            .find(|station| station.as_str().to_lowercase() == query)
        {
            return vec![exact];
        }
        self.stations()
            .filter(|station| station.as_str().to_lowercase().contains(&query))
            .collect()
    }

    /// Get the [`NodeIndex`] of a station.
    pub(crate) fn node_index(&self, id: &str) -> Result<NodeIndex, RouterError> {
        self.node_indices
            .get(id.trim())
            .copied()
            .ok_or_else(|| RouterError::UnknownStation(id.to_string()))
    }

    pub(crate) fn graph(&self) -> &UnGraph<StationId, Edge> {
        &self.graph
    }
}

#[cfg(test)]
mod network_tests {
    use super::*;

    fn triangle() -> NetworkModel {
        let mut network = NetworkModel::new();
        for name in ["A", "B", "C"] {
            network.add_station(name).unwrap();
        }
        network.add_edge("A", "B", 5.0, 2.0, 1).unwrap();
        network.add_edge("B", "C", 5.0, 3.0, 1).unwrap();
        network.add_edge("C", "A", 8.0, 4.0, 2).unwrap();
        network
    }

    #[test]
    fn test_counts() {
        let network = triangle();
        assert_eq!(network.station_count(), 3);
        assert_eq!(network.edge_count(), 3);
        let names: Vec<&str> = network.stations().map(StationId::as_str).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_duplicate_station() {
        let mut network = triangle();
        assert_eq!(
            network.add_station("B"),
            Err(RouterError::DuplicateStation(StationId::new("B").unwrap()))
        );
        assert_eq!(network.station_count(), 3);
    }

    #[test]
    fn test_edges_are_bidirectional() {
        let network = triangle();

        let mut from_b: Vec<(&str, f64)> = network
            .neighbors("B")
            .unwrap()
            .map(|(station, edge)| (station.as_str(), edge.time))
            .collect();
        from_b.sort_by(|x, y| x.0.cmp(y.0));
        assert_eq!(from_b, vec![("A", 2.0), ("C", 3.0)]);

        let from_a: Vec<&str> = network
            .neighbors("A")
            .unwrap()
            .map(|(station, _)| station.as_str())
            .collect();
        assert_eq!(from_a.len(), 2);
        assert!(from_a.contains(&"B"));
        assert!(from_a.contains(&"C"));
    }

    #[test]
    fn test_unknown_station() {
        let mut network = triangle();
        assert_eq!(
            network.add_edge("A", "Z", 1.0, 1.0, 1),
            Err(RouterError::UnknownStation("Z".to_string()))
        );
        assert!(matches!(
            network.neighbors("Z"),
            Err(RouterError::UnknownStation(_))
        ));
        assert_eq!(network.edge_count(), 3);
    }

    #[test]
    fn test_invalid_attribute_leaves_network_unchanged() {
        let mut network = triangle();
        assert_eq!(
            network.add_edge("A", "B", -1.0, 1.0, 1),
            Err(RouterError::InvalidAttribute {
                attribute: "cost",
                value: -1.0
            })
        );
        assert!(matches!(
            network.add_edge("A", "B", 1.0, f64::NAN, 1),
            Err(RouterError::InvalidAttribute {
                attribute: "time",
                ..
            })
        ));
        assert_eq!(network.edge_count(), 3);
        assert_eq!(network.neighbors("A").unwrap().count(), 2);
    }

    #[test]
    fn test_self_loop_rejected() {
        let mut network = triangle();
        assert_eq!(
            network.add_edge("A", "A", 1.0, 1.0, 1),
            Err(RouterError::SelfLoop(StationId::new("A").unwrap()))
        );
        assert_eq!(network.edge_count(), 3);
    }

    #[test]
    fn test_isolated_station_has_no_neighbors() {
        let mut network = triangle();
        network.add_station("D").unwrap();
        assert_eq!(network.neighbors("D").unwrap().count(), 0);
        assert!(network.contains("D"));
    }

    #[test]
    fn test_find_stations() {
        let mut network = NetworkModel::new();
        for name in ["M.G Road", "Ernakulam South", "Ernakulam North", "Road"] {
            network.add_station(name).unwrap();
        }

        let names = |found: Vec<&StationId>| -> Vec<String> {
            found.into_iter().map(|s| s.to_string()).collect()
        };
        assert_eq!(
            names(network.find_stations("ernakulam")),
            vec!["Ernakulam South", "Ernakulam North"]
        );
        assert_eq!(names(network.find_stations("south")), vec!["Ernakulam South"]);
        assert_eq!(names(network.find_stations("road")), vec!["Road"]);
        assert!(network.find_stations("  ").is_empty());
        assert!(network.find_stations("Petta").is_empty());
    }
}
