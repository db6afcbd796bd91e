//! The core of the router library.
//!
//! The engine module runs a multi-criteria shortest-path search over a
//! [`NetworkModel`](crate::network::NetworkModel) and reports the best
//! route from one source to every other reachable station.

/// The router engine module.
pub mod engine {
    use crate::{
        algorithms::dijkstra::{shortest_path_tree, ShortestPathTree},
        error::RouterError,
        network::NetworkModel,
        route::{RouteResult, RouteTable},
        weights::{NormalizationScale, WeightTriple},
    };
    use petgraph::graph::NodeIndex;

    /// Finds optimal routes on a shared, read-only network.
    ///
    /// Each call allocates its own search state, so one optimizer (or
    /// many optimizers over the same network) may be used from several
    /// threads at once.
    #[derive(Debug, Clone, Copy)]
    pub struct RouteOptimizer<'a> {
        network: &'a NetworkModel,
        scale: NormalizationScale,
    }

    impl<'a> RouteOptimizer<'a> {
        /// Creates an optimizer using the reference normalization scale.
        pub fn new(network: &'a NetworkModel) -> RouteOptimizer<'a> {
            RouteOptimizer::with_scale(network, NormalizationScale::default())
        }

        /// Creates an optimizer with an explicit normalization scale.
        pub fn with_scale(
            network: &'a NetworkModel,
            scale: NormalizationScale,
        ) -> RouteOptimizer<'a> {
            RouteOptimizer { network, scale }
        }

        pub fn network(&self) -> &'a NetworkModel {
            self.network
        }

        pub fn scale(&self) -> NormalizationScale {
            self.scale
        }

        /// Finds the best route from `source` to every other reachable
        /// station.
        ///
        /// Each edge is weighted by blending its normalized cost, time
        /// and stops with `weights`, and a Dijkstra search picks the
        /// minimum composite path. Reported totals are raw sums along the
        /// chosen path.
        ///
        /// # Arguments
        /// * `source` - The station to start from.
        /// * `weights` - Relative importance of cost, time and stops.
        ///
        /// # Returns
        /// One [`RouteResult`] per reachable station other than `source`.
        /// Unreachable stations are absent. When several paths share the
        /// lowest score the first one discovered is kept. With all-zero
        /// weights every score is zero and which of the zero-cost paths
        /// is reported is implementation-defined.
        ///
        /// # Errors
        /// [`RouterError::UnknownStation`] if `source` is not in the
        /// network. Nothing is computed in that case.
        pub fn find_optimal_routes(
            &self,
            source: &str,
            weights: WeightTriple,
        ) -> Result<RouteTable, RouterError> {
            let source_index = self.network.node_index(source)?;
            info!(
                "Finding optimal routes from {} (cost: {}, time: {}, stops: {})",
                self.network.graph()[source_index],
                weights.cost(),
                weights.time(),
                weights.stops()
            );

            let scale = self.scale;
            let tree = shortest_path_tree(self.network.graph(), source_index, |edge| {
                weights.composite(scale.normalize(edge))
            });

            let mut routes = RouteTable::with_capacity(tree.settled().len());
            for &node in tree.settled() {
                if node == source_index {
                    continue;
                }
                if let Some(route) = self.build_route(&tree, node) {
                    debug!(
                        "{} -> {}: score {:.4} via {} stations",
                        self.network.graph()[source_index],
                        self.network.graph()[node],
                        route.composite_score,
                        route.path.len()
                    );
                    routes.insert(self.network.graph()[node].clone(), route);
                }
            }

            info!(
                "Found {} routes ({} stations unreachable)",
                routes.len(),
                self.network.station_count() - tree.settled().len()
            );
            Ok(routes)
        }

        /// Rebuilds the path to `target` and sums its raw attributes.
        fn build_route(&self, tree: &ShortestPathTree, target: NodeIndex) -> Option<RouteResult> {
            let graph = self.network.graph();
            let composite_score = tree.distance(target)?;
            let tree_path = tree.path(target)?;

            let path = tree_path
                .nodes
                .iter()
                .map(|&node| graph[node].clone())
                .collect();
            let (total_cost, total_time, total_stops) = tree_path.edges.iter().fold(
                (0.0, 0.0, 0),
                |(cost, time, stops), &edge| {
                    let edge = &graph[edge];
                    (cost + edge.cost, time + edge.time, stops + u64::from(edge.stops))
                },
            );

            Some(RouteResult {
                path,
                total_cost,
                total_time,
                total_stops,
                composite_score,
            })
        }
    }
}
