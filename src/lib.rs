//! Metro Route Optimization Library.
//! Finds the best route from one station to every other station of a
//! rail network under a weighted blend of fare, travel time and stops.
//!
//! Build a [`NetworkModel`] once, then ask a [`RouteOptimizer`] for the
//! routes from any source with any [`WeightTriple`]:
//!
//! ```
//! use metro_router::{reference::kochi_metro_line_1, RouteOptimizer, WeightTriple};
//!
//! let network = kochi_metro_line_1().unwrap();
//! let optimizer = RouteOptimizer::new(&network);
//! let routes = optimizer
//!     .find_optimal_routes("Aluva", WeightTriple::default())
//!     .unwrap();
//! assert_eq!(routes["Thripunithura"].total_stops, 22);
//! ```

#[macro_use]
extern crate log;

pub mod error;

pub mod types {
    pub mod edge;
    pub mod network;
    pub mod route;
    pub mod router;
    pub mod station;
    pub mod weights;
}

pub mod algorithms {
    pub mod dijkstra;
}

pub mod utils {
    pub mod graph;
    pub mod reference;
}

pub use types::{edge, network, route, router, station, weights};
pub use utils::reference;

pub use edge::Edge;
pub use error::RouterError;
pub use network::NetworkModel;
pub use route::{rank_by_score, RouteResult, RouteTable};
pub use router::engine::RouteOptimizer;
pub use station::StationId;
pub use weights::{NormalizationScale, WeightTriple, REFERENCE_SCALE};
