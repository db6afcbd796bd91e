//! Single-source label-setting shortest-path search.
//!
//! A binary-heap Dijkstra over a [`petgraph`] graph that records, for
//! every reachable node, the best composite distance and a back-pointer
//! to the predecessor node and edge. Runs in *O*((*V* + *E*) log *V*)
//! time and *O*(*V* + *E*) space.
//!
//! Edge weights must be non-negative. Once a node is popped from the heap
//! it is settled and its distance and back-pointer are final.
//!
//! # Ties
//! A later candidate replaces a known label only if it is strictly
//! shorter, so among equally short paths the first one discovered wins.
//! Heap entries with equal distance pop in insertion order, which keeps
//! the settle order deterministic for a given graph.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

/// Heap key: distance, then insertion sequence.
type HeapEntry = Reverse<(OrderedFloat<f64>, u64, NodeIndex)>;

/// Result of [`shortest_path_tree`].
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: NodeIndex,
    distances: Vec<Option<f64>>,
    predecessors: Vec<Option<(NodeIndex, EdgeIndex)>>,
    settled: Vec<NodeIndex>,
}

/// Nodes and edges of one tree path, both ordered from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreePath {
    pub nodes: Vec<NodeIndex>,
    pub edges: Vec<EdgeIndex>,
}

impl ShortestPathTree {
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// Composite distance from the source, `None` if unreachable.
    pub fn distance(&self, node: NodeIndex) -> Option<f64> {
        self.distances.get(node.index()).copied().flatten()
    }

    /// Predecessor node and the edge used to reach `node`.
    pub fn predecessor(&self, node: NodeIndex) -> Option<(NodeIndex, EdgeIndex)> {
        self.predecessors.get(node.index()).copied().flatten()
    }

    /// Reachable nodes in the order they were settled, source first.
    pub fn settled(&self) -> &[NodeIndex] {
        &self.settled
    }

    /// Walks the back-pointers from `target` to the source.
    ///
    /// Returns `None` if `target` was not reached.
    pub fn path(&self, target: NodeIndex) -> Option<TreePath> {
        self.distance(target)?;

        let mut nodes = vec![target];
        let mut edges = Vec::new();
        let mut current = target;
        while let Some((previous, edge)) = self.predecessor(current) {
            nodes.push(previous);
            edges.push(edge);
            current = previous;
        }
        nodes.reverse();
        edges.reverse();
        Some(TreePath { nodes, edges })
    }
}

/// Runs the search from `source` using `edge_weight` as the metric.
///
/// # Arguments
/// * `graph` - The undirected graph to search.
/// * `source` - The node to start from.
/// * `edge_weight` - Maps an edge to its non-negative weight.
pub fn shortest_path_tree<N, E, F>(
    graph: &UnGraph<N, E>,
    source: NodeIndex,
    mut edge_weight: F,
) -> ShortestPathTree
where
    F: FnMut(&E) -> f64,
{
    let node_count = graph.node_count();
    let mut distances: Vec<Option<f64>> = vec![None; node_count];
    let mut predecessors = vec![None; node_count];
    let mut visited = vec![false; node_count];
    let mut settled = Vec::with_capacity(node_count);

    let mut heap: BinaryHeap<HeapEntry> = BinaryHeap::new();
    let mut sequence: u64 = 0;
    distances[source.index()] = Some(0.0);
    heap.push(Reverse((OrderedFloat(0.0), sequence, source)));

    while let Some(Reverse((OrderedFloat(distance), _, node))) = heap.pop() {
        if visited[node.index()] {
            continue;
        }
        visited[node.index()] = true;
        settled.push(node);

        for edge in graph.edges(node) {
            let next = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            if visited[next.index()] {
                continue;
            }

            let weight = edge_weight(edge.weight());
            debug_assert!(weight >= 0.0, "negative edge weight {weight}");
            let candidate = distance + weight;
            let improves = match distances[next.index()] {
                None => true,
                Some(known) => candidate < known,
            };
            if improves {
                distances[next.index()] = Some(candidate);
                predecessors[next.index()] = Some((node, edge.id()));
                sequence += 1;
                heap.push(Reverse((OrderedFloat(candidate), sequence, next)));
            }
        }
    }

    ShortestPathTree {
        source,
        distances,
        predecessors,
        settled,
    }
}
