use ahash::{HashMap, HashMapExt};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{Distance, GraphError, Node, RoadSegment};
use crate::search::{
    dijkstra,
    floyd_warshall::{self, DistanceMatrix},
    simple_paths, Route,
};

/// An undirected road network stored as per-node adjacency lists.
///
/// Every road is kept as two mirrored directed entries, one per direction,
/// so the network stays symmetric by construction. Parallel roads between
/// the same pair of nodes accumulate instead of replacing each other; the
/// solvers resolve them by taking minima at query time.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RoadNetwork {
    edges: HashMap<Node, Vec<RoadSegment>>,
}

impl RoadNetwork {
    pub fn new() -> RoadNetwork {
        RoadNetwork {
            edges: HashMap::new(),
        }
    }

    /// Builds a network from literal `(from, to, distance)` triples.
    pub fn from_edges(edges: &[(&str, &str, Distance)]) -> Result<RoadNetwork, GraphError> {
        let mut graph = RoadNetwork::new();
        for (from, to, distance) in edges {
            graph.add_edge(from, to, *distance)?;
        }
        Ok(graph)
    }

    /// Registers a location without connecting it to anything. Routing
    /// towards it yields "no route" instead of an unknown-node error.
    pub fn add_node(&mut self, name: &str) -> Result<(), GraphError> {
        if name.is_empty() {
            return Err(GraphError::EmptyNodeName);
        }

        self.edges.entry(name.to_string()).or_default();
        Ok(())
    }

    /// Adds an undirected road between `from` and `to`.
    ///
    /// Both directions are inserted; a road added twice is stored twice.
    pub fn add_edge(&mut self, from: &str, to: &str, distance: Distance) -> Result<(), GraphError> {
        if from.is_empty() || to.is_empty() {
            return Err(GraphError::EmptyNodeName);
        }
        if !distance.is_finite() || distance <= 0.0 {
            return Err(GraphError::InvalidDistance(distance));
        }

        self.edges
            .entry(from.to_string())
            .or_default()
            .push(RoadSegment {
                to: to.to_string(),
                distance,
            });
        self.edges
            .entry(to.to_string())
            .or_default()
            .push(RoadSegment {
                to: from.to_string(),
                distance,
            });

        Ok(())
    }

    pub fn contains(&self, node: &str) -> bool {
        self.edges.contains_key(node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.edges.keys()
    }

    /// Known nodes in lexicographic order.
    pub fn sorted_nodes(&self) -> Vec<Node> {
        self.edges.keys().cloned().sorted().collect()
    }

    /// Outgoing adjacency entries of `node`, in insertion order. Empty for
    /// unknown nodes.
    pub fn segments(&self, node: &str) -> &[RoadSegment] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Length of the cheapest direct road between two nodes, if any.
    pub fn direct_distance(&self, from: &str, to: &str) -> Option<Distance> {
        self.segments(from)
            .iter()
            .filter(|segment| segment.to == to)
            .map(|segment| segment.distance)
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn number_of_nodes(&self) -> usize {
        self.edges.len()
    }

    pub fn number_of_edges(&self) -> usize {
        // Each road is stored once per direction.
        self.edges.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Shortest route between two named locations, or `Ok(None)` if `end`
    /// cannot be reached.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Option<Route>, GraphError> {
        dijkstra::shortest_path(self, start, end)
    }

    /// Shortest distances between every ordered pair of known nodes.
    pub fn all_pairs_shortest_paths(&self) -> DistanceMatrix {
        floyd_warshall::all_pairs_shortest_paths(self)
    }

    /// Every simple route between two named locations, in depth-first
    /// discovery order.
    pub fn all_simple_paths(&self, start: &str, end: &str) -> Result<Vec<Vec<Node>>, GraphError> {
        simple_paths::all_simple_paths(self, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roads_are_stored_in_both_directions() {
        let mut graph = RoadNetwork::new();
        graph.add_edge("A", "B", 4.0).unwrap();

        assert_eq!(graph.direct_distance("A", "B"), Some(4.0));
        assert_eq!(graph.direct_distance("B", "A"), Some(4.0));
        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn parallel_roads_accumulate() {
        let mut graph = RoadNetwork::new();
        graph.add_edge("A", "B", 4.0).unwrap();
        graph.add_edge("A", "B", 2.0).unwrap();

        assert_eq!(graph.segments("A").len(), 2);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.direct_distance("A", "B"), Some(2.0));
        assert_eq!(graph.direct_distance("B", "A"), Some(2.0));
    }

    #[test]
    fn empty_names_are_rejected() {
        let mut graph = RoadNetwork::new();

        assert_eq!(graph.add_edge("", "B", 1.0), Err(GraphError::EmptyNodeName));
        assert_eq!(graph.add_edge("A", "", 1.0), Err(GraphError::EmptyNodeName));
        assert_eq!(graph.add_node(""), Err(GraphError::EmptyNodeName));
        assert_eq!(graph.number_of_nodes(), 0);
    }

    #[test]
    fn bad_distances_are_rejected() {
        let mut graph = RoadNetwork::new();

        for distance in [0.0, -3.0, Distance::NAN, Distance::INFINITY] {
            let result = graph.add_edge("A", "B", distance);
            assert!(matches!(result, Err(GraphError::InvalidDistance(_))));
        }
        assert!(!graph.contains("A"));
    }

    #[test]
    fn isolated_nodes_are_known_but_unconnected() {
        let mut graph = RoadNetwork::new();
        graph.add_node("D").unwrap();

        assert!(graph.contains("D"));
        assert!(graph.segments("D").is_empty());
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn sorted_nodes_are_lexicographic() {
        let mut graph = RoadNetwork::new();
        graph.add_edge("C", "A", 1.0).unwrap();
        graph.add_edge("B", "C", 1.0).unwrap();

        assert_eq!(graph.sorted_nodes(), ["A", "B", "C"]);
    }
}
