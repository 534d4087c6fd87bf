use log::debug;
use serde::{Deserialize, Serialize};

use crate::graphs::{road_network::RoadNetwork, Distance, Node, UNREACHABLE};

/// Complete table of shortest distances between every pair of known nodes.
///
/// Unreachable pairs carry [`UNREACHABLE`] rather than a made-up finite
/// distance; the diagonal is always zero. Row and column index of a node is
/// its position in the sorted node list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DistanceMatrix {
    nodes: Vec<Node>,
    distances: Vec<Vec<Distance>>,
}

impl DistanceMatrix {
    pub(crate) fn from_parts(nodes: Vec<Node>, distances: Vec<Vec<Distance>>) -> DistanceMatrix {
        DistanceMatrix { nodes, distances }
    }

    /// Known nodes in lexicographic order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn index_of(&self, node: &str) -> Option<usize> {
        self.nodes
            .binary_search_by(|other| other.as_str().cmp(node))
            .ok()
    }

    /// Shortest distance from `from` to `to`, [`UNREACHABLE`] if no route
    /// exists, `None` if either node is unknown.
    pub fn get(&self, from: &str, to: &str) -> Option<Distance> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        Some(self.distances[from][to])
    }

    pub fn is_reachable(&self, from: &str, to: &str) -> bool {
        self.get(from, to).is_some_and(Distance::is_finite)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Floyd-Warshall over the current state of the road network.
///
/// O(n^3) time and O(n^2) space over the node count, which is fine for the
/// small networks this crate targets and nothing bigger.
pub fn all_pairs_shortest_paths(graph: &RoadNetwork) -> DistanceMatrix {
    let nodes = graph.sorted_nodes();
    debug!("running floyd-warshall over {} nodes", nodes.len());

    let mut distances = vec![vec![UNREACHABLE; nodes.len()]; nodes.len()];

    for (i, node) in nodes.iter().enumerate() {
        distances[i][i] = 0.0;
        for segment in graph.segments(node) {
            // Segment heads are known nodes by construction.
            let j = nodes.binary_search(&segment.to).unwrap();
            // Parallel roads between the same pair collapse to the cheapest.
            if segment.distance < distances[i][j] {
                distances[i][j] = segment.distance;
            }
        }
    }

    // `k` must stay the outermost loop: after round `k`, distances[i][j] is
    // the shortest using only the first `k` sorted nodes as intermediates.
    for k in 0..nodes.len() {
        for i in 0..nodes.len() {
            let through_k = distances[i][k];
            if through_k == UNREACHABLE {
                continue;
            }
            for j in 0..nodes.len() {
                let detour = through_k + distances[k][j];
                if detour < distances[i][j] {
                    distances[i][j] = detour;
                }
            }
        }
    }

    DistanceMatrix::from_parts(nodes, distances)
}
