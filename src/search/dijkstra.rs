use std::collections::BinaryHeap;

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use log::debug;

use super::{queue::QueueEntry, Route};
use crate::graphs::{
    road_network::RoadNetwork, Distance, GraphError, Node, RoadSegment, UNREACHABLE,
};

/// Bookkeeping of a single Dijkstra run: tentative distances, predecessor
/// links and the set of nodes whose distance is final.
pub struct DijkstraData {
    queue: BinaryHeap<QueueEntry>,
    distances: HashMap<Node, Distance>,
    predecessors: HashMap<Node, Node>,
    expanded: HashSet<Node>,
}

impl DijkstraData {
    pub fn new(source: &str) -> DijkstraData {
        let mut data = DijkstraData {
            queue: BinaryHeap::new(),
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            expanded: HashSet::new(),
        };

        data.distances.insert(source.to_string(), 0.0);
        data.queue.push(QueueEntry::new(0.0, source.to_string()));

        data
    }

    /// Pops the unexpanded node with the smallest tentative distance.
    ///
    /// The queue may hold stale duplicate entries for nodes that were
    /// relaxed several times before extraction; those are skipped here so a
    /// node is expanded at most once.
    pub fn pop(&mut self) -> Option<QueueEntry> {
        while let Some(entry) = self.queue.pop() {
            if self.expanded.insert(entry.node.clone()) {
                return Some(entry);
            }
        }

        None
    }

    /// Relaxes `segment` out of `tail`, recording the predecessor when the
    /// tentative distance improves.
    pub fn update(&mut self, tail: &str, segment: &RoadSegment) {
        let alternative = self.distances[tail] + segment.distance;
        let current = self
            .distances
            .get(&segment.to)
            .copied()
            .unwrap_or(UNREACHABLE);
        if alternative < current {
            self.predecessors
                .insert(segment.to.clone(), tail.to_string());
            self.distances.insert(segment.to.clone(), alternative);
            self.queue
                .push(QueueEntry::new(alternative, segment.to.clone()));
        }
    }

    pub fn distance(&self, node: &str) -> Option<Distance> {
        self.distances.get(node).copied()
    }

    /// Reconstructs the route to `target` by walking the predecessor links
    /// back to the source.
    pub fn route_to(&self, target: &str) -> Option<Route> {
        let distance = self.distance(target)?;

        let mut nodes = vec![target.to_string()];
        let mut current = target;
        while let Some(predecessor) = self.predecessors.get(current) {
            current = predecessor;
            nodes.push(current.to_string());
        }
        nodes.reverse();

        Some(Route { nodes, distance })
    }
}

/// Shortest route between `source` and `target`.
///
/// The search stops as soon as the target is extracted from the queue; its
/// distance is final at that point because road lengths are non-negative.
/// Returns `Ok(None)` when no route exists.
pub fn shortest_path(
    graph: &RoadNetwork,
    source: &str,
    target: &str,
) -> Result<Option<Route>, GraphError> {
    for node in [source, target] {
        if !graph.contains(node) {
            return Err(GraphError::UnknownNode(node.to_string()));
        }
    }

    let mut data = DijkstraData::new(source);
    while let Some(QueueEntry { node, .. }) = data.pop() {
        if node == target {
            break;
        }
        for segment in graph.segments(&node) {
            data.update(&node, segment);
        }
    }

    debug!(
        "settled {} of {} nodes searching {} -> {}",
        data.expanded.len(),
        graph.number_of_nodes(),
        source,
        target
    );

    Ok(data.route_to(target))
}

/// Shortest distances from `source` to every reachable node.
pub fn single_source(graph: &RoadNetwork, source: &str) -> Result<DijkstraData, GraphError> {
    if !graph.contains(source) {
        return Err(GraphError::UnknownNode(source.to_string()));
    }

    let mut data = DijkstraData::new(source);
    while let Some(QueueEntry { node, .. }) = data.pop() {
        for segment in graph.segments(&node) {
            data.update(&node, segment);
        }
    }

    Ok(data)
}
