use log::debug;

use crate::graphs::{road_network::RoadNetwork, GraphError, Node};

/// Every simple route between `source` and `target`, in depth-first
/// discovery order over the adjacency lists.
///
/// The search is exhaustive and exponential in the worst case, so it is only
/// meant for small demonstration networks. The result list is allocated
/// fresh on every call; nothing is carried over between queries.
pub fn all_simple_paths(
    graph: &RoadNetwork,
    source: &str,
    target: &str,
) -> Result<Vec<Vec<Node>>, GraphError> {
    for node in [source, target] {
        if !graph.contains(node) {
            return Err(GraphError::UnknownNode(node.to_string()));
        }
    }

    let mut found = Vec::new();
    let mut current = vec![source.to_string()];
    extend_path(graph, target, &mut current, &mut found);

    debug!(
        "found {} simple paths between {} and {}",
        found.len(),
        source,
        target
    );

    Ok(found)
}

fn extend_path(
    graph: &RoadNetwork,
    target: &str,
    current: &mut Vec<Node>,
    found: &mut Vec<Vec<Node>>,
) {
    let tail = current.last().expect("current path is never empty").clone();
    if tail == target {
        found.push(current.clone());
        return;
    }

    for segment in graph.segments(&tail) {
        // A node already on the current path is never revisited, which
        // keeps every reported path simple.
        if current.contains(&segment.to) {
            continue;
        }
        current.push(segment.to.clone());
        extend_path(graph, target, current, found);
        current.pop();
    }
}
