use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Node};

pub mod dijkstra;
pub mod floyd_warshall;
pub mod queue;
pub mod simple_paths;

/// Represents a route through the road network.
///
/// This struct encapsulates the locations that form the route and the total
/// distance associated with traversing it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub nodes: Vec<Node>,
    pub distance: Distance,
}
