use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod graph_functions;
pub mod road_network;

pub type Node = String;
pub type Distance = f64;

/// Marks node pairs with no connecting route.
pub const UNREACHABLE: Distance = Distance::INFINITY;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum GraphError {
    #[error("node names must not be empty")]
    EmptyNodeName,
    #[error("road length must be positive and finite, got {0}")]
    InvalidDistance(Distance),
    #[error("speed must be positive and finite, got {0}")]
    InvalidSpeed(f64),
    #[error("`{0}` is not a known location")]
    UnknownNode(Node),
}

/// One directed adjacency entry: the road continues to `to` and is
/// `distance` units long.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    pub to: Node,
    pub distance: Distance,
}
