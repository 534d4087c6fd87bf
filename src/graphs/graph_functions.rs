use ahash::{HashSet, HashSetExt};
use itertools::Itertools;
use rand::Rng;
use rayon::prelude::*;

use super::{road_network::RoadNetwork, Distance, Node, UNREACHABLE};
use crate::search::{dijkstra::single_source, floyd_warshall::DistanceMatrix, Route};

/// Road map of Delhi used by the demo binaries and tests: 15 locations
/// connected by 20 roads.
pub fn delhi_network() -> RoadNetwork {
    RoadNetwork::from_edges(&[
        ("Connaught Place", "Chandni Chowk", 5.0),
        ("Connaught Place", "Karol Bagh", 4.0),
        ("Connaught Place", "Lajpat Nagar", 7.0),
        ("Connaught Place", "Hauz Khas", 10.0),
        ("Chandni Chowk", "Karol Bagh", 6.0),
        ("Chandni Chowk", "Shahdara", 8.0),
        ("Karol Bagh", "Rohini", 12.0),
        ("Karol Bagh", "Pitampura", 10.0),
        ("Lajpat Nagar", "Saket", 5.0),
        ("Lajpat Nagar", "Greater Kailash", 4.0),
        ("Saket", "Hauz Khas", 3.0),
        ("Hauz Khas", "Vasant Kunj", 6.0),
        ("Vasant Kunj", "Dwarka", 15.0),
        ("Dwarka", "Janakpuri", 8.0),
        ("Janakpuri", "Pitampura", 18.0),
        ("Pitampura", "Shahdara", 20.0),
        ("Shahdara", "Noida", 12.0),
        ("Noida", "Mayur Vihar", 5.0),
        ("Mayur Vihar", "Greater Kailash", 10.0),
        ("Greater Kailash", "Hauz Khas", 8.0),
    ])
    .expect("predefined road map is valid")
}

/// Checks that a route is well formed for the given network. Returns a
/// description of the first violation found.
pub fn validate_route(graph: &RoadNetwork, route: &Route) -> Result<(), String> {
    if route.nodes.is_empty() {
        return Err("route has no nodes".to_string());
    }

    let mut seen = HashSet::new();
    for node in &route.nodes {
        if !seen.insert(node.as_str()) {
            return Err(format!("node {} appears twice", node));
        }
    }

    let mut total = 0.0;
    for (from, to) in route.nodes.iter().tuple_windows() {
        match graph.direct_distance(from, to) {
            Some(distance) => total += distance,
            None => return Err(format!("no road between {} and {}", from, to)),
        }
    }

    if (total - route.distance).abs() > 1e-9 {
        return Err(format!(
            "route distance {} does not match segment sum {}",
            route.distance, total
        ));
    }

    Ok(())
}

/// Total length of a node sequence, following the cheapest road between
/// consecutive stops. `None` if some consecutive pair is not connected.
pub fn route_distance(graph: &RoadNetwork, nodes: &[Node]) -> Option<Distance> {
    let mut total = 0.0;
    for (from, to) in nodes.iter().tuple_windows() {
        total += graph.direct_distance(from, to)?;
    }
    Some(total)
}

/// All-pairs shortest distances computed by one Dijkstra run per source, in
/// parallel. Serves as an independent cross-check of the Floyd-Warshall
/// solver in the agreement tests.
pub fn all_pairs_by_dijkstra(graph: &RoadNetwork) -> DistanceMatrix {
    let nodes = graph.sorted_nodes();

    let distances = nodes
        .par_iter()
        .map(|source| {
            // Sources come straight out of the graph's node set.
            let data = single_source(graph, source).expect("source is a known node");
            nodes
                .iter()
                .map(|target| data.distance(target).unwrap_or(UNREACHABLE))
                .collect()
        })
        .collect();

    DistanceMatrix::from_parts(nodes, distances)
}

/// Random network for tests: numbered junctions with integer-valued
/// distances, so float sums stay exact and solver results can be compared
/// for equality.
pub fn random_network(
    rng: &mut impl Rng,
    number_of_nodes: u32,
    number_of_edges: u32,
) -> RoadNetwork {
    let mut graph = RoadNetwork::new();

    for node in 0..number_of_nodes {
        graph
            .add_node(&format!("junction-{}", node))
            .expect("generated names are not empty");
    }

    for _ in 0..number_of_edges {
        // guarantee that from != to
        let from = rng.gen_range(0..number_of_nodes);
        let mut to = rng.gen_range(0..number_of_nodes - 1);
        if to >= from {
            to += 1;
        }
        let distance = rng.gen_range(1..=30) as Distance;

        graph
            .add_edge(
                &format!("junction-{}", from),
                &format!("junction-{}", to),
                distance,
            )
            .expect("generated edges are valid");
    }

    graph
}
