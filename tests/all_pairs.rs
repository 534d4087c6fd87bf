use rand::{rngs::StdRng, SeedableRng};
use traffic_paths::graphs::{
    graph_functions::{all_pairs_by_dijkstra, delhi_network, random_network, validate_route},
    road_network::RoadNetwork,
    UNREACHABLE,
};

#[test]
fn triangle_scenario() {
    let graph =
        RoadNetwork::from_edges(&[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)]).unwrap();

    let matrix = graph.all_pairs_shortest_paths();
    assert_eq!(matrix.get("A", "C"), Some(3.0));
    assert_eq!(matrix.get("C", "A"), Some(3.0));
    assert_eq!(matrix.get("A", "B"), Some(1.0));
}

#[test]
fn diagonal_is_zero() {
    let matrix = delhi_network().all_pairs_shortest_paths();

    for node in matrix.nodes() {
        assert_eq!(matrix.get(node, node), Some(0.0));
    }
}

#[test]
fn matrix_is_symmetric() {
    let matrix = delhi_network().all_pairs_shortest_paths();

    for from in matrix.nodes() {
        for to in matrix.nodes() {
            assert_eq!(matrix.get(from, to), matrix.get(to, from));
        }
    }
}

#[test]
fn triangle_inequality_holds_after_relaxation() {
    let matrix = delhi_network().all_pairs_shortest_paths();

    for i in matrix.nodes() {
        for j in matrix.nodes() {
            for k in matrix.nodes() {
                let direct = matrix.get(i, j).unwrap();
                let detour = matrix.get(i, k).unwrap() + matrix.get(k, j).unwrap();
                assert!(direct <= detour + 1e-9);
            }
        }
    }
}

#[test]
fn unreachable_pairs_carry_the_sentinel() {
    let mut graph =
        RoadNetwork::from_edges(&[("A", "B", 1.0), ("C", "D", 2.0)]).unwrap();
    graph.add_node("E").unwrap();

    let matrix = graph.all_pairs_shortest_paths();
    assert_eq!(matrix.get("A", "C"), Some(UNREACHABLE));
    assert_eq!(matrix.get("A", "E"), Some(UNREACHABLE));
    assert!(!matrix.is_reachable("A", "E"));
    assert!(matrix.is_reachable("A", "B"));
    assert_eq!(matrix.get("A", "Z"), None);
}

#[test]
fn empty_graph_yields_empty_matrix() {
    let matrix = RoadNetwork::new().all_pairs_shortest_paths();

    assert!(matrix.is_empty());
    assert!(matrix.nodes().is_empty());
    assert_eq!(matrix.get("A", "B"), None);
}

#[test]
fn parallel_roads_resolve_to_the_cheapest() {
    let mut graph = RoadNetwork::new();
    graph.add_edge("A", "B", 4.0).unwrap();
    graph.add_edge("A", "B", 2.0).unwrap();

    let matrix = graph.all_pairs_shortest_paths();
    assert_eq!(matrix.get("A", "B"), Some(2.0));
    assert_eq!(matrix.get("B", "A"), Some(2.0));
}

#[test]
fn floyd_warshall_agrees_with_dijkstra_on_delhi() {
    let graph = delhi_network();

    let matrix = graph.all_pairs_shortest_paths();
    let reference = all_pairs_by_dijkstra(&graph);

    for from in matrix.nodes() {
        for to in matrix.nodes() {
            assert_eq!(matrix.get(from, to), reference.get(from, to));

            let route = graph.shortest_path(from, to).unwrap();
            match route {
                Some(route) => assert_eq!(Some(route.distance), matrix.get(from, to)),
                None => assert_eq!(matrix.get(from, to), Some(UNREACHABLE)),
            }
        }
    }
}

#[test]
fn floyd_warshall_agrees_with_dijkstra_on_random_networks() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..5 {
        let graph = random_network(&mut rng, 30, 60);

        let matrix = graph.all_pairs_shortest_paths();
        let reference = all_pairs_by_dijkstra(&graph);

        for from in matrix.nodes() {
            for to in matrix.nodes() {
                assert_eq!(matrix.get(from, to), reference.get(from, to));

                if let Some(route) = graph.shortest_path(from, to).unwrap() {
                    assert_eq!(Some(route.distance), matrix.get(from, to));
                    validate_route(&graph, &route).unwrap();
                }
            }
        }
    }
}
