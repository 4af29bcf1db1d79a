//! Integration tests for routing over the fixed department edge set.

use triage_dispatch_core_rs::{Orientation, RouteError, RouteGraph, FIXED_EDGES};

fn departments() -> Vec<String> {
    vec![
        "ER".into(),
        "Radiology".into(),
        "Surgery".into(),
        "ICU".into(),
        "Pharmacy".into(),
    ]
}

fn fixed_graph(orientation: Orientation) -> RouteGraph {
    let mut graph = RouteGraph::new(departments());
    graph.install_edges(orientation, &FIXED_EDGES).unwrap();
    graph
}

#[test]
fn directed_fixed_edges_route_0_to_3() {
    let graph = fixed_graph(Orientation::Directed);

    let route = graph.shortest_path(0, 3).unwrap();
    assert_eq!(route.distance(), 7);
    assert_eq!(route.nodes(), &[0, 1, 2, 4, 3]);
    assert_eq!(
        route.named(&graph),
        vec!["ER", "Radiology", "Surgery", "Pharmacy", "ICU"]
    );
}

#[test]
fn undirected_fixed_edges_route_3_to_1() {
    // With every fixed edge symmetric, 3→4→2→1 (1+2+3) and 3→0→1 (5+1)
    // both cost 6; the lowest-index tie-break settles node 4 before node 0,
    // so the route goes through 4 and 2.
    let graph = fixed_graph(Orientation::Undirected);

    let route = graph.shortest_path(3, 1).unwrap();
    assert_eq!(route.distance(), 6);
    assert_eq!(route.nodes(), &[3, 4, 2, 1]);
}

#[test]
fn directed_edges_are_one_way() {
    let graph = fixed_graph(Orientation::Directed);

    // 1→0 only exists in the undirected variant
    assert_eq!(
        graph.shortest_path(1, 0).unwrap().distance(),
        3 + 2 + 1 + 5 // 1→2→4→3→0
    );
    assert_eq!(graph.weight(1, 0), None);
}

#[test]
fn path_to_self_has_distance_zero() {
    let graph = fixed_graph(Orientation::Directed);
    let route = graph.shortest_path(2, 2).unwrap();
    assert_eq!(route.distance(), 0);
    assert_eq!(route.nodes(), &[2]);
}

#[test]
fn unreachable_destination_is_an_error_not_a_path() {
    // Sixth department with no incident edges
    let mut names = departments();
    names.push("Morgue".into());
    let mut graph = RouteGraph::new(names);
    graph
        .install_edges(Orientation::Directed, &FIXED_EDGES)
        .unwrap();

    assert_eq!(
        graph.shortest_path(0, 5).unwrap_err(),
        RouteError::Unreachable { src: 0, dest: 5 }
    );
}

#[test]
fn invalid_endpoints_are_rejected() {
    let graph = fixed_graph(Orientation::Directed);

    assert!(matches!(
        graph.shortest_path(9, 0),
        Err(RouteError::InvalidNode { index: 9, .. })
    ));
    assert!(matches!(
        graph.shortest_path(0, 9),
        Err(RouteError::InvalidNode { index: 9, .. })
    ));
}

#[test]
fn edgeless_graph_routes_nothing_but_self() {
    // Orientation prompt answered with neither variant: no edges installed
    let graph = RouteGraph::new(departments());

    assert!(graph.shortest_path(0, 0).is_ok());
    assert_eq!(
        graph.shortest_path(0, 4).unwrap_err(),
        RouteError::Unreachable { src: 0, dest: 4 }
    );
}
