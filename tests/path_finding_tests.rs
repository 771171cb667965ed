use dotpath::graph::DirectedGraph;
use dotpath::{Dijkstra, Error, NodeId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Test helper to read a node's finalized distance by external id
fn distance_to(graph: &DirectedGraph<u32>, id: NodeId) -> u32 {
    graph.node(graph.get(id).unwrap()).distance()
}

// Test helper to collect the source-to-target path as external ids
fn path_ids(graph: &DirectedGraph<u32>, source_id: NodeId, target_id: NodeId) -> Vec<NodeId> {
    let mut ids = vec![target_id];
    let mut current = graph.get(target_id).unwrap();
    while graph.node(current).id() != source_id {
        current = graph.node(current).previous().expect("broken predecessor chain");
        ids.push(graph.node(current).id());
    }
    ids.reverse();
    ids
}

#[test]
fn triangle_prefers_two_hop_path_over_direct_edge() {
    let mut graph: DirectedGraph<u32> = DirectedGraph::new();
    graph.insert_edge(1, 2, 5);
    graph.insert_edge(2, 3, 2);
    graph.insert_edge(1, 3, 10);

    let target = graph.get(3);
    Dijkstra::new().shortest_path(&mut graph, 1, target).unwrap();

    assert_eq!(distance_to(&graph, 3), 7, "two hops beat the direct edge");
    assert_eq!(path_ids(&graph, 1, 3), vec![1, 2, 3]);
}

#[test]
fn unknown_source_is_reported() {
    let mut graph: DirectedGraph<u32> = DirectedGraph::new();
    graph.insert_edge(1, 2, 5);

    let err = Dijkstra::new().shortest_path(&mut graph, 9, None).unwrap_err();
    match err {
        Error::InvalidSource(id) => assert_eq!(id, 9),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn unreachable_node_keeps_infinite_distance_and_no_predecessor() {
    let mut graph: DirectedGraph<u32> = DirectedGraph::new();
    graph.insert_node(1);
    graph.insert_node(2);
    graph.insert_edge(2, 1, 3); // only points the wrong way

    Dijkstra::new().shortest_path(&mut graph, 1, None).unwrap();

    assert_eq!(distance_to(&graph, 2), u32::MAX);
    assert_eq!(graph.node(graph.get(2).unwrap()).previous(), None);
}

#[test]
fn self_loops_never_improve_a_distance() {
    let mut graph: DirectedGraph<u32> = DirectedGraph::new();
    graph.insert_edge(1, 1, 0);
    graph.insert_edge(1, 2, 4);

    Dijkstra::new().shortest_path(&mut graph, 1, None).unwrap();

    assert_eq!(distance_to(&graph, 1), 0);
    assert_eq!(graph.node(graph.get(1).unwrap()).previous(), None);
    assert_eq!(distance_to(&graph, 2), 4);
}

#[test]
fn parallel_edges_relax_independently_and_best_wins() {
    let mut graph: DirectedGraph<u32> = DirectedGraph::new();
    graph.insert_edge(1, 2, 9);
    graph.insert_edge(1, 2, 3);
    graph.insert_edge(1, 2, 6);

    Dijkstra::new().shortest_path(&mut graph, 1, None).unwrap();

    assert_eq!(distance_to(&graph, 2), 3);
    assert_eq!(path_ids(&graph, 1, 2), vec![1, 2]);
}

#[test]
fn implicitly_created_endpoint_is_searchable() {
    let mut graph: DirectedGraph<u32> = DirectedGraph::new();
    graph.insert_node(1);
    // Node 5 only ever appears as an edge endpoint.
    graph.insert_edge(1, 5, 2);

    Dijkstra::new().shortest_path(&mut graph, 1, None).unwrap();

    assert_eq!(distance_to(&graph, 5), 2);
}

#[test]
fn rerunning_the_same_search_is_idempotent() {
    let mut graph: DirectedGraph<u32> = DirectedGraph::new();
    graph.insert_edge(1, 2, 5);
    graph.insert_edge(2, 3, 2);
    graph.insert_edge(1, 3, 10);
    graph.insert_edge(3, 4, 1);

    Dijkstra::new().shortest_path(&mut graph, 1, None).unwrap();
    let first: Vec<(u32, Option<usize>)> = graph
        .nodes()
        .map(|n| (n.distance(), n.previous()))
        .collect();

    Dijkstra::new().shortest_path(&mut graph, 1, None).unwrap();
    let second: Vec<(u32, Option<usize>)> = graph
        .nodes()
        .map(|n| (n.distance(), n.previous()))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn early_exit_at_target_finalizes_its_distance() {
    // Long chain plus a shortcut; stopping at the target must still report
    // the true minimum.
    let mut graph: DirectedGraph<u32> = DirectedGraph::new();
    graph.insert_edge(0, 1, 1);
    graph.insert_edge(1, 2, 1);
    graph.insert_edge(2, 3, 1);
    graph.insert_edge(0, 3, 5);
    graph.insert_edge(3, 4, 1);

    let target = graph.get(3);
    Dijkstra::new().shortest_path(&mut graph, 0, target).unwrap();

    assert_eq!(distance_to(&graph, 3), 3);
    assert_eq!(path_ids(&graph, 0, 3), vec![0, 1, 2, 3]);
}

// Exhaustive minimum over all simple paths from source to target.
fn brute_force_distance(
    edges: &[(NodeId, NodeId, u32)],
    source: NodeId,
    target: NodeId,
    visited: &mut Vec<NodeId>,
) -> Option<u64> {
    if source == target {
        return Some(0);
    }
    let mut best: Option<u64> = None;
    visited.push(source);
    for &(from, to, weight) in edges {
        if from != source || visited.contains(&to) {
            continue;
        }
        if let Some(rest) = brute_force_distance(edges, to, target, visited) {
            let total = rest + u64::from(weight);
            if best.map_or(true, |b| total < b) {
                best = Some(total);
            }
        }
    }
    visited.pop();
    best
}

#[test]
fn random_graphs_match_brute_force_enumeration() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..50 {
        let node_count: NodeId = rng.gen_range(2..9);
        let edge_count = rng.gen_range(0..20);
        let mut graph: DirectedGraph<u32> = DirectedGraph::new();
        let mut edges = Vec::with_capacity(edge_count);
        for id in 0..node_count {
            graph.insert_node(id);
        }
        for _ in 0..edge_count {
            let from = rng.gen_range(0..node_count);
            let to = rng.gen_range(0..node_count);
            let weight = rng.gen_range(0..100u32);
            graph.insert_edge(from, to, weight);
            edges.push((from, to, weight));
        }

        Dijkstra::new().shortest_path(&mut graph, 0, None).unwrap();

        for id in 0..node_count {
            let expected = brute_force_distance(&edges, 0, id, &mut Vec::new());
            let actual = distance_to(&graph, id);
            match expected {
                Some(best) => assert_eq!(u64::from(actual), best, "wrong distance to {}", id),
                None => assert_eq!(actual, u32::MAX, "{} should be unreachable", id),
            }
        }
    }
}
