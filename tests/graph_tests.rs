use weighted_paths::{Error, Graph, MutableGraph, WeightPolicy, WeightedGraph};

#[test]
fn test_insert_vertex_is_idempotent() {
    let mut graph: WeightedGraph<&str, f64> = WeightedGraph::new();

    assert!(graph.insert_vertex("A"));
    assert!(!graph.insert_vertex("A"));
    assert!(graph.insert_vertex("B"));

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.vertices(), &["A", "B"]);
    assert!(graph.has_vertex(&"A"));
    assert!(!graph.has_vertex(&"Z"));
}

#[test]
fn test_insert_edge_auto_inserts_endpoints() {
    let mut graph = WeightedGraph::new();
    graph.insert_edge("A", "B", 2.5, true).unwrap();

    assert!(graph.has_vertex(&"A"));
    assert!(graph.has_vertex(&"B"));
    assert_eq!(graph.edge_weight(&"A", &"B"), Some(2.5));
    assert_eq!(graph.edge_weight(&"B", &"A"), None, "directed insertion stores one arc");
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_undirected_insertion_stores_both_arcs() {
    let mut graph = WeightedGraph::non_negative();
    graph.insert_edge("A", "B", 3.0, false).unwrap();

    assert_eq!(graph.edge_weight(&"A", &"B"), Some(3.0));
    assert_eq!(graph.edge_weight(&"B", &"A"), Some(3.0));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_reinsertion_overwrites_weight_in_place() {
    let mut graph = WeightedGraph::new();
    graph.insert_edge("A", "B", 1.0, true).unwrap();
    graph.insert_edge("A", "C", 2.0, true).unwrap();
    graph.insert_edge("A", "B", 7.0, true).unwrap();

    assert_eq!(graph.edge_count(), 2);
    let neighbors: Vec<(&&str, f64)> = graph.neighbors(&"A").unwrap().collect();
    assert_eq!(neighbors, vec![(&"B", 7.0), (&"C", 2.0)]);
}

#[test]
fn test_neighbors_follow_insertion_order() {
    let mut graph = WeightedGraph::new();
    graph.insert_edge("A", "D", 1.0, true).unwrap();
    graph.insert_edge("A", "B", 2.0, true).unwrap();
    graph.insert_edge("A", "C", 3.0, true).unwrap();

    let order: Vec<&str> = graph.neighbors(&"A").unwrap().map(|(v, _)| *v).collect();
    assert_eq!(order, vec!["D", "B", "C"]);
    assert!(graph.neighbors(&"Z").is_none());
    assert_eq!(graph.neighbors(&"D").unwrap().count(), 0);
}

#[test]
fn test_negative_weight_rejected_by_non_negative_graph() {
    let mut graph = WeightedGraph::non_negative();
    graph.insert_edge("A", "C", 4.0, false).unwrap();
    let edges_before: Vec<(String, String, f64)> = graph
        .edges()
        .map(|(f, t, w)| (f.to_string(), t.to_string(), w))
        .collect();

    let err = graph.insert_edge("A", "B", -5.0, false).unwrap_err();
    assert!(matches!(err, Error::NegativeWeight { weight, .. } if weight == -5.0));

    let edges_after: Vec<(String, String, f64)> = graph
        .edges()
        .map(|(f, t, w)| (f.to_string(), t.to_string(), w))
        .collect();
    assert_eq!(edges_before, edges_after);
    assert!(!graph.has_vertex(&"B"), "rejected edge must not insert its endpoints");
}

#[test]
fn test_negative_weight_allowed_by_default_graph() {
    let mut graph = WeightedGraph::new();
    assert_eq!(graph.policy(), WeightPolicy::AllowNegative);
    graph.insert_edge("A", "B", -5.0, true).unwrap();
    assert_eq!(graph.edge_weight(&"A", &"B"), Some(-5.0));
    assert!(!graph.validate_non_negative());
}

#[test]
fn test_non_finite_weights_rejected() {
    let mut graph: WeightedGraph<&str, f64> = WeightedGraph::new();

    for weight in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = graph.insert_edge("A", "B", weight, true).unwrap_err();
        assert!(matches!(err, Error::NonFiniteWeight { .. }));
    }
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_edges_are_listed_in_fixed_order() {
    let mut graph = WeightedGraph::new();
    graph.insert_edge("B", "C", 2.0, true).unwrap();
    graph.insert_edge("A", "B", 1.0, true).unwrap();
    graph.insert_edge("B", "A", 3.0, true).unwrap();

    let edges: Vec<(&str, &str, f64)> = graph.edges().map(|(f, t, w)| (*f, *t, w)).collect();
    assert_eq!(edges, vec![("B", "C", 2.0), ("B", "A", 3.0), ("A", "B", 1.0)]);
}

#[test]
fn test_clear_keeps_policy() {
    let mut graph = WeightedGraph::non_negative();
    graph.insert_edge(1, 2, 1.0, false).unwrap();
    graph.clear();

    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.policy(), WeightPolicy::NonNegative);
    assert!(graph.insert_edge(1, 2, -1.0, false).is_err());
}
