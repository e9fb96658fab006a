use super::*;

const EDGES: [(u32, u32); 6] = [(0, 1), (1, 0), (1, 0), (2, 0), (2, 1), (3, 1)];

fn collect(edges: EdgeIter<'_, u32>) -> Vec<Edge<u32>> {
    edges.collect()
}

#[test]
fn test_directed_collapses_duplicate_edges() {
    let graph = MemoryGraph::from_edges(GraphKind::Directed, EDGES);
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(collect(graph.out_edges(&1)), vec![Edge::new(1, 0)]);
}

#[test]
fn test_undirected_merges_both_orders() {
    let graph = MemoryGraph::from_edges(GraphKind::Undirected, EDGES);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(
        collect(graph.edges(&1)),
        vec![Edge::new(1, 0), Edge::new(1, 2), Edge::new(1, 3)]
    );
}

#[test]
fn test_multigraph_keys_count_parallel_edges() {
    let graph = MemoryGraph::from_edges(GraphKind::MultiUndirected, EDGES);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(
        collect(graph.edges(&0)),
        vec![
            Edge::keyed(0, 1, 0),
            Edge::keyed(0, 1, 1),
            Edge::keyed(0, 1, 2),
            Edge::keyed(0, 2, 0),
        ]
    );
}

#[test]
fn test_multi_directed_keys_per_ordered_pair() {
    let mut graph = MemoryGraph::multi_directed();
    assert_eq!(graph.add_edge(0, 1), Some(0));
    assert_eq!(graph.add_edge(1, 0), Some(0));
    assert_eq!(graph.add_edge(1, 0), Some(1));
    assert_eq!(
        collect(graph.in_edges(&0)),
        vec![Edge::keyed(1, 0, 0), Edge::keyed(1, 0, 1)]
    );
}

#[test]
fn test_explicit_keys_skip_taken_slots() {
    let mut graph = MemoryGraph::multi_directed();
    assert!(graph.add_keyed_edge("a", "b", 1));
    assert!(!graph.add_keyed_edge("a", "b", 1));
    // Allocation starts at the parallel-edge count and skips keys in use
    assert_eq!(graph.add_edge("a", "b"), Some(2));
    assert_eq!(graph.add_edge("a", "b"), Some(3));
    assert!(graph.add_keyed_edge("a", "b", 0));
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_simple_graph_ignores_explicit_key() {
    let mut graph = MemoryGraph::directed();
    assert!(graph.add_keyed_edge(0, 1, 7));
    assert!(!graph.add_keyed_edge(0, 1, 8));
    assert_eq!(collect(graph.out_edges(&0)), vec![Edge::new(0, 1)]);
}

#[test]
fn test_in_edges_directed() {
    let graph = MemoryGraph::from_edges(GraphKind::Directed, EDGES);
    assert_eq!(
        collect(graph.in_edges(&1)),
        vec![Edge::new(0, 1), Edge::new(2, 1), Edge::new(3, 1)]
    );
    assert_eq!(collect(graph.in_edges(&3)), vec![]);
}

#[test]
fn test_in_edges_undirected_seen_from_far_end() {
    let graph = MemoryGraph::from_edges(GraphKind::Undirected, [(0, 1), (0, 2)]);
    assert_eq!(
        collect(graph.in_edges(&0)),
        vec![Edge::new(1, 0), Edge::new(2, 0)]
    );
}

#[test]
fn test_undirected_self_loop_listed_once() {
    let mut graph = MemoryGraph::undirected();
    graph.add_edge(5, 5);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(collect(graph.edges(&5)), vec![Edge::new(5, 5)]);
}

#[test]
fn test_unknown_node_has_no_edges() {
    let graph = MemoryGraph::from_edges(GraphKind::Directed, EDGES);
    assert!(!graph.contains_node(&9));
    assert_eq!(graph.out_edges(&9).count(), 0);
    assert_eq!(graph.in_edges(&9).count(), 0);
    assert_eq!(graph.neighbors(&9).count(), 0);
}

#[test]
fn test_nodes_in_insertion_order() {
    let mut graph = MemoryGraph::directed();
    graph.add_node(3);
    graph.add_path([0, 1, 2, 3]);
    graph.add_nodes_from([7, 0]);
    assert_eq!(graph.nodes().collect::<Vec<_>>(), vec![3, 0, 1, 2, 7]);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_neighbors_are_distinct() {
    let graph = MemoryGraph::from_edges(GraphKind::MultiDirected, EDGES);
    assert_eq!(graph.neighbors(&1).collect::<Vec<_>>(), vec![0]);
}

#[test]
fn test_add_path_single_node() {
    let mut graph = MemoryGraph::undirected();
    graph.add_path(["solo"]);
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_kind_flags() {
    let graph: MemoryGraph<u8> = MemoryGraph::multi_undirected();
    assert!(!graph.is_directed());
    assert!(graph.is_multigraph());
    assert_eq!(GraphProvider::kind(&graph), GraphKind::MultiUndirected);
}
