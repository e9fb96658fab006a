use edgewalk::prelude::*;

pub const NODES: [u32; 4] = [0, 1, 2, 3];
pub const EDGES: [(u32, u32); 6] = [(0, 1), (1, 0), (1, 0), (2, 0), (2, 1), (3, 1)];

/// The shared fixture graph built as `kind`
pub fn fixture(kind: GraphKind) -> MemoryGraph<u32> {
    let mut graph = MemoryGraph::new(kind);
    graph.add_nodes_from(NODES);
    for (tail, head) in EDGES {
        graph.add_edge(tail, head);
    }
    graph
}

/// Directed path 0 -> 1 -> ... -> len - 1
#[allow(dead_code)]
pub fn directed_path(len: u32) -> MemoryGraph<u32> {
    let mut graph = MemoryGraph::directed();
    graph.add_path(0..len);
    graph
}

/// Render edges the way they print, e.g. `(0, 1, 0, forward)`
pub fn render<I>(edges: I) -> Vec<String>
where
    I: IntoIterator<Item = TraversedEdge<u32>>,
{
    edges.into_iter().map(|edge| edge.to_string()).collect()
}

/// Render the output of a generic traversal, panicking on the first error
#[allow(dead_code)]
pub fn render_generic(bfs: GenericEdgeBfs<'_, MemoryGraph<u32>>) -> Vec<String> {
    let edges = bfs
        .collect::<Result<Vec<_>>>()
        .expect("generic traversal failed");
    render(edges)
}

#[allow(dead_code)]
pub fn strs(expected: &[&str]) -> Vec<String> {
    expected.iter().map(|s| s.to_string()).collect()
}
