use crate::graph::types::{Edge, GraphKind};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Lazy sequence of edges borrowed from a provider
pub type EdgeIter<'a, N> = Box<dyn Iterator<Item = Edge<N>> + 'a>;

/// Lazy sequence of nodes borrowed from a provider
pub type NodeIter<'a, N> = Box<dyn Iterator<Item = N> + 'a>;

/// Trait for providing graph adjacency to traversals.
///
/// Enumeration results must stay stable for the lifetime of a traversal; the
/// order they come back in is the order a traversal reports edges in.
pub trait GraphProvider {
    type Node: Clone + Eq + Hash + Debug;

    fn is_directed(&self) -> bool;

    fn is_multigraph(&self) -> bool;

    /// All nodes in the provider's native order
    fn nodes(&self) -> NodeIter<'_, Self::Node>;

    fn contains_node(&self, node: &Self::Node) -> bool;

    /// Edges stored as leaving `node`, with `tail == node`.
    /// For undirected graphs this is every incident edge.
    fn out_edges(&self, node: &Self::Node) -> EdgeIter<'_, Self::Node>;

    /// Edges stored as entering `node`, with `head == node`.
    /// For undirected graphs this is every incident edge seen from the far end.
    fn in_edges(&self, node: &Self::Node) -> EdgeIter<'_, Self::Node>;

    /// Edges incident to `node` in the graph's own sense: out-edges when
    /// directed, all incident edges when undirected.
    fn edges(&self, node: &Self::Node) -> EdgeIter<'_, Self::Node> {
        self.out_edges(node)
    }

    /// Distinct nodes reachable over one out-edge
    fn neighbors(&self, node: &Self::Node) -> NodeIter<'_, Self::Node> {
        let mut seen = HashSet::new();
        Box::new(
            self.out_edges(node)
                .map(|edge| edge.head)
                .filter(move |head| seen.insert(head.clone())),
        )
    }

    fn kind(&self) -> GraphKind {
        GraphKind::from_flags(self.is_directed(), self.is_multigraph())
    }
}
