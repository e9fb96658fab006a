//! Canonical edge identities used for deduplication
//!
//! Directed graphs identify an edge by `(tail, head, key)`. Undirected graphs
//! identify it by the unordered endpoint pair plus key, so `(0, 1)` and
//! `(1, 0)` are the same edge. Direction tags never take part in identity.

use crate::graph::types::{Edge, EdgeKey};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Rule for turning an edge into its identity, chosen once per traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeIdentity {
    Directed,
    Undirected,
}

impl EdgeIdentity {
    pub fn for_graph(directed: bool) -> Self {
        if directed {
            EdgeIdentity::Directed
        } else {
            EdgeIdentity::Undirected
        }
    }

    pub fn of<N: Clone>(&self, edge: &Edge<N>) -> EdgeId<N> {
        match self {
            EdgeIdentity::Directed => EdgeId::Directed {
                tail: edge.tail.clone(),
                head: edge.head.clone(),
                key: edge.key,
            },
            EdgeIdentity::Undirected => EdgeId::Undirected {
                ends: UnorderedPair(edge.tail.clone(), edge.head.clone()),
                key: edge.key,
            },
        }
    }
}

/// Deduplication key for an edge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EdgeId<N> {
    Directed {
        tail: N,
        head: N,
        key: Option<EdgeKey>,
    },
    Undirected {
        ends: UnorderedPair<N>,
        key: Option<EdgeKey>,
    },
}

/// Two endpoints compared and hashed without regard to order.
///
/// Nodes only need `Eq + Hash`; no ordering is imposed on them.
#[derive(Debug, Clone)]
pub struct UnorderedPair<N>(pub N, pub N);

impl<N: PartialEq> PartialEq for UnorderedPair<N> {
    fn eq(&self, other: &Self) -> bool {
        (self.0 == other.0 && self.1 == other.1) || (self.0 == other.1 && self.1 == other.0)
    }
}

impl<N: Eq> Eq for UnorderedPair<N> {}

impl<N: Hash> Hash for UnorderedPair<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let a = fingerprint(&self.0);
        let b = fingerprint(&self.1);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        lo.hash(state);
        hi.hash(state);
    }
}

fn fingerprint<N: Hash>(node: &N) -> u64 {
    let mut hasher = DefaultHasher::new();
    node.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_directed_identity_is_ordered() {
        let id = EdgeIdentity::Directed;
        assert_ne!(id.of(&Edge::new(0, 1)), id.of(&Edge::new(1, 0)));
        assert_eq!(id.of(&Edge::new(0, 1)), id.of(&Edge::new(0, 1)));
    }

    #[test]
    fn test_undirected_identity_ignores_order() {
        let id = EdgeIdentity::Undirected;
        let mut seen = HashSet::new();
        assert!(seen.insert(id.of(&Edge::new("a", "b"))));
        assert!(!seen.insert(id.of(&Edge::new("b", "a"))));
    }

    #[test]
    fn test_identity_keeps_multigraph_key() {
        let id = EdgeIdentity::Undirected;
        assert_ne!(id.of(&Edge::keyed(0, 1, 0)), id.of(&Edge::keyed(1, 0, 1)));
        assert_eq!(id.of(&Edge::keyed(0, 1, 1)), id.of(&Edge::keyed(1, 0, 1)));

        let id = EdgeIdentity::Directed;
        assert_ne!(id.of(&Edge::keyed(1, 0, 0)), id.of(&Edge::keyed(1, 0, 1)));
    }

    #[test]
    fn test_self_loop_identity() {
        let id = EdgeIdentity::Undirected;
        assert_eq!(id.of(&Edge::new(4, 4)), id.of(&Edge::new(4, 4)));
        assert_ne!(id.of(&Edge::new(4, 4)), id.of(&Edge::new(4, 5)));
    }

    #[test]
    fn test_for_graph() {
        assert_eq!(EdgeIdentity::for_graph(true), EdgeIdentity::Directed);
        assert_eq!(EdgeIdentity::for_graph(false), EdgeIdentity::Undirected);
    }
}
