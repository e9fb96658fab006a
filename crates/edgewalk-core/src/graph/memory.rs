//! Insertion-ordered in-memory graph
//!
//! `MemoryGraph` covers all four graph variants behind one type. Nodes and
//! neighbors enumerate in the order they were first added, and parallel edges
//! in key order, so traversals over it are fully deterministic.

#[cfg(test)]
mod tests;

use crate::graph::provider::{EdgeIter, GraphProvider, NodeIter};
use crate::graph::types::{Edge, EdgeKey, GraphKind};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Neighbors of one node, in first-insertion order, with their edge keys
#[derive(Debug, Clone, Default)]
struct Adjacency {
    order: Vec<usize>,
    keys: HashMap<usize, Vec<EdgeKey>>,
}

impl Adjacency {
    fn keys_to(&self, neighbor: usize) -> Option<&[EdgeKey]> {
        self.keys.get(&neighbor).map(|keys| keys.as_slice())
    }

    fn insert(&mut self, neighbor: usize, key: EdgeKey) {
        match self.keys.get_mut(&neighbor) {
            Some(keys) => keys.push(key),
            None => {
                self.order.push(neighbor);
                self.keys.insert(neighbor, vec![key]);
            }
        }
    }

    fn iter(&self) -> impl Iterator<Item = (usize, EdgeKey)> + '_ {
        self.order.iter().flat_map(move |neighbor| {
            self.keys
                .get(neighbor)
                .into_iter()
                .flatten()
                .map(move |key| (*neighbor, *key))
        })
    }
}

/// In-memory graph for any of the four variants
#[derive(Debug, Clone)]
pub struct MemoryGraph<N> {
    kind: GraphKind,
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    succ: Vec<Adjacency>,
    /// Only populated for directed variants
    pred: Vec<Adjacency>,
    edge_count: usize,
}

impl<N: Clone + Eq + Hash + Debug> MemoryGraph<N> {
    pub fn new(kind: GraphKind) -> Self {
        MemoryGraph {
            kind,
            nodes: Vec::new(),
            index: HashMap::new(),
            succ: Vec::new(),
            pred: Vec::new(),
            edge_count: 0,
        }
    }

    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn multi_undirected() -> Self {
        Self::new(GraphKind::MultiUndirected)
    }

    pub fn multi_directed() -> Self {
        Self::new(GraphKind::MultiDirected)
    }

    /// Build a graph from an edge list, adding endpoints as they appear
    pub fn from_edges(kind: GraphKind, edges: impl IntoIterator<Item = (N, N)>) -> Self {
        let mut graph = Self::new(kind);
        for (tail, head) in edges {
            graph.add_edge(tail, head);
        }
        graph
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add a node if absent; returns its position in native order
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(node.clone(), idx);
        self.nodes.push(node);
        self.succ.push(Adjacency::default());
        if self.kind.is_directed() {
            self.pred.push(Adjacency::default());
        }
        idx
    }

    pub fn add_nodes_from(&mut self, nodes: impl IntoIterator<Item = N>) {
        for node in nodes {
            self.add_node(node);
        }
    }

    /// Add an edge between `tail` and `head`.
    ///
    /// Multigraphs always gain a parallel edge and return its key, the lowest
    /// unused key counting from the number of existing parallel edges.
    /// Simple graphs ignore an edge that already exists and return `None`.
    pub fn add_edge(&mut self, tail: N, head: N) -> Option<EdgeKey> {
        let u = self.add_node(tail);
        let v = self.add_node(head);

        if !self.kind.is_multigraph() {
            if self.succ[u].keys_to(v).is_none() {
                self.link(u, v, 0);
            }
            return None;
        }

        let existing = self.succ[u].keys_to(v).unwrap_or(&[]);
        let mut key = existing.len();
        while existing.contains(&key) {
            key += 1;
        }
        self.link(u, v, key);
        Some(key)
    }

    /// Add a multigraph edge under an explicit key.
    ///
    /// Returns `false` when an edge with that key already joins the endpoints.
    /// On simple graphs the key is ignored and this behaves like [`add_edge`](Self::add_edge).
    pub fn add_keyed_edge(&mut self, tail: N, head: N, key: EdgeKey) -> bool {
        if !self.kind.is_multigraph() {
            let before = self.edge_count;
            self.add_edge(tail, head);
            return self.edge_count > before;
        }

        let u = self.add_node(tail);
        let v = self.add_node(head);
        if self.succ[u].keys_to(v).is_some_and(|keys| keys.contains(&key)) {
            return false;
        }
        self.link(u, v, key);
        true
    }

    /// Add edges along consecutive nodes: `[a, b, c]` adds `(a, b)` and `(b, c)`
    pub fn add_path(&mut self, nodes: impl IntoIterator<Item = N>) {
        let mut nodes = nodes.into_iter();
        let Some(mut prev) = nodes.next() else {
            return;
        };
        self.add_node(prev.clone());
        for node in nodes {
            self.add_edge(prev, node.clone());
            prev = node;
        }
    }

    fn link(&mut self, u: usize, v: usize, key: EdgeKey) {
        self.succ[u].insert(v, key);
        if self.kind.is_directed() {
            self.pred[v].insert(u, key);
        } else if u != v {
            self.succ[v].insert(u, key);
        }
        self.edge_count += 1;
    }

    fn edge_key(&self, key: EdgeKey) -> Option<EdgeKey> {
        self.kind.is_multigraph().then_some(key)
    }
}

impl<N: Clone + Eq + Hash + Debug> GraphProvider for MemoryGraph<N> {
    type Node = N;

    fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    fn is_multigraph(&self) -> bool {
        self.kind.is_multigraph()
    }

    fn nodes(&self) -> NodeIter<'_, N> {
        Box::new(self.nodes.iter().cloned())
    }

    fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    fn out_edges(&self, node: &N) -> EdgeIter<'_, N> {
        let Some(&u) = self.index.get(node) else {
            return Box::new(std::iter::empty());
        };
        Box::new(self.succ[u].iter().map(move |(v, key)| Edge {
            tail: self.nodes[u].clone(),
            head: self.nodes[v].clone(),
            key: self.edge_key(key),
        }))
    }

    fn in_edges(&self, node: &N) -> EdgeIter<'_, N> {
        let Some(&v) = self.index.get(node) else {
            return Box::new(std::iter::empty());
        };
        let adjacency = if self.kind.is_directed() {
            &self.pred[v]
        } else {
            &self.succ[v]
        };
        Box::new(adjacency.iter().map(move |(u, key)| Edge {
            tail: self.nodes[u].clone(),
            head: self.nodes[v].clone(),
            key: self.edge_key(key),
        }))
    }

    fn neighbors(&self, node: &N) -> NodeIter<'_, N> {
        let Some(&u) = self.index.get(node) else {
            return Box::new(std::iter::empty());
        };
        Box::new(self.succ[u].order.iter().map(move |&v| self.nodes[v].clone()))
    }
}
