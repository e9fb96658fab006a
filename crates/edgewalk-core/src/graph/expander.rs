//! Caller-supplied expansions for generic edge BFS
//!
//! An [`Expander`] is either a callable or a name. Names are resolved against
//! an [`ExpanderRegistry`] only when a traversal builds its frontier, so a
//! name that points at nothing fails on first pull rather than at the call
//! that created the traversal.

use crate::error::{EdgeWalkError, Result};
use crate::graph::orientation::{Expand, OrientationPolicy};
use crate::graph::provider::GraphProvider;
use crate::graph::types::TraversedEdge;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Boxed lazy expansion of one node
pub type Expansion<'g, N> = Box<dyn Iterator<Item = (TraversedEdge<N>, N)> + 'g>;

/// Shared, type-erased expansion function
pub type ExpandFn<'g, N> = Rc<dyn Fn(&N) -> Expansion<'g, N> + 'g>;

/// Registry name of the expander following stored edges
pub const OUT_EDGES: &str = "out-edges";
/// Registry name of the expander following edges into each node
pub const IN_EDGES: &str = "in-edges";
/// Registry name of the expander following both
pub const ALL_EDGES: &str = "all-edges";

/// Expansion supplied to [`generic_edge_bfs`](crate::graph::generic_edge_bfs)
pub enum Expander<'g, N> {
    Callable(ExpandFn<'g, N>),
    /// Deferred reference to a registered expander
    Named(String),
}

impl<'g, N: 'g> Expander<'g, N> {
    /// Wrap a closure returning anything iterable over `(edge, child)` pairs
    pub fn callable<F, I>(f: F) -> Self
    where
        F: Fn(&N) -> I + 'g,
        I: IntoIterator<Item = (TraversedEdge<N>, N)>,
        I::IntoIter: 'g,
    {
        Expander::Callable(Rc::new(move |node: &N| -> Expansion<'g, N> {
            Box::new(f(node).into_iter())
        }))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Expander::Named(name.into())
    }
}

impl<N> fmt::Debug for Expander<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expander::Callable(_) => f.write_str("Expander::Callable(..)"),
            Expander::Named(name) => f.debug_tuple("Expander::Named").field(name).finish(),
        }
    }
}

/// Named expanders available to generic traversals
pub struct ExpanderRegistry<'g, N> {
    entries: HashMap<String, ExpandFn<'g, N>>,
}

impl<N> Clone for ExpanderRegistry<'_, N> {
    fn clone(&self) -> Self {
        ExpanderRegistry {
            entries: self.entries.clone(),
        }
    }
}

impl<N> Default for ExpanderRegistry<'_, N> {
    fn default() -> Self {
        ExpanderRegistry {
            entries: HashMap::new(),
        }
    }
}

impl<'g, N: Clone + 'g> ExpanderRegistry<'g, N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the untagged out/in/all edge expanders for `graph`
    pub fn builtin<G>(graph: &'g G) -> Self
    where
        G: GraphProvider<Node = N> + ?Sized,
    {
        let mut registry = Self::new();

        let out_edges: ExpandFn<'g, N> = Rc::new(move |node: &N| -> Expansion<'g, N> {
            Box::new(graph.edges(node).map(|edge| {
                let child = edge.head.clone();
                (TraversedEdge::from(edge), child)
            }))
        });
        let in_edges: ExpandFn<'g, N> = Rc::new(move |node: &N| -> Expansion<'g, N> {
            Box::new(graph.in_edges(node).map(|edge| {
                let child = edge.tail.clone();
                (TraversedEdge::from(edge), child)
            }))
        });
        let (fwd, rev) = (out_edges.clone(), in_edges.clone());
        let all_edges: ExpandFn<'g, N> =
            Rc::new(move |node: &N| -> Expansion<'g, N> { Box::new(fwd(node).chain(rev(node))) });

        registry.register(OUT_EDGES, out_edges);
        registry.register(IN_EDGES, in_edges);
        registry.register(ALL_EDGES, all_edges);
        registry
    }

    /// Register `expand` under `name`, replacing any previous entry
    pub fn register(&mut self, name: impl Into<String>, expand: ExpandFn<'g, N>) {
        self.entries.insert(name.into(), expand);
    }

    pub fn register_fn<F, I>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&N) -> I + 'g,
        I: IntoIterator<Item = (TraversedEdge<N>, N)>,
        I::IntoIter: 'g,
    {
        if let Expander::Callable(expand) = Expander::callable(f) {
            self.register(name, expand);
        }
    }

    pub fn get(&self, name: &str) -> Option<ExpandFn<'g, N>> {
        self.entries.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Turn a supplier into something callable
    pub fn resolve(&self, expander: Expander<'g, N>) -> Result<ExpandFn<'g, N>> {
        match expander {
            Expander::Callable(expand) => Ok(expand),
            Expander::Named(name) => self
                .get(&name)
                .ok_or_else(|| EdgeWalkError::invalid_supplier(format!("{:?}", name))),
        }
    }
}

/// Expansion used by generic traversals once the supplier is resolved
pub enum SuppliedExpand<'g, G: GraphProvider + ?Sized> {
    Default(OrientationPolicy<'g, G>),
    Custom(ExpandFn<'g, G::Node>),
}

impl<'g, G: GraphProvider + ?Sized> Expand<G::Node> for SuppliedExpand<'g, G> {
    type Iter = Expansion<'g, G::Node>;

    fn expand(&self, node: &G::Node) -> Self::Iter {
        match self {
            SuppliedExpand::Default(policy) => Box::new(policy.expand(node)),
            SuppliedExpand::Custom(expand) => expand(node),
        }
    }
}
