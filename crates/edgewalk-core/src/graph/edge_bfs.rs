//! Breadth-first search over edges
//!
//! Unlike a node BFS, this does not stop once every node has been seen: an
//! edge leading back into explored territory is still reported. In a directed
//! graph with edges `[(0, 1), (1, 2), (2, 1)]`, a node BFS never reports
//! `(2, 1)`; edge BFS does.
//!
//! Output is breadth-first by node discovery. Within one node, edges come in
//! the order its expansion yields them, which is the provider's storage order
//! for the built-in policies. The result is therefore a partial order, total
//! only when the provider enumerates deterministically.


use crate::error::Result;
use crate::graph::expander::{Expander, ExpanderRegistry, SuppliedExpand};
use crate::graph::identity::{EdgeId, EdgeIdentity};
use crate::graph::orientation::{Expand, OrientationPolicy};
use crate::graph::provider::GraphProvider;
use crate::graph::types::{Orientation, Sources, TraversedEdge};
use crate::trace_time;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use std::iter::FusedIterator;
use std::time::Instant;

/// Counters for a single traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// Sources that resolved to nodes of the graph
    pub sources: usize,
    /// Nodes whose expansion was created, sources included
    pub nodes_expanded: usize,
    pub edges_emitted: usize,
    /// Edges dropped because their identity was already emitted
    pub duplicates_skipped: usize,
}

/// Resolve requested sources against the graph.
///
/// Nodes absent from the graph are dropped without error; repeated nodes keep
/// their first position.
pub fn resolve_sources<G: GraphProvider + ?Sized>(
    graph: &G,
    sources: Sources<G::Node>,
) -> Vec<G::Node> {
    match sources {
        Sources::All => graph.nodes().collect(),
        Sources::One(node) if graph.contains_node(&node) => vec![node],
        Sources::One(_) => Vec::new(),
        Sources::Many(nodes) => {
            let mut seen = HashSet::with_capacity(nodes.len());
            nodes
                .into_iter()
                .filter(|node| graph.contains_node(node) && seen.insert(node.clone()))
                .collect()
        }
    }
}

enum Frontier<N> {
    /// Sources not yet resolved; nothing has been pulled
    Pending(Sources<N>),
    Active,
    Exhausted,
}

/// Lazy edge-BFS traversal.
///
/// No work happens until the first call to `next`. Each node's expansion is
/// created once, when the node is first discovered, and pulled only as far as
/// the consumer asks for edges.
pub struct EdgeBfs<'g, G: GraphProvider + ?Sized, X: Expand<G::Node>> {
    graph: &'g G,
    expand: X,
    identity: EdgeIdentity,
    frontier: Frontier<G::Node>,
    current: Option<(G::Node, X::Iter)>,
    queue: VecDeque<(G::Node, X::Iter)>,
    visited_nodes: HashSet<G::Node>,
    visited_edges: HashSet<EdgeId<G::Node>>,
    stats: TraversalStats,
    started: Option<Instant>,
    span: tracing::Span,
}

impl<'g, G: GraphProvider + ?Sized, X: Expand<G::Node>> EdgeBfs<'g, G, X> {
    pub fn new(graph: &'g G, sources: Sources<G::Node>, expand: X) -> Self {
        EdgeBfs {
            graph,
            expand,
            identity: EdgeIdentity::for_graph(graph.is_directed()),
            frontier: Frontier::Pending(sources),
            current: None,
            queue: VecDeque::new(),
            visited_nodes: HashSet::new(),
            visited_edges: HashSet::new(),
            stats: TraversalStats::default(),
            started: None,
            span: tracing::debug_span!("edge_bfs", kind = ?graph.kind()),
        }
    }

    /// Build a traversal over already-resolved sources and seed it now
    pub(crate) fn seeded(graph: &'g G, nodes: Vec<G::Node>, expand: X) -> Self {
        let mut bfs = Self::new(graph, Sources::All, expand);
        bfs.seed(nodes);
        bfs
    }

    pub fn stats(&self) -> TraversalStats {
        self.stats
    }

    pub fn identity(&self) -> EdgeIdentity {
        self.identity
    }

    /// Whether the traversal has produced its last edge
    pub fn is_exhausted(&self) -> bool {
        matches!(self.frontier, Frontier::Exhausted)
    }

    fn seed(&mut self, nodes: Vec<G::Node>) {
        self.started = Some(Instant::now());
        if nodes.is_empty() {
            tracing::debug!("no sources resolved, traversal is empty");
            self.frontier = Frontier::Exhausted;
            return;
        }

        self.stats.sources = nodes.len();
        self.visited_nodes.extend(nodes.iter().cloned());
        for node in nodes {
            let expansion = self.expand.expand(&node);
            self.stats.nodes_expanded += 1;
            self.queue.push_back((node, expansion));
        }
        tracing::debug!(sources = self.stats.sources, "frontier seeded");
        self.frontier = Frontier::Active;
    }

    fn finish(&mut self) {
        self.frontier = Frontier::Exhausted;
        tracing::debug!(
            sources = self.stats.sources,
            nodes_expanded = self.stats.nodes_expanded,
            edges_emitted = self.stats.edges_emitted,
            duplicates_skipped = self.stats.duplicates_skipped,
            "edge traversal complete"
        );
        if let Some(start) = self.started {
            trace_time!(start, "edge_bfs", edges = self.stats.edges_emitted);
        }
    }
}

impl<G: GraphProvider + ?Sized, X: Expand<G::Node>> Iterator for EdgeBfs<'_, G, X> {
    type Item = TraversedEdge<G::Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let span = self.span.clone();
        let _entered = span.enter();

        match std::mem::replace(&mut self.frontier, Frontier::Active) {
            Frontier::Pending(sources) => {
                let nodes = resolve_sources(self.graph, sources);
                self.seed(nodes);
                if self.is_exhausted() {
                    return None;
                }
            }
            Frontier::Exhausted => {
                self.frontier = Frontier::Exhausted;
                return None;
            }
            Frontier::Active => {}
        }

        loop {
            if self.current.is_none() {
                let Some(entry) = self.queue.pop_front() else {
                    self.finish();
                    return None;
                };
                tracing::trace!(node = ?entry.0, "expanding");
                self.current = Some(entry);
            }

            let pulled = match self.current.as_mut() {
                Some((_, expansion)) => expansion.next(),
                None => None,
            };
            let Some((edge, child)) = pulled else {
                self.current = None;
                continue;
            };

            if !self.visited_nodes.contains(&child) {
                self.visited_nodes.insert(child.clone());
                let expansion = self.expand.expand(&child);
                self.stats.nodes_expanded += 1;
                self.queue.push_back((child, expansion));
            }

            if self.visited_edges.insert(self.identity.of(&edge.edge)) {
                self.stats.edges_emitted += 1;
                return Some(edge);
            }
            self.stats.duplicates_skipped += 1;
        }
    }
}

impl<G: GraphProvider + ?Sized, X: Expand<G::Node>> FusedIterator for EdgeBfs<'_, G, X> {}

/// Edge BFS under a built-in orientation mode.
///
/// With [`Orientation::None`] edges are reported as stored. Any other mode
/// tags each edge with the direction it was crossed in.
pub fn edge_bfs<'g, G: GraphProvider + ?Sized>(
    graph: &'g G,
    sources: impl Into<Sources<G::Node>>,
    orientation: Orientation,
) -> EdgeBfs<'g, G, OrientationPolicy<'g, G>> {
    EdgeBfs::new(
        graph,
        sources.into(),
        OrientationPolicy::new(graph, orientation),
    )
}

/// Edge BFS with a statically typed expansion, typically a closure
pub fn edge_bfs_with<'g, G, X>(
    graph: &'g G,
    sources: impl Into<Sources<G::Node>>,
    expand: X,
) -> EdgeBfs<'g, G, X>
where
    G: GraphProvider + ?Sized,
    X: Expand<G::Node>,
{
    EdgeBfs::new(graph, sources.into(), expand)
}

/// Edge BFS with an optional caller-supplied expansion.
///
/// `None` expands each node into its stored edges, untagged. Named expanders
/// resolve against [`ExpanderRegistry::builtin`]; see
/// [`generic_edge_bfs_with_registry`] for the resolution contract.
pub fn generic_edge_bfs<'g, G: GraphProvider + ?Sized>(
    graph: &'g G,
    sources: impl Into<Sources<G::Node>>,
    expander: Option<Expander<'g, G::Node>>,
) -> GenericEdgeBfs<'g, G> {
    generic_edge_bfs_with_registry(graph, sources, expander, ExpanderRegistry::builtin(graph))
}

/// Edge BFS with an optional supplier resolved against `registry`.
///
/// The supplier is not checked here. It is resolved when the frontier is
/// built, on the first pull, and a supplier that names nothing callable makes
/// that pull return [`EdgeWalkError::InvalidExpansionSupplier`]. A traversal
/// whose sources resolve to no nodes never builds a frontier and so never
/// reports the error.
///
/// [`EdgeWalkError::InvalidExpansionSupplier`]: crate::error::EdgeWalkError::InvalidExpansionSupplier
pub fn generic_edge_bfs_with_registry<'g, G: GraphProvider + ?Sized>(
    graph: &'g G,
    sources: impl Into<Sources<G::Node>>,
    expander: Option<Expander<'g, G::Node>>,
    registry: ExpanderRegistry<'g, G::Node>,
) -> GenericEdgeBfs<'g, G> {
    let span = tracing::debug_span!("generic_edge_bfs", kind = ?graph.kind(), ?expander);
    GenericEdgeBfs {
        span,
        state: GenericState::Deferred {
            graph,
            sources: sources.into(),
            expander,
            registry,
        },
    }
}

enum GenericState<'g, G: GraphProvider + ?Sized> {
    Deferred {
        graph: &'g G,
        sources: Sources<G::Node>,
        expander: Option<Expander<'g, G::Node>>,
        registry: ExpanderRegistry<'g, G::Node>,
    },
    Running(EdgeBfs<'g, G, SuppliedExpand<'g, G>>),
    Done,
}

/// Edge BFS whose expansion supplier is validated on first pull
pub struct GenericEdgeBfs<'g, G: GraphProvider + ?Sized> {
    state: GenericState<'g, G>,
    span: tracing::Span,
}

impl<'g, G: GraphProvider + ?Sized> GenericEdgeBfs<'g, G> {
    /// Counters so far; empty until the first pull
    pub fn stats(&self) -> TraversalStats {
        match &self.state {
            GenericState::Running(bfs) => bfs.stats(),
            _ => TraversalStats::default(),
        }
    }

    fn start(&mut self) -> Result<()> {
        let GenericState::Deferred {
            graph,
            sources,
            expander,
            registry,
        } = std::mem::replace(&mut self.state, GenericState::Done)
        else {
            return Ok(());
        };

        let nodes = resolve_sources(graph, sources);
        if nodes.is_empty() {
            tracing::debug!("no sources resolved, traversal is empty");
            return Ok(());
        }

        let expand = match expander {
            None => SuppliedExpand::Default(OrientationPolicy::new(graph, Orientation::None)),
            Some(expander) => SuppliedExpand::Custom(registry.resolve(expander)?),
        };
        self.state = GenericState::Running(EdgeBfs::seeded(graph, nodes, expand));
        Ok(())
    }
}

impl<G: GraphProvider + ?Sized> Iterator for GenericEdgeBfs<'_, G> {
    type Item = Result<TraversedEdge<G::Node>>;

    fn next(&mut self) -> Option<Self::Item> {
        let span = self.span.clone();
        let _entered = span.enter();

        if matches!(self.state, GenericState::Deferred { .. }) {
            if let Err(err) = self.start() {
                tracing::debug!(error = %err, "expansion supplier rejected");
                return Some(Err(err));
            }
        }

        match &mut self.state {
            GenericState::Running(bfs) => bfs.next().map(Ok),
            _ => None,
        }
    }
}

impl<G: GraphProvider + ?Sized> FusedIterator for GenericEdgeBfs<'_, G> {}
