//! Orientation policies: how a traversal expands a node into edges
//!
//! A policy is a small value object holding the graph and the mode. Asking it
//! to expand a node returns a pull-based iterator of `(edge, child)` pairs,
//! where `child` is the endpoint the traversal moves to next.

use crate::graph::identity::EdgeIdentity;
use crate::graph::provider::{EdgeIter, GraphProvider};
use crate::graph::types::{Orientation, TraversalDirection, TraversedEdge};

/// Expansion of a node into `(edge, child)` pairs.
///
/// Implemented by [`OrientationPolicy`] and by any `Fn(&N) -> I` closure whose
/// result iterates over `(TraversedEdge<N>, N)`.
pub trait Expand<N> {
    type Iter: Iterator<Item = (TraversedEdge<N>, N)>;

    fn expand(&self, node: &N) -> Self::Iter;
}

impl<N, F, I> Expand<N> for F
where
    F: Fn(&N) -> I,
    I: IntoIterator<Item = (TraversedEdge<N>, N)>,
{
    type Iter = I::IntoIter;

    fn expand(&self, node: &N) -> Self::Iter {
        self(node).into_iter()
    }
}

/// Built-in expansion for one of the four orientation modes
pub struct OrientationPolicy<'g, G: ?Sized> {
    graph: &'g G,
    requested: Orientation,
    effective: Orientation,
}

impl<G: ?Sized> Clone for OrientationPolicy<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: ?Sized> Copy for OrientationPolicy<'_, G> {}

impl<'g, G: GraphProvider + ?Sized> OrientationPolicy<'g, G> {
    /// Select the policy for `orientation` on `graph`.
    ///
    /// Undirected graphs have no in/out distinction, so `Reverse` and
    /// `Ignore` expand exactly like `Original` there.
    pub fn new(graph: &'g G, orientation: Orientation) -> Self {
        let effective = match orientation {
            Orientation::Reverse | Orientation::Ignore if !graph.is_directed() => {
                Orientation::Original
            }
            other => other,
        };
        OrientationPolicy {
            graph,
            requested: orientation,
            effective,
        }
    }

    /// Parse `orientation` and select the policy, failing before any traversal
    pub fn parse(graph: &'g G, orientation: Option<&str>) -> crate::error::Result<Self> {
        Ok(Self::new(graph, Orientation::from_option(orientation)?))
    }

    pub fn orientation(&self) -> Orientation {
        self.requested
    }

    /// The mode actually applied after accounting for graph directedness
    pub fn effective(&self) -> Orientation {
        self.effective
    }

    pub fn identity(&self) -> EdgeIdentity {
        EdgeIdentity::for_graph(self.graph.is_directed())
    }
}

impl<'g, G: GraphProvider + ?Sized> Expand<G::Node> for OrientationPolicy<'g, G> {
    type Iter = PolicyExpansion<'g, G::Node>;

    fn expand(&self, node: &G::Node) -> Self::Iter {
        let graph = self.graph;
        let tagged = self.effective.is_tagged();
        match self.effective {
            Orientation::None | Orientation::Original => {
                PolicyExpansion::new(Some(graph.edges(node)), None, tagged)
            }
            Orientation::Reverse => PolicyExpansion::new(None, Some(graph.in_edges(node)), tagged),
            Orientation::Ignore => PolicyExpansion::new(
                Some(graph.edges(node)),
                Some(graph.in_edges(node)),
                tagged,
            ),
        }
    }
}

/// Lazy expansion of one node under a built-in policy.
///
/// Drains the forward edges first (child = head), then the reverse edges
/// (child = tail).
pub struct PolicyExpansion<'g, N> {
    forward: Option<EdgeIter<'g, N>>,
    reverse: Option<EdgeIter<'g, N>>,
    tag_forward: bool,
}

impl<'g, N> PolicyExpansion<'g, N> {
    fn new(
        forward: Option<EdgeIter<'g, N>>,
        reverse: Option<EdgeIter<'g, N>>,
        tag_forward: bool,
    ) -> Self {
        PolicyExpansion {
            forward,
            reverse,
            tag_forward,
        }
    }
}

impl<N: Clone> Iterator for PolicyExpansion<'_, N> {
    type Item = (TraversedEdge<N>, N);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(forward) = self.forward.as_mut() {
            if let Some(edge) = forward.next() {
                let direction = self.tag_forward.then_some(TraversalDirection::Forward);
                let traversed = TraversedEdge { edge, direction };
                let child = traversed.far_end().clone();
                return Some((traversed, child));
            }
            self.forward = None;
        }

        let traversed = self.reverse.as_mut()?.next()?.reverse();
        let child = traversed.far_end().clone();
        Some((traversed, child))
    }
}
