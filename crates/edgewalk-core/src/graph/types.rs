use crate::bail_orientation;
use crate::error::{EdgeWalkError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key disambiguating parallel edges in a multigraph
pub type EdgeKey = usize;

/// Which of the four graph variants a provider exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphKind {
    #[default]
    Undirected,
    Directed,
    MultiUndirected,
    MultiDirected,
}

impl GraphKind {
    pub fn from_flags(directed: bool, multigraph: bool) -> Self {
        match (directed, multigraph) {
            (false, false) => GraphKind::Undirected,
            (true, false) => GraphKind::Directed,
            (false, true) => GraphKind::MultiUndirected,
            (true, true) => GraphKind::MultiDirected,
        }
    }

    pub fn is_directed(&self) -> bool {
        matches!(self, GraphKind::Directed | GraphKind::MultiDirected)
    }

    pub fn is_multigraph(&self) -> bool {
        matches!(self, GraphKind::MultiUndirected | GraphKind::MultiDirected)
    }
}

/// An edge as reported by the graph.
///
/// `tail` and `head` follow the storage orientation of the call that produced
/// the edge (outgoing or incoming). `key` is set exactly for multigraph edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<N> {
    pub tail: N,
    pub head: N,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<EdgeKey>,
}

impl<N> Edge<N> {
    pub fn new(tail: N, head: N) -> Self {
        Edge {
            tail,
            head,
            key: None,
        }
    }

    pub fn keyed(tail: N, head: N, key: EdgeKey) -> Self {
        Edge {
            tail,
            head,
            key: Some(key),
        }
    }

    /// Annotate as crossed in the stored direction
    pub fn forward(self) -> TraversedEdge<N> {
        TraversedEdge {
            edge: self,
            direction: Some(TraversalDirection::Forward),
        }
    }

    /// Annotate as crossed against the stored direction
    pub fn reverse(self) -> TraversedEdge<N> {
        TraversedEdge {
            edge: self,
            direction: Some(TraversalDirection::Reverse),
        }
    }
}

impl<N: fmt::Display> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key {
            Some(key) => write!(f, "({}, {}, {}", self.tail, self.head, key)?,
            None => write!(f, "({}, {}", self.tail, self.head)?,
        }
        f.write_str(")")
    }
}

/// Direction in which a traversal crossed an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalDirection {
    Forward,
    Reverse,
}

impl TraversalDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalDirection::Forward => "forward",
            TraversalDirection::Reverse => "reverse",
        }
    }
}

impl fmt::Display for TraversalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An edge as emitted by a traversal, optionally tagged with its direction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraversedEdge<N> {
    #[serde(flatten)]
    pub edge: Edge<N>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<TraversalDirection>,
}

impl<N> TraversedEdge<N> {
    pub fn tail(&self) -> &N {
        &self.edge.tail
    }

    pub fn head(&self) -> &N {
        &self.edge.head
    }

    pub fn key(&self) -> Option<EdgeKey> {
        self.edge.key
    }

    /// The endpoint a traversal moving along this edge arrives at
    pub fn far_end(&self) -> &N {
        match self.direction {
            Some(TraversalDirection::Reverse) => &self.edge.tail,
            _ => &self.edge.head,
        }
    }
}

impl<N> From<Edge<N>> for TraversedEdge<N> {
    fn from(edge: Edge<N>) -> Self {
        TraversedEdge {
            edge,
            direction: None,
        }
    }
}

impl<N: fmt::Display> fmt::Display for TraversedEdge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(direction) = self.direction else {
            return self.edge.fmt(f);
        };
        write!(f, "({}, {}", self.edge.tail, self.edge.head)?;
        if let Some(key) = self.edge.key {
            write!(f, ", {}", key)?;
        }
        write!(f, ", {})", direction)
    }
}

/// Orientation mode for [`edge_bfs`](crate::graph::edge_bfs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Follow stored edges, report no direction
    #[default]
    None,
    /// Follow stored edges, tag each as forward
    Original,
    /// Follow edges into the node, tag each as reverse
    Reverse,
    /// Follow both, tagging each with the direction it was crossed in
    Ignore,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::None,
        Orientation::Original,
        Orientation::Reverse,
        Orientation::Ignore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::None => "none",
            Orientation::Original => "original",
            Orientation::Reverse => "reverse",
            Orientation::Ignore => "ignore",
        }
    }

    /// Parse an optional mode; absent means [`Orientation::None`]
    pub fn from_option(value: Option<&str>) -> Result<Self> {
        match value {
            Some(value) => value.parse(),
            None => Ok(Orientation::None),
        }
    }

    /// Whether emitted edges carry a direction tag
    pub fn is_tagged(&self) -> bool {
        !matches!(self, Orientation::None)
    }
}

impl std::str::FromStr for Orientation {
    type Err = EdgeWalkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Orientation::None),
            "original" => Ok(Orientation::Original),
            "reverse" => Ok(Orientation::Reverse),
            "ignore" => Ok(Orientation::Ignore),
            _ => bail_orientation!(s),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Starting points for a traversal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Sources<N> {
    /// Every node, in the graph's native order
    #[default]
    All,
    One(N),
    Many(Vec<N>),
}

impl<N> Sources<N> {
    pub fn one(node: N) -> Self {
        Sources::One(node)
    }

    pub fn many(nodes: impl IntoIterator<Item = N>) -> Self {
        Sources::Many(nodes.into_iter().collect())
    }
}

impl<N> From<Vec<N>> for Sources<N> {
    fn from(nodes: Vec<N>) -> Self {
        Sources::Many(nodes)
    }
}

impl<N: Clone> From<&[N]> for Sources<N> {
    fn from(nodes: &[N]) -> Self {
        Sources::Many(nodes.to_vec())
    }
}

impl<N, const K: usize> From<[N; K]> for Sources<N> {
    fn from(nodes: [N; K]) -> Self {
        Sources::Many(nodes.into())
    }
}

impl<N> From<Option<Vec<N>>> for Sources<N> {
    fn from(nodes: Option<Vec<N>>) -> Self {
        nodes.map_or(Sources::All, Sources::Many)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_kind_flags() {
        for directed in [false, true] {
            for multi in [false, true] {
                let kind = GraphKind::from_flags(directed, multi);
                assert_eq!(kind.is_directed(), directed);
                assert_eq!(kind.is_multigraph(), multi);
            }
        }
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::new(0, 1).to_string(), "(0, 1)");
        assert_eq!(Edge::keyed(1, 0, 2).to_string(), "(1, 0, 2)");
    }

    #[test]
    fn test_traversed_edge_display() {
        assert_eq!(TraversedEdge::from(Edge::new(0, 1)).to_string(), "(0, 1)");
        assert_eq!(Edge::new(0, 1).forward().to_string(), "(0, 1, forward)");
        assert_eq!(
            Edge::keyed(1, 0, 1).reverse().to_string(),
            "(1, 0, 1, reverse)"
        );
    }

    #[test]
    fn test_far_end_follows_direction() {
        assert_eq!(*Edge::new(2, 3).forward().far_end(), 3);
        assert_eq!(*Edge::new(2, 3).reverse().far_end(), 2);
        assert_eq!(*TraversedEdge::from(Edge::new(2, 3)).far_end(), 3);
    }

    #[test]
    fn test_orientation_parse() {
        assert_eq!("none".parse::<Orientation>().unwrap(), Orientation::None);
        assert_eq!(
            "Original".parse::<Orientation>().unwrap(),
            Orientation::Original
        );
        assert_eq!(
            " reverse ".parse::<Orientation>().unwrap(),
            Orientation::Reverse
        );
        assert_eq!(
            "IGNORE".parse::<Orientation>().unwrap(),
            Orientation::Ignore
        );
    }

    #[test]
    fn test_orientation_parse_invalid() {
        let err = "hello".parse::<Orientation>().unwrap_err();
        assert!(matches!(err, EdgeWalkError::InvalidOrientation { ref value } if value == "hello"));
    }

    #[test]
    fn test_orientation_from_option() {
        assert_eq!(Orientation::from_option(None).unwrap(), Orientation::None);
        assert_eq!(
            Orientation::from_option(Some("ignore")).unwrap(),
            Orientation::Ignore
        );
        assert!(Orientation::from_option(Some("")).is_err());
    }

    #[test]
    fn test_orientation_round_trip_names() {
        for orientation in Orientation::ALL {
            assert_eq!(
                orientation.to_string().parse::<Orientation>().unwrap(),
                orientation
            );
        }
        assert!(!Orientation::None.is_tagged());
        assert!(Orientation::Ignore.is_tagged());
    }

    #[test]
    fn test_traversed_edge_serializes_flat() {
        let json = serde_json::to_value(Edge::keyed(1, 0, 1).reverse()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"tail": 1, "head": 0, "key": 1, "direction": "reverse"})
        );

        let json = serde_json::to_value(TraversedEdge::from(Edge::new("a", "b"))).unwrap();
        assert_eq!(json, serde_json::json!({"tail": "a", "head": "b"}));
    }

    #[test]
    fn test_sources_conversions() {
        assert_eq!(Sources::from(vec![1, 2]), Sources::Many(vec![1, 2]));
        assert_eq!(Sources::from([3]), Sources::Many(vec![3]));
        assert_eq!(Sources::<u32>::from(None), Sources::All);
        assert_eq!(Sources::one(7), Sources::One(7));
    }
}
