//! Edge traversal over pluggable graph providers
//!
//! - `provider`: the capability trait traversals consume
//! - `orientation`: built-in expansion policies (none, original, reverse, ignore)
//! - `expander`: caller-supplied and named expansions
//! - `edge_bfs`: the breadth-first edge traversal driver
//! - `memory`: an insertion-ordered in-memory provider

pub mod edge_bfs;
pub mod expander;
pub mod identity;
pub mod memory;
pub mod orientation;
pub mod provider;
pub mod types;

pub use edge_bfs::{
    edge_bfs, edge_bfs_with, generic_edge_bfs, generic_edge_bfs_with_registry, resolve_sources,
    EdgeBfs, GenericEdgeBfs, TraversalStats,
};
pub use expander::{ExpandFn, Expander, ExpanderRegistry, Expansion};
pub use identity::{EdgeId, EdgeIdentity};
pub use memory::MemoryGraph;
pub use orientation::{Expand, OrientationPolicy, PolicyExpansion};
pub use provider::{EdgeIter, GraphProvider, NodeIter};
pub use types::{
    Edge, EdgeKey, GraphKind, Orientation, Sources, TraversalDirection, TraversedEdge,
};
