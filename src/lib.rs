//! Edgewalk - breadth-first edge traversal
//!
//! Reports every edge reachable from a set of sources exactly once, in
//! breadth-first order, for simple and multi graphs in either directedness.
//!
//! ```
//! use edgewalk::prelude::*;
//!
//! let graph = MemoryGraph::from_edges(GraphKind::Directed, [(0, 1), (1, 2), (2, 1)]);
//! let edges: Vec<_> = edge_bfs(&graph, [0], Orientation::None)
//!     .map(|edge| (*edge.tail(), *edge.head()))
//!     .collect();
//! assert_eq!(edges, vec![(0, 1), (1, 2), (2, 1)]);
//! ```

pub use edgewalk_core::{config, error, graph, logging, request};

pub mod prelude {
    pub use edgewalk_core::config::WalkConfig;
    pub use edgewalk_core::error::{EdgeWalkError, Result};
    pub use edgewalk_core::graph::{
        edge_bfs, edge_bfs_with, generic_edge_bfs, generic_edge_bfs_with_registry, Edge,
        EdgeBfs, EdgeIdentity, Expander, ExpanderRegistry, GenericEdgeBfs, GraphKind,
        GraphProvider, MemoryGraph, Orientation, Sources, TraversalDirection, TraversalStats,
        TraversedEdge,
    };
    pub use edgewalk_core::request::TraversalRequest;
}

/// Install the default subscriber, honouring `EDGEWALK_LOG`
pub fn init_logging(verbose: bool) -> std::result::Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing(verbose, None, false)
}
