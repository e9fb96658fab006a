//! Traversal requests loaded from TOML or JSON
//!
//! ```toml
//! sources = [0, 1, 2, 3]   # absent: every node
//! orientation = "ignore"   # absent: config default, then none
//! expander = "in-edges"    # generic traversals only
//! ```
//!
//! The orientation is checked as soon as a traversal is built from the
//! request. The expander name is only resolved once that traversal is pulled.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::WalkConfig;
use crate::error::Result;
use crate::graph::{
    edge_bfs, generic_edge_bfs_with_registry, EdgeBfs, Expander, ExpanderRegistry,
    GenericEdgeBfs, GraphProvider, Orientation, OrientationPolicy, Sources,
};

/// Description of a single traversal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraversalRequest<N> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<N>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expander: Option<String>,
}

impl<N> Default for TraversalRequest<N> {
    fn default() -> Self {
        TraversalRequest {
            sources: None,
            orientation: None,
            expander: None,
        }
    }
}

impl<N: DeserializeOwned> TraversalRequest<N> {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a request file; `.json` files are parsed as JSON, anything else as TOML
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }
}

impl<N: Clone> TraversalRequest<N> {
    pub fn sources(&self) -> Sources<N> {
        Sources::from(self.sources.clone())
    }

    /// The requested orientation; fails immediately on an unknown mode
    pub fn orientation(&self) -> Result<Orientation> {
        Orientation::from_option(self.orientation.as_deref())
    }

    /// The requested orientation, falling back to the configured default
    pub fn orientation_or(&self, config: &WalkConfig) -> Result<Orientation> {
        match self.orientation {
            Some(_) => self.orientation(),
            None => config.orientation(),
        }
    }

    /// Start an orientation-based traversal of `graph`
    pub fn run<'g, G>(
        &self,
        graph: &'g G,
        config: &WalkConfig,
    ) -> Result<EdgeBfs<'g, G, OrientationPolicy<'g, G>>>
    where
        G: GraphProvider<Node = N> + ?Sized,
    {
        let orientation = self.orientation_or(config)?;
        tracing::debug!(%orientation, "running traversal request");
        Ok(edge_bfs(graph, self.sources(), orientation))
    }

    /// Start a generic traversal of `graph` using the named expander, if any.
    ///
    /// The orientation field does not apply here. An unknown expander name
    /// surfaces as an error from the first pull of the returned traversal.
    pub fn run_generic<'g, G>(
        &self,
        graph: &'g G,
        registry: ExpanderRegistry<'g, N>,
    ) -> GenericEdgeBfs<'g, G>
    where
        G: GraphProvider<Node = N> + ?Sized,
        N: 'g,
    {
        let expander = self.expander.clone().map(Expander::named);
        generic_edge_bfs_with_registry(graph, self.sources(), expander, registry)
    }
}
