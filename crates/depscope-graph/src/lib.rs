//! Structural analysis of dependency graphs.
//!
//! This crate loads a node/link graph from JSON and derives connectivity,
//! clustering and centrality insights from it: connected components,
//! heuristic communities, hub nodes, isolated nodes and density metrics. It
//! also resolves selections (neighbours of a node, endpoints of a link),
//! searches node and link text, and filters graphs by path or declaration.
//!
//! # Example
//!
//! ```
//! use depscope_graph::{GraphDocument, MappingOverrides, analyze_graph_structure};
//!
//! let document = GraphDocument::from_json_str(
//!     r#"{"nodes": [{"id": "a"}, {"id": "b"}], "links": [{"source": "a", "target": "b"}]}"#,
//! )?;
//! let loaded = document.into_graph(&MappingOverrides::default())?;
//! let insights = analyze_graph_structure(&loaded.graph);
//!
//! assert_eq!(insights.connected_components.len(), 1);
//! # Ok::<(), depscope_graph::Error>(())
//! ```

#![forbid(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod loader;
pub mod model;
pub mod search;
pub mod selection;

pub use analysis::{GraphInsights, analyze_graph_structure, analyze_graph_structure_with};
pub use config::AnalysisConfig;
pub use error::{Error, Result};
pub use filter::{NodeFilter, filter_graph};
pub use loader::{GraphDocument, LoadWarning, LoadedGraph, MappingOverrides, PropertyMapping};
pub use model::{Declaration, Endpoint, Graph, Link, Node};
pub use search::{SearchResult, search_graph_entities};
pub use selection::{IdSet, Selection, find_connected_entities, find_neighbors_at_depth};
