//! Error types for depscope CLI operations.

use std::io;
use thiserror::Error;

/// The error type for depscope CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The graph file could not be loaded.
    #[error("Failed to load graph")]
    Graph(#[from] depscope_graph::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No node with the given id.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// No link with the given `<source>-<target>` id.
    #[error("Link not found: {0}")]
    LinkNotFound(String),
}

/// A specialized Result type for depscope operations.
pub type Result<T> = std::result::Result<T, Error>;
