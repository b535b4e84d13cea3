//! Error types for depscope-graph operations.
//!
//! Only loading can fail. The analysis, selection and search functions take an
//! already-typed [`Graph`](crate::model::Graph) and degrade gracefully on odd
//! input instead of returning errors.

use std::io;
use thiserror::Error;

/// The error type for depscope-graph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading a graph file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON document matches neither supported graph dialect.
    #[error("Invalid graph format: {0}")]
    InvalidFormat(String),

    /// A generic graph could not be mapped onto nodes and links.
    #[error("Property mapping error: {0}")]
    Mapping(String),
}

/// A specialized Result type for depscope-graph operations.
pub type Result<T> = std::result::Result<T, Error>;
