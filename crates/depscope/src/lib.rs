//! Depscope: command-line explorer for module dependency graphs.
//!
//! This crate wires [`depscope_graph`] to a clap command line: it reads a
//! graph file, applies the optional node filter and configuration, runs one
//! query and prints the result as text or JSON.
//!
//! # Modules
//!
//! - [`app`]: Loaded graph plus configuration for one invocation
//! - [`cli`]: Argument parsing and command dispatch
//! - [`config`]: `depscope.yaml` settings
//! - [`error`]: Error types
//! - [`output`]: Text and JSON printers

#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;

pub use error::{Error, Result};
