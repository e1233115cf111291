//! Core types for the Weft code generator.
//!
//! This crate provides error handling and the configuration file layer
//! shared across the Weft workspace.

/// Configuration file handling and API key storage.
pub mod config;
/// Error types and result definitions.
pub mod error;

pub use config::{ApiKeys, WeftConfig};
pub use error::{Error, Result};
