//! Error types for ridgeline

use thiserror::Error;

use crate::graph::NodeId;

/// Result type alias for walk operations
pub type Result<T> = std::result::Result<T, WalkError>;

/// Main error type for ridgeline
///
/// Only precondition and configuration failures are errors. A depth-bound
/// violation or a dead end is a defined terminal state of a walk and comes
/// back as `Ok` with the corresponding result.
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
