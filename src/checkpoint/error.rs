//! Checkpoint error types.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint version is not supported by this version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Checkpoint was taken over a topology of a different size
    #[error("Checkpoint expects {expected} states, topology has {found}")]
    TopologyMismatch { expected: usize, found: usize },

    /// Checkpoint refers to a state missing from the topology
    #[error("Checkpoint refers to unknown state {id}")]
    UnknownState { id: StateId },
}
