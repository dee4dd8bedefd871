//! Checkpoint and resume functionality for machines.
//!
//! A checkpoint captures a machine's state handles and history so that a
//! control loop can survive a restart. Topologies hold callbacks and are
//! not serialized: a checkpoint is restored against a topology built the
//! same way as the one it was taken from.

use crate::core::{StateHistory, StateId, Topology};
use crate::engine::Machine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of a machine.
/// Does NOT include the topology (callbacks are not serializable).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Number of states in the topology the checkpoint was taken over
    pub state_count: usize,

    /// Current state of the machine
    pub current: Option<StateId>,

    /// Previous state of the machine
    pub previous: Option<StateId>,

    /// Error state of the machine
    pub error_state: StateId,

    /// Transition history, if the machine recorded one
    pub history: Option<StateHistory>,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Check that this checkpoint can be applied to `topology`.
    pub fn validate<D, P, C>(&self, topology: &Topology<D, P, C>) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if self.state_count != topology.len() {
            return Err(CheckpointError::TopologyMismatch {
                expected: self.state_count,
                found: topology.len(),
            });
        }

        let referenced = self
            .current
            .into_iter()
            .chain(self.previous)
            .chain(Some(self.error_state));
        for id in referenced {
            if !topology.contains(id) {
                return Err(CheckpointError::UnknownState { id });
            }
        }

        Ok(())
    }
}

impl<'t, D, P, C> Machine<'t, D, P, C> {
    /// Capture the machine's state handles and history.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            state_count: self.topology().len(),
            current: self.current_state(),
            previous: self.previous_state(),
            error_state: self.error_state(),
            history: self.history().cloned(),
        }
    }

    /// Rebuild a machine from a checkpoint. No callback is invoked.
    pub fn restore(
        topology: &'t Topology<D, P, C>,
        checkpoint: Checkpoint,
    ) -> Result<Self, CheckpointError> {
        checkpoint.validate(topology)?;
        debug!(checkpoint = %checkpoint.id, "restoring machine from checkpoint");

        Ok(Machine::from_parts(
            topology,
            checkpoint.current,
            checkpoint.previous,
            checkpoint.error_state,
            checkpoint.history,
        ))
    }
}
