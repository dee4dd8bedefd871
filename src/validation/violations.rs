//! Violations found while validating a topology.

use crate::core::StateId;
use thiserror::Error;

/// Structural defects of a topology.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TopologyViolation {
    #[error("Parent chain of state '{name}' ({state}) never reaches a root")]
    ParentCycle { state: StateId, name: String },

    #[error("Entry chain of state '{name}' ({state}) never reaches a leaf")]
    EntryCycle { state: StateId, name: String },

    #[error("Error state '{name}' ({state}) is not terminal")]
    ErrorStateNotTerminal { state: StateId, name: String },

    #[error("Error state {state} does not belong to the topology")]
    UnknownErrorState { state: StateId },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
