//! Build errors for topology builders.

use crate::core::StateId;
use crate::validation::TopologyViolation;
use thiserror::Error;

/// Errors that can occur when building a topology.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("State '{name}' was declared but never defined. Call .define(id, state)")]
    UndefinedState { name: String },

    #[error("State '{name}' is already defined")]
    AlreadyDefined { name: String },

    #[error("State {id} does not belong to this builder")]
    UnknownState { id: StateId },

    #[error("Topology failed validation with {} violation(s)", .0.len())]
    Invalid(Vec<TopologyViolation>),
}
