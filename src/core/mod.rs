//! Core state machine types.
//!
//! This module contains the data model of the state machine:
//! - Events and their integer kinds
//! - States addressed by [`StateId`] inside an immutable [`Topology`]
//! - Transitions with optional guards and actions
//! - The [`Outcome`] classification of a handled event
//! - Optional transition history
//!
//! Nothing in this module mutates a topology once it is built.

mod event;
mod guard;
mod history;
mod outcome;
mod state;
mod topology;
mod transition;

pub use event::{Event, EventType};
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use outcome::Outcome;
pub use state::{StateHook, StateId, StateNode};
pub use topology::Topology;
pub use transition::{Transition, TransitionAction};
