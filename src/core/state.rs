//! States of a topology.
//!
//! States live in a [`Topology`](super::Topology) arena and refer to each
//! other (parent, entry child, transition destination) through [`StateId`]
//! handles rather than pointers.

use super::event::Event;
use super::transition::Transition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle of a state inside its topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(usize);

impl StateId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the state in its topology arena.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Callback run when a state is entered or left.
pub type StateHook<D, P> = Box<dyn Fn(&D, &Event<P>) + Send + Sync>;

/// A node of the state topology.
///
/// A node carries user data of type `D` that is handed to its entry and
/// exit hooks and to the actions of transitions leaving or entering it.
///
/// Two predicates classify a node and they are deliberately distinct:
///
/// - [`is_terminal`](Self::is_terminal): no transitions and no parent.
///   Events delivered to a terminal state are no-ops.
/// - [`has_transitions`](Self::has_transitions): a node without transitions
///   but with a parent still bubbles events to its ancestors, yet
///   [`Machine::is_stopped`](crate::engine::Machine::is_stopped) reports it
///   as stopped.
pub struct StateNode<D, P, C = ()> {
    pub(crate) name: String,
    pub(crate) parent: Option<StateId>,
    pub(crate) entry: Option<StateId>,
    pub(crate) transitions: Vec<Transition<D, P, C>>,
    pub(crate) data: D,
    pub(crate) on_enter: Option<StateHook<D, P>>,
    pub(crate) on_exit: Option<StateHook<D, P>>,
}

impl<D, P, C> StateNode<D, P, C> {
    /// Name given when the state was declared, for diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    /// Child that replaces this state whenever it is the target of a
    /// transition.
    pub fn entry(&self) -> Option<StateId> {
        self.entry
    }

    pub fn transitions(&self) -> &[Transition<D, P, C>] {
        &self.transitions
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn has_transitions(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Check if this is a final state: no transitions and no parent.
    pub fn is_terminal(&self) -> bool {
        self.transitions.is_empty() && self.parent.is_none()
    }

    /// First transition of this state selected by `event`, in declaration order.
    pub fn find_transition(&self, event: &Event<P>) -> Option<&Transition<D, P, C>> {
        self.transitions.iter().find(|t| t.matches(event))
    }

    pub(crate) fn enter(&self, event: &Event<P>) {
        if let Some(hook) = &self.on_enter {
            hook(&self.data, event);
        }
    }

    pub(crate) fn exit(&self, event: &Event<P>) {
        if let Some(hook) = &self.on_exit {
            hook(&self.data, event);
        }
    }
}

impl<D: fmt::Debug, P, C: fmt::Debug> fmt::Debug for StateNode<D, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateNode")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("entry", &self.entry)
            .field("transitions", &self.transitions)
            .field("data", &self.data)
            .field("has_on_enter", &self.on_enter.is_some())
            .field("has_on_exit", &self.on_exit.is_some())
            .finish()
    }
}
