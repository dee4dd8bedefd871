//! The immutable state arena.

use super::event::Event;
use super::state::{StateId, StateNode};
use super::transition::Transition;
use std::fmt;
use std::ops::Index;

/// Immutable graph of states connected by parent links, entry links and
/// transitions.
///
/// A topology is produced by [`TopologyBuilder`](crate::builder::TopologyBuilder),
/// which guarantees that every link inside it resolves to a state of the
/// same topology. Cycles in parent or entry chains are not rejected; run
/// [`validate`](Self::validate) once after building to detect them.
pub struct Topology<D, P, C = ()> {
    states: Vec<StateNode<D, P, C>>,
}

impl<D, P, C> Topology<D, P, C> {
    pub(crate) fn from_states(states: Vec<StateNode<D, P, C>>) -> Self {
        Self { states }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn contains(&self, id: StateId) -> bool {
        id.index() < self.states.len()
    }

    pub fn state(&self, id: StateId) -> Option<&StateNode<D, P, C>> {
        self.states.get(id.index())
    }

    /// Look up a state by its declared name.
    pub fn find(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|s| s.name == name)
            .map(StateId::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = (StateId, &StateNode<D, P, C>)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (StateId::new(i), s))
    }

    /// First transition of `state` selected by `event`.
    ///
    /// `None` for the state means "walked past the root" and never matches.
    pub fn find_transition(
        &self,
        state: Option<StateId>,
        event: &Event<P>,
    ) -> Option<&Transition<D, P, C>> {
        self.state(state?)?.find_transition(event)
    }

    /// Find the transition handling `event` for `state`, bubbling up through
    /// its ancestors.
    ///
    /// Returns the closest state whose own transitions match, together with
    /// the matching transition.
    pub fn resolve(
        &self,
        state: StateId,
        event: &Event<P>,
    ) -> Option<(StateId, &Transition<D, P, C>)> {
        let mut probe = Some(state);
        while let Some(id) = probe {
            if let Some(transition) = self.find_transition(Some(id), event) {
                return Some((id, transition));
            }
            probe = self.state(id)?.parent;
        }
        None
    }

    /// Follow the entry chain from `state` down to a state without entry child.
    ///
    /// Does not terminate if the entry chain contains a cycle.
    pub fn descend(&self, state: StateId) -> StateId {
        let mut next = state;
        while let Some(entry) = self.state(next).and_then(StateNode::entry) {
            next = entry;
        }
        next
    }

    /// Ancestors of `state`, closest first, excluding `state` itself.
    ///
    /// Does not terminate if the parent chain contains a cycle.
    pub fn ancestors(&self, state: StateId) -> impl Iterator<Item = StateId> + '_ {
        std::iter::successors(self.state(state).and_then(StateNode::parent), move |id| {
            self.state(*id).and_then(StateNode::parent)
        })
    }
}

impl<D, P, C> Index<StateId> for Topology<D, P, C> {
    type Output = StateNode<D, P, C>;

    fn index(&self, id: StateId) -> &Self::Output {
        &self.states[id.index()]
    }
}

impl<D: fmt::Debug, P, C: fmt::Debug> fmt::Debug for Topology<D, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Topology")
            .field("states", &self.states)
            .finish()
    }
}
