//! Builder for a single state.

use crate::core::{Event, StateHook, StateId, Transition};

/// Fluent description of a state, handed to
/// [`TopologyBuilder::define`](super::TopologyBuilder::define).
pub struct StateBuilder<D, P, C = ()> {
    pub(crate) data: D,
    pub(crate) parent: Option<StateId>,
    pub(crate) entry: Option<StateId>,
    pub(crate) transitions: Vec<Transition<D, P, C>>,
    pub(crate) on_enter: Option<StateHook<D, P>>,
    pub(crate) on_exit: Option<StateHook<D, P>>,
}

impl<D, P, C> StateBuilder<D, P, C> {
    /// Create a state carrying `data`.
    pub fn new(data: D) -> Self {
        Self {
            data,
            parent: None,
            entry: None,
            transitions: Vec::new(),
            on_enter: None,
            on_exit: None,
        }
    }

    /// Make this state a child of `parent`.
    pub fn parent(mut self, parent: StateId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Redirect transitions targeting this state to `entry`.
    pub fn entry(mut self, entry: StateId) -> Self {
        self.entry = Some(entry);
        self
    }

    /// Append a transition; earlier transitions take precedence.
    pub fn transition(mut self, transition: Transition<D, P, C>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Append several transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition<D, P, C>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: Fn(&D, &Event<P>) + Send + Sync + 'static,
    {
        self.on_enter = Some(Box::new(hook));
        self
    }

    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: Fn(&D, &Event<P>) + Send + Sync + 'static,
    {
        self.on_exit = Some(Box::new(hook));
        self
    }

    /// Every state handle this state refers to.
    pub(crate) fn references(&self) -> impl Iterator<Item = StateId> + '_ {
        self.parent
            .into_iter()
            .chain(self.entry)
            .chain(self.transitions.iter().filter_map(Transition::destination))
    }
}

impl<D: Default, P, C> Default for StateBuilder<D, P, C> {
    fn default() -> Self {
        Self::new(D::default())
    }
}
