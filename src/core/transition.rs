//! Transitions between states.

use super::event::{Event, EventType};
use super::guard::Guard;
use super::state::StateId;
use std::fmt;

/// Callback run while a transition fires.
///
/// Receives the leaving state's data, the triggering event and the entered
/// state's data.
pub type TransitionAction<D, P> = Box<dyn Fn(&D, &Event<P>, &D) + Send + Sync>;

/// A rule mapping an event on a state to a destination state.
///
/// Transitions of one state are tried in declaration order and the first
/// one whose [`event_type`](Self::event_type) matches and whose guard (if
/// any) passes is selected.
///
/// A transition without a destination can be built; selecting it routes the
/// machine into its error state.
///
/// # Example
///
/// ```rust
/// use statem::core::{Event, StateId, Transition};
///
/// const TIMEOUT: i32 = 4;
///
/// let menu = StateId::new(2);
/// let transition: Transition<&str, ()> = Transition::on(TIMEOUT).to(menu);
///
/// assert_eq!(transition.destination(), Some(menu));
/// assert!(transition.matches(&Event::signal(TIMEOUT)));
/// assert!(!transition.matches(&Event::signal(TIMEOUT + 1)));
/// ```
pub struct Transition<D, P, C = ()> {
    event_type: EventType,
    guard: Option<Guard<C, P>>,
    action: Option<TransitionAction<D, P>>,
    destination: Option<StateId>,
}

impl<D, P, C> Transition<D, P, C> {
    /// Start a transition triggered by `event_type`, with no guard, no
    /// action and no destination yet.
    pub fn on(event_type: impl Into<EventType>) -> Self {
        Self {
            event_type: event_type.into(),
            guard: None,
            action: None,
            destination: None,
        }
    }

    /// Set the destination state.
    pub fn to(mut self, destination: StateId) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Guard the transition.
    pub fn guard(mut self, guard: Guard<C, P>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Guard the transition with a condition value and a predicate over it.
    pub fn when<F>(self, condition: C, predicate: F) -> Self
    where
        F: Fn(&C, &Event<P>) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(condition, predicate))
    }

    /// Run `action` whenever the transition fires.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&D, &Event<P>, &D) + Send + Sync + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    /// The stored condition, if the transition is guarded.
    pub fn condition(&self) -> Option<&C> {
        self.guard.as_ref().map(Guard::condition)
    }

    pub fn destination(&self) -> Option<StateId> {
        self.destination
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }

    /// Check whether this transition is selected by `event`.
    ///
    /// The guard is only evaluated when the event type matches.
    pub fn matches(&self, event: &Event<P>) -> bool {
        if self.event_type != event.event_type {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(event))
    }

    /// Run the transition action, if any.
    pub(crate) fn run(&self, leaving: &D, event: &Event<P>, entering: &D) {
        if let Some(action) = &self.action {
            action(leaving, event, entering);
        }
    }
}

impl<D, P, C: fmt::Debug> fmt::Debug for Transition<D, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("event_type", &self.event_type)
            .field("guard", &self.guard)
            .field("has_action", &self.action.is_some())
            .field("destination", &self.destination)
            .finish()
    }
}
