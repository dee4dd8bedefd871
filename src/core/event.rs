//! Events fed into a state machine.

use serde::{Deserialize, Serialize};

/// Integer discriminant identifying the kind of an event.
///
/// Transitions are keyed on this value. Integrators usually declare their
/// kinds with [`event_kinds!`](crate::event_kinds) rather than raw integers.
pub type EventType = i32;

/// An event with an optional payload.
///
/// Events are ephemeral: the machine only borrows them for the duration of
/// a single [`handle_event`](crate::engine::Machine::handle_event) call.
///
/// # Example
///
/// ```rust
/// use statem::core::Event;
///
/// const KEYBOARD: i32 = 0;
///
/// let event = Event::new(KEYBOARD, 'h');
/// assert_eq!(event.event_type, KEYBOARD);
/// assert_eq!(event.payload, 'h');
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event<P = ()> {
    /// Kind of event, matched against [`Transition::event_type`](crate::core::Transition::event_type)
    pub event_type: EventType,
    /// Event payload, interpreted by guards and callbacks
    pub payload: P,
}

impl<P> Event<P> {
    /// Create an event carrying a payload.
    pub fn new(event_type: impl Into<EventType>, payload: P) -> Self {
        Self {
            event_type: event_type.into(),
            payload,
        }
    }
}

impl Event<()> {
    /// Create an event without payload.
    pub fn signal(event_type: impl Into<EventType>) -> Self {
        Self::new(event_type, ())
    }
}
