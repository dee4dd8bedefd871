//! Guard predicates for controlling transitions.
//!
//! A guard pairs a stored condition value with a predicate. The predicate is
//! invoked with the condition and the live event; how the two are compared
//! (equality, range check, ...) is entirely up to the predicate.

use super::event::Event;
use std::fmt;

/// Predicate that decides whether a matching transition may fire.
///
/// # Example
///
/// ```rust
/// use statem::core::{Event, Guard};
///
/// const KEYBOARD: i32 = 0;
///
/// // Fire only when the typed character equals the stored one.
/// let guard = Guard::new('h', |expected: &char, event: &Event<char>| {
///     *expected == event.payload
/// });
///
/// assert!(guard.check(&Event::new(KEYBOARD, 'h')));
/// assert!(!guard.check(&Event::new(KEYBOARD, 'x')));
/// ```
pub struct Guard<C, P> {
    condition: C,
    predicate: Box<dyn Fn(&C, &Event<P>) -> bool + Send + Sync>,
}

impl<C, P> Guard<C, P> {
    /// Create a guard from a condition value and a predicate over it.
    ///
    /// The predicate should be deterministic and must not touch the
    /// topology; it runs synchronously inside `handle_event`.
    pub fn new<F>(condition: C, predicate: F) -> Self
    where
        F: Fn(&C, &Event<P>) -> bool + Send + Sync + 'static,
    {
        Guard {
            condition,
            predicate: Box::new(predicate),
        }
    }

    /// The condition value handed to the predicate.
    pub fn condition(&self) -> &C {
        &self.condition
    }

    /// Check whether the guard lets `event` through.
    pub fn check(&self, event: &Event<P>) -> bool {
        (self.predicate)(&self.condition, event)
    }
}

impl<P> Guard<(), P> {
    /// Create a guard that only looks at the event.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statem::core::{Event, Guard};
    ///
    /// let even = Guard::from_fn(|event: &Event<u32>| event.payload % 2 == 0);
    /// assert!(even.check(&Event::new(1, 4)));
    /// assert!(!even.check(&Event::new(1, 5)));
    /// ```
    pub fn from_fn<F>(predicate: F) -> Self
    where
        F: Fn(&Event<P>) -> bool + Send + Sync + 'static,
    {
        Guard::new((), move |_: &(), event: &Event<P>| predicate(event))
    }
}

impl<C: fmt::Debug, P> fmt::Debug for Guard<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("condition", &self.condition)
            .finish_non_exhaustive()
    }
}
