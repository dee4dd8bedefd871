//! Classification of a handled event.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened when an event was handed to a machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The machine holds a state handle that its topology does not know.
    /// Nothing was changed.
    InvalidArgument,

    /// The error state was reached, either through a normal transition or
    /// because the machine was forced into it by a topology defect.
    ErrorStateReached,

    /// The current state changed into a non-final state.
    StateChanged,

    /// The event resolved back to the current state, directly or through
    /// a parent transition and entry chain.
    StateLoopSelf,

    /// No transition applied; nothing was changed.
    NoChange,

    /// A final state other than the error state was reached.
    FinalStateReached,
}

impl Outcome {
    /// Integer code of the outcome; negative codes are errors.
    ///
    /// ```rust
    /// use statem::core::Outcome;
    ///
    /// assert_eq!(Outcome::InvalidArgument.code(), -2);
    /// assert_eq!(Outcome::FinalStateReached.code(), 3);
    /// ```
    pub const fn code(self) -> i32 {
        match self {
            Self::InvalidArgument => -2,
            Self::ErrorStateReached => -1,
            Self::StateChanged => 0,
            Self::StateLoopSelf => 1,
            Self::NoChange => 2,
            Self::FinalStateReached => 3,
        }
    }

    pub const fn is_error(self) -> bool {
        self.code() < 0
    }

    /// Whether the machine's state pointers were updated.
    pub const fn moved(self) -> bool {
        !matches!(self, Self::InvalidArgument | Self::NoChange)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InvalidArgument => "invalid argument",
            Self::ErrorStateReached => "error state reached",
            Self::StateChanged => "state changed",
            Self::StateLoopSelf => "state looped to itself",
            Self::NoChange => "no change",
            Self::FinalStateReached => "final state reached",
        };
        f.write_str(text)
    }
}
