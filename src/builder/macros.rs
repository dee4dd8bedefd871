//! Macros for ergonomic topology construction.

/// Declare an enum of event kinds usable wherever an
/// [`EventType`](crate::core::EventType) is expected.
///
/// Variants get consecutive discriminants starting at zero unless given
/// explicitly.
///
/// # Example
///
/// ```
/// use statem::core::{Event, EventType};
/// use statem::event_kinds;
///
/// event_kinds! {
///     pub enum Input {
///         Keyboard,
///         Timeout = 10,
///     }
/// }
///
/// assert_eq!(EventType::from(Input::Keyboard), 0);
/// assert_eq!(Input::Timeout.name(), "Timeout");
///
/// let event = Event::new(Input::Timeout, ());
/// assert_eq!(event.event_type, 10);
/// ```
#[macro_export]
macro_rules! event_kinds {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $value:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(i32)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $(= $value)?
            ),*
        }

        impl $name {
            /// Variant name, for logging.
            #[allow(dead_code)]
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::core::convert::From<$name> for $crate::core::EventType {
            fn from(kind: $name) -> Self {
                kind as $crate::core::EventType
            }
        }
    };
}
