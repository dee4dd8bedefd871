//! Event resolution.
//!
//! A [`Machine`] resolves one event at a time against a borrowed topology:
//! transition lookup with guards, bubbling through ancestors, entry chain
//! descent, self-transition detection, and the ordered exit / action /
//! entry callbacks. Every call is synchronous and reports an
//! [`Outcome`](crate::core::Outcome); topology defects are routed to the
//! machine's error state instead of being raised.
//!
//! Callbacks run on the caller's thread inside `handle_event` and must not
//! call back into the same machine.

mod config;
mod machine;

pub use config::MachineConfig;
pub use machine::Machine;
