//! Statem: a hierarchical finite state machine core
//!
//! Statem evaluates a statically defined tree of states against a stream
//! of events. It is meant for control software where the state topology is
//! fixed before the machine runs and every event has to be resolved
//! deterministically and cheaply.
//!
//! # Core Concepts
//!
//! - **Topology**: Immutable arena of states linked by parent, entry and
//!   transition handles
//! - **Bubbling**: Events unmatched by a state are offered to its ancestors,
//!   so children share the transitions of their groups
//! - **Entry chains**: A transition into a group state lands on the group's
//!   entry child, recursively
//! - **Outcome**: Every handled event is classified; topology defects route
//!   the machine into its error state instead of failing
//!
//! # Example
//!
//! ```rust
//! use statem::builder::{StateBuilder, TopologyBuilder};
//! use statem::core::{Event, Outcome, Transition};
//! use statem::engine::Machine;
//!
//! const KEY: i32 = 0;
//!
//! fn is_char(expected: &char, event: &Event<char>) -> bool {
//!     *expected == event.payload
//! }
//!
//! let mut builder = TopologyBuilder::<&str, char, char>::new();
//! let group = builder.declare("group");
//! let idle = builder.declare("idle");
//! let h = builder.declare("h");
//! let error = builder.add_state("error", StateBuilder::new("error"));
//!
//! builder
//!     .define(group, StateBuilder::new("group")
//!         .entry(idle)
//!         .transition(Transition::on(KEY).when('!', is_char).to(group)))
//!     .unwrap()
//!     .define(idle, StateBuilder::new("idle")
//!         .parent(group)
//!         .transition(Transition::on(KEY).when('h', is_char).to(h)))
//!     .unwrap()
//!     .define(h, StateBuilder::new("h").parent(group))
//!     .unwrap();
//!
//! let topology = builder.build().unwrap();
//! let mut machine = Machine::new(&topology, idle, error);
//!
//! assert_eq!(machine.handle_event(&Event::new(KEY, 'h')), Outcome::StateChanged);
//! // `h` has no transition for '!', its group does; the group redirects to `idle`.
//! assert_eq!(machine.handle_event(&Event::new(KEY, '!')), Outcome::StateChanged);
//! assert_eq!(machine.current_state(), Some(idle));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod engine;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, StateBuilder, TopologyBuilder};
pub use crate::core::{Event, EventType, Guard, Outcome, StateId, Topology, Transition};
pub use engine::{Machine, MachineConfig};
