//! Validation of topologies, separate from event handling.
//!
//! The engine never checks a topology while handling events: cycles in
//! parent or entry chains simply make `handle_event` loop forever. This
//! module offers a one-off pass, meant to run right after building, that
//! uses Stillwater's `Validation` type to accumulate ALL violations
//! instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use statem::builder::{StateBuilder, TopologyBuilder};
//! use statem::validation::ValidationBuilder;
//!
//! let mut builder = TopologyBuilder::<(), ()>::new();
//! let error = builder.add_state("error", StateBuilder::new(()));
//! let topology = builder.build().unwrap();
//!
//! let rules = ValidationBuilder::new()
//!     .acyclic_parents()
//!     .acyclic_entries()
//!     .terminal_error_state(error)
//!     .build();
//!
//! assert!(rules.check(&topology).is_success());
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::ValidationBuilder;
pub use rules::{TopologyCheck, ValidationRules};
pub use violations::TopologyViolation;
