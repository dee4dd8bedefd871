//! Builder API for topology construction.
//!
//! Topologies are built once, before any machine runs over them. The
//! builder hands out [`StateId`](crate::core::StateId) handles at
//! declaration time so states can link to each other in any order, and
//! checks at build time that every link stays inside the topology.

pub mod error;
pub mod macros;
pub mod state;
pub mod topology;

pub use error::BuildError;
pub use state::StateBuilder;
pub use topology::TopologyBuilder;
