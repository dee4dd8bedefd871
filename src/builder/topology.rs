//! Builder for constructing topologies.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{StateId, StateNode, Topology};
use crate::validation::ValidationRules;
use stillwater::validation::Validation;

struct Slot<D, P, C> {
    name: String,
    state: Option<StateBuilder<D, P, C>>,
}

/// Builder for constructing topologies.
///
/// States are first declared, which hands out their [`StateId`], and then
/// defined. Declaring up front lets states refer to each other regardless
/// of definition order.
///
/// # Example
///
/// ```rust
/// use statem::builder::{StateBuilder, TopologyBuilder};
/// use statem::core::Transition;
///
/// const GO: i32 = 1;
///
/// let mut builder = TopologyBuilder::<&str, ()>::new();
/// let red = builder.declare("red");
/// let green = builder.declare("green");
///
/// builder
///     .define(red, StateBuilder::new("red").transition(Transition::on(GO).to(green)))
///     .unwrap()
///     .define(green, StateBuilder::new("green").transition(Transition::on(GO).to(red)))
///     .unwrap();
///
/// let topology = builder.build().unwrap();
/// assert_eq!(topology.len(), 2);
/// ```
pub struct TopologyBuilder<D, P, C = ()> {
    slots: Vec<Slot<D, P, C>>,
}

impl<D, P, C> TopologyBuilder<D, P, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Reserve a state and return its handle.
    pub fn declare(&mut self, name: impl Into<String>) -> StateId {
        self.slots.push(Slot {
            name: name.into(),
            state: None,
        });
        StateId::new(self.slots.len() - 1)
    }

    /// Define a previously declared state.
    pub fn define(
        &mut self,
        id: StateId,
        state: StateBuilder<D, P, C>,
    ) -> Result<&mut Self, BuildError> {
        let slot = self
            .slots
            .get_mut(id.index())
            .ok_or(BuildError::UnknownState { id })?;

        if slot.state.is_some() {
            return Err(BuildError::AlreadyDefined {
                name: slot.name.clone(),
            });
        }

        slot.state = Some(state);
        Ok(self)
    }

    /// Declare and define a state in one go.
    pub fn add_state(&mut self, name: impl Into<String>, state: StateBuilder<D, P, C>) -> StateId {
        let id = self.declare(name);
        self.slots[id.index()].state = Some(state);
        id
    }

    /// Build the topology.
    /// Returns an error if a declared state is undefined or a link points
    /// outside this builder.
    pub fn build(self) -> Result<Topology<D, P, C>, BuildError> {
        let count = self.slots.len();
        let mut states = Vec::with_capacity(count);

        for slot in self.slots {
            let state = slot
                .state
                .ok_or_else(|| BuildError::UndefinedState {
                    name: slot.name.clone(),
                })?;

            if let Some(id) = state.references().find(|id| id.index() >= count) {
                return Err(BuildError::UnknownState { id });
            }

            states.push(StateNode {
                name: slot.name,
                parent: state.parent,
                entry: state.entry,
                transitions: state.transitions,
                data: state.data,
                on_enter: state.on_enter,
                on_exit: state.on_exit,
            });
        }

        Ok(Topology::from_states(states))
    }

    /// Build the topology and check it against `rules`.
    /// All violations are reported at once.
    pub fn build_checked(
        self,
        rules: &ValidationRules<D, P, C>,
    ) -> Result<Topology<D, P, C>, BuildError> {
        let topology = self.build()?;

        match rules.check(&topology) {
            Validation::Success(_) => Ok(topology),
            Validation::Failure(violations) => Err(BuildError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

impl<D, P, C> Default for TopologyBuilder<D, P, C> {
    fn default() -> Self {
        Self::new()
    }
}
