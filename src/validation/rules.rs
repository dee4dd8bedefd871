//! Validation rules for topologies using Validation.

use crate::core::{StateId, StateNode, Topology};
use crate::validation::violations::TopologyViolation;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for custom topology checks
pub type TopologyCheck<D, P, C> =
    Box<dyn Fn(&Topology<D, P, C>) -> Validation<(), NonEmptyVec<TopologyViolation>> + Send + Sync>;

/// Validation rules for a topology.
/// Uses Validation to accumulate ALL violations.
pub struct ValidationRules<D, P, C = ()> {
    pub(crate) acyclic_parents: bool,
    pub(crate) acyclic_entries: bool,
    pub(crate) terminal_error_state: Option<StateId>,
    pub(crate) required_checks: Vec<TopologyCheck<D, P, C>>,
}

impl<D, P, C> ValidationRules<D, P, C> {
    /// Check `topology` against every rule, accumulating ALL violations.
    /// Returns Validation::Success(()) if all checks pass.
    pub fn check(
        &self,
        topology: &Topology<D, P, C>,
    ) -> Validation<(), NonEmptyVec<TopologyViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<TopologyViolation>>> = Vec::new();

        if self.acyclic_parents {
            for (id, state) in topology.iter() {
                let check = if chain_terminates(topology, id, StateNode::parent) {
                    Validation::success(())
                } else {
                    Validation::fail(TopologyViolation::ParentCycle {
                        state: id,
                        name: state.name().to_string(),
                    })
                };
                checks.push(check);
            }
        }

        if self.acyclic_entries {
            for (id, state) in topology.iter() {
                let check = if chain_terminates(topology, id, StateNode::entry) {
                    Validation::success(())
                } else {
                    Validation::fail(TopologyViolation::EntryCycle {
                        state: id,
                        name: state.name().to_string(),
                    })
                };
                checks.push(check);
            }
        }

        if let Some(error_state) = self.terminal_error_state {
            let check = match topology.state(error_state) {
                None => Validation::fail(TopologyViolation::UnknownErrorState { state: error_state }),
                Some(state) if !state.is_terminal() => {
                    Validation::fail(TopologyViolation::ErrorStateNotTerminal {
                        state: error_state,
                        name: state.name().to_string(),
                    })
                }
                Some(_) => Validation::success(()),
            };
            checks.push(check);
        }

        for check_fn in &self.required_checks {
            checks.push(check_fn(topology));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

impl<D, P, C> Default for ValidationRules<D, P, C> {
    /// Acyclic parent and entry chains.
    fn default() -> Self {
        Self {
            acyclic_parents: true,
            acyclic_entries: true,
            terminal_error_state: None,
            required_checks: Vec::new(),
        }
    }
}

impl<D, P, C> Topology<D, P, C> {
    /// Check that parent and entry chains are finite.
    ///
    /// Meant to be run once after building; event handling never performs
    /// this check.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statem::builder::{StateBuilder, TopologyBuilder};
    ///
    /// let mut builder = TopologyBuilder::<(), ()>::new();
    /// let group = builder.declare("group");
    /// let leaf = builder.add_state("leaf", StateBuilder::new(()).parent(group));
    /// builder.define(group, StateBuilder::new(()).entry(leaf)).unwrap();
    ///
    /// let topology = builder.build().unwrap();
    /// assert!(topology.validate().is_success());
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<TopologyViolation>> {
        ValidationRules::default().check(self)
    }
}

/// Follow `next` from `start`; false if a state repeats before the chain ends.
fn chain_terminates<D, P, C, F>(topology: &Topology<D, P, C>, start: StateId, next: F) -> bool
where
    F: Fn(&StateNode<D, P, C>) -> Option<StateId>,
{
    let mut visited = HashSet::new();
    let mut current = start;
    loop {
        if !visited.insert(current) {
            return false;
        }
        match topology.state(current).and_then(&next) {
            Some(following) => current = following,
            None => return true,
        }
    }
}
