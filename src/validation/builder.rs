//! Builder API for creating validation rules.

use crate::core::{StateId, Topology};
use crate::validation::rules::ValidationRules;
use crate::validation::violations::TopologyViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating validation rules.
///
/// Starts with no rule enabled; [`ValidationRules::default`] is the
/// shortcut for acyclic parent and entry chains.
pub struct ValidationBuilder<D, P, C = ()> {
    rules: ValidationRules<D, P, C>,
}

impl<D, P, C> ValidationBuilder<D, P, C> {
    pub fn new() -> Self {
        Self {
            rules: ValidationRules {
                acyclic_parents: false,
                acyclic_entries: false,
                terminal_error_state: None,
                required_checks: Vec::new(),
            },
        }
    }

    /// Require every parent chain to reach a root
    pub fn acyclic_parents(mut self) -> Self {
        self.rules.acyclic_parents = true;
        self
    }

    /// Require every entry chain to reach a leaf
    pub fn acyclic_entries(mut self) -> Self {
        self.rules.acyclic_entries = true;
        self
    }

    /// Require `state` to exist and be terminal, so a machine routed there halts
    pub fn terminal_error_state(mut self, state: StateId) -> Self {
        self.rules.terminal_error_state = Some(state);
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&Topology<D, P, C>) -> Validation<(), NonEmptyVec<TopologyViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.rules.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&Topology<D, P, C>) -> bool + Send + Sync + 'static,
    {
        let check = move |topology: &Topology<D, P, C>| {
            if predicate(topology) {
                Validation::success(())
            } else {
                Validation::fail(TopologyViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.rules.required_checks.push(Box::new(check));
        self
    }

    /// Build the validation rules
    pub fn build(self) -> ValidationRules<D, P, C> {
        self.rules
    }
}

impl<D, P, C> Default for ValidationBuilder<D, P, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{StateBuilder, TopologyBuilder};

    fn single_state() -> Topology<(), ()> {
        let mut builder = TopologyBuilder::new();
        builder.add_state("only", StateBuilder::new(()));
        builder.build().unwrap()
    }

    #[test]
    fn empty_rules_accept_anything() {
        let rules: ValidationRules<(), ()> = ValidationBuilder::new().build();
        assert!(rules.check(&single_state()).is_success());
    }

    #[test]
    fn custom_validation_check_works() {
        let rules = ValidationBuilder::new()
            .require(|topology: &Topology<(), ()>| {
                if topology.find("start").is_some() {
                    Validation::success(())
                } else {
                    Validation::fail(TopologyViolation::CustomCheckFailed {
                        message: "No state named 'start'".to_string(),
                    })
                }
            })
            .build();

        assert!(rules.check(&single_state()).is_failure());
    }

    #[test]
    fn predicate_check_passes() {
        let rules = ValidationBuilder::new()
            .require_pred(|t: &Topology<(), ()>| !t.is_empty(), "Empty topology".to_string())
            .build();

        assert!(rules.check(&single_state()).is_success());
    }
}
