//! State machine that resolves events against a topology.

use crate::core::{Event, Outcome, StateHistory, StateId, StateNode, StateTransition, Topology};
use crate::engine::config::MachineConfig;
use chrono::Utc;
use std::fmt;
use tracing::{debug, trace, warn};

/// A running instance over a shared [`Topology`].
///
/// The machine only holds its current, previous and error state handles
/// (plus an optional history); the topology is borrowed and never mutated,
/// so several machines can run over the same topology.
///
/// # Example
///
/// ```rust
/// use statem::builder::{StateBuilder, TopologyBuilder};
/// use statem::core::{Event, Outcome, Transition};
/// use statem::engine::Machine;
///
/// const COIN: i32 = 0;
/// const PUSH: i32 = 1;
///
/// let mut builder = TopologyBuilder::<&str, ()>::new();
/// let locked = builder.declare("locked");
/// let unlocked = builder.declare("unlocked");
/// let error = builder.add_state("error", StateBuilder::new("error"));
/// builder
///     .define(locked, StateBuilder::new("locked").transition(Transition::on(COIN).to(unlocked)))
///     .unwrap()
///     .define(unlocked, StateBuilder::new("unlocked").transition(Transition::on(PUSH).to(locked)))
///     .unwrap();
/// let topology = builder.build().unwrap();
///
/// let mut machine = Machine::new(&topology, locked, error);
/// assert_eq!(machine.handle_event(&Event::signal(COIN)), Outcome::StateChanged);
/// assert_eq!(machine.current_state(), Some(unlocked));
/// assert_eq!(machine.handle_event(&Event::signal(COIN)), Outcome::NoChange);
/// ```
pub struct Machine<'t, D, P, C = ()> {
    topology: &'t Topology<D, P, C>,
    current: Option<StateId>,
    previous: Option<StateId>,
    error_state: StateId,
    history: Option<StateHistory>,
}

impl<'t, D, P, C> Machine<'t, D, P, C> {
    /// Create a machine in `initial`. No callback is invoked.
    pub fn new(topology: &'t Topology<D, P, C>, initial: StateId, error_state: StateId) -> Self {
        Self::with_config(topology, initial, error_state, &MachineConfig::default())
    }

    pub fn with_config(
        topology: &'t Topology<D, P, C>,
        initial: StateId,
        error_state: StateId,
        config: &MachineConfig,
    ) -> Self {
        Self {
            topology,
            current: Some(initial),
            previous: None,
            error_state,
            history: config.history(),
        }
    }

    /// Create a machine without current state.
    ///
    /// The first event routes it to `error_state` until [`init`](Self::init)
    /// is called.
    pub fn without_initial(topology: &'t Topology<D, P, C>, error_state: StateId) -> Self {
        Self::without_initial_with_config(topology, error_state, &MachineConfig::default())
    }

    /// Like [`without_initial`](Self::without_initial), applying `config`.
    pub fn without_initial_with_config(
        topology: &'t Topology<D, P, C>,
        error_state: StateId,
        config: &MachineConfig,
    ) -> Self {
        Self {
            topology,
            current: None,
            previous: None,
            error_state,
            history: config.history(),
        }
    }

    pub(crate) fn from_parts(
        topology: &'t Topology<D, P, C>,
        current: Option<StateId>,
        previous: Option<StateId>,
        error_state: StateId,
        history: Option<StateHistory>,
    ) -> Self {
        Self {
            topology,
            current,
            previous,
            error_state,
            history,
        }
    }

    /// Reset the machine to `initial`.
    ///
    /// Safe to call at any time, for instance to restart after a final state
    /// was reached. No callback is invoked and the history is kept.
    pub fn init(&mut self, initial: StateId, error_state: StateId) {
        self.current = Some(initial);
        self.previous = None;
        self.error_state = error_state;
    }

    /// Pass an event to the machine.
    ///
    /// The event is offered to the current state and then to each of its
    /// ancestors until a transition matches. The destination is followed
    /// down its entry chain, then the callbacks run in this order:
    ///
    /// 1. exit hook of the state being left
    /// 2. transition action
    /// 3. entry hook of the state entered
    ///
    /// Exit and entry hooks are skipped when the event resolves back to the
    /// current state; the transition action always runs.
    ///
    /// Topology defects (no current state, a selected transition without
    /// destination) route the machine to its error state instead of failing.
    /// A cycle in a parent or entry chain makes this call loop forever.
    pub fn handle_event(&mut self, event: &Event<P>) -> Outcome {
        let topology = self.topology;

        if !topology.contains(self.error_state) {
            warn!(error_state = %self.error_state, "error state does not belong to the topology");
            return Outcome::InvalidArgument;
        }

        let Some(current_id) = self.current else {
            warn!(
                event_type = event.event_type,
                "machine has no current state, entering error state"
            );
            self.enter_error_state(event);
            return Outcome::ErrorStateReached;
        };

        let Some(current) = topology.state(current_id) else {
            warn!(state = %current_id, "current state does not belong to the topology");
            return Outcome::InvalidArgument;
        };

        if current.is_terminal() {
            trace!(
                state = current.name(),
                event_type = event.event_type,
                "final state ignores event"
            );
            return Outcome::NoChange;
        }

        let Some((source, transition)) = topology.resolve(current_id, event) else {
            trace!(
                state = current.name(),
                event_type = event.event_type,
                "no transition for event"
            );
            return Outcome::NoChange;
        };

        let Some(destination) = transition.destination() else {
            warn!(
                state = topology[source].name(),
                event_type = event.event_type,
                "transition has no destination, entering error state"
            );
            self.enter_error_state(event);
            return Outcome::ErrorStateReached;
        };

        let next_id = topology.descend(destination);
        let next = &topology[next_id];

        if next_id == current_id {
            transition.run(current.data(), event, next.data());
            self.previous = Some(current_id);
            self.current = Some(next_id);

            debug!(
                state = current.name(),
                handled_by = topology[source].name(),
                event_type = event.event_type,
                "state looped to itself"
            );
            self.record(Some(current_id), next_id, event, Outcome::StateLoopSelf);
            return Outcome::StateLoopSelf;
        }

        current.exit(event);
        transition.run(current.data(), event, next.data());
        next.enter(event);

        self.previous = Some(current_id);
        self.current = Some(next_id);

        let outcome = if next_id == self.error_state {
            Outcome::ErrorStateReached
        } else if next.is_terminal() {
            Outcome::FinalStateReached
        } else {
            Outcome::StateChanged
        };

        debug!(
            from = current.name(),
            to = next.name(),
            handled_by = topology[source].name(),
            event_type = event.event_type,
            %outcome,
            "transition"
        );
        self.record(Some(current_id), next_id, event, outcome);
        outcome
    }

    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }

    /// State left by the last move; `None` until the first move after
    /// [`init`](Self::init).
    pub fn previous_state(&self) -> Option<StateId> {
        self.previous
    }

    pub fn error_state(&self) -> StateId {
        self.error_state
    }

    /// Node of the current state, if any.
    pub fn current_node(&self) -> Option<&'t StateNode<D, P, C>> {
        self.topology.state(self.current?)
    }

    /// Check if the current state has no transitions.
    ///
    /// Unlike the final-state check used while handling events, this does
    /// not require the state to be a root: a child without transitions is
    /// reported as stopped even though events still bubble to its parent.
    pub fn is_stopped(&self) -> bool {
        self.current_node().is_some_and(|s| !s.has_transitions())
    }

    pub fn topology(&self) -> &'t Topology<D, P, C> {
        self.topology
    }

    /// Recorded history, if enabled through [`MachineConfig`].
    pub fn history(&self) -> Option<&StateHistory> {
        self.history.as_ref()
    }

    /// Force the machine into its error state.
    ///
    /// Only used for topology defects: the abandoned state's exit hook and
    /// any transition action are skipped, the error state's entry hook runs.
    fn enter_error_state(&mut self, event: &Event<P>) {
        let from = self.current;
        self.previous = self.current;
        self.current = Some(self.error_state);

        if let Some(error) = self.topology.state(self.error_state) {
            error.enter(event);
        }
        self.record(from, self.error_state, event, Outcome::ErrorStateReached);
    }

    fn record(&mut self, from: Option<StateId>, to: StateId, event: &Event<P>, outcome: Outcome) {
        if let Some(history) = &mut self.history {
            history.record(StateTransition {
                from,
                to,
                event_type: event.event_type,
                outcome,
                timestamp: Utc::now(),
            });
        }
    }
}

impl<D, P, C> fmt::Debug for Machine<'_, D, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("previous", &self.previous)
            .field("error_state", &self.error_state)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}
