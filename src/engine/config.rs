//! Machine configuration.

use crate::core::StateHistory;
use serde::{Deserialize, Serialize};

/// Options applied when creating a [`Machine`](super::Machine).
///
/// Deserializable so integrators can keep it next to their own settings.
///
/// ```rust
/// use statem::engine::MachineConfig;
///
/// let config: MachineConfig =
///     serde_json::from_str(r#"{ "record_history": true, "history_limit": 64 }"#).unwrap();
/// assert!(config.record_history);
/// assert_eq!(config.history_limit, Some(64));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Keep a [`StateHistory`] of every state change
    pub record_history: bool,
    /// Maximum number of history records; unbounded when `None`
    pub history_limit: Option<usize>,
}

impl MachineConfig {
    /// History recording on, unbounded.
    pub fn with_history() -> Self {
        Self {
            record_history: true,
            history_limit: None,
        }
    }

    pub(crate) fn history(&self) -> Option<StateHistory> {
        if !self.record_history {
            return None;
        }
        Some(match self.history_limit {
            Some(limit) => StateHistory::bounded(limit),
            None => StateHistory::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{StateBuilder, TopologyBuilder};
    use crate::core::{Event, Outcome, Transition};
    use crate::engine::Machine;

    #[test]
    fn default_config_disables_history() {
        let config = MachineConfig::default();
        assert!(config.history().is_none());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: MachineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MachineConfig::default());
    }

    #[test]
    fn history_limit_is_applied() {
        let config = MachineConfig {
            record_history: true,
            history_limit: Some(8),
        };
        assert_eq!(config.history().and_then(|h| h.limit()), Some(8));
        assert_eq!(MachineConfig::with_history().history().map(|h| h.limit()), Some(None));
    }

    #[test]
    fn huge_history_limit_does_not_preallocate() {
        let json = format!(r#"{{ "record_history": true, "history_limit": {} }}"#, usize::MAX);
        let config: MachineConfig = serde_json::from_str(&json).unwrap();

        let mut builder = TopologyBuilder::<(), ()>::new();
        let error = builder.add_state("error", StateBuilder::new(()));
        let idle = builder.add_state(
            "idle",
            StateBuilder::new(()).transition(Transition::on(0).to(error)),
        );
        let topology = builder.build().unwrap();

        let mut machine = Machine::with_config(&topology, idle, error, &config);
        assert_eq!(machine.history().and_then(|h| h.limit()), Some(usize::MAX));

        assert_eq!(machine.handle_event(&Event::signal(0)), Outcome::ErrorStateReached);
        assert_eq!(machine.history().map(|h| h.len()), Some(1));
    }
}
