//! Builder for constructing guidance state machines.

use crate::builder::config::{GuidanceConfig, UnhandledEventLog};
use crate::machine::{GuidanceStateMachine, ListenerHandle};

/// Builder for a [`GuidanceStateMachine`] with a fluent API.
///
/// The machine always starts in `STARTUP`; the builder only chooses its
/// tunables and the listeners registered before the first event.
///
/// # Example
///
/// ```rust
/// use guidance_state::builder::{GuidanceStateMachineBuilder, UnhandledEventLog};
/// use guidance_state::core::GuidanceState;
/// use guidance_state::machine::listener_fn;
///
/// let machine = GuidanceStateMachineBuilder::new()
///     .history_capacity(16)
///     .unhandled_event_log(UnhandledEventLog::Always)
///     .listener(listener_fn(|action| println!("{action}")))
///     .build();
///
/// assert_eq!(machine.state(), GuidanceState::Startup);
/// assert_eq!(machine.listener_count(), 1);
/// ```
#[derive(Default)]
pub struct GuidanceStateMachineBuilder {
    config: GuidanceConfig,
    listeners: Vec<ListenerHandle>,
}

impl GuidanceStateMachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every tunable with those from `config`.
    pub fn config(mut self, config: GuidanceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    pub fn unhandled_event_log(mut self, policy: UnhandledEventLog) -> Self {
        self.config.unhandled_event_log = policy;
        self
    }

    /// Register a listener before the machine processes its first event.
    pub fn listener(mut self, listener: ListenerHandle) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn build(self) -> GuidanceStateMachine {
        GuidanceStateMachine::from_parts(self.config, self.listeners)
    }
}
