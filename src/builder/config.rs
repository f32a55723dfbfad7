//! Configuration for the guidance state machine.

use crate::error::GuidanceError;
use serde::{Deserialize, Serialize};

/// Default number of committed transitions kept in the history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// When to warn about an event that has no transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnhandledEventLog {
    /// Warn only for events received in the terminal state. Unhandled
    /// events in live states get the plain "did not change state" notice.
    #[default]
    TerminalOnly,

    /// Warn for every unhandled event.
    Always,
}

/// Tunables for a [`GuidanceStateMachine`](crate::machine::GuidanceStateMachine).
///
/// # Example
///
/// ```rust
/// use guidance_state::builder::{GuidanceConfig, UnhandledEventLog};
///
/// let config = GuidanceConfig::from_json(r#"{ "unhandled_event_log": "always" }"#).unwrap();
/// assert_eq!(config.unhandled_event_log, UnhandledEventLog::Always);
/// assert_eq!(config.history_capacity, 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuidanceConfig {
    /// Committed transitions retained in the history; zero disables it
    pub history_capacity: usize,

    pub unhandled_event_log: UnhandledEventLog,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            unhandled_event_log: UnhandledEventLog::default(),
        }
    }
}

impl GuidanceConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, GuidanceError> {
        Ok(serde_json::from_str(json)?)
    }
}
