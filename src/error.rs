//! Error types for the guidance state machine.

use thiserror::Error;

/// Errors surfaced at the edges of the crate.
///
/// Processing an event never fails: an event with no transition for the
/// current state is ignored. These errors only arise when parsing names or
/// loading configuration.
#[derive(Debug, Error)]
pub enum GuidanceError {
    #[error("Unknown guidance state '{0}'")]
    UnknownState(String),

    #[error("Unknown guidance event '{0}'")]
    UnknownEvent(String),

    #[error("Unknown guidance action '{0}'")]
    UnknownAction(String),

    #[error("Invalid guidance configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
