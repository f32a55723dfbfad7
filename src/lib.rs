//! Guidance State: the authoritative state tracker for an autonomous-vehicle
//! guidance module.
//!
//! Discrete operational events (drivers ready, route activated, engaged,
//! panic) are applied to a fixed transition table. Every committed
//! transition emits exactly one action to the registered listeners; events
//! with no transition for the current state are ignored.
//!
//! # Core Concepts
//!
//! - **State**: one of five operating modes, starting at `STARTUP`;
//!   `SHUTDOWN` is absorbing
//! - **Transition table**: the total mapping `(state, event) -> (state, action)`
//!   or "no transition"
//! - **Listeners**: collaborators notified synchronously, each isolated from
//!   the others' failures
//!
//! # Example
//!
//! ```rust
//! use guidance_state::{GuidanceAction, GuidanceEvent, GuidanceState, GuidanceStateMachine};
//! use guidance_state::machine::listener_fn;
//! use std::sync::{Arc, Mutex};
//!
//! let machine = GuidanceStateMachine::new();
//! let actions = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&actions);
//! machine.register_state_change_listener(listener_fn(move |action| {
//!     sink.lock().unwrap().push(action);
//! }));
//!
//! machine.process_event(GuidanceEvent::FoundDrivers);
//! machine.process_event(GuidanceEvent::Disengage); // no transition from DRIVERS_READY
//!
//! assert_eq!(machine.state(), GuidanceState::DriversReady);
//! assert_eq!(*actions.lock().unwrap(), vec![GuidanceAction::Initialize]);
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{GuidanceAction, GuidanceEvent, GuidanceState, Transition};
pub use builder::{GuidanceConfig, GuidanceStateMachineBuilder};
pub use error::GuidanceError;
pub use machine::{GuidanceStateMachine, ListenerHandle, StateChangeListener};
