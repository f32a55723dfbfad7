//! Core guidance types and the transition table.
//!
//! This module contains the pure part of the state machine:
//! - The closed state, event and action enums
//! - The transition table
//! - Bounded history of committed transitions
//!
//! Nothing in here locks, logs or notifies; see [`crate::machine`] for that.

mod event;
mod history;
mod state;
mod transition;

pub use event::{GuidanceAction, GuidanceEvent};
pub use history::{TransitionHistory, TransitionRecord};
pub use state::GuidanceState;
pub use transition::{transition, transition_table, Transition};
