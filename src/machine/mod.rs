//! The thread-safe guidance state machine and its observation contract.
//!
//! # Key Concepts
//!
//! - **State machine**: applies events to the transition table under mutual
//!   exclusion and publishes the current state through an atomic
//! - **Listeners**: collaborators notified with the action of every
//!   committed transition, each isolated from the others' failures

mod listener;
mod state_machine;

pub use listener::{
    listener_fn, ChannelListener, FnListener, ListenerError, ListenerHandle, StateChangeListener,
};
pub use state_machine::GuidanceStateMachine;
