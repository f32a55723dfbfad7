//! Builder API and configuration for the guidance state machine.
//!
//! This module provides the fluent [`GuidanceStateMachineBuilder`], the
//! serde-backed [`GuidanceConfig`] it consumes, and the
//! [`guidance_enum!`](crate::guidance_enum) macro used to declare the closed
//! guidance enums.

pub mod config;
pub mod machine;
pub mod macros;

pub use config::{GuidanceConfig, UnhandledEventLog, DEFAULT_HISTORY_CAPACITY};
pub use machine::GuidanceStateMachineBuilder;
