//! Guidance Walkthrough
//!
//! Drives the guidance state machine through a full route: drivers come
//! up, a route is activated and engaged, then a panic shuts guidance down.
//! A second thread consumes the emitted actions from a channel.
//!
//! Run with: RUST_LOG=debug cargo run --example guidance_walkthrough

use guidance_state::core::transition_table;
use guidance_state::machine::{listener_fn, ChannelListener};
use guidance_state::{GuidanceAction, GuidanceEvent, GuidanceStateMachine};
use std::sync::Arc;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Guidance State Machine ===\n");

    println!("Transition table:");
    for t in transition_table() {
        println!("  {:<14} + {:<15} -> {:<14} [{}]", t.from, t.event, t.to, t.action);
    }
    println!();

    let machine = Arc::new(GuidanceStateMachine::new());
    machine.register_state_change_listener(listener_fn(|action| {
        println!("  listener: {action}");
    }));

    let (listener, mut actions) = ChannelListener::channel();
    machine.register_state_change_listener(listener);
    let consumer = tokio::spawn(async move {
        while let Some(action) = actions.recv().await {
            tracing::info!(%action, "Control loop received action");
            if action == GuidanceAction::Shutdown {
                break;
            }
        }
    });

    let driver = Arc::clone(&machine);
    tokio::task::spawn_blocking(move || {
        for event in [
            GuidanceEvent::FoundDrivers,
            GuidanceEvent::ActivateRoute,
            GuidanceEvent::StartRoute,
            GuidanceEvent::Panic,
            GuidanceEvent::FoundDrivers,
        ] {
            let before = driver.state();
            match driver.process_event(event) {
                Some(t) => println!("{before} + {event} -> {}", t.to),
                None => println!("{before} + {event} ignored"),
            }
        }
    })
    .await
    .expect("driver thread panicked");

    consumer.await.expect("consumer task panicked");

    println!("\nCommitted path:");
    let path: Vec<String> = machine
        .history()
        .path()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("  {}", path.join(" -> "));

    println!("\n=== Example Complete ===");
}
