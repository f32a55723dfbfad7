//! End-to-end guidance scenarios.

use guidance_state::builder::UnhandledEventLog;
use guidance_state::machine::ChannelListener;
use guidance_state::{
    GuidanceAction, GuidanceConfig, GuidanceEvent, GuidanceState, GuidanceStateMachine,
};
use std::sync::Arc;

#[test]
fn drive_engage_and_panic() {
    let machine = GuidanceStateMachine::new();
    let (listener, mut actions) = ChannelListener::channel();
    machine.register_state_change_listener(listener);

    let steps = [
        (GuidanceEvent::FoundDrivers, GuidanceState::DriversReady, GuidanceAction::Initialize),
        (GuidanceEvent::ActivateRoute, GuidanceState::Active, GuidanceAction::Activate),
        (GuidanceEvent::StartRoute, GuidanceState::Engaged, GuidanceAction::Engage),
        (GuidanceEvent::Panic, GuidanceState::Shutdown, GuidanceAction::Shutdown),
    ];

    for (event, state, action) in steps {
        machine.process_event(event);
        assert_eq!(machine.state(), state);
        assert_eq!(actions.try_recv().unwrap(), action);
        assert!(actions.try_recv().is_err());
    }

    assert!(machine.process_event(GuidanceEvent::FoundDrivers).is_none());
    assert_eq!(machine.state(), GuidanceState::Shutdown);
    assert!(actions.try_recv().is_err());
}

#[test]
fn route_can_be_restarted_after_disengage() {
    let machine = GuidanceStateMachine::new();
    for event in [
        GuidanceEvent::FoundDrivers,
        GuidanceEvent::ActivateRoute,
        GuidanceEvent::StartRoute,
        GuidanceEvent::Disengage,
        GuidanceEvent::ActivateRoute,
        GuidanceEvent::StartRoute,
        GuidanceEvent::FinishRoute,
    ] {
        assert!(machine.process_event(event).is_some(), "{event} was ignored");
    }

    assert_eq!(machine.state(), GuidanceState::DriversReady);
    assert_eq!(machine.history().committed(), 7);
}

#[test]
fn machine_built_from_json_config() {
    let config = GuidanceConfig::from_json(
        r#"{ "history_capacity": 2, "unhandled_event_log": "always" }"#,
    )
    .unwrap();
    assert_eq!(config.unhandled_event_log, UnhandledEventLog::Always);

    let machine = GuidanceStateMachine::builder().config(config).build();
    machine.process_event(GuidanceEvent::FoundDrivers);
    machine.process_event(GuidanceEvent::StartRoute);
    machine.process_event(GuidanceEvent::ActivateRoute);
    machine.process_event(GuidanceEvent::LeftRoute);

    let history = machine.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history.committed(), 3);
    assert_eq!(
        history.path(),
        vec![
            GuidanceState::DriversReady,
            GuidanceState::Active,
            GuidanceState::DriversReady,
        ]
    );
}

#[test]
fn disconnected_channel_does_not_stop_other_listeners() {
    let machine = GuidanceStateMachine::new();
    let (dropped, receiver) = ChannelListener::channel();
    drop(receiver);
    let (live, mut actions) = ChannelListener::channel();
    machine.register_state_change_listener(dropped);
    machine.register_state_change_listener(live);

    machine.process_event(GuidanceEvent::Panic);

    assert_eq!(actions.try_recv().unwrap(), GuidanceAction::Shutdown);
}

#[tokio::test]
async fn channel_listener_feeds_async_consumer() {
    let machine = Arc::new(GuidanceStateMachine::new());
    let (listener, mut actions) = ChannelListener::channel();
    machine.register_state_change_listener(listener.clone());

    let consumer = tokio::spawn(async move {
        let mut received = Vec::new();
        while let Some(action) = actions.recv().await {
            received.push(action);
            if action == GuidanceAction::Shutdown {
                break;
            }
        }
        received
    });

    let producer = Arc::clone(&machine);
    tokio::task::spawn_blocking(move || {
        producer.process_event(GuidanceEvent::FoundDrivers);
        producer.process_event(GuidanceEvent::ActivateRoute);
        producer.process_event(GuidanceEvent::Panic);
    })
    .await
    .unwrap();

    assert!(machine.unregister_state_change_listener(&listener));
    assert_eq!(
        consumer.await.unwrap(),
        vec![
            GuidanceAction::Initialize,
            GuidanceAction::Activate,
            GuidanceAction::Shutdown,
        ]
    );
}
