//! The guidance state machine.

use crate::builder::{GuidanceConfig, GuidanceStateMachineBuilder, UnhandledEventLog};
use crate::core::{GuidanceAction, GuidanceEvent, GuidanceState, Transition, TransitionHistory};
use crate::machine::listener::{ListenerHandle, StateChangeListener};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, error, warn};
use uuid::Uuid;

/// Authoritative tracker of the guidance operating state.
///
/// One instance lives for the lifetime of the guidance module and is shared
/// by reference (usually behind an [`Arc`]) with every collaborator that
/// needs to read the state or feed it events.
///
/// Transitions are linearizable: reading the current state, consulting the
/// table and committing the new state happen under one per-instance lock.
/// Listeners are notified after that lock is released, from a snapshot of
/// the registry taken when the transition committed.
pub struct GuidanceStateMachine {
    id: Uuid,
    current: AtomicU8,
    commit: Mutex<TransitionHistory>,
    listeners: RwLock<Vec<ListenerHandle>>,
    unhandled_event_log: UnhandledEventLog,
}

impl GuidanceStateMachine {
    /// Create a machine in `STARTUP` with the default configuration.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> GuidanceStateMachineBuilder {
        GuidanceStateMachineBuilder::new()
    }

    pub(crate) fn from_parts(config: GuidanceConfig, listeners: Vec<ListenerHandle>) -> Self {
        Self {
            id: Uuid::new_v4(),
            current: AtomicU8::new(GuidanceState::Startup.index()),
            commit: Mutex::new(TransitionHistory::with_capacity(config.history_capacity)),
            listeners: RwLock::new(listeners),
            unhandled_event_log: config.unhandled_event_log,
        }
    }

    /// Identifier of this instance, attached to every log line.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current state.
    ///
    /// A single atomic load; never waits for an in-flight transition.
    pub fn state(&self) -> GuidanceState {
        // Only indices produced by `GuidanceState::index` are ever stored.
        GuidanceState::from_index(self.current.load(Ordering::Acquire))
            .unwrap_or(GuidanceState::Shutdown)
    }

    /// Apply `event` to the current state.
    ///
    /// If a transition is defined it is committed and every listener
    /// registered at that moment is notified with its action. Otherwise the
    /// event is ignored. Returns the committed transition, if any.
    pub fn process_event(&self, event: GuidanceEvent) -> Option<Transition> {
        let (committed, snapshot) = {
            let mut history = lock(&self.commit);
            let from = self.state();
            debug!(machine = %self.id, %event, state = %from, "Guidance state machine received event");

            match Transition::resolve(from, event) {
                Some(transition) => {
                    self.current.store(transition.to.index(), Ordering::Release);
                    history.record(transition);
                    (Some(transition), read(&self.listeners).clone())
                }
                None => {
                    if from.is_final() || self.unhandled_event_log == UnhandledEventLog::Always {
                        warn!(machine = %self.id, %event, state = %from, "Guidance state machine takes no action on event");
                    }
                    (None, Vec::new())
                }
            }
        };

        match committed {
            Some(transition) => {
                debug!(
                    machine = %self.id,
                    state = %transition.to,
                    action = %transition.action,
                    "Guidance transitioned to new state"
                );
                self.notify(transition.action, &snapshot);
            }
            None => debug!(machine = %self.id, %event, "Guidance did not change state"),
        }

        committed
    }

    /// Register a listener. The same handle may be registered more than
    /// once and is then notified once per registration.
    pub fn register_state_change_listener(&self, listener: ListenerHandle) {
        write(&self.listeners).push(listener);
    }

    /// Remove the first registration of `listener`.
    ///
    /// Returns `false` if it was not registered.
    pub fn unregister_state_change_listener<L>(&self, listener: &Arc<L>) -> bool
    where
        L: StateChangeListener + ?Sized,
    {
        let target = Arc::as_ptr(listener).cast::<()>();
        let mut listeners = write(&self.listeners);
        match listeners
            .iter()
            .position(|registered| Arc::as_ptr(registered).cast::<()>() == target)
        {
            Some(index) => {
                listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn listener_count(&self) -> usize {
        read(&self.listeners).len()
    }

    /// Copy of the committed transition history.
    pub fn history(&self) -> TransitionHistory {
        lock(&self.commit).clone()
    }

    fn notify(&self, action: GuidanceAction, listeners: &[ListenerHandle]) {
        for listener in listeners {
            match panic::catch_unwind(AssertUnwindSafe(|| listener.on_state_change(action))) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    warn!(machine = %self.id, %action, error = %err, "State change listener failed");
                }
                Err(payload) => {
                    error!(
                        machine = %self.id,
                        %action,
                        panic = panic_message(&*payload),
                        "State change listener panicked"
                    );
                }
            }
        }
    }
}

impl Default for GuidanceStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GuidanceStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuidanceStateMachine")
            .field("id", &self.id)
            .field("state", &self.state())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

// The guarded data is never left half-updated, so a poisoned lock is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}
