//! State change listeners.

use crate::core::GuidanceAction;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Errors a listener may report back to the state machine.
///
/// The machine logs these and carries on notifying the remaining listeners.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListenerError {
    #[error("Listener failed: {0}")]
    Failed(String),

    #[error("Listener channel is disconnected")]
    Disconnected,
}

/// Collaborator notified whenever the guidance state changes.
///
/// Called synchronously on the thread that processed the event, once per
/// committed transition. Implementations should return quickly: a blocking
/// listener stalls the caller of
/// [`process_event`](super::GuidanceStateMachine::process_event).
pub trait StateChangeListener: Send + Sync {
    fn on_state_change(&self, action: GuidanceAction) -> Result<(), ListenerError>;
}

/// Shared handle to a registered listener.
///
/// Handles are compared by pointer identity when unregistering.
pub type ListenerHandle = Arc<dyn StateChangeListener>;

/// Listener backed by a closure. See [`listener_fn`].
pub struct FnListener<F> {
    f: F,
}

impl<F> StateChangeListener for FnListener<F>
where
    F: Fn(GuidanceAction) + Send + Sync,
{
    fn on_state_change(&self, action: GuidanceAction) -> Result<(), ListenerError> {
        (self.f)(action);
        Ok(())
    }
}

impl<F> fmt::Debug for FnListener<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnListener").finish_non_exhaustive()
    }
}

/// Wrap a closure as a listener handle.
///
/// # Example
///
/// ```rust
/// use guidance_state::machine::{listener_fn, GuidanceStateMachine};
///
/// let machine = GuidanceStateMachine::new();
/// machine.register_state_change_listener(listener_fn(|action| {
///     println!("guidance action: {action}");
/// }));
/// ```
pub fn listener_fn<F>(f: F) -> ListenerHandle
where
    F: Fn(GuidanceAction) + Send + Sync + 'static,
{
    Arc::new(FnListener { f })
}

/// Listener that forwards every action onto an unbounded channel.
///
/// Sending never blocks, so the consumer runs on its own task and cannot
/// stall event processing.
#[derive(Debug, Clone)]
pub struct ChannelListener {
    sender: UnboundedSender<GuidanceAction>,
}

impl ChannelListener {
    pub fn new(sender: UnboundedSender<GuidanceAction>) -> Self {
        Self { sender }
    }

    /// Create a listener together with the receiving end of its channel.
    pub fn channel() -> (Arc<Self>, UnboundedReceiver<GuidanceAction>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Arc::new(Self::new(sender)), receiver)
    }
}

impl StateChangeListener for ChannelListener {
    fn on_state_change(&self, action: GuidanceAction) -> Result<(), ListenerError> {
        self.sender
            .send(action)
            .map_err(|_| ListenerError::Disconnected)
    }
}
