//! The guidance transition table.
//!
//! [`transition`] is the single authoritative mapping from
//! `(state, event)` to `(state, action)`. Everything else in the crate,
//! including [`transition_table`], is derived from it.

use super::event::{GuidanceAction, GuidanceEvent};
use super::state::GuidanceState;
use serde::{Deserialize, Serialize};

/// A committed move from one state to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    /// The state being transitioned from
    pub from: GuidanceState,
    /// The event that caused the transition
    pub event: GuidanceEvent,
    /// The state being transitioned to
    pub to: GuidanceState,
    /// The action emitted to listeners
    pub action: GuidanceAction,
}

impl Transition {
    /// Resolve `event` against `from` using the transition table.
    ///
    /// Returns `None` when no transition is defined for the pair.
    pub fn resolve(from: GuidanceState, event: GuidanceEvent) -> Option<Self> {
        transition(from, event).map(|(to, action)| Self {
            from,
            event,
            to,
            action,
        })
    }
}

/// Look up the transition defined for `(state, event)`.
///
/// # Example
///
/// ```rust
/// use guidance_state::core::{transition, GuidanceAction, GuidanceEvent, GuidanceState};
///
/// assert_eq!(
///     transition(GuidanceState::Startup, GuidanceEvent::FoundDrivers),
///     Some((GuidanceState::DriversReady, GuidanceAction::Initialize))
/// );
/// assert_eq!(transition(GuidanceState::Shutdown, GuidanceEvent::Panic), None);
/// ```
pub fn transition(
    state: GuidanceState,
    event: GuidanceEvent,
) -> Option<(GuidanceState, GuidanceAction)> {
    use GuidanceAction as A;
    use GuidanceEvent as E;
    use GuidanceState as S;

    match (state, event) {
        (S::Startup, E::FoundDrivers) => Some((S::DriversReady, A::Initialize)),
        (S::DriversReady, E::ActivateRoute) => Some((S::Active, A::Activate)),
        (S::Active, E::StartRoute) => Some((S::Engaged, A::Engage)),
        (S::Active, E::LeftRoute | E::Disengage) => Some((S::DriversReady, A::Restart)),
        (S::Engaged, E::FinishRoute | E::LeftRoute | E::Disengage) => {
            Some((S::DriversReady, A::Restart))
        }
        (S::Startup | S::DriversReady | S::Active | S::Engaged, E::Panic) => {
            Some((S::Shutdown, A::Shutdown))
        }
        (S::Startup | S::DriversReady | S::Active | S::Engaged, _) => None,
        // Shutdown is absorbing.
        (S::Shutdown, _) => None,
    }
}

/// Every defined transition, ordered by source state then event.
pub fn transition_table() -> Vec<Transition> {
    GuidanceState::ALL
        .iter()
        .flat_map(|&from| {
            GuidanceEvent::ALL
                .iter()
                .filter_map(move |&event| Transition::resolve(from, event))
        })
        .collect()
}
