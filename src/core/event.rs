//! Inbound guidance events and outbound guidance actions.

use crate::guidance_enum;

guidance_enum! {
    /// External stimulus proposing a state change.
    ///
    /// The machine does not judge whether an event makes sense, only whether
    /// a transition is defined for it in the current state.
    pub enum GuidanceEvent {
        FoundDrivers => "FOUND_DRIVERS",
        ActivateRoute => "ACTIVATE_ROUTE",
        StartRoute => "START_ROUTE",
        LeftRoute => "LEFT_ROUTE",
        FinishRoute => "FINISH_ROUTE",
        Disengage => "DISENGAGE",
        /// Shuts guidance down from any non-terminal state.
        Panic => "PANIC",
    }
    unknown: UnknownEvent
}

guidance_enum! {
    /// Directive emitted to listeners when a transition commits.
    pub enum GuidanceAction {
        Initialize => "INITIALIZE",
        Activate => "ACTIVATE",
        Engage => "ENGAGE",
        Restart => "RESTART",
        Shutdown => "SHUTDOWN",
    }
    unknown: UnknownAction
}
