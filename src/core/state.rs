//! Guidance operating states.

use crate::guidance_enum;

guidance_enum! {
    /// Operating mode of the guidance module.
    ///
    /// Exactly one state is current at any instant. [`Startup`](Self::Startup)
    /// is the initial state and [`Shutdown`](Self::Shutdown) is absorbing.
    #[derive(Default)]
    pub enum GuidanceState {
        /// Waiting for the vehicle drivers to report ready.
        #[default]
        Startup => "STARTUP",
        /// Drivers are ready; no route is active.
        DriversReady => "DRIVERS_READY",
        /// A route is active but the vehicle is not under automated control.
        Active => "ACTIVE",
        /// Guidance is engaged and controlling the vehicle.
        Engaged => "ENGAGED",
        /// Terminal state. Every event is ignored.
        Shutdown => "SHUTDOWN",
    }
    unknown: UnknownState
}

impl GuidanceState {
    /// Check if this is the terminal state.
    pub fn is_final(self) -> bool {
        matches!(self, Self::Shutdown)
    }
}
