//! Dispatch and configuration errors.

use thiserror::Error;

/// Errors surfaced while resolving or applying an event.
///
/// Construction-time problems (missing transition endpoints) are reported as
/// [`BuildError`](crate::builder::BuildError). Everything here is deferred:
/// it surfaces at the dispatch that first trips over it, never earlier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MachineError {
    /// No states registered; an initial state cannot be resolved.
    #[error("no states registered, cannot resolve an initial state")]
    NoInitialState,

    /// The fired event name is not registered on the machine.
    #[error("unknown event '{event}'")]
    UnknownEvent { event: String },

    /// The event defines no transitions at all for the host's current state.
    ///
    /// Distinct from "defines transitions but every guard rejected", which is
    /// a legitimate no-op and not an error.
    #[error("event '{event}' defines no transitions for state '{state}'")]
    UnhandledState { event: String, state: String },

    /// A selected transition targets a state that was never registered.
    #[error("transition targets unregistered state '{state}'")]
    InvalidDestination { state: String },

    /// The host's current state has no registered `State` to leave.
    #[error("current state '{state}' is not registered")]
    UnregisteredState { state: String },

    /// A named callback method the host's `Receiver` does not recognize.
    #[error("host does not recognize callback method '{method}'")]
    UnknownCallback { method: String },
}
