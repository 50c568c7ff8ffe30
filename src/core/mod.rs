//! Core state machine types and dispatch.
//!
//! This module holds the engine proper:
//! - named [`State`]s with entry/exit hooks
//! - guarded [`Transition`]s between them
//! - [`Event`]s owning per-source ordered candidate lists
//! - the [`Machine`] registries and dispatch algorithm
//! - the host collaborator contract ([`Receiver`], [`StateSlot`])
//! - a caller-owned [`TransitionLog`] audit trail
//!
//! Everything is synchronous; a dispatch is a single call with no suspension
//! points.

mod callback;
mod error;
mod event;
mod history;
mod host;
mod machine;
mod state;
mod transition;

pub use callback::{Action, Guard};
pub use error::MachineError;
pub use event::Event;
pub use history::{TransitionLog, TransitionRecord};
pub use host::{Receiver, StateSlot};
pub use machine::Machine;
pub use state::State;
pub use transition::Transition;
