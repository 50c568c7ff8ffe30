//! Statecraft: a finite-state-machine engine for host object lifecycles.
//!
//! A [`Machine`] is one FSM definition: a fixed set of named states, a fixed
//! set of named events, and a table of guarded transitions between states,
//! with entry/exit side effects on state change. The machine is attached to
//! an arbitrary host object, which keeps its own current state and exposes
//! the callbacks the definition refers to.
//!
//! # Core Concepts
//!
//! - **State**: a named node with optional entry/exit hooks
//! - **Event**: a named stimulus owning an ordered, per-source candidate
//!   list of transitions
//! - **Transition**: an edge from one or more source states to one
//!   destination, gated by an optional guard and followed by an optional
//!   action
//! - **Host**: the external object whose lifecycle the machine governs; it
//!   supplies current-state storage ([`StateSlot`]) and named-callback
//!   dispatch ([`Receiver`])
//!
//! The machine itself holds no per-host state, so one definition can drive
//! any number of hosts concurrently; dispatches against a single host must
//! be serialized by the caller.
//!
//! # Example
//!
//! ```rust
//! use statecraft::{
//!     host_methods, Action, EventBuilder, MachineBuilder, State, StateSlot, TransitionBuilder,
//! };
//!
//! struct Door {
//!     state: Option<String>,
//!     creaks: u32,
//! }
//!
//! impl Door {
//!     fn creak(&mut self) {
//!         self.creaks += 1;
//!     }
//! }
//!
//! host_methods! {
//!     impl Door {
//!         actions: [creak]
//!     }
//! }
//!
//! impl StateSlot for Door {
//!     fn state_slot(&mut self) -> &mut Option<String> {
//!         &mut self.state
//!     }
//! }
//!
//! let machine = MachineBuilder::new()
//!     .state(State::named("closed"))
//!     .state(State::named("open").on_enter(Action::method("creak")))
//!     .event(
//!         EventBuilder::named("toggle")
//!             .transition(TransitionBuilder::new().from(["closed"]).to("open"))?
//!             .transition(TransitionBuilder::new().from(["open"]).to("closed"))?
//!             .build(),
//!     )
//!     .build();
//!
//! let mut door = Door { state: None, creaks: 0 };
//! assert_eq!(machine.fire(&mut door, "toggle")?, "open");
//! assert!(machine.in_state(&mut door, "open")?);
//! assert_eq!(door.creaks, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use crate::core::{
    Action, Event, Guard, Machine, MachineError, Receiver, State, StateSlot, Transition,
    TransitionLog, TransitionRecord,
};
pub use builder::{BuildError, EventBuilder, MachineBuilder, TransitionBuilder};
