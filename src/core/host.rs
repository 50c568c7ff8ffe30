//! The host collaborator contract.
//!
//! A machine governs the lifecycle of an external host object. The host
//! supplies two capabilities: a mutable slot holding its current state name
//! ([`StateSlot`]) and a way to invoke callbacks it exposes by name
//! ([`Receiver`]). In return the machine offers the three host-facing
//! operations [`current`](Machine::current), [`fire`](Machine::fire) and
//! [`in_state`](Machine::in_state).

use crate::core::error::MachineError;
use crate::core::machine::Machine;

/// Invocation seam for named-method callbacks.
///
/// Guards, actions and entry/exit hooks may be declared as method names
/// rather than closures. The engine resolves those names through this trait.
/// Predicate methods return their truth value; action methods report
/// `Some(true)`; `None` means the name is unknown and surfaces as an
/// [`UnknownCallback`](MachineError::UnknownCallback) error.
///
/// The [`host_methods!`](crate::host_methods) macro generates this
/// implementation from a list of method names. Hosts that only ever use
/// inline closures can take the default implementation, which knows no
/// names:
///
/// ```rust
/// use statecraft::Receiver;
///
/// struct Widget;
///
/// impl Receiver for Widget {}
/// ```
pub trait Receiver {
    /// Invoke a named callback method, or return `None` if the name is
    /// unknown.
    fn invoke(&mut self, method: &str) -> Option<bool> {
        let _ = method;
        None
    }
}

/// The mutable current-state storage a host supplies.
///
/// The slot starts out `None` and is lazily initialized to the machine's
/// initial state on first access through [`Machine::current`] or
/// [`Machine::fire`]. The engine assumes nothing beyond this accessor;
/// callers that prefer to keep state names in an external map can skip the
/// trait entirely and drive [`Machine::update`] directly.
pub trait StateSlot {
    /// The slot holding the current state name, `None` before first use.
    fn state_slot(&mut self) -> &mut Option<String>;
}

impl<H: Receiver + StateSlot> Machine<H> {
    /// The host's current state name, lazily initialized to
    /// [`initial_state`](Machine::initial_state).
    ///
    /// Fails with [`MachineError::NoInitialState`] if the machine has no
    /// registered states to initialize from.
    pub fn current(&self, host: &mut H) -> Result<String, MachineError> {
        if let Some(name) = host.state_slot() {
            return Ok(name.clone());
        }
        let initial = self
            .initial_state()
            .ok_or(MachineError::NoInitialState)?
            .to_string();
        *host.state_slot() = Some(initial.clone());
        Ok(initial)
    }

    /// Fire the named event against the host and store the resulting state.
    ///
    /// Resolves the current state, runs the dispatch algorithm
    /// ([`Machine::update`]) and writes the returned name back into the
    /// host's slot. On error the slot is left as it was, apart from lazy
    /// initialization.
    pub fn fire(&self, host: &mut H, event: &str) -> Result<String, MachineError> {
        let current = self.current(host)?;
        let next = self.update(host, &current, event)?;
        *host.state_slot() = Some(next.clone());
        Ok(next)
    }

    /// Whether the host's current state equals `name`.
    pub fn in_state(&self, host: &mut H, name: &str) -> Result<bool, MachineError> {
        Ok(self.current(host)? == name)
    }
}
