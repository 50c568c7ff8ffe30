//! Guarded edges between states.

use crate::core::callback::{Action, Guard};
use crate::core::error::MachineError;
use crate::core::host::Receiver;
use std::fmt;

/// An edge from one or more source states to exactly one destination state,
/// gated by an optional guard and followed by an optional action.
///
/// Transitions are constructed through
/// [`TransitionBuilder`](crate::builder::TransitionBuilder), which rejects
/// missing endpoints at build time. Everything else about a transition is
/// validated lazily, when it is selected during a dispatch.
pub struct Transition<H> {
    from: Vec<String>,
    to: String,
    guard: Option<Guard<H>>,
    action: Option<Action<H>>,
}

impl<H> Transition<H> {
    /// Endpoint validation happens in the builder; this constructor trusts
    /// its inputs.
    pub(crate) fn new(
        from: Vec<String>,
        to: String,
        guard: Option<Guard<H>>,
        action: Option<Action<H>>,
    ) -> Self {
        Self {
            from,
            to,
            guard,
            action,
        }
    }

    /// The source state names this transition leaves from.
    pub fn sources(&self) -> &[String] {
        &self.from
    }

    /// The destination state name.
    pub fn destination(&self) -> &str {
        &self.to
    }
}

impl<H: Receiver> Transition<H> {
    /// Evaluate the guard and, if it passes, run the action and yield the
    /// destination state name.
    ///
    /// `Ok(None)` means the guard rejected: "no match", distinct from an
    /// error. The action only runs on a match.
    pub fn try_handle(&self, host: &mut H) -> Result<Option<&str>, MachineError> {
        let allowed = match &self.guard {
            Some(guard) => guard.check(host)?,
            None => true,
        };
        if !allowed {
            return Ok(None);
        }
        if let Some(action) = &self.action {
            action.run(host)?;
        }
        Ok(Some(&self.to))
    }
}

impl<H> Clone for Transition<H> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            guard: self.guard.clone(),
            action: self.action.clone(),
        }
    }
}

impl<H> fmt::Debug for Transition<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("guard", &self.guard.is_some())
            .field("action", &self.action.is_some())
            .finish()
    }
}
