//! Named events owning per-source candidate transition lists.

use crate::core::error::MachineError;
use crate::core::host::Receiver;
use crate::core::transition::Transition;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A named stimulus that may cause a state transition.
///
/// An event owns its candidate transitions, indexed by source state name.
/// Registration order per source is preserved and is the authoritative
/// evaluation order: during dispatch the first candidate whose guard passes
/// wins, and later candidates are never evaluated.
pub struct Event<H> {
    name: String,
    by_source: HashMap<String, Vec<Arc<Transition<H>>>>,
}

impl<H> Event<H> {
    /// Create an event with the given name and no transitions.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            by_source: HashMap::new(),
        }
    }

    /// The event's name, unique within its machine.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index a transition under every source state it leaves from.
    ///
    /// A transition with several sources stays a single shared instance; its
    /// callbacks are not duplicated.
    pub fn register_transition(&mut self, transition: Transition<H>) {
        let shared = Arc::new(transition);
        for source in shared.sources() {
            self.by_source
                .entry(source.clone())
                .or_default()
                .push(Arc::clone(&shared));
        }
    }

    /// Whether any transitions are registered for the given source state.
    pub fn handles(&self, state: &str) -> bool {
        self.by_source.contains_key(state)
    }
}

impl<H: Receiver> Event<H> {
    /// Resolve this event against the host's current state.
    ///
    /// Fails with [`MachineError::UnhandledState`] when no transitions are
    /// registered for `current` at all — a configuration error. Otherwise
    /// tries the candidates in registration order and short-circuits on the
    /// first match; `Ok(None)` means every guard rejected, which is a
    /// legitimate no-op.
    pub fn dispatch(&self, host: &mut H, current: &str) -> Result<Option<&str>, MachineError> {
        let candidates =
            self.by_source
                .get(current)
                .ok_or_else(|| MachineError::UnhandledState {
                    event: self.name.clone(),
                    state: current.to_string(),
                })?;
        for transition in candidates {
            if let Some(destination) = transition.try_handle(host)? {
                return Ok(Some(destination));
            }
        }
        Ok(None)
    }
}

impl<H> Clone for Event<H> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            by_source: self.by_source.clone(),
        }
    }
}

impl<H> fmt::Debug for Event<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("sources", &self.by_source.keys().collect::<Vec<_>>())
            .finish()
    }
}
