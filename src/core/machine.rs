//! The machine: state/event registries and the dispatch algorithm.

use crate::core::error::MachineError;
use crate::core::event::Event;
use crate::core::host::Receiver;
use crate::core::state::State;
use std::collections::HashMap;

/// One FSM definition: the full state and event registries plus the dispatch
/// algorithm a host invokes on each event occurrence.
///
/// A machine holds no per-host state. Current state lives on the host (see
/// [`StateSlot`](crate::StateSlot)) or wherever the caller keeps it, so one
/// machine definition can serve many concurrently active hosts. Build it
/// once, treat it as read-only afterwards.
///
/// # Example
///
/// ```rust
/// use statecraft::{EventBuilder, MachineBuilder, Receiver, State, TransitionBuilder};
///
/// struct Door;
///
/// impl Receiver for Door {}
///
/// let machine = MachineBuilder::new()
///     .state(State::named("closed"))
///     .state(State::named("open"))
///     .event(
///         EventBuilder::named("toggle")
///             .transition(TransitionBuilder::new().from(["closed"]).to("open"))?
///             .transition(TransitionBuilder::new().from(["open"]).to("closed"))?
///             .build(),
///     )
///     .build();
///
/// let mut door = Door;
/// assert_eq!(machine.update(&mut door, "closed", "toggle")?, "open");
/// assert_eq!(machine.update(&mut door, "open", "toggle")?, "closed");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Machine<H> {
    states: HashMap<String, State<H>>,
    events: HashMap<String, Event<H>>,
    initial: Option<String>,
    state_order: Vec<String>,
}

impl<H> Machine<H> {
    /// Create an empty machine.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            events: HashMap::new(),
            initial: None,
            state_order: Vec::new(),
        }
    }

    /// Register a state. The last registration for a given name wins, and a
    /// re-registration keeps the name's original position in registration
    /// order.
    pub fn register_state(&mut self, state: State<H>) {
        let name = state.name().to_string();
        if !self.states.contains_key(&name) {
            self.state_order.push(name.clone());
        }
        self.states.insert(name, state);
    }

    /// Register an event. The last registration for a given name wins.
    pub fn register_event(&mut self, event: Event<H>) {
        self.events.insert(event.name().to_string(), event);
    }

    /// Configure the initial state explicitly.
    pub fn set_initial(&mut self, name: impl Into<String>) {
        self.initial = Some(name.into());
    }

    /// The configured initial state, or the first registered state, or
    /// `None` when no states are registered. The `None` case surfaces as
    /// [`MachineError::NoInitialState`] on first use, not here.
    pub fn initial_state(&self) -> Option<&str> {
        self.initial
            .as_deref()
            .or_else(|| self.state_order.first().map(String::as_str))
    }

    /// Look up a registered state by name.
    pub fn state(&self, name: &str) -> Option<&State<H>> {
        self.states.get(name)
    }

    /// Look up a registered event by name.
    pub fn event(&self, name: &str) -> Option<&Event<H>> {
        self.events.get(name)
    }
}

impl<H: Receiver> Machine<H> {
    /// Resolve an event occurrence against the host's current state and
    /// return the new current state name.
    ///
    /// The dispatch algorithm:
    ///
    /// 1. Look up the event ([`MachineError::UnknownEvent`] if absent) and
    ///    delegate to its [`dispatch`](Event::dispatch), which picks the
    ///    first candidate transition whose guard passes and runs its action.
    /// 2. On a match, verify both endpoints are registered states
    ///    ([`MachineError::InvalidDestination`] /
    ///    [`MachineError::UnregisteredState`]) before any hook runs, then
    ///    run the current state's exit hook followed by the destination's
    ///    entry hook, and return the destination name.
    /// 3. On no match, return `current` unchanged; no hooks fire.
    ///
    /// A dispatch therefore either fully resolves — action and both hooks
    /// run, new name returned — or changes nothing.
    pub fn update(&self, host: &mut H, current: &str, event: &str) -> Result<String, MachineError> {
        let resolved = self
            .events
            .get(event)
            .ok_or_else(|| MachineError::UnknownEvent {
                event: event.to_string(),
            })?;

        let Some(destination) = resolved.dispatch(host, current)? else {
            tracing::trace!(event, state = current, "no transition matched");
            return Ok(current.to_string());
        };

        let entered = self
            .states
            .get(destination)
            .ok_or_else(|| MachineError::InvalidDestination {
                state: destination.to_string(),
            })?;
        let left = self
            .states
            .get(current)
            .ok_or_else(|| MachineError::UnregisteredState {
                state: current.to_string(),
            })?;

        left.leave(host)?;
        entered.enter(host)?;
        tracing::debug!(event, from = current, to = destination, "transition applied");
        Ok(destination.to_string())
    }
}

impl<H> Default for Machine<H> {
    fn default() -> Self {
        Self::new()
    }
}
