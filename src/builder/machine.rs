//! Builder for constructing machines.

use crate::core::{Event, Machine, State};

/// Builder for assembling a machine definition from states and events.
///
/// Nothing is cross-validated eagerly: a transition may target a state that
/// is never registered, and the mistake surfaces as an
/// [`InvalidDestination`](crate::MachineError::InvalidDestination) error on
/// the dispatch that selects it. This mirrors the lazy resolution of the
/// initial state, which defaults to the first state registered.
///
/// # Example
///
/// ```rust
/// use statecraft::{EventBuilder, MachineBuilder, Receiver, State, TransitionBuilder};
///
/// struct Ticket;
///
/// impl Receiver for Ticket {}
///
/// let machine = MachineBuilder::<Ticket>::new()
///     .initial("open")
///     .state(State::named("open"))
///     .state(State::named("closed"))
///     .event(
///         EventBuilder::named("resolve")
///             .transition(TransitionBuilder::new().from(["open"]).to("closed"))?
///             .build(),
///     )
///     .build();
///
/// assert_eq!(machine.initial_state(), Some("open"));
/// # Ok::<(), statecraft::BuildError>(())
/// ```
pub struct MachineBuilder<H> {
    initial: Option<String>,
    states: Vec<State<H>>,
    events: Vec<Event<H>>,
}

impl<H> MachineBuilder<H> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Configure the initial state explicitly (optional; defaults to the
    /// first registered state).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Add a state.
    pub fn state(mut self, state: State<H>) -> Self {
        self.states.push(state);
        self
    }

    /// Add an event.
    pub fn event(mut self, event: Event<H>) -> Self {
        self.events.push(event);
        self
    }

    /// Assemble the machine.
    pub fn build(self) -> Machine<H> {
        let mut machine = Machine::new();
        for state in self.states {
            machine.register_state(state);
        }
        for event in self.events {
            machine.register_event(event);
        }
        if let Some(initial) = self.initial {
            machine.set_initial(initial);
        }
        machine
    }
}

impl<H> Default for MachineBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}
