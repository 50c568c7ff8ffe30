//! Builder for constructing events.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, Transition};

/// Builder for constructing an event and its transition table.
///
/// Transitions are registered in the order they are added, and that order is
/// what dispatch evaluates per source state.
pub struct EventBuilder<H> {
    name: String,
    transitions: Vec<Transition<H>>,
}

impl<H> EventBuilder<H> {
    /// Create a builder for an event with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: Vec::new(),
        }
    }

    /// Build and add a transition. Returns an error if the builder fails
    /// endpoint validation.
    pub fn transition(mut self, builder: TransitionBuilder<H>) -> Result<Self, BuildError> {
        self.transitions.push(builder.build()?);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<H>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Finalize the event.
    pub fn build(self) -> Event<H> {
        let mut event = Event::named(self.name);
        for transition in self.transitions {
            event.register_transition(transition);
        }
        event
    }
}
