//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, Guard, Transition};

/// Builder for constructing transitions with a fluent API.
///
/// # Example
///
/// ```rust
/// use statecraft::{Receiver, TransitionBuilder};
///
/// struct Job {
///     retries: u32,
/// }
///
/// impl Receiver for Job {}
///
/// let transition = TransitionBuilder::new()
///     .from(["queued", "failed"])
///     .to("running")
///     .when(|j: &mut Job| j.retries < 3)
///     .action(|j: &mut Job| j.retries += 1)
///     .build()?;
///
/// assert_eq!(transition.destination(), "running");
/// # Ok::<(), statecraft::BuildError>(())
/// ```
pub struct TransitionBuilder<H> {
    from: Vec<String>,
    to: Option<String>,
    guard: Option<Guard<H>>,
    action: Option<Action<H>>,
}

impl<H> TransitionBuilder<H> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: Vec::new(),
            to: None,
            guard: None,
            action: None,
        }
    }

    /// Add source states (required, at least one). Repeated calls
    /// accumulate.
    pub fn from<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.from.extend(sources.into_iter().map(Into::into));
        self
    }

    /// Set the destination state (required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Set the guard directly (optional).
    pub fn guard(mut self, guard: Guard<H>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Guard with an inline predicate (optional).
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&mut H) -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }

    /// Guard with a named predicate method on the host (optional).
    pub fn when_method(self, name: impl Into<String>) -> Self {
        self.guard(Guard::method(name))
    }

    /// Run an inline action when the transition is taken (optional).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut H) + Send + Sync + 'static,
    {
        self.action = Some(Action::new(action));
        self
    }

    /// Run a named action method on the host when the transition is taken
    /// (optional).
    pub fn action_method(mut self, name: impl Into<String>) -> Self {
        self.action = Some(Action::method(name));
        self
    }

    /// Build the transition, validating that both endpoints are present.
    pub fn build(self) -> Result<Transition<H>, BuildError> {
        if self.from.is_empty() {
            return Err(BuildError::MissingFromState);
        }
        let to = self.to.ok_or(BuildError::MissingToState)?;
        Ok(Transition::new(self.from, to, self.guard, self.action))
    }
}

impl<H> Default for TransitionBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Receiver;

    struct Widget {
        armed: bool,
    }

    impl Receiver for Widget {}

    #[test]
    fn builder_rejects_missing_sources() {
        let result = TransitionBuilder::<Widget>::new().to("done").build();
        assert_eq!(result.unwrap_err(), BuildError::MissingFromState);
    }

    #[test]
    fn builder_rejects_empty_source_iterator() {
        let result = TransitionBuilder::<Widget>::new()
            .from(Vec::<String>::new())
            .to("done")
            .build();
        assert_eq!(result.unwrap_err(), BuildError::MissingFromState);
    }

    #[test]
    fn builder_rejects_missing_destination() {
        let result = TransitionBuilder::<Widget>::new().from(["start"]).build();
        assert_eq!(result.unwrap_err(), BuildError::MissingToState);
    }

    #[test]
    fn repeated_from_calls_accumulate_sources() {
        let transition = TransitionBuilder::<Widget>::new()
            .from(["a"])
            .from(["b", "c"])
            .to("d")
            .build()
            .unwrap();

        assert_eq!(transition.sources(), ["a", "b", "c"]);
    }

    #[test]
    fn built_transition_respects_guard_and_action() {
        let transition = TransitionBuilder::new()
            .from(["idle"])
            .to("armed")
            .when(|w: &mut Widget| !w.armed)
            .action(|w: &mut Widget| w.armed = true)
            .build()
            .unwrap();

        let mut widget = Widget { armed: false };
        assert_eq!(transition.try_handle(&mut widget), Ok(Some("armed")));
        assert!(widget.armed);
        // Now armed, so the guard rejects.
        assert_eq!(transition.try_handle(&mut widget), Ok(None));
    }
}
