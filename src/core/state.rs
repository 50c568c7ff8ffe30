//! Named states with entry and exit hooks.

use crate::core::callback::Action;
use crate::core::error::MachineError;
use crate::core::host::Receiver;
use std::fmt;

/// A named condition a host object can be in.
///
/// A state carries no behavior of its own beyond invoking its optional
/// entry/exit actions; both hooks are no-ops when absent.
///
/// # Example
///
/// ```rust
/// use statecraft::{Action, Receiver, State};
///
/// struct Lamp {
///     watts: u32,
/// }
///
/// impl Receiver for Lamp {}
///
/// let lit = State::named("lit").on_enter(Action::new(|l: &mut Lamp| l.watts = 60));
///
/// let mut lamp = Lamp { watts: 0 };
/// lit.enter(&mut lamp).unwrap();
/// assert_eq!(lamp.watts, 60);
/// ```
pub struct State<H> {
    name: String,
    on_enter: Option<Action<H>>,
    on_leave: Option<Action<H>>,
}

impl<H> State<H> {
    /// Create a state with the given name and no hooks.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_enter: None,
            on_leave: None,
        }
    }

    /// Attach an entry action, run when a host transitions into this state.
    pub fn on_enter(mut self, action: Action<H>) -> Self {
        self.on_enter = Some(action);
        self
    }

    /// Attach an exit action, run when a host transitions out of this state.
    pub fn on_leave(mut self, action: Action<H>) -> Self {
        self.on_leave = Some(action);
        self
    }

    /// The state's name, unique within its machine.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<H: Receiver> State<H> {
    /// Run the entry hook, if any.
    pub fn enter(&self, host: &mut H) -> Result<(), MachineError> {
        match &self.on_enter {
            Some(action) => action.run(host),
            None => Ok(()),
        }
    }

    /// Run the exit hook, if any.
    pub fn leave(&self, host: &mut H) -> Result<(), MachineError> {
        match &self.on_leave {
            Some(action) => action.run(host),
            None => Ok(()),
        }
    }
}

impl<H> Clone for State<H> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            on_enter: self.on_enter.clone(),
            on_leave: self.on_leave.clone(),
        }
    }
}

impl<H> fmt::Debug for State<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Light {
        on: bool,
        toggles: u32,
    }

    impl Receiver for Light {
        fn invoke(&mut self, method: &str) -> Option<bool> {
            match method {
                "count_toggle" => {
                    self.toggles += 1;
                    Some(true)
                }
                _ => None,
            }
        }
    }

    #[test]
    fn hooks_are_optional_and_missing_hooks_are_no_ops() {
        let state: State<Light> = State::named("idle");
        let mut light = Light {
            on: false,
            toggles: 0,
        };

        assert_eq!(state.enter(&mut light), Ok(()));
        assert_eq!(state.leave(&mut light), Ok(()));
        assert!(!light.on);
        assert_eq!(light.toggles, 0);
    }

    #[test]
    fn enter_runs_the_entry_action() {
        let state = State::named("on").on_enter(Action::new(|l: &mut Light| l.on = true));
        let mut light = Light {
            on: false,
            toggles: 0,
        };

        state.enter(&mut light).unwrap();
        assert!(light.on);
    }

    #[test]
    fn leave_runs_the_exit_action() {
        let state = State::named("on").on_leave(Action::new(|l: &mut Light| l.on = false));
        let mut light = Light {
            on: true,
            toggles: 0,
        };

        state.leave(&mut light).unwrap();
        assert!(!light.on);
    }

    #[test]
    fn named_method_hooks_resolve_through_receiver() {
        let state: State<Light> = State::named("on").on_enter(Action::method("count_toggle"));
        let mut light = Light {
            on: false,
            toggles: 0,
        };

        state.enter(&mut light).unwrap();
        state.enter(&mut light).unwrap();
        assert_eq!(light.toggles, 2);
    }

    #[test]
    fn unknown_hook_method_surfaces_at_invocation() {
        let state: State<Light> = State::named("on").on_enter(Action::method("missing"));
        let mut light = Light {
            on: false,
            toggles: 0,
        };

        assert_eq!(
            state.enter(&mut light),
            Err(MachineError::UnknownCallback {
                method: "missing".to_string()
            })
        );
    }
}
