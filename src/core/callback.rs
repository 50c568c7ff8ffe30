//! Guard and action callbacks.
//!
//! Guards and actions come in exactly two shapes: a named method on the host,
//! resolved at invocation time through [`Receiver`], or an inline closure
//! taking the host as its sole argument. The closed enums make any other
//! callback shape unrepresentable.

use crate::core::error::MachineError;
use crate::core::host::Receiver;
use std::fmt;
use std::sync::Arc;

/// Predicate deciding whether a transition is eligible.
///
/// # Example
///
/// ```rust
/// use statecraft::{Guard, Receiver};
///
/// struct Account {
///     balance: i64,
/// }
///
/// impl Receiver for Account {}
///
/// let solvent = Guard::new(|a: &mut Account| a.balance > 0);
///
/// let mut account = Account { balance: 10 };
/// assert_eq!(solvent.check(&mut account), Ok(true));
/// ```
pub enum Guard<H> {
    /// A predicate method on the host, invoked by name with no arguments.
    Method(String),
    /// An inline predicate taking the host as its sole argument.
    Inline(Arc<dyn Fn(&mut H) -> bool + Send + Sync>),
}

impl<H> Guard<H> {
    /// Create a guard from an inline predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&mut H) -> bool + Send + Sync + 'static,
    {
        Guard::Inline(Arc::new(predicate))
    }

    /// Create a guard that calls the named predicate method on the host.
    ///
    /// The name is resolved through [`Receiver::invoke`] when the guard is
    /// first evaluated; an unknown name is an
    /// [`UnknownCallback`](MachineError::UnknownCallback) error at that point.
    pub fn method(name: impl Into<String>) -> Self {
        Guard::Method(name.into())
    }
}

impl<H: Receiver> Guard<H> {
    /// Evaluate the predicate against the host.
    pub fn check(&self, host: &mut H) -> Result<bool, MachineError> {
        match self {
            Guard::Method(name) => host.invoke(name).ok_or_else(|| MachineError::UnknownCallback {
                method: name.clone(),
            }),
            Guard::Inline(predicate) => Ok(predicate(host)),
        }
    }
}

impl<H> Clone for Guard<H> {
    fn clone(&self) -> Self {
        match self {
            Guard::Method(name) => Guard::Method(name.clone()),
            Guard::Inline(predicate) => Guard::Inline(Arc::clone(predicate)),
        }
    }
}

impl<H> fmt::Debug for Guard<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Guard::Method(name) => f.debug_tuple("Guard::Method").field(name).finish(),
            Guard::Inline(_) => f.write_str("Guard::Inline(..)"),
        }
    }
}

/// Side effect run when a transition is taken, or as a state's entry/exit
/// hook.
///
/// Same two shapes as [`Guard`]; named action methods report `Some(true)`
/// through [`Receiver::invoke`], and the reported value is ignored.
pub enum Action<H> {
    /// An action method on the host, invoked by name with no arguments.
    Method(String),
    /// An inline action taking the host as its sole argument.
    Inline(Arc<dyn Fn(&mut H) + Send + Sync>),
}

impl<H> Action<H> {
    /// Create an action from an inline closure.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn(&mut H) + Send + Sync + 'static,
    {
        Action::Inline(Arc::new(action))
    }

    /// Create an action that calls the named method on the host.
    pub fn method(name: impl Into<String>) -> Self {
        Action::Method(name.into())
    }
}

impl<H: Receiver> Action<H> {
    /// Run the action against the host.
    pub fn run(&self, host: &mut H) -> Result<(), MachineError> {
        match self {
            Action::Method(name) => match host.invoke(name) {
                Some(_) => Ok(()),
                None => Err(MachineError::UnknownCallback {
                    method: name.clone(),
                }),
            },
            Action::Inline(action) => {
                action(host);
                Ok(())
            }
        }
    }
}

impl<H> Clone for Action<H> {
    fn clone(&self) -> Self {
        match self {
            Action::Method(name) => Action::Method(name.clone()),
            Action::Inline(action) => Action::Inline(Arc::clone(action)),
        }
    }
}

impl<H> fmt::Debug for Action<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Method(name) => f.debug_tuple("Action::Method").field(name).finish(),
            Action::Inline(_) => f.write_str("Action::Inline(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        value: i64,
    }

    impl Counter {
        fn positive(&mut self) -> bool {
            self.value > 0
        }

        fn bump(&mut self) {
            self.value += 1;
        }
    }

    impl Receiver for Counter {
        fn invoke(&mut self, method: &str) -> Option<bool> {
            match method {
                "positive" => Some(self.positive()),
                "bump" => {
                    self.bump();
                    Some(true)
                }
                _ => None,
            }
        }
    }

    #[test]
    fn inline_guard_evaluates_predicate() {
        let guard = Guard::new(|c: &mut Counter| c.value > 5);
        let mut counter = Counter { value: 3 };

        assert_eq!(guard.check(&mut counter), Ok(false));
        counter.value = 10;
        assert_eq!(guard.check(&mut counter), Ok(true));
    }

    #[test]
    fn method_guard_resolves_through_receiver() {
        let guard = Guard::method("positive");
        let mut counter = Counter { value: 1 };

        assert_eq!(guard.check(&mut counter), Ok(true));
        counter.value = -1;
        assert_eq!(guard.check(&mut counter), Ok(false));
    }

    #[test]
    fn unknown_guard_method_is_an_error() {
        let guard = Guard::method("missing");
        let mut counter = Counter { value: 0 };

        assert_eq!(
            guard.check(&mut counter),
            Err(MachineError::UnknownCallback {
                method: "missing".to_string()
            })
        );
    }

    #[test]
    fn inline_action_mutates_host() {
        let action = Action::new(|c: &mut Counter| c.value *= 2);
        let mut counter = Counter { value: 4 };

        action.run(&mut counter).unwrap();
        assert_eq!(counter.value, 8);
    }

    #[test]
    fn method_action_resolves_through_receiver() {
        let action = Action::method("bump");
        let mut counter = Counter { value: 0 };

        action.run(&mut counter).unwrap();
        action.run(&mut counter).unwrap();
        assert_eq!(counter.value, 2);
    }

    #[test]
    fn unknown_action_method_is_an_error() {
        let action = Action::method("missing");
        let mut counter = Counter { value: 0 };

        assert_eq!(
            action.run(&mut counter),
            Err(MachineError::UnknownCallback {
                method: "missing".to_string()
            })
        );
    }

    #[test]
    fn callbacks_clone_shares_inline_closures() {
        let action = Action::new(|c: &mut Counter| c.value += 1);
        let cloned = action.clone();
        let mut counter = Counter { value: 0 };

        action.run(&mut counter).unwrap();
        cloned.run(&mut counter).unwrap();
        assert_eq!(counter.value, 2);
    }
}
