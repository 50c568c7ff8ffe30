//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders for declaring machines, events and
//! transitions, plus the [`host_methods!`](crate::host_methods) macro for
//! wiring named callbacks to a host type. The builders replace the nested
//! declaration blocks of configuration-DSL state machines: transitions are
//! accumulated on an [`EventBuilder`], events and states on a
//! [`MachineBuilder`], and each level finalizes into an immutable value.

pub mod error;
pub mod event;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use event::EventBuilder;
pub use machine::MachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::Transition;

/// Create an unguarded transition with no action.
pub fn simple_transition<H>(from: &str, to: &str) -> Transition<H> {
    TransitionBuilder::new()
        .from([from])
        .to(to)
        .build()
        .expect("endpoints are supplied")
}

/// Create a transition gated by an inline predicate, with no action.
pub fn guarded_transition<H, F>(from: &str, to: &str, guard: F) -> Transition<H>
where
    F: Fn(&mut H) -> bool + Send + Sync + 'static,
{
    TransitionBuilder::new()
        .from([from])
        .to(to)
        .when(guard)
        .build()
        .expect("endpoints are supplied")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Receiver;

    struct Gate {
        open: bool,
    }

    impl Receiver for Gate {}

    #[test]
    fn simple_transition_always_matches() {
        let transition = simple_transition::<Gate>("a", "b");
        let mut gate = Gate { open: false };

        assert_eq!(transition.sources(), ["a"]);
        assert_eq!(transition.try_handle(&mut gate), Ok(Some("b")));
    }

    #[test]
    fn guarded_transition_respects_its_predicate() {
        let transition = guarded_transition("a", "b", |g: &mut Gate| g.open);

        let mut gate = Gate { open: false };
        assert_eq!(transition.try_handle(&mut gate), Ok(None));

        gate.open = true;
        assert_eq!(transition.try_handle(&mut gate), Ok(Some("b")));
    }
}
