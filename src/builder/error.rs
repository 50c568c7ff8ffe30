//! Build errors for transition construction.

use thiserror::Error;

/// Errors that can occur when building a transition.
///
/// A transition demands at least one source state and a destination state;
/// a builder missing either fails at `build()`, aborting machine setup when
/// the result is propagated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("transition source states not specified. Call .from(states)")]
    MissingFromState,

    #[error("transition destination state not specified. Call .to(state)")]
    MissingToState,
}
