//! Build errors for automaton tables.

use thiserror::Error;

/// Errors that can occur when building a [`Dfa`](crate::core::Dfa).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Non-accepting state '{state}' has no outgoing transition")]
    DeadEnd { state: String },

    #[error("Labels '{first}' and '{second}' leaving state '{state}' overlap")]
    OverlappingLabels {
        state: String,
        first: String,
        second: String,
    },
}
