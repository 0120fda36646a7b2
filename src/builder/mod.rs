//! Builder API for automaton construction.
//!
//! This module provides a fluent builder and a state-declaration macro for
//! creating validated automaton tables with minimal boilerplate.

pub mod dfa;
pub mod error;
pub mod macros;

pub use dfa::DfaBuilder;
pub use error::BuildError;
