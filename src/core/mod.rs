//! Core automaton types.
//!
//! This module contains the pure core of the crate:
//! - State definitions via the `State` trait
//! - Transition labels and edges
//! - The immutable `Dfa` table
//! - Generation path tracking
//!
//! Nothing in this module performs I/O or draws randomness.

mod dfa;
mod label;
mod path;
mod state;
mod transition;

pub use dfa::Dfa;
pub use label::{DigitClass, Label};
pub use path::{GenerationPath, Step};
pub use state::State;
pub use transition::Transition;
