//! Random string generation.
//!
//! A [`RandomWalker`] draws decisions from an injected [`ChoiceSource`] and
//! follows a state's [`WalkPolicy`] until it halts. [`collect_samples`]
//! repeats walks and keeps the strings that pass [`is_well_formed`].

pub mod choice;
pub mod sample;
mod walker;

pub use choice::{ChoiceSource, RngChoices, ScriptedChoices};
pub use sample::{collect_samples, is_well_formed, SampleConfig, SampleError};
pub use walker::{Move, RandomWalker, WalkPolicy};
