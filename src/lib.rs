//! currency-dfa: a small currency-string automaton and random string generator
//!
//! The automaton recognizes dollar amounts (`$10`, `$0.34`) and cent amounts
//! (`7c`, `42c`). Strings are generated by random walks from the start state,
//! and the table can be drawn with Graphviz.
//!
//! # Core Concepts
//!
//! - **State**: closed state enumerations via the `State` trait and `dfa_states!`
//! - **Dfa**: an immutable, validated transition table built with `DfaBuilder`
//! - **RandomWalker**: walks the table, drawing decisions from a `ChoiceSource`
//! - **Rendering**: DOT output and Graphviz invocation
//!
//! # Example
//!
//! ```rust
//! use currency_dfa::currency::currency_dfa;
//! use currency_dfa::generator::{is_well_formed, RandomWalker, RngChoices};
//!
//! let dfa = currency_dfa();
//! let mut walker = RandomWalker::new(RngChoices::seeded(42));
//!
//! let amount = walker.generate(&dfa);
//! assert!(amount.starts_with('$') || amount.ends_with('c'));
//! assert!(is_well_formed(&amount));
//! ```

pub mod builder;
pub mod core;
pub mod currency;
pub mod generator;
pub mod render;

// Re-export commonly used types
pub use crate::builder::{BuildError, DfaBuilder};
pub use crate::core::{Dfa, DigitClass, GenerationPath, Label, State, Step, Transition};
pub use crate::currency::{currency_dfa, CurrencyState};
pub use crate::generator::{ChoiceSource, RandomWalker, RngChoices, SampleConfig};
