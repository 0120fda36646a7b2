//! Labeled transition edges.

use super::label::Label;
use super::state::State;
use serde::{Deserialize, Serialize};

/// Edge of the transition table.
///
/// # Example
///
/// ```rust
/// use currency_dfa::core::{Label, Transition};
/// use currency_dfa::currency::CurrencyState;
///
/// let edge = Transition::new(CurrencyState::Q0, CurrencyState::Q1, '$');
///
/// assert!(edge.accepts(CurrencyState::Q0, '$'));
/// assert!(!edge.accepts(CurrencyState::Q1, '$'));
/// assert_eq!(edge.label, Label::Literal('$'));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    /// The state the edge leaves
    pub from: S,
    /// The state the edge enters
    pub to: S,
    /// Which characters trigger the edge
    pub label: Label,
}

impl<S: State> Transition<S> {
    pub fn new(from: S, to: S, label: impl Into<Label>) -> Self {
        Self {
            from,
            to,
            label: label.into(),
        }
    }

    /// Check if this edge leaves `state` on `ch` (pure).
    pub fn accepts(&self, state: S, ch: char) -> bool {
        self.from == state && self.label.matches(ch)
    }
}
