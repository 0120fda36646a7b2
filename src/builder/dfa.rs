//! Builder for constructing automaton tables.

use crate::builder::error::BuildError;
use crate::core::{Dfa, Label, State, Transition};

/// Builder for constructing a [`Dfa`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use currency_dfa::builder::DfaBuilder;
/// use currency_dfa::core::DigitClass;
/// use currency_dfa::currency::CurrencyState::*;
///
/// let dfa = DfaBuilder::new()
///     .start(Q0)
///     .transition(Q0, Q7, DigitClass::NonZero)
///     .transition(Q7, Q8, 'c')
///     .transition(Q7, Q9, DigitClass::Any)
///     .transition(Q9, Q8, 'c')
///     .transition(Q0, Q1, '$')
///     .transition(Q1, Q2, '0')
///     .transition(Q1, Q3, DigitClass::NonZero)
///     .transition(Q2, Q4, '.')
///     .transition(Q4, Q5, DigitClass::Any)
///     .transition(Q5, Q6, DigitClass::Any)
///     .build();
///
/// assert!(dfa.is_ok());
/// ```
pub struct DfaBuilder<S: State> {
    start: Option<S>,
    transitions: Vec<Transition<S>>,
}

impl<S: State> DfaBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            start: None,
            transitions: Vec::new(),
        }
    }

    /// Set the start state (required).
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Add a labeled edge.
    pub fn transition(mut self, from: S, to: S, label: impl Into<Label>) -> Self {
        self.transitions.push(Transition::new(from, to, label));
        self
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the table.
    ///
    /// Returns an error if the start state is missing, no transitions were
    /// added, a non-accepting state has no way out, or two labels leaving the
    /// same state overlap.
    pub fn build(self) -> Result<Dfa<S>, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        for state in S::all() {
            let outgoing: Vec<_> = self
                .transitions
                .iter()
                .filter(|t| t.from == *state)
                .collect();

            if outgoing.is_empty() && !state.is_accepting() {
                return Err(BuildError::DeadEnd {
                    state: state.name().to_string(),
                });
            }

            for (i, first) in outgoing.iter().enumerate() {
                if let Some(second) = outgoing[i + 1..]
                    .iter()
                    .find(|t| t.label.overlaps(&first.label))
                {
                    return Err(BuildError::OverlappingLabels {
                        state: state.name().to_string(),
                        first: first.label.to_string(),
                        second: second.label.to_string(),
                    });
                }
            }
        }

        Ok(Dfa::from_parts(start, self.transitions))
    }
}

impl<S: State> Default for DfaBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
