//! Generation path tracking.
//!
//! Records the steps one random walk takes through an automaton,
//! following the same immutable style as the rest of the core.

use super::state::State;
use serde::{Deserialize, Serialize};

/// Record of a single walk step.
///
/// A step with `emitted: None` is a silent move: the walker changed state
/// without appending a character.
///
/// # Example
///
/// ```rust
/// use currency_dfa::core::Step;
/// use currency_dfa::currency::CurrencyState;
///
/// let step = Step {
///     from: CurrencyState::Q0,
///     to: CurrencyState::Q1,
///     emitted: Some('$'),
/// };
/// assert!(!step.is_silent());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Step<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Character appended to the output, if any
    pub emitted: Option<char>,
}

impl<S: State> Step<S> {
    pub fn is_silent(&self) -> bool {
        self.emitted.is_none()
    }
}

/// Ordered sequence of steps produced by one walk.
///
/// The `record` method consumes the path and returns it with the step
/// appended, so a finished path is never modified behind its owner's back.
///
/// # Example
///
/// ```rust
/// use currency_dfa::core::{GenerationPath, Step};
/// use currency_dfa::currency::CurrencyState;
///
/// let path = GenerationPath::new()
///     .record(Step {
///         from: CurrencyState::Q0,
///         to: CurrencyState::Q7,
///         emitted: Some('7'),
///     })
///     .record(Step {
///         from: CurrencyState::Q7,
///         to: CurrencyState::Q8,
///         emitted: Some('c'),
///     });
///
/// assert_eq!(path.output(), "7c");
/// assert_eq!(path.get_path().len(), 3); // q0 -> q7 -> q8
/// assert_eq!(path.final_state(), Some(CurrencyState::Q8));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct GenerationPath<S: State> {
    steps: Vec<Step<S>>,
}

impl<S: State> Default for GenerationPath<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> GenerationPath<S> {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step, returning the extended path.
    pub fn record(mut self, step: Step<S>) -> Self {
        self.steps.push(step);
        self
    }

    /// Get the states traversed.
    ///
    /// Returns the initial state, then the `to` state of each step.
    pub fn get_path(&self) -> Vec<S> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            path.push(first.from);
        }
        path.extend(self.steps.iter().map(|step| step.to));
        path
    }

    /// The state the walk ended in, or `None` for an empty path.
    pub fn final_state(&self) -> Option<S> {
        self.steps.last().map(|step| step.to)
    }

    /// Concatenation of every emitted character.
    pub fn output(&self) -> String {
        self.steps.iter().filter_map(|step| step.emitted).collect()
    }

    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {
        fn name(&self) -> &'static str {
            match self {
                Self::Initial => "initial",
                Self::Processing => "processing",
                Self::Complete => "complete",
            }
        }

        fn is_accepting(&self) -> bool {
            matches!(self, Self::Complete)
        }

        fn all() -> &'static [Self] {
            &[Self::Initial, Self::Processing, Self::Complete]
        }
    }

    fn two_step_path() -> GenerationPath<TestState> {
        GenerationPath::new()
            .record(Step {
                from: TestState::Initial,
                to: TestState::Processing,
                emitted: Some('a'),
            })
            .record(Step {
                from: TestState::Processing,
                to: TestState::Complete,
                emitted: None,
            })
    }

    #[test]
    fn new_path_is_empty() {
        let path: GenerationPath<TestState> = GenerationPath::new();
        assert!(path.is_empty());
        assert!(path.get_path().is_empty());
        assert_eq!(path.final_state(), None);
        assert_eq!(path.output(), "");
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let path = two_step_path();
        assert_eq!(
            path.get_path(),
            vec![
                TestState::Initial,
                TestState::Processing,
                TestState::Complete
            ]
        );
        assert_eq!(path.final_state(), Some(TestState::Complete));
    }

    #[test]
    fn silent_steps_emit_nothing() {
        let path = two_step_path();
        assert_eq!(path.len(), 2);
        assert_eq!(path.output(), "a");
        assert!(path.steps()[1].is_silent());
    }

    #[test]
    fn path_serializes_correctly() {
        let path = two_step_path();
        let json = serde_json::to_string(&path).unwrap();
        let deserialized: GenerationPath<TestState> = serde_json::from_str(&json).unwrap();
        assert_eq!(path, deserialized);
    }
}
