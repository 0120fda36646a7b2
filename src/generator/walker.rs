//! Random walks through an automaton.

use super::choice::ChoiceSource;
use crate::core::{Dfa, DigitClass, GenerationPath, State, Step};
use tracing::debug;

/// What the walker does next from a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move<S: State> {
    /// Append `ch` and enter `to`
    Emit { to: S, ch: char },

    /// Enter `to` without appending anything
    Silent { to: S },

    /// Stop; the walk ends in the current state
    Halt,
}

impl<S: State> Move<S> {
    pub fn emit(to: S, ch: char) -> Self {
        Self::Emit { to, ch }
    }

    /// Draw a digit from `class` and emit it.
    ///
    /// A digit the source returns outside the class is clamped into it, so
    /// the emitted character always matches a `class` edge.
    pub fn emit_drawn<C: ChoiceSource + ?Sized>(
        to: S,
        class: DigitClass,
        choices: &mut C,
    ) -> Self {
        let digit = choices.digit(class).clamp(class.lowest(), class.highest());
        Self::Emit {
            to,
            ch: char::from(b'0' + digit),
        }
    }
}

/// Per-state random-choice policy of a walkable automaton.
///
/// The policy is a total mapping from a state and the choices drawn for it
/// to the next [`Move`]. It must only return `Halt` from accepting states and
/// every `Emit` must follow an edge of the automaton's table.
pub trait WalkPolicy: State {
    fn next_move<C: ChoiceSource + ?Sized>(self, choices: &mut C) -> Move<Self>;
}

/// Generates strings by walking an automaton from its start state.
///
/// # Example
///
/// ```rust
/// use currency_dfa::currency::currency_dfa;
/// use currency_dfa::generator::{RandomWalker, ScriptedChoices};
///
/// let dfa = currency_dfa();
///
/// // digit path, first digit 7, then single cent
/// let mut walker = RandomWalker::new(ScriptedChoices::new([false, true], [7]));
/// assert_eq!(walker.generate(&dfa), "7c");
/// ```
#[derive(Debug, Clone)]
pub struct RandomWalker<C> {
    choices: C,
}

impl<C: ChoiceSource> RandomWalker<C> {
    pub fn new(choices: C) -> Self {
        Self { choices }
    }

    /// Walk from the start state until the policy halts.
    ///
    /// Terminates with probability 1 for a fair choice source: the only
    /// cycle a walk can take is exited on every coin flip that comes up
    /// `false`. Use [`walk_bounded`](Self::walk_bounded) when the source is
    /// not trusted.
    pub fn walk<S: WalkPolicy>(&mut self, dfa: &Dfa<S>) -> GenerationPath<S> {
        let mut state = dfa.start();
        let mut path = GenerationPath::new();

        while let Some(step) = self.advance(dfa, state) {
            state = step.to;
            path = path.record(step);
        }

        debug!(
            steps = path.len(),
            end = state.name(),
            output = %path.output(),
            "walk finished"
        );
        path
    }

    /// Walk like [`walk`](Self::walk), but give up after `max_steps` steps.
    ///
    /// Returns `None` when the walk is abandoned.
    pub fn walk_bounded<S: WalkPolicy>(
        &mut self,
        dfa: &Dfa<S>,
        max_steps: usize,
    ) -> Option<GenerationPath<S>> {
        let mut state = dfa.start();
        let mut path = GenerationPath::new();

        while let Some(step) = self.advance(dfa, state) {
            if path.len() >= max_steps {
                debug!(max_steps, state = state.name(), "walk abandoned");
                return None;
            }
            state = step.to;
            path = path.record(step);
        }

        debug!(
            steps = path.len(),
            end = state.name(),
            output = %path.output(),
            "walk finished"
        );
        Some(path)
    }

    /// Walk once and return the emitted string.
    pub fn generate<S: WalkPolicy>(&mut self, dfa: &Dfa<S>) -> String {
        self.walk(dfa).output()
    }

    pub fn choices(&self) -> &C {
        &self.choices
    }

    /// Ask the policy for the next step out of `state`; `None` on halt.
    fn advance<S: WalkPolicy>(&mut self, dfa: &Dfa<S>, state: S) -> Option<Step<S>> {
        match state.next_move(&mut self.choices) {
            Move::Emit { to, ch } => {
                debug_assert!(
                    dfa.transition_on(state, ch).is_some_and(|t| t.to == to),
                    "no edge {} -{}-> {}",
                    state.name(),
                    ch,
                    to.name()
                );
                Some(Step {
                    from: state,
                    to,
                    emitted: Some(ch),
                })
            }
            Move::Silent { to } => Some(Step {
                from: state,
                to,
                emitted: None,
            }),
            Move::Halt => {
                debug_assert!(state.is_accepting(), "halted in {}", state.name());
                None
            }
        }
    }
}
