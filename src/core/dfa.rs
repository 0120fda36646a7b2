//! Immutable automaton table.

use super::state::State;
use super::transition::Transition;
use serde::{Deserialize, Serialize};

/// Static state/transition table of a deterministic finite automaton.
///
/// A `Dfa` is produced by [`DfaBuilder`](crate::builder::DfaBuilder), which
/// validates it, and is never mutated afterwards. Transitions keep the order
/// they were added in, so `outgoing` lists edges per state in table order.
///
/// # Example
///
/// ```rust
/// use currency_dfa::core::State;
/// use currency_dfa::currency::{currency_dfa, CurrencyState};
///
/// let dfa = currency_dfa();
///
/// assert_eq!(dfa.start(), CurrencyState::Q0);
/// assert_eq!(dfa.outgoing(CurrencyState::Q0).count(), 2);
/// assert!(dfa.accepting_states().all(|s| s.is_accepting()));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Dfa<S: State> {
    start: S,
    transitions: Vec<Transition<S>>,
}

impl<S: State> Dfa<S> {
    pub(crate) fn from_parts(start: S, transitions: Vec<Transition<S>>) -> Self {
        Self { start, transitions }
    }

    /// The designated start state.
    pub fn start(&self) -> S {
        self.start
    }

    /// Every state, in declaration order.
    pub fn states(&self) -> &'static [S] {
        S::all()
    }

    pub fn accepting_states(&self) -> impl Iterator<Item = S> + '_ {
        self.states().iter().copied().filter(|s| s.is_accepting())
    }

    /// All transitions in table order.
    pub fn transitions(&self) -> &[Transition<S>] {
        &self.transitions
    }

    /// Outgoing transitions of `state`, in table order.
    pub fn outgoing(&self, state: S) -> impl Iterator<Item = &Transition<S>> + '_ {
        self.transitions.iter().filter(move |t| t.from == state)
    }

    /// The transition leaving `state` on `ch`, if any.
    ///
    /// Labels leaving one state never overlap, so at most one edge matches.
    pub fn transition_on(&self, state: S, ch: char) -> Option<&Transition<S>> {
        self.transitions.iter().find(|t| t.accepts(state, ch))
    }

    /// Export the table as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DigitClass;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        Digits,
        Done,
    }

    impl State for TestState {
        fn name(&self) -> &'static str {
            match self {
                Self::Start => "start",
                Self::Digits => "digits",
                Self::Done => "done",
            }
        }

        fn is_accepting(&self) -> bool {
            matches!(self, Self::Digits | Self::Done)
        }

        fn all() -> &'static [Self] {
            &[Self::Start, Self::Digits, Self::Done]
        }
    }

    fn table() -> Dfa<TestState> {
        Dfa::from_parts(
            TestState::Start,
            vec![
                Transition::new(TestState::Start, TestState::Digits, DigitClass::NonZero),
                Transition::new(TestState::Digits, TestState::Digits, DigitClass::Any),
                Transition::new(TestState::Digits, TestState::Done, '!'),
            ],
        )
    }

    #[test]
    fn outgoing_preserves_table_order() {
        let dfa = table();
        let targets: Vec<_> = dfa.outgoing(TestState::Digits).map(|t| t.to).collect();
        assert_eq!(targets, vec![TestState::Digits, TestState::Done]);
        assert_eq!(dfa.outgoing(TestState::Done).count(), 0);
    }

    #[test]
    fn accepting_states_follow_flags() {
        let accepting: Vec<_> = table().accepting_states().collect();
        assert_eq!(accepting, vec![TestState::Digits, TestState::Done]);
    }

    #[test]
    fn transition_on_dispatches_by_label() {
        let dfa = table();
        assert_eq!(
            dfa.transition_on(TestState::Digits, '!').map(|t| t.to),
            Some(TestState::Done)
        );
        assert_eq!(
            dfa.transition_on(TestState::Digits, '0').map(|t| t.to),
            Some(TestState::Digits)
        );
        assert!(dfa.transition_on(TestState::Start, '0').is_none());
    }

    #[test]
    fn dfa_roundtrips_through_json() {
        let dfa = table();
        let json = dfa.to_json().unwrap();
        let deserialized: Dfa<TestState> = serde_json::from_str(&json).unwrap();
        assert_eq!(dfa, deserialized);
    }
}
