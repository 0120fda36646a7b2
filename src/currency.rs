//! The currency-string automaton.
//!
//! Recognizes dollar amounts such as `$10` and `$3.45` and cent amounts such
//! as `7c` and `42c`:
//!
//! ```text
//! q0 -$-> q1 -0-----> q2 -.-> q4 -[0-9]-> q5 -[0-9]-> (q6)
//!          \-[1-9]-> (q3) -.-> q4
//!                     (q3) -[0-9]-> (q3)
//! q0 -[1-9]-> q7 -c-> (q8)
//!              \-[0-9]-> (q9) -c-> (q8)
//! ```
//!
//! The table keeps the `q3 -.-> q4` edge so the diagram shows the full
//! language, but the walk policy never takes it: from `q3` the walker either
//! appends another integer digit or makes a silent move to `q6` and stops.

use crate::builder::DfaBuilder;
use crate::core::{DigitClass, Dfa};
use crate::dfa_states;
use crate::generator::{ChoiceSource, Move, WalkPolicy};

dfa_states! {
    /// States of the currency automaton.
    pub enum CurrencyState {
        /// Start
        Q0 = "q0",
        /// After `$`
        Q1 = "q1",
        /// After `$0`, a decimal point must follow
        Q2 = "q2",
        /// Inside a non-zero integer part
        Q3 = "q3",
        /// After the decimal point
        Q4 = "q4",
        /// After the first fractional digit
        Q5 = "q5",
        /// Complete dollar amount
        Q6 = "q6",
        /// After the first cents digit
        Q7 = "q7",
        /// Complete cents amount
        Q8 = "q8",
        /// After the second cents digit
        Q9 = "q9",
    }
    accepting: [Q3, Q6, Q8, Q9]
}

/// Build the currency transition table.
///
/// Construction is deterministic: two calls return equal tables.
pub fn currency_dfa() -> Dfa<CurrencyState> {
    use CurrencyState::*;

    DfaBuilder::new()
        .start(Q0)
        .transition(Q0, Q1, '$')
        .transition(Q0, Q7, DigitClass::NonZero)
        .transition(Q1, Q2, '0')
        .transition(Q1, Q3, DigitClass::NonZero)
        .transition(Q2, Q4, '.')
        .transition(Q3, Q3, DigitClass::Any)
        .transition(Q3, Q4, '.')
        .transition(Q4, Q5, DigitClass::Any)
        .transition(Q5, Q6, DigitClass::Any)
        .transition(Q7, Q8, 'c')
        .transition(Q7, Q9, DigitClass::Any)
        .transition(Q9, Q8, 'c')
        .build()
        .expect("Currency table should always build")
}

impl WalkPolicy for CurrencyState {
    fn next_move<C: ChoiceSource + ?Sized>(self, choices: &mut C) -> Move<Self> {
        use CurrencyState::*;

        match self {
            Q0 => {
                if choices.coin() {
                    Move::emit(Q1, '$')
                } else {
                    Move::emit_drawn(Q7, DigitClass::NonZero, choices)
                }
            }
            Q1 => {
                if choices.coin() {
                    Move::emit(Q2, '0')
                } else {
                    Move::emit_drawn(Q3, DigitClass::NonZero, choices)
                }
            }
            Q2 => Move::emit(Q4, '.'),
            Q3 => {
                if choices.coin() {
                    Move::emit_drawn(Q3, DigitClass::Any, choices)
                } else {
                    Move::Silent { to: Q6 }
                }
            }
            Q4 => Move::emit_drawn(Q5, DigitClass::Any, choices),
            Q5 => Move::emit_drawn(Q6, DigitClass::Any, choices),
            Q7 => {
                if choices.coin() {
                    Move::emit(Q8, 'c')
                } else {
                    Move::emit_drawn(Q9, DigitClass::Any, choices)
                }
            }
            Q9 => Move::emit(Q8, 'c'),
            Q6 | Q8 => Move::Halt,
        }
    }
}
