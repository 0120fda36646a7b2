//! Sources of random choices for the walker.
//!
//! The walker never touches a random number generator directly. It asks a
//! [`ChoiceSource`] for fair coin flips and digits, so tests can replay a
//! fixed script and callers can seed a real generator.

use crate::core::DigitClass;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Supplier of the two kinds of decision a walk needs.
pub trait ChoiceSource {
    /// A fair 50/50 choice.
    fn coin(&mut self) -> bool;

    /// A digit drawn uniformly from `class`.
    fn digit(&mut self, class: DigitClass) -> u8;
}

impl<C: ChoiceSource + ?Sized> ChoiceSource for &mut C {
    fn coin(&mut self) -> bool {
        (**self).coin()
    }

    fn digit(&mut self, class: DigitClass) -> u8 {
        (**self).digit(class)
    }
}

/// Choices drawn from a `rand` generator.
///
/// # Example
///
/// ```rust
/// use currency_dfa::core::DigitClass;
/// use currency_dfa::generator::{ChoiceSource, RngChoices};
///
/// let mut a = RngChoices::seeded(7);
/// let mut b = RngChoices::seeded(7);
///
/// assert_eq!(a.digit(DigitClass::Any), b.digit(DigitClass::Any));
/// assert_eq!(a.coin(), b.coin());
/// ```
#[derive(Debug, Clone)]
pub struct RngChoices<R> {
    rng: R,
}

impl<R: Rng> RngChoices<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngChoices<StdRng> {
    /// Create with a fixed seed for reproducible walks.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RngChoices<ThreadRng> {
    /// Use the thread-local generator.
    pub fn from_thread_rng() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> ChoiceSource for RngChoices<R> {
    fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn digit(&mut self, class: DigitClass) -> u8 {
        self.rng.gen_range(class.range())
    }
}

/// Replays a fixed script of choices.
///
/// Coins and digits are queued separately and consumed in order. Once the
/// coin queue is empty every flip comes up `false`; once the digit queue is
/// empty every digit is the lowest the class allows. A scripted digit outside
/// the requested class is clamped into it.
///
/// # Example
///
/// ```rust
/// use currency_dfa::core::DigitClass;
/// use currency_dfa::generator::{ChoiceSource, ScriptedChoices};
///
/// let mut choices = ScriptedChoices::new([true], [0, 4]);
///
/// assert!(choices.coin());
/// assert!(!choices.coin());
/// assert_eq!(choices.digit(DigitClass::NonZero), 1);
/// assert_eq!(choices.digit(DigitClass::Any), 4);
/// assert_eq!(choices.digit(DigitClass::Any), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedChoices {
    coins: VecDeque<bool>,
    digits: VecDeque<u8>,
}

impl ScriptedChoices {
    pub fn new(
        coins: impl IntoIterator<Item = bool>,
        digits: impl IntoIterator<Item = u8>,
    ) -> Self {
        Self {
            coins: coins.into_iter().collect(),
            digits: digits.into_iter().collect(),
        }
    }

    /// Check if every scripted choice has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.coins.is_empty() && self.digits.is_empty()
    }
}

impl ChoiceSource for ScriptedChoices {
    fn coin(&mut self) -> bool {
        self.coins.pop_front().unwrap_or(false)
    }

    fn digit(&mut self, class: DigitClass) -> u8 {
        let range = class.range();
        self.digits
            .pop_front()
            .map_or(class.lowest(), |d| d.clamp(*range.start(), *range.end()))
    }
}
