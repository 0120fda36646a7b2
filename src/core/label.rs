//! Transition labels.
//!
//! A label is either a single literal character or a digit class standing
//! for any one of a contiguous run of decimal digits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// A set of decimal digits a single transition accepts.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum DigitClass {
    /// `[1-9]`
    NonZero,
    /// `[0-9]`
    Any,
}

impl DigitClass {
    /// Numeric range covered by the class.
    pub fn range(&self) -> RangeInclusive<u8> {
        match self {
            Self::NonZero => 1..=9,
            Self::Any => 0..=9,
        }
    }

    pub fn lowest(&self) -> u8 {
        *self.range().start()
    }

    pub fn highest(&self) -> u8 {
        *self.range().end()
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.range().contains(&digit)
    }

    /// Check if the class covers the given character.
    pub fn matches(&self, ch: char) -> bool {
        ch.to_digit(10).is_some_and(|d| self.contains(d as u8))
    }
}

impl fmt::Display for DigitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = self.range();
        write!(f, "[{}-{}]", range.start(), range.end())
    }
}

/// Label carried by a transition edge.
///
/// # Example
///
/// ```rust
/// use currency_dfa::core::{DigitClass, Label};
///
/// let dollar = Label::Literal('$');
/// let digits = Label::Class(DigitClass::NonZero);
///
/// assert!(dollar.matches('$'));
/// assert!(digits.matches('7'));
/// assert!(!digits.matches('0'));
/// assert_eq!(digits.to_string(), "[1-9]");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Label {
    Literal(char),
    Class(DigitClass),
}

impl Label {
    pub fn matches(&self, ch: char) -> bool {
        match self {
            Self::Literal(c) => *c == ch,
            Self::Class(class) => class.matches(ch),
        }
    }

    /// Check if some character is matched by both labels.
    ///
    /// Two labels leaving the same state must not overlap, otherwise the
    /// automaton would not be deterministic.
    pub fn overlaps(&self, other: &Label) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Literal(c), Self::Class(class)) | (Self::Class(class), Self::Literal(c)) => {
                class.matches(*c)
            }
            (Self::Class(a), Self::Class(b)) => {
                let (a, b) = (a.range(), b.range());
                a.start() <= b.end() && b.start() <= a.end()
            }
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(c) => write!(f, "{c}"),
            Self::Class(class) => write!(f, "{class}"),
        }
    }
}

impl From<char> for Label {
    fn from(c: char) -> Self {
        Self::Literal(c)
    }
}

impl From<DigitClass> for Label {
    fn from(class: DigitClass) -> Self {
        Self::Class(class)
    }
}
