//! Core State trait for automaton states.
//!
//! All automaton states must implement this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton states.
///
/// All methods are pure. States are small immutable values drawn from a
/// closed set; `all` lists that set in declaration order.
///
/// # Required Traits
///
/// - `Copy` + `Eq` + `Hash`: states are used as table keys
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: tables and paths are exportable
///
/// # Example
///
/// ```rust
/// use currency_dfa::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Toggle {
///     Off,
///     On,
/// }
///
/// impl State for Toggle {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Off => "off",
///             Self::On => "on",
///         }
///     }
///
///     fn is_accepting(&self) -> bool {
///         matches!(self, Self::On)
///     }
///
///     fn all() -> &'static [Self] {
///         &[Self::Off, Self::On]
///     }
/// }
///
/// assert_eq!(Toggle::all().len(), 2);
/// assert!(Toggle::On.is_accepting());
/// ```
pub trait State:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Label used in diagrams and logs.
    fn name(&self) -> &'static str;

    /// Check if strings of the language may end in this state.
    ///
    /// Default implementation returns `false`.
    fn is_accepting(&self) -> bool {
        false
    }

    /// Every state of the automaton, in declaration order.
    fn all() -> &'static [Self];
}
