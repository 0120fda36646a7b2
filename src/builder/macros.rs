//! Macros for declaring automaton states.

/// Declare a closed state enumeration and its State trait implementation.
///
/// Each variant is given the label used in diagrams. Variants listed under
/// `accepting:` report `is_accepting() == true`.
///
/// # Example
///
/// ```
/// use currency_dfa::core::State;
/// use currency_dfa::dfa_states;
///
/// dfa_states! {
///     pub enum Parity {
///         Even = "even",
///         Odd = "odd",
///     }
///     accepting: [Even]
/// }
///
/// assert_eq!(Parity::Odd.name(), "odd");
/// assert!(Parity::Even.is_accepting());
/// assert_eq!(Parity::all(), &[Parity::Even, Parity::Odd]);
/// ```
#[macro_export]
macro_rules! dfa_states {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $label:literal
            ),* $(,)?
        }

        $(accepting: [$($accepting:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            fn is_accepting(&self) -> bool {
                match self {
                    $($(Self::$accepting => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }

            fn all() -> &'static [Self] {
                &[$(Self::$variant),*]
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
