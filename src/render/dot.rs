//! Graphviz DOT source for automaton tables.

use crate::core::{Dfa, State};
use std::io;

/// Write `dfa` as a left-to-right DOT digraph.
///
/// Accepting states are drawn as double circles, all others as circles, and
/// each transition becomes one labeled edge. Node IDs are quoted, so state
/// names need not be DOT identifiers.
pub fn write_dot<S: State>(
    dfa: &Dfa<S>,
    out: &mut impl io::Write,
    name: &str,
) -> io::Result<()> {
    writeln!(out, "digraph {} {{", name)?;
    writeln!(out, "\trankdir=LR")?;

    for state in dfa.states() {
        let shape = if state.is_accepting() {
            "doublecircle"
        } else {
            "circle"
        };
        writeln!(out, "\t\"{}\" [shape={}]", escape(state.name()), shape)?;
    }

    for transition in dfa.transitions() {
        writeln!(
            out,
            "\t\"{}\" -> \"{}\" [label=\"{}\"]",
            escape(transition.from.name()),
            escape(transition.to.name()),
            escape(&transition.label.to_string())
        )?;
    }

    writeln!(out, "}}")
}

/// Render `dfa` to a DOT string.
///
/// # Example
///
/// ```rust
/// use currency_dfa::currency::currency_dfa;
/// use currency_dfa::render::to_dot;
///
/// let dot = to_dot(&currency_dfa(), "currency");
///
/// assert!(dot.starts_with("digraph currency {"));
/// assert!(dot.contains("\"q8\" [shape=doublecircle]"));
/// assert!(dot.contains("\"q0\" -> \"q1\" [label=\"$\"]"));
/// ```
pub fn to_dot<S: State>(dfa: &Dfa<S>, name: &str) -> String {
    let mut buf = Vec::new();
    write_dot(dfa, &mut buf, name).expect("Writing to a Vec should never fail");
    String::from_utf8_lossy(&buf).into_owned()
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
