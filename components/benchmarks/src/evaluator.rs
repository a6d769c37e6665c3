//! Exception reporting after an evaluation call

use js_engine::{Evaluation, ThrownValue};
use std::io::{self, Write};

/// Print a thrown value
///
/// `Error` objects with a non-empty `stack` print the stack; anything else
/// prints its string conversion.
pub fn report_exception<W: Write>(out: &mut W, thrown: &ThrownValue) -> io::Result<()> {
    match thrown.stack_trace() {
        Some(stack) => writeln!(out, "{}", stack.trim_end_matches('\n')),
        None => writeln!(out, "{}", thrown.text),
    }
}

/// Report the outcome of an evaluation, returning the thrown value if there was one
pub fn report_evaluation<W: Write>(
    out: &mut W,
    evaluation: Evaluation,
) -> io::Result<Option<ThrownValue>> {
    match evaluation {
        Evaluation::Completed => Ok(None),
        Evaluation::Threw(thrown) => {
            report_exception(out, &thrown)?;
            Ok(Some(thrown))
        }
    }
}
