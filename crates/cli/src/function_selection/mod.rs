//! Function selection and invocation.
//!
//! Lists the discovered functions, reads one number from a
//! [`SelectionSource`] and hands the matching function to a
//! [`LocalInvoker`]. A number outside the listing is reported and nothing is
//! invoked.

pub mod input;
pub mod listing;

use std::io::Write;

use lambda_cuts_core::error::{Error, Result};
use lambda_cuts_core::execution::LocalInvoker;
use lambda_cuts_core::function_definitions::FunctionRecord;
use log::debug;

pub use input::{parse_selection, LineSelection, SelectionSource};
pub use listing::{render_listing, resolve_selection};

/// Text shown before the selection is read.
pub const SELECTION_PROMPT: &str = "Enter the number of the function to invoke: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Invoked(FunctionRecord),
    NotFound(i64),
}

/// Lists `functions`, reads a selection and invokes it.
///
/// The listing and prompt are written even when `functions` is empty, in
/// which case every selection is out of range.
///
/// # Errors
///
/// Returns an error if writing to `out` fails, the selection is not a number,
/// or the invoker cannot start.
pub fn run<W, S, I>(
    functions: &[FunctionRecord],
    out: &mut W,
    source: &mut S,
    invoker: &mut I,
) -> Result<RunOutcome>
where
    W: Write,
    S: SelectionSource + ?Sized,
    I: LocalInvoker + ?Sized,
{
    render_listing(functions, out)?;
    write!(out, "{SELECTION_PROMPT}").map_err(Error::Stdio)?;
    out.flush().map_err(Error::Stdio)?;

    let ordinal = source.read_selection()?;
    debug!("Selected {} of {}", ordinal, functions.len());

    let Some(function) = resolve_selection(functions, ordinal) else {
        writeln!(out, "Lambda with number {ordinal} not found").map_err(Error::Stdio)?;
        return Ok(RunOutcome::NotFound(ordinal));
    };

    invoker.invoke_local(function.containing_path(), function.function_name())?;

    Ok(RunOutcome::Invoked(function.clone()))
}
