use std::io::BufRead;

use lambda_cuts_core::error::{Error, Result};

/// Provides the one number the operator picks from the listing.
pub trait SelectionSource {
    /// Returns the 1-based ordinal entered by the operator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelection`] if the input is not a base-10 integer.
    fn read_selection(&mut self) -> Result<i64>;
}

/// Parses a selection, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`Error::InvalidSelection`] if `input` is not a base-10 integer.
pub fn parse_selection(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|e| Error::invalid_selection(trimmed.to_string(), e))
}

/// Reads exactly one line from a reader, normally stdin.
pub struct LineSelection<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineSelection<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> SelectionSource for LineSelection<R> {
    fn read_selection(&mut self) -> Result<i64> {
        let mut input = String::new();
        self.reader.read_line(&mut input).map_err(Error::Stdio)?;
        parse_selection(&input)
    }
}
