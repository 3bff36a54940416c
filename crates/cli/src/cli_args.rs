//! Command-line argument parsing.
//!
//! Scanned roots and the selection itself are never arguments. The only
//! options configure the local invocation program.

use clap::Parser;

/// Command-line arguments for the lambda-cuts CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use lambda_cuts_cli::cli_args::Args;
///
/// let args = Args::parse_from(["lc"]);
/// assert!(args.invoker.is_none());
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Program used to invoke the selected function locally.
    ///
    /// If not provided, defaults to `sam`.
    #[arg(long, short = 'i')]
    pub invoker: Option<String>,

    /// Perform a dry run, which just prints out the invocation but does not execute it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,
}
