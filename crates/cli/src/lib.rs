//! Lambda Cuts CLI Library
//!
//! This crate provides the command-line interface for lambda-cuts. It lists the
//! functions found by the core scanner, reads the operator's choice and runs
//! that function locally.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`function_selection`]: Listing, selection input and invocation
//!
//! # Examples
//!
//! The CLI binary (`lc`) is normally run with no arguments from the directory
//! that holds the `marine` and `road` roots:
//!
//! ```bash
//! # List functions and prompt for a number
//! lc
//!
//! # Use another build of the local runner
//! lc --invoker ~/bin/sam-nightly
//!
//! # Only print what would run
//! lc --dry-run
//! ```

pub mod cli_args;
pub mod function_selection;
