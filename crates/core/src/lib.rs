//! Lambda Cuts Core Library
//!
//! This crate provides the core functionality for lambda-cuts, a developer
//! tool that finds the serverless functions declared in a set of template
//! directories and runs a chosen one locally.
//!
//! # Key Features
//!
//! - **Template Discovery**: Find template directories one level below each root
//! - **Function Filtering**: Keep function resources, drop log retention helpers
//! - **Local Invocation**: Hand the chosen function to an external local runner
//! - **Error Handling**: Error types for every fatal condition of a run
//!
//! # Examples
//!
//! Discovering functions under the default roots:
//!
//! ```no_run
//! use lambda_cuts_core::config::DEFAULT_ROOT_DIRECTORIES;
//! use lambda_cuts_core::file_handling::discover;
//!
//! let functions = discover(&DEFAULT_ROOT_DIRECTORIES)?;
//! for function in &functions {
//!     println!("Function: {}", function);
//! }
//! # Ok::<(), lambda_cuts_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod function_definitions;
