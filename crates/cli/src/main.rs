use std::io::{stdin, stdout};
use std::process::ExitCode;

use clap::Parser;
use lambda_cuts_cli::cli_args::Args;
use lambda_cuts_cli::function_selection::{self, LineSelection, RunOutcome};
use lambda_cuts_core::config::{self, DEFAULT_ROOT_DIRECTORIES};
use lambda_cuts_core::error::Result;
use lambda_cuts_core::execution::SamLocalInvoker;
use lambda_cuts_core::file_handling;
use log::{debug, info};

fn execute() -> Result<()> {
    let args = Args::parse();

    debug!("Root directories: {:?}", DEFAULT_ROOT_DIRECTORIES);

    let functions = file_handling::discover(&DEFAULT_ROOT_DIRECTORIES)?;
    info!("Discovered {} function(s)", functions.len());

    let mut invoker = SamLocalInvoker::new(config::get_invoker_program(&args.invoker), args.dry_run);

    let mut source = LineSelection::new(stdin().lock());

    let outcome = function_selection::run(&functions, &mut stdout(), &mut source, &mut invoker)?;

    if let RunOutcome::Invoked(function) = outcome {
        debug!("Finished invoking {}", function);
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
