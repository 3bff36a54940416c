use std::path::Path;
use std::process::{Command, Stdio};

use log::{info, warn};

use crate::error::Result;

/// Runs a discovered function locally.
pub trait LocalInvoker {
    /// Invokes `target_name` with `working_directory` as the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error only if the invocation could not be started.
    fn invoke_local(&mut self, working_directory: &Path, target_name: &str) -> Result<()>;
}

/// Invokes functions with `<program> local invoke <target>`.
#[derive(Debug, Clone)]
pub struct SamLocalInvoker {
    program: String,
    dry_run: bool,
}

impl SamLocalInvoker {
    pub fn new(program: String, dry_run: bool) -> Self {
        Self { program, dry_run }
    }

    /// Builds the command without running it.
    pub fn build_command(&self, working_directory: &Path, target_name: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(["local", "invoke", target_name])
            .current_dir(working_directory);
        command
    }
}

impl LocalInvoker for SamLocalInvoker {
    fn invoke_local(&mut self, working_directory: &Path, target_name: &str) -> Result<()> {
        if self.dry_run {
            println!(
                "Dry run is specified, not executing:\ncd {}; {} local invoke {}",
                working_directory.display(),
                self.program,
                target_name
            );
            return Ok(());
        }

        info!(
            "Invoking `{}` in `{}` with `{}`",
            target_name,
            working_directory.display(),
            self.program
        );

        let status = self
            .build_command(working_directory, target_name)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?
            .wait()?;

        // The tool reports its own failures; its exit status is not ours.
        if !status.success() {
            warn!("`{}` exited with {}", self.program, status);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::ffi::OsStr;

    #[test]
    fn test_build_command_arguments() {
        let invoker = SamLocalInvoker::new("sam".to_string(), false);
        let command = invoker.build_command(Path::new("road/toll"), "TollFn");

        assert_eq!(command.get_program(), OsStr::new("sam"));
        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args, vec!["local", "invoke", "TollFn"]);
        assert_eq!(command.get_current_dir(), Some(Path::new("road/toll")));
    }

    #[test]
    fn test_dry_run_does_not_spawn() {
        let mut invoker =
            SamLocalInvoker::new("definitely-not-an-installed-program".to_string(), true);
        assert!(invoker.invoke_local(Path::new("."), "TollFn").is_ok());
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let mut invoker =
            SamLocalInvoker::new("definitely-not-an-installed-program".to_string(), false);
        let result = invoker.invoke_local(Path::new("."), "TollFn");
        assert!(matches!(result, Err(Error::SubProcess(_))));
    }
}
