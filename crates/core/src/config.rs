//! Scan constants and path resolution for lambda-cuts.
//!
//! Where templates live and what counts as a function is fixed here. The CLI
//! may only override the invoker program.

/// Root directories scanned for template directories, relative to the current
/// working directory.
pub const DEFAULT_ROOT_DIRECTORIES: [&str; 2] = ["marine", "road"];

/// File that marks a subdirectory as a template directory.
pub const DESCRIPTOR_FILE_NAME: &str = "template.yaml";

/// `Type` of a resource that is an invokable function.
pub const FUNCTION_RESOURCE_TYPE: &str = "AWS::Lambda::Function";

/// Resource keys containing this fragment are log retention helpers and are
/// never listed.
pub const LOG_RETENTION_KEY_FRAGMENT: &str = "LogRetention";

/// Program used to invoke a function locally.
pub const DEFAULT_INVOKER_PROGRAM: &str = "sam";

/// What the template scanner looks for inside each root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    pub descriptor_file_name: String,
    pub function_resource_type: String,
    pub excluded_key_fragment: String,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            descriptor_file_name: DESCRIPTOR_FILE_NAME.to_string(),
            function_resource_type: FUNCTION_RESOURCE_TYPE.to_string(),
            excluded_key_fragment: LOG_RETENTION_KEY_FRAGMENT.to_string(),
        }
    }
}

/// Resolves the program used for local invocation, expanding `~`.
pub fn get_invoker_program(invoker_arg: &Option<String>) -> String {
    let invoker = match invoker_arg {
        Some(invoker) => invoker,
        None => DEFAULT_INVOKER_PROGRAM,
    };

    shellexpand::tilde(invoker).to_string()
}
