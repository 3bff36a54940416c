use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error with local invocation sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Malformed resource `{}` in template at `{}`: {}", .resource, .path, .reason)]
    MalformedResource {
        path: String,
        resource: String,
        reason: String,
    },

    #[error("Invalid selection `{}`: {}", .input, .original)]
    InvalidSelection {
        input: String,
        original: ParseIntError,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(std::io::Error),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn malformed_resource(path: String, resource: String, reason: &str) -> Self {
        Self::MalformedResource {
            path,
            resource,
            reason: reason.to_string(),
        }
    }

    pub fn invalid_selection(input: String, original: ParseIntError) -> Self {
        Self::InvalidSelection { input, original }
    }
}
