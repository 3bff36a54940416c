//! Template discovery.
//!
//! Walks each root directory one level deep, reads the template descriptor of
//! every template directory found there and turns its function resources into
//! [`FunctionRecord`]s.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::debug;

use crate::config::ScanSettings;
use crate::error::{Error, Result};
use crate::function_definitions::{FunctionRecord, TemplateDescriptor};

fn get_reader(file_description: &str, path: &Path) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.display().to_string(), e))
}

/// Lists the template directories directly inside `root`, sorted by name.
///
/// A child is a template directory if it is a directory containing a regular
/// file named `descriptor_file_name`. A root that does not exist, or is not a
/// directory, has no template directories.
///
/// # Errors
///
/// Returns an error if `root` exists but cannot be listed.
pub fn find_template_directories(root: &Path, descriptor_file_name: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        debug!("Root `{}` is not a directory, skipping", root.display());
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(root).map_err(|e| {
        Error::io_error("root directory".to_string(), root.display().to_string(), e)
    })?;

    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            Error::io_error("root directory".to_string(), root.display().to_string(), e)
        })?;
        children.push(entry.file_name());
    }

    Ok(children
        .into_iter()
        .sorted()
        .map(|name| root.join(name))
        .filter(|child| child.is_dir() && child.join(descriptor_file_name).is_file())
        .collect())
}

/// Reads and parses the template descriptor in `template_directory`.
///
/// # Errors
///
/// Returns an error if the descriptor cannot be opened, is not valid YAML, or
/// has no `Resources` mapping.
pub fn read_template_descriptor(
    template_directory: &Path,
    settings: &ScanSettings,
) -> Result<TemplateDescriptor> {
    let descriptor_path = template_directory.join(&settings.descriptor_file_name);
    let reader = get_reader("template descriptor", &descriptor_path)?;

    serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "template descriptor".to_string(),
            descriptor_path.display().to_string(),
            e,
        )
    })
}

/// Reads the function records declared in one template directory.
///
/// # Errors
///
/// Returns an error if the descriptor is missing, malformed, or contains a
/// resource without a `Type`.
pub fn read_function_records(
    template_directory: &Path,
    settings: &ScanSettings,
) -> Result<Vec<FunctionRecord>> {
    let descriptor = read_template_descriptor(template_directory, settings)?;
    let descriptor_path = template_directory.join(&settings.descriptor_file_name);

    let records = descriptor
        .function_names(settings, &descriptor_path)?
        .into_iter()
        .map(|name| FunctionRecord::new(template_directory.to_path_buf(), name))
        .collect_vec();

    debug!(
        "Found {} function(s) in `{}`",
        records.len(),
        template_directory.display()
    );

    Ok(records)
}

/// Discovers functions under `root_directories` using the default
/// [`ScanSettings`].
///
/// # Errors
///
/// See [`discover_with`].
///
/// # Examples
///
/// ```no_run
/// use lambda_cuts_core::file_handling::discover;
///
/// let functions = discover(&["marine", "road"])?;
/// for function in &functions {
///     println!("{}", function);
/// }
/// # Ok::<(), lambda_cuts_core::error::Error>(())
/// ```
pub fn discover<P: AsRef<Path>>(root_directories: &[P]) -> Result<Vec<FunctionRecord>> {
    discover_with(root_directories, &ScanSettings::default())
}

/// Discovers functions under `root_directories`.
///
/// Records are ordered by root directory in the given order, then by template
/// directory name, then by resource order within each descriptor.
///
/// # Errors
///
/// The first malformed descriptor aborts the whole scan.
pub fn discover_with<P: AsRef<Path>>(
    root_directories: &[P],
    settings: &ScanSettings,
) -> Result<Vec<FunctionRecord>> {
    let mut functions = Vec::new();

    for root in root_directories {
        let root = root.as_ref();
        debug!("Scanning root `{}`", root.display());

        for template_directory in find_template_directories(root, &settings.descriptor_file_name)? {
            functions.extend(read_function_records(&template_directory, settings)?);
        }
    }

    Ok(functions)
}
