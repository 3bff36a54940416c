use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::config::ScanSettings;
use crate::error::{Error, Result};

/// A function declared in a template descriptor, together with the template
/// directory it was declared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    containing_path: PathBuf,
    function_name: String,
}

impl FunctionRecord {
    pub fn new(containing_path: PathBuf, function_name: String) -> Self {
        Self {
            containing_path,
            function_name,
        }
    }

    /// Directory holding the template descriptor that declared this function.
    pub fn containing_path(&self) -> &Path {
        &self.containing_path
    }

    /// Resource key the function was declared under.
    pub fn function_name(&self) -> &str {
        &self.function_name
    }
}

impl Display for FunctionRecord {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{} {}",
            self.containing_path.display(),
            self.function_name
        )
    }
}

/// The part of a template descriptor needed for discovery.
///
/// Resources keep their document order. Everything outside `Resources` is
/// ignored. `Resources` must be present and must not be null.
#[derive(Deserialize, Debug, Clone)]
pub struct TemplateDescriptor {
    #[serde(rename = "Resources", deserialize_with = "deserialize_resources")]
    pub resources: IndexMap<String, Value>,
}

fn deserialize_resources<'de, D>(
    deserializer: D,
) -> std::result::Result<IndexMap<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IndexMap<String, Value>>::deserialize(deserializer)?
        .ok_or_else(|| de::Error::custom("`Resources` is null, expected a mapping"))
}

impl TemplateDescriptor {
    /// Returns the keys of the function resources in document order, skipping
    /// log retention helpers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResource`] if a resource is not a mapping or
    /// has no `Type` field. `descriptor_path` is only used for the message.
    pub fn function_names(
        &self,
        settings: &ScanSettings,
        descriptor_path: &Path,
    ) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for (key, resource) in &self.resources {
            let resource_type = resource_type(resource).map_err(|reason| {
                Error::malformed_resource(
                    descriptor_path.display().to_string(),
                    key.clone(),
                    reason,
                )
            })?;

            let is_function = resource_type == Some(settings.function_resource_type.as_str());

            if is_function && !key.contains(&settings.excluded_key_fragment) {
                names.push(key.clone());
            }
        }

        Ok(names)
    }
}

/// `Ok(None)` means a `Type` is present but is not a plain string, which can
/// never match a function type.
fn resource_type(resource: &Value) -> std::result::Result<Option<&str>, &'static str> {
    if !resource.is_mapping() {
        return Err("resource is not a mapping");
    }

    match resource.get("Type") {
        Some(value) => Ok(value.as_str()),
        None => Err("resource has no `Type` field"),
    }
}
