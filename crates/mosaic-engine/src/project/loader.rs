//! Project file loading
//!
//! Parses a JSON project file into a [`Project`]. Child objects whose type
//! is a composite type of the same project get a composite default
//! configuration; every other child keeps its configuration verbatim.

use rustc_hash::FxHashSet;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

use super::configuration::ObjectConfiguration;
use super::definition::{ChildObject, EventsFunction, TypeDefinition};
use super::error::ProjectError;
use super::property::PropertyDescriptor;
use super::registry::{qualified_name, Project};

#[derive(Debug, Deserialize)]
struct ProjectFile {
    #[serde(default)]
    extensions: Vec<ExtensionFile>,
}

#[derive(Debug, Deserialize)]
struct ExtensionFile {
    name: String,
    #[serde(default, rename = "eventsBasedObjects")]
    objects: Vec<TypeFile>,
}

#[derive(Debug, Deserialize)]
struct TypeFile {
    name: String,
    #[serde(default, rename = "fullName")]
    full_name: String,
    #[serde(default)]
    properties: Vec<PropertyDescriptor>,
    #[serde(default)]
    objects: Vec<ChildFile>,
    #[serde(default, rename = "eventsFunctions")]
    functions: Vec<EventsFunction>,
}

#[derive(Debug, Deserialize)]
struct ChildFile {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    /// Everything else is the child's configuration tree
    #[serde(flatten)]
    configuration: Map<String, Value>,
}

/// A composite child whose tree is loaded once every type is declared
struct PendingChild {
    owner: String,
    child: String,
    tree: Value,
}

impl Project {
    /// Parse a project from JSON text
    pub fn from_json(source: &str) -> Result<Self, ProjectError> {
        let file: ProjectFile = serde_json::from_str(source)?;
        Self::from_file(file)
    }

    /// Read and parse a project file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    /// Parse a project from an already decoded JSON value
    pub fn from_value(value: &Value) -> Result<Self, ProjectError> {
        let file = ProjectFile::deserialize(value)?;
        Self::from_file(file)
    }

    fn from_file(file: ProjectFile) -> Result<Self, ProjectError> {
        let composite_names: FxHashSet<String> = file
            .extensions
            .iter()
            .flat_map(|ext| ext.objects.iter().map(|obj| qualified_name(&ext.name, &obj.name)))
            .collect();

        // First pass: declare every type, with empty composite children.
        let mut declared = Project::new();
        let mut pending = Vec::new();
        for extension in file.extensions {
            for object in extension.objects {
                let owner = qualified_name(&extension.name, &object.name);
                let mut definition = TypeDefinition::new(object.name)
                    .with_full_name(object.full_name);
                definition.properties = object.properties;
                definition.functions = object.functions;

                for child in object.objects {
                    let tree = Value::Object(child.configuration);
                    let configuration = if composite_names.contains(&child.type_name) {
                        pending.push(PendingChild {
                            owner: owner.clone(),
                            child: child.name.clone(),
                            tree,
                        });
                        ObjectConfiguration::custom(child.type_name)
                    } else {
                        ObjectConfiguration::opaque(child.type_name, tree)
                    };
                    definition.objects.push(ChildObject::new(child.name, configuration));
                }

                declared.insert_type(extension.name.as_str(), definition)?;
            }
        }

        // Second pass: load composite child trees against the declared types.
        let mut project = declared.clone();
        for PendingChild { owner, child, tree } in pending {
            let Some(definition) = project.get_type_mut(&owner) else {
                continue;
            };
            let Some(declaration) = definition.objects.iter_mut().find(|c| c.name == child) else {
                continue;
            };
            declaration
                .configuration
                .deserialize(&declared, &tree)
                .map_err(|source| ProjectError::InvalidChild {
                    type_name: owner.clone(),
                    child: child.clone(),
                    source,
                })?;
        }

        tracing::debug!("Loaded project with {} composite types", project.len());
        Ok(project)
    }
}
