//! Subcommands

pub mod generate;
pub mod inspect;
pub mod resources;
pub mod types;

use anyhow::{anyhow, bail, Context};
use mosaic_engine::{Project, TypeDefinition, TypeRegistry};
use std::path::Path;

/// Load a project file
pub fn load_project(path: &Path) -> anyhow::Result<Project> {
    Project::from_path(path).with_context(|| format!("Failed to load project {}", path.display()))
}

/// Look up a composite type, returning its extension and definition
pub fn find_type<'p>(
    project: &'p Project,
    type_name: &str,
) -> anyhow::Result<(&'p str, &'p TypeDefinition)> {
    let definition = project.get_type(type_name).ok_or_else(|| {
        anyhow!(
            "Unknown composite type `{}` (known: {})",
            type_name,
            project.type_names().join(", ")
        )
    })?;
    let extension = project.extension_of(type_name).unwrap_or_default();
    Ok((extension, definition))
}

/// Split `key=value` arguments
pub fn parse_pairs(pairs: &[String]) -> anyhow::Result<Vec<(String, String)>> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => bail!("Expected KEY=VALUE, got `{}`", pair),
        })
        .collect()
}
