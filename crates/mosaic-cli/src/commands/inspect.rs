//! `mosaic inspect`: Print the configuration tree of a fresh instance.

use anyhow::bail;
use mosaic_engine::CustomObjectConfiguration;
use std::path::Path;

pub fn execute(
    project_path: &Path,
    type_name: &str,
    updates: &[String],
    children: &[String],
) -> anyhow::Result<()> {
    let project = super::load_project(project_path)?;
    super::find_type(&project, type_name)?;

    let mut config = CustomObjectConfiguration::new(type_name);
    for (name, value) in super::parse_pairs(updates)? {
        if !config.update_property(&project, &name, &value) {
            bail!("`{}` has no property `{}`", type_name, name);
        }
    }
    for child in children {
        config.child_configuration_mut(&project, child)?;
    }

    println!("{}", serde_json::to_string_pretty(&config.serialize())?);
    Ok(())
}
