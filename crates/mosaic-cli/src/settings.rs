//! Generator settings (`mosaic.toml`)
//!
//! ```toml
//! [codegen]
//! namespace = "gdjs.evtsExt__Platformer__Hero"
//! runtime = true
//!
//! [codegen.method-names]
//! jump = "jump_mangled"
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Settings file contents
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// `[codegen]` table
    #[serde(default)]
    pub codegen: CodegenSettings,
}

/// `[codegen]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodegenSettings {
    /// Namespace override; the default is derived from the type name
    #[serde(default)]
    pub namespace: Option<String>,

    /// Compile for the runtime rather than for an editor preview
    #[serde(default = "default_runtime")]
    pub runtime: bool,

    /// Logical function name → generated method identifier
    #[serde(default, rename = "method-names")]
    pub method_names: BTreeMap<String, String>,
}

fn default_runtime() -> bool {
    true
}

impl Default for CodegenSettings {
    fn default() -> Self {
        Self {
            namespace: None,
            runtime: default_runtime(),
            method_names: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or the defaults when no file is given
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings {}", path.display()))?;
        Self::from_str(&content).with_context(|| format!("Invalid settings {}", path.display()))
    }

    /// Parse settings from TOML text
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Default namespace of the generated class of `<extension>::<object>`
pub fn default_namespace(extension: &str, object: &str) -> String {
    format!("gdjs.evtsExt__{}__{}", extension, object)
}
