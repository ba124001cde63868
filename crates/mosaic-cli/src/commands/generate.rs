//! `mosaic generate`: Emit the runtime source of a composite type.

use anyhow::Context;
use mosaic_engine::{
    identity_method_names, ObjectCodeGenerationRequest, ObjectCodeGenerator, SkeletonBodyCompiler,
};
use std::path::{Path, PathBuf};
use termcolor::ColorChoice;

use crate::output::{Listing, Style};
use crate::settings::{default_namespace, Settings};

/// Command-line overrides
pub struct Options {
    pub namespace: Option<String>,
    pub editor: bool,
    pub output: Option<PathBuf>,
}

pub fn execute(
    project_path: &Path,
    type_name: &str,
    settings: &Settings,
    options: Options,
    color: ColorChoice,
) -> anyhow::Result<()> {
    let project = super::load_project(project_path)?;
    let (extension, definition) = super::find_type(&project, type_name)?;

    let namespace = options
        .namespace
        .or_else(|| settings.codegen.namespace.clone())
        .unwrap_or_else(|| default_namespace(extension, &definition.name));

    let mut method_names = identity_method_names(definition);
    method_names.extend(
        settings
            .codegen
            .method_names
            .iter()
            .map(|(k, v)| (k.clone(), v.clone())),
    );

    let compiler = SkeletonBodyCompiler::new();
    let request = ObjectCodeGenerationRequest {
        extension_name: extension,
        type_definition: definition,
        code_namespace: &namespace,
        method_names: &method_names,
        compiling_for_runtime: settings.codegen.runtime && !options.editor,
    };
    let generated = ObjectCodeGenerator::new(&compiler).generate(&request);
    for file in &generated.include_files {
        tracing::debug!("Include file: {}", file);
    }

    match options.output {
        Some(path) => {
            std::fs::write(&path, &generated.code)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            let target = format!(" {} → {}", type_name, path.display());
            let mut listing = Listing::stdout(color);
            listing.line(&[(Style::Done, "Generated"), (Style::Plain, target.as_str())])?;
            listing.finish()?;
        }
        None => print!("{}", generated.code),
    }
    Ok(())
}
