//! `mosaic types`: List the composite types of a project.

use mosaic_engine::qualified_name;
use std::path::Path;
use termcolor::ColorChoice;

use crate::output::{Listing, Style};

pub fn execute(project_path: &Path, color: ColorChoice) -> anyhow::Result<()> {
    let project = super::load_project(project_path)?;
    let mut listing = Listing::stdout(color);

    if project.is_empty() {
        listing.line(&[(Style::Notice, "No composite types")])?;
        listing.finish()?;
        return Ok(());
    }

    for (extension, definition) in project.types() {
        let name = qualified_name(extension, &definition.name);
        let summary = format!(
            "({} properties, {} children, {} functions)",
            definition.properties.len(),
            definition.objects.len(),
            definition.functions.len()
        );
        let mut spans = vec![(Style::Name, name.as_str())];
        if !definition.full_name.is_empty() {
            spans.push((Style::Plain, "  "));
            spans.push((Style::Detail, definition.full_name.as_str()));
        }
        spans.push((Style::Plain, "  "));
        spans.push((Style::Summary, summary.as_str()));
        listing.line(&spans)?;
    }
    listing.finish()?;
    Ok(())
}
