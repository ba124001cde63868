//! `mosaic resources`: List the resources used by a fresh instance.

use mosaic_engine::{CustomObjectConfiguration, ResourceCollector, ResourceRenamer};
use std::path::Path;
use termcolor::ColorChoice;

use crate::output::{Listing, Style};

pub fn execute(
    project_path: &Path,
    type_name: &str,
    renames: &[String],
    color: ColorChoice,
) -> anyhow::Result<()> {
    let project = super::load_project(project_path)?;
    super::find_type(&project, type_name)?;
    let renames = super::parse_pairs(renames)?;

    let mut config = CustomObjectConfiguration::new(type_name);
    let mut listing = Listing::stdout(color);

    if !renames.is_empty() {
        let mut renamer = ResourceRenamer::new(renames);
        config.expose_resources(&project, &mut renamer);
        let count = format!(" {} references", renamer.rewritten());
        listing.line(&[(Style::Done, "Renamed"), (Style::Plain, count.as_str())])?;
    }

    let mut collector = ResourceCollector::new();
    config.expose_resources(&project, &mut collector);

    for (kind, names) in collector.iter() {
        if names.is_empty() {
            continue;
        }
        let heading = format!("{}:", kind);
        listing.line(&[(Style::Name, heading.as_str())])?;
        for name in names {
            listing.line(&[(Style::Plain, "  "), (Style::Detail, name.as_str())])?;
        }
    }
    listing.finish()?;
    Ok(())
}
