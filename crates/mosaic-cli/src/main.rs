//! Mosaic command-line tool
//!
//! Front-end over the engine: list the composite types of a project,
//! generate their runtime source, and inspect configuration trees and the
//! resources they reference.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;
mod settings;

#[derive(Parser)]
#[command(name = "mosaic")]
#[command(about = "Composite object tooling", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug diagnostics
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Generator settings file (mosaic.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Color output: auto, always, never
    #[arg(long, global = true)]
    color: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the composite types of a project
    Types {
        /// Project file
        project: PathBuf,
    },

    /// Generate the runtime source of a composite type
    Generate {
        /// Project file
        project: PathBuf,
        /// Fully-qualified type name (Extension::Object)
        type_name: String,
        /// Namespace object holding the generated class
        #[arg(long)]
        namespace: Option<String>,
        /// Compile for an editor preview instead of the runtime
        #[arg(long)]
        editor: bool,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the configuration tree of a fresh instance
    Inspect {
        /// Project file
        project: PathBuf,
        /// Fully-qualified type name (Extension::Object)
        type_name: String,
        /// Property update, as name=value
        #[arg(long = "set", value_name = "NAME=VALUE")]
        updates: Vec<String>,
        /// Child object to materialize
        #[arg(long = "child", value_name = "NAME")]
        children: Vec<String>,
    },

    /// List the resources used by a fresh instance
    Resources {
        /// Project file
        project: PathBuf,
        /// Fully-qualified type name (Extension::Object)
        type_name: String,
        /// Resource rename, as old=new
        #[arg(long = "rename", value_name = "OLD=NEW")]
        renames: Vec<String>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("MOSAIC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let color = output::resolve_color_choice(cli.color.as_deref());
    let settings = settings::Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Types { project } => commands::types::execute(&project, color),

        Commands::Generate {
            project,
            type_name,
            namespace,
            editor,
            output,
        } => commands::generate::execute(
            &project,
            &type_name,
            &settings,
            commands::generate::Options {
                namespace,
                editor,
                output,
            },
            color,
        ),

        Commands::Inspect {
            project,
            type_name,
            updates,
            children,
        } => commands::inspect::execute(&project, &type_name, &updates, &children),

        Commands::Resources {
            project,
            type_name,
            renames,
        } => commands::resources::execute(&project, &type_name, &renames, color),
    }
}
