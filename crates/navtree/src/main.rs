//! navtree CLI - validate, inspect and export documentation sidebars.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use navtree_export::ExportFormat;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "navtree")]
#[command(about = "Validate, inspect and export documentation sidebar navigation")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to navtree.toml config file
    #[arg(short, long, default_value = "navtree.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a config, a starter sidebar and stub content pages
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate the sidebar and report every problem
    Check {
        /// Skip checking slugs against the content directory
        #[arg(long)]
        no_content: bool,
    },

    /// List every link in document order
    Flatten {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show breadcrumbs and prev/next links for a slug
    Resolve {
        /// Slug to look up, e.g. intro/step-01
        slug: String,
    },

    /// Write the sidebar in a format the site engine consumes
    Export {
        /// starlight, manifest or tree (defaults to config or "starlight")
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Output file, "-" for stdout (defaults to config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Check { no_content } => {
            commands::check::run(&cli.config, !no_content)?;
        }
        Commands::Flatten { json } => {
            commands::flatten::run(&cli.config, json)?;
        }
        Commands::Resolve { slug } => {
            commands::resolve::run(&cli.config, &slug)?;
        }
        Commands::Export { format, output } => {
            commands::export::run(&cli.config, format, output)?;
        }
    }

    Ok(())
}
