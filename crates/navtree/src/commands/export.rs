//! Export the sidebar for the site engine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use navtree_export::{render, ExportFormat};

use crate::config::{load_config, load_tree};

/// Run the export command.
pub fn run(
    config_path: &Path,
    format: Option<ExportFormat>,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let tree = load_tree(&config)?;

    let format = match format {
        Some(format) => format,
        None => config.export.format.parse()?,
    };
    let output = output.unwrap_or_else(|| config.resolve(&config.export.output));

    let json = render(&tree, format)?;
    write_output(&output, &json)?;

    Ok(())
}

/// Write to `path`, or stdout when it is `-`.
fn write_output(path: &Path, contents: &str) -> Result<()> {
    if path == Path::new("-") {
        println!("{contents}");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Output: {}", path.display());
    Ok(())
}
