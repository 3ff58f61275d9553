//! Look up a slug: breadcrumbs and prev/next links.

use std::path::Path;

use anyhow::Result;
use navtree_core::{LookupError, NavigationEntry, NavigationTree};

use crate::config::{load_config, load_tree};

/// Run the resolve command.
pub fn run(config_path: &Path, slug: &str) -> Result<()> {
    let config = load_config(config_path)?;
    let tree = load_tree(&config)?;

    match describe(&tree, slug) {
        Ok(lines) => {
            println!("{}", lines.join("\n"));
            Ok(())
        }
        Err(LookupError::SlugNotFound(slug)) => {
            tracing::warn!("No sidebar entry links to '{}'", slug);
            anyhow::bail!("Slug not found: {slug}")
        }
    }
}

fn describe(tree: &NavigationTree, slug: &str) -> Result<Vec<String>, LookupError> {
    let entry = tree.find_by_slug(slug)?;
    let breadcrumbs = tree.breadcrumbs(slug)?;
    let pagination = tree.pagination(slug)?;

    Ok(vec![
        format!("label: {}", entry.label()),
        format!("breadcrumbs: {}", breadcrumbs.join(" > ")),
        format!("prev: {}", neighbour(pagination.prev)),
        format!("next: {}", neighbour(pagination.next)),
    ])
}

fn neighbour(entry: Option<&NavigationEntry>) -> String {
    entry.map_or_else(
        || "-".to_string(),
        |e| format!("{} ({})", e.label(), e.destination()),
    )
}
