//! Print every sidebar link in document order.

use std::path::Path;

use anyhow::Result;
use navtree_core::{FlatEntry, NavigationTree};
use serde_json::json;

use crate::config::{load_config, load_tree};

/// Run the flatten command.
pub fn run(config_path: &Path, as_json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let tree = load_tree(&config)?;

    let output = if as_json {
        serde_json::to_string_pretty(&to_json(&tree))?
    } else {
        to_lines(&tree).join("\n")
    };

    println!("{output}");
    Ok(())
}

fn to_lines(tree: &NavigationTree) -> Vec<String> {
    tree.flatten().map(|flat| line(&flat)).collect()
}

/// `Section > Label -> destination`
fn line(flat: &FlatEntry<'_>) -> String {
    let mut crumbs = flat.path.clone();
    crumbs.push(flat.entry.label());
    format!("{} -> {}", crumbs.join(" > "), flat.entry.destination())
}

fn to_json(tree: &NavigationTree) -> serde_json::Value {
    tree.flatten()
        .map(|flat| {
            json!({
                "path": flat.path,
                "label": flat.entry.label(),
                "slug": flat.entry.slug(),
                "href": flat.entry.href(),
            })
        })
        .collect()
}
