//! Validate a sidebar and report every issue.

use std::path::Path;

use anyhow::Result;
use navtree_core::{ContentIndex, NavigationTree, SiteSpec, ValidationIssue};

use crate::config::{load_config, load_spec};

/// Run the check command.
pub fn run(config_path: &Path, check_content: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let spec = load_spec(&config)?;

    let issues = check(spec, check_content.then(|| config.content_dir()).as_deref())?;

    if issues.is_empty() {
        tracing::info!("Navigation is valid");
        return Ok(());
    }

    for issue in &issues {
        tracing::error!("{}", issue);
    }
    anyhow::bail!(
        "Found {} navigation issue{}",
        issues.len(),
        if issues.len() == 1 { "" } else { "s" }
    );
}

/// Build the tree and, when `content_dir` is given, resolve its slugs.
///
/// Returns all issues found; an empty list means the sidebar is valid.
fn check(spec: SiteSpec, content_dir: Option<&Path>) -> Result<Vec<ValidationIssue>> {
    let tree = match NavigationTree::from_spec(spec) {
        Ok(tree) => tree,
        Err(err) => return Ok(err.into_issues()),
    };

    tracing::info!(
        "Sidebar '{}' has {} sections and {} links",
        tree.title(),
        tree.sections().len(),
        tree.len()
    );

    let Some(content_dir) = content_dir else {
        return Ok(Vec::new());
    };

    let content = ContentIndex::scan(content_dir)?;
    for page in content.unlisted(&tree) {
        tracing::warn!(
            "Page {} ({}) is not linked from the sidebar",
            page.slug,
            page.path.display()
        );
    }

    Ok(tree
        .verify_content(&content)
        .err()
        .map(|err| err.into_issues())
        .unwrap_or_default())
}
