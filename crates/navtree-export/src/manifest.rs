//! Flat page manifest: one record per leaf with breadcrumbs and pagination.

use std::collections::BTreeMap;

use navtree_core::{Destination, NavigationEntry, NavigationTree};
use serde::Serialize;

/// Everything the site engine needs to render navigation around each page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    /// Site title
    pub title: String,
    /// Social links by platform
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub social: BTreeMap<String, String>,
    /// Leaves in document order
    pub pages: Vec<ManifestPage>,
}

/// A single leaf.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestPage {
    pub label: String,
    #[serde(flatten)]
    pub destination: Destination,
    /// Section labels, then the page label
    pub breadcrumbs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<ManifestLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ManifestLink>,
}

/// A prev/next pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestLink {
    pub label: String,
    #[serde(flatten)]
    pub destination: Destination,
}

impl From<&NavigationEntry> for ManifestLink {
    fn from(entry: &NavigationEntry) -> Self {
        Self {
            label: entry.label().to_string(),
            destination: entry.destination().clone(),
        }
    }
}

/// Build a manifest covering every leaf in the tree.
pub fn build_manifest(tree: &NavigationTree) -> Manifest {
    let pages = tree
        .flatten()
        .enumerate()
        .map(|(position, flat)| {
            let pagination = tree.pagination_at(position);
            let mut breadcrumbs: Vec<String> = flat.path.iter().map(|s| (*s).to_string()).collect();
            breadcrumbs.push(flat.entry.label().to_string());

            ManifestPage {
                label: flat.entry.label().to_string(),
                destination: flat.entry.destination().clone(),
                breadcrumbs,
                prev: pagination.prev.map(ManifestLink::from),
                next: pagination.next.map(ManifestLink::from),
            }
        })
        .collect::<Vec<_>>();

    tracing::debug!(pages = pages.len(), "Built navigation manifest");

    Manifest {
        title: tree.title().to_string(),
        social: tree.social().clone(),
        pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navtree_core::{ItemSpec, SiteSpec};
    use pretty_assertions::assert_eq;

    fn tree() -> NavigationTree {
        NavigationTree::from_spec(SiteSpec {
            title: "Pembelajaran NextJS v15".into(),
            sections: vec![
                ItemSpec::group(
                    "Introduction",
                    vec![
                        ItemSpec::slug("Step 0", "intro/step-00"),
                        ItemSpec::slug("Step 1", "intro/step-01"),
                    ],
                ),
                ItemSpec::group("Route Handler", vec![ItemSpec::slug("WIP", "route-handler/step-01")]),
            ],
            social: BTreeMap::from([(
                "github".to_string(),
                "https://github.com/withered-flowers/docs-nextjs-v15".to_string(),
            )]),
        })
        .unwrap()
    }

    #[test]
    fn one_page_per_leaf_in_order() {
        let manifest = build_manifest(&tree());

        let labels: Vec<&str> = manifest.pages.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Step 0", "Step 1", "WIP"]);
        assert_eq!(manifest.title, "Pembelajaran NextJS v15");
        assert_eq!(manifest.social.len(), 1);
    }

    #[test]
    fn links_neighbours_across_sections() {
        let manifest = build_manifest(&tree());

        let first = &manifest.pages[0];
        assert!(first.prev.is_none());
        assert_eq!(first.next.as_ref().map(|l| l.label.as_str()), Some("Step 1"));

        let last = &manifest.pages[2];
        assert_eq!(last.breadcrumbs, vec!["Route Handler", "WIP"]);
        assert_eq!(
            last.prev.as_ref().map(|l| &l.destination),
            Some(&Destination::Slug("intro/step-01".into()))
        );
        assert!(last.next.is_none());
    }

    #[test]
    fn serializes_destination_inline() {
        let manifest = build_manifest(&tree());

        let json = serde_json::to_value(&manifest).unwrap();

        assert_eq!(json["pages"][1]["slug"], "intro/step-01");
        assert_eq!(json["pages"][1]["prev"]["slug"], "intro/step-00");
        assert!(json["pages"][0].get("prev").is_none());
        assert_eq!(json["social"]["github"], "https://github.com/withered-flowers/docs-nextjs-v15");
    }
}
