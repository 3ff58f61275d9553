//! Serialize a tree in one of the export formats.

use std::fmt;
use std::str::FromStr;

use navtree_core::NavigationTree;

use crate::manifest::build_manifest;
use crate::starlight::sidebar;

/// Available export shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Starlight `sidebar` array
    #[default]
    Starlight,
    /// Flat page manifest with breadcrumbs and prev/next
    Manifest,
    /// The tree itself
    Tree,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Starlight => "starlight",
            Self::Manifest => "manifest",
            Self::Tree => "tree",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "starlight" => Ok(Self::Starlight),
            "manifest" => Ok(Self::Manifest),
            "tree" => Ok(Self::Tree),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Unknown export format '{0}' (expected starlight, manifest or tree)")]
    UnknownFormat(String),

    #[error("Failed to serialize navigation: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Render `tree` as pretty-printed JSON in `format`.
pub fn render(tree: &NavigationTree, format: ExportFormat) -> Result<String, ExportError> {
    let json = match format {
        ExportFormat::Starlight => serde_json::to_string_pretty(&sidebar(tree))?,
        ExportFormat::Manifest => serde_json::to_string_pretty(&build_manifest(tree))?,
        ExportFormat::Tree => serde_json::to_string_pretty(tree)?,
    };

    tracing::info!("Exported navigation as {} ({} bytes)", format, json.len());

    Ok(json)
}
