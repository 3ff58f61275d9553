//! Declarative sidebar input, as decoded from a configuration file.
//!
//! Nothing here is validated. Fields that must be mutually exclusive are all
//! optional so that [`NavigationTree::build`](crate::NavigationTree::build)
//! can see and report every violation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A whole site declaration: title, sidebar, social links.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteSpec {
    #[serde(default)]
    pub title: String,

    /// Top-level sections in render order.
    #[serde(default, alias = "sidebar")]
    pub sections: Vec<ItemSpec>,

    /// Platform name to profile URL, e.g. `github`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub social: BTreeMap<String, String>,
}

/// One sidebar item. Having `items` makes it a section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemSpec {
    #[serde(default)]
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, alias = "link", skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,

    // Last, so TOML output writes plain keys before nested tables.
    #[serde(default, alias = "children", skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ItemSpec>>,
}

impl ItemSpec {
    /// A leaf pointing at internal content.
    pub fn slug(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    /// A leaf pointing at an external address.
    pub fn href(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            ..Self::default()
        }
    }

    /// A group of nested items.
    pub fn group(label: impl Into<String>, items: Vec<ItemSpec>) -> Self {
        Self {
            label: label.into(),
            items: Some(items),
            ..Self::default()
        }
    }
}

/// Serialization formats a sidebar declaration can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Yaml,
    Json,
    Toml,
}

impl SpecFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, SpecError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(SpecError::UnknownFormat(path.display().to_string())),
        }
    }
}

impl SiteSpec {
    pub fn parse(source: &str, format: SpecFormat) -> Result<Self, SpecError> {
        match format {
            SpecFormat::Yaml => Self::from_yaml_str(source),
            SpecFormat::Json => Self::from_json_str(source),
            SpecFormat::Toml => Self::from_toml_str(source),
        }
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, SpecError> {
        serde_yaml::from_str(source).map_err(|e| SpecError::InvalidYaml(e.to_string()))
    }

    pub fn from_json_str(source: &str) -> Result<Self, SpecError> {
        serde_json::from_str(source).map_err(|e| SpecError::InvalidJson(e.to_string()))
    }

    pub fn from_toml_str(source: &str) -> Result<Self, SpecError> {
        toml::from_str(source).map_err(|e| SpecError::InvalidToml(e.to_string()))
    }

    /// Serialize in `format`, e.g. to seed a new project.
    pub fn to_string(&self, format: SpecFormat) -> Result<String, SpecError> {
        let result = match format {
            SpecFormat::Yaml => serde_yaml::to_string(self).map_err(|e| e.to_string()),
            SpecFormat::Json => serde_json::to_string_pretty(self).map_err(|e| e.to_string()),
            SpecFormat::Toml => toml::to_string(self).map_err(|e| e.to_string()),
        };
        result.map_err(|message| SpecError::Serialize { format, message })
    }
}

/// Errors decoding a sidebar declaration.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("Unsupported sidebar format (expected .yaml, .yml, .json or .toml): {0}")]
    UnknownFormat(String),

    #[error("Invalid YAML in sidebar: {0}")]
    InvalidYaml(String),

    #[error("Invalid JSON in sidebar: {0}")]
    InvalidJson(String),

    #[error("Invalid TOML in sidebar: {0}")]
    InvalidToml(String),

    #[error("Failed to write sidebar as {format:?}: {message}")]
    Serialize { format: SpecFormat, message: String },
}
