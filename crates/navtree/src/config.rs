//! Project configuration (navtree.toml) and sidebar loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use navtree_core::{NavigationTree, SiteSpec, SpecFormat};
use serde::Deserialize;

/// Configuration file structure (navtree.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub export: ExportConfig,

    /// Directory that relative paths are resolved against.
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    /// Sidebar declaration (.yaml, .yml, .json or .toml)
    #[serde(default = "default_sidebar")]
    pub sidebar: String,
}

#[derive(Debug, Deserialize)]
pub struct ContentConfig {
    /// Directory holding the Markdown/MDX pages slugs resolve to
    #[serde(default = "default_content_dir")]
    pub dir: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            sidebar: default_sidebar(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_content_dir(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            format: default_format(),
        }
    }
}

fn default_sidebar() -> String {
    "sidebar.yaml".to_string()
}
fn default_content_dir() -> String {
    "src/content/docs".to_string()
}
fn default_output() -> String {
    "dist/sidebar.json".to_string()
}
fn default_format() -> String {
    "starlight".to_string()
}

impl ConfigFile {
    /// Resolve a configured path against the config file's directory.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(path)
    }

    pub fn sidebar_path(&self) -> PathBuf {
        self.resolve(&self.site.sidebar)
    }

    pub fn content_dir(&self) -> PathBuf {
        self.resolve(&self.content.dir)
    }
}

/// Load configuration if the file exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(config_path: &Path) -> Result<ConfigFile> {
    let base_dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    if config_path.exists() {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let mut config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        config.base_dir = base_dir;
        tracing::debug!("Loaded config from {}", config_path.display());
        return Ok(config);
    }

    tracing::debug!(
        "No config at {}, using defaults",
        config_path.display()
    );
    Ok(ConfigFile {
        base_dir,
        ..ConfigFile::default()
    })
}

/// Read and decode the sidebar declaration named by the config.
pub fn load_spec(config: &ConfigFile) -> Result<SiteSpec> {
    let path = config.sidebar_path();
    let format = SpecFormat::from_path(&path)?;
    let source = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read sidebar {}", path.display()))?;
    let spec = SiteSpec::parse(&source, format)
        .with_context(|| format!("Failed to parse sidebar {}", path.display()))?;
    Ok(spec)
}

/// Load and validate the sidebar, failing with every issue found.
pub fn load_tree(config: &ConfigFile) -> Result<NavigationTree> {
    let spec = load_spec(config)?;
    let tree = NavigationTree::from_spec(spec)?;
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_uses_defaults_relative_to_its_dir() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("navtree.toml")).unwrap();

        assert_eq!(config.sidebar_path(), temp.path().join("sidebar.yaml"));
        assert_eq!(config.content_dir(), temp.path().join("src/content/docs"));
        assert_eq!(config.export.format, "starlight");
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("navtree.toml");
        fs::write(&path, "[site]\nsidebar = \"nav.json\"\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.site.sidebar, "nav.json");
        assert_eq!(config.content.dir, "src/content/docs");
        assert_eq!(config.export.output, "dist/sidebar.json");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("navtree.toml");
        fs::write(&path, "[site\n").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn load_tree_reports_validation_issues() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("sidebar.yaml"),
            "title: Docs\nsections:\n  - label: Intro\n    items:\n      - label: A\n        slug: a\n        href: /a\n",
        )
        .unwrap();
        let config = load_config(&temp.path().join("navtree.toml")).unwrap();

        let err = load_tree(&config).unwrap_err();

        assert!(err.to_string().contains("both slug and href are set"));
    }
}
