//! Frontmatter extraction from content pages.

use serde::Deserialize;

/// The frontmatter fields that affect navigation.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Frontmatter {
    /// Page title
    #[serde(default)]
    pub title: Option<String>,

    /// Slug override; replaces the path-derived slug
    #[serde(default)]
    pub slug: Option<String>,
}

/// Extract frontmatter from a Markdown/MDX page.
///
/// Returns `None` when the page has no frontmatter block.
pub fn extract_frontmatter(source: &str) -> Result<Option<Frontmatter>, FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok(None);
    }

    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = after_open[..close_pos].trim();
    if yaml_content.is_empty() {
        return Ok(Some(Frontmatter::default()));
    }

    serde_yaml::from_str(yaml_content)
        .map(Some)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_title_and_slug() {
        let source = r#"---
title: Step 1 - Inisialisasi Proyek
slug: intro/step-01
description: ignored
---

# Inisialisasi
"#;

        let fm = extract_frontmatter(source).unwrap().unwrap();

        assert_eq!(fm.title.as_deref(), Some("Step 1 - Inisialisasi Proyek"));
        assert_eq!(fm.slug.as_deref(), Some("intro/step-01"));
    }

    #[test]
    fn handles_no_frontmatter() {
        let fm = extract_frontmatter("# Just Markdown\n").unwrap();

        assert!(fm.is_none());
    }

    #[test]
    fn handles_empty_block() {
        let fm = extract_frontmatter("---\n---\nbody").unwrap();

        assert_eq!(fm, Some(Frontmatter::default()));
    }

    #[test]
    fn errors_on_unclosed_frontmatter() {
        let result = extract_frontmatter("---\ntitle: Test\n# No closing");

        assert!(matches!(result, Err(FrontmatterError::Unclosed)));
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let result = extract_frontmatter("---\ntitle: [invalid yaml\n---\n");

        assert!(matches!(result, Err(FrontmatterError::InvalidYaml(_))));
    }
}
