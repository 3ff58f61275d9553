//! Content directory index for resolving slugs to pages.
//!
//! Scans a content directory for Markdown/MDX pages and derives the slug each
//! page is served under, so a sidebar can be checked against what exists.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::frontmatter::{extract_frontmatter, FrontmatterError};
use crate::NavigationTree;

/// A page found in the content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPage {
    /// Slug the page is served under
    pub slug: String,

    /// Source file path
    pub path: PathBuf,

    /// Title from frontmatter, if any
    pub title: Option<String>,
}

/// Pages keyed by slug.
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    pages: BTreeMap<String, ContentPage>,
}

impl ContentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `content_dir` for `.md` and `.mdx` pages.
    pub fn scan(content_dir: &Path) -> Result<Self, ContentError> {
        if !content_dir.is_dir() {
            return Err(ContentError::DirectoryNotFound(
                content_dir.display().to_string(),
            ));
        }

        let mut index = Self::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "md" && ext != "mdx" {
                continue;
            }

            let source = match fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!("Skipping unreadable page {}: {}", path.display(), e);
                    continue;
                }
            };

            let frontmatter =
                extract_frontmatter(&source).map_err(|source| ContentError::Frontmatter {
                    path: path.display().to_string(),
                    source,
                })?;

            let relative = path.strip_prefix(content_dir).unwrap_or(path);
            let (title, slug_override) = frontmatter
                .map(|fm| (fm.title, fm.slug))
                .unwrap_or_default();
            let slug = slug_override.unwrap_or_else(|| slug_from_path(relative));

            index.insert(ContentPage {
                slug,
                path: path.to_path_buf(),
                title,
            });
        }

        tracing::info!(
            "Indexed {} content pages from {}",
            index.len(),
            content_dir.display()
        );

        Ok(index)
    }

    /// Build an index from known slugs, without touching the filesystem.
    pub fn from_slugs<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::new();
        for slug in slugs {
            let slug = slug.into();
            index.insert(ContentPage {
                path: PathBuf::from(format!("{slug}.md")),
                slug,
                title: None,
            });
        }
        index
    }

    /// Add a page. A later page with the same slug replaces the earlier one.
    pub fn insert(&mut self, page: ContentPage) {
        if let Some(previous) = self.pages.insert(page.slug.clone(), page) {
            tracing::warn!(
                "Slug '{}' is claimed by more than one page; {} is ignored",
                previous.slug,
                previous.path.display()
            );
        }
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.pages.contains_key(slug)
    }

    pub fn get(&self, slug: &str) -> Option<&ContentPage> {
        self.pages.get(slug)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages sorted by slug.
    pub fn pages(&self) -> impl Iterator<Item = &ContentPage> {
        self.pages.values()
    }

    /// Pages that no sidebar entry links to, sorted by slug.
    pub fn unlisted<'a>(&'a self, tree: &NavigationTree) -> Vec<&'a ContentPage> {
        let listed: HashSet<&str> = tree.slugs().collect();
        self.pages
            .values()
            .filter(|page| !listed.contains(page.slug.as_str()))
            .collect()
    }
}

/// Derive a slug from a path relative to the content directory.
///
/// `intro/step-01.md` becomes `intro/step-01`; a trailing `index` segment is
/// dropped, so `guide/index.mdx` becomes `guide` and `index.md` becomes `""`.
pub fn slug_from_path(relative: &Path) -> String {
    let without_ext = relative.with_extension("");
    let mut segments: Vec<String> = without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_lowercase())
        .collect();

    if segments.last().map(String::as_str) == Some("index") {
        segments.pop();
    }

    segments.join("/")
}

/// Errors that can occur while indexing content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Content directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Bad frontmatter in {path}: {source}")]
    Frontmatter {
        path: String,
        #[source]
        source: FrontmatterError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::ItemSpec;
    use crate::ValidationIssue;
    use tempfile::tempdir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn derives_slugs_from_paths() {
        assert_eq!(slug_from_path(Path::new("intro/step-01.md")), "intro/step-01");
        assert_eq!(slug_from_path(Path::new("Guide/Index.mdx")), "guide");
        assert_eq!(slug_from_path(Path::new("index.md")), "");
    }

    #[test]
    fn scans_markdown_and_mdx_pages() {
        let temp = tempdir().unwrap();
        write(temp.path(), "intro/step-00.md", "---\ntitle: Step 0\n---\n# Hi\n");
        write(temp.path(), "intro/step-01.mdx", "# No frontmatter\n");
        write(temp.path(), "intro/notes.txt", "ignored");

        let index = ContentIndex::scan(temp.path()).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(
            index.get("intro/step-00").and_then(|p| p.title.as_deref()),
            Some("Step 0")
        );
        assert!(index.contains("intro/step-01"));
    }

    #[test]
    fn frontmatter_slug_overrides_path() {
        let temp = tempdir().unwrap();
        write(
            temp.path(),
            "drafts/first.md",
            "---\ntitle: Route Handler\nslug: route-handler/step-01\n---\n",
        );

        let index = ContentIndex::scan(temp.path()).unwrap();

        assert!(index.contains("route-handler/step-01"));
        assert!(!index.contains("drafts/first"));
    }

    #[test]
    fn errors_on_missing_directory() {
        let temp = tempdir().unwrap();

        let result = ContentIndex::scan(&temp.path().join("nope"));

        assert!(matches!(result, Err(ContentError::DirectoryNotFound(_))));
    }

    #[test]
    fn errors_on_bad_frontmatter_with_path() {
        let temp = tempdir().unwrap();
        write(temp.path(), "broken.md", "---\ntitle: x\n");

        let err = ContentIndex::scan(temp.path()).unwrap_err();

        assert!(err.to_string().contains("broken.md"));
    }

    #[test]
    fn verify_content_reports_every_unresolved_slug() {
        let tree = NavigationTree::build(
            "Docs",
            vec![ItemSpec::group(
                "Intro",
                vec![
                    ItemSpec::slug("Step 0", "intro/step-00"),
                    ItemSpec::slug("Step 1", "intro/step-01"),
                    ItemSpec::slug("Step 2", "intro/step-02"),
                    ItemSpec::href("Repo", "https://github.com/withered-flowers/docs-nextjs-v15"),
                ],
            )],
        )
        .unwrap();
        let content = ContentIndex::from_slugs(["intro/step-01"]);

        let issues = tree.verify_content(&content).unwrap_err().into_issues();

        let slugs: Vec<&str> = issues
            .iter()
            .filter_map(|issue| match issue {
                ValidationIssue::UnresolvedSlug { slug, .. } => Some(slug.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(slugs, vec!["intro/step-00", "intro/step-02"]);
    }

    #[test]
    fn lists_pages_missing_from_sidebar() {
        let tree = NavigationTree::build(
            "Docs",
            vec![ItemSpec::group("Intro", vec![ItemSpec::slug("Step 0", "intro/step-00")])],
        )
        .unwrap();
        let content = ContentIndex::from_slugs(["intro/step-00", "intro/step-01"]);

        assert!(tree.verify_content(&content).is_ok());
        let unlisted: Vec<&str> = content
            .unlisted(&tree)
            .into_iter()
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(unlisted, vec!["intro/step-01"]);
    }
}
