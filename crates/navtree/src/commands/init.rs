//! Initialize a navtree project.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use navtree_core::{ItemSpec, NavigationTree, SiteSpec, SpecFormat};
use serde::Serialize;

use crate::config::{load_config, load_tree};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing navtree...");

    if !config_path.exists() || yes {
        write_file(config_path, DEFAULT_CONFIG)?;
        tracing::info!("Created {}", config_path.display());
    } else {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
    }

    let config = load_config(config_path)?;

    let sidebar_path = config.sidebar_path();
    let tree = if !sidebar_path.exists() || yes {
        let site = default_site();
        let format = SpecFormat::from_path(&sidebar_path)?;
        write_file(&sidebar_path, &site.to_string(format)?)?;
        tracing::info!("Created {}", sidebar_path.display());
        NavigationTree::from_spec(site)?
    } else {
        tracing::info!("Keeping existing {}", sidebar_path.display());
        load_tree(&config)?
    };

    let created = write_stub_pages(&tree, &config.content_dir(), yes)?;
    tracing::info!("Created {} content pages", created);

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'navtree check' to validate the sidebar.");

    Ok(())
}

/// Write `contents` to `path`, creating missing parent directories.
fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

#[derive(Serialize)]
struct StubFrontmatter<'a> {
    title: &'a str,
}

/// Write a placeholder page for every slug, titled with its sidebar label.
fn write_stub_pages(tree: &NavigationTree, content_dir: &Path, overwrite: bool) -> Result<usize> {
    let mut created = 0;

    for flat in tree.flatten() {
        let Some(slug) = flat.entry.slug() else {
            continue;
        };

        let page = content_dir.join(format!("{slug}.md"));
        if page.exists() && !overwrite {
            continue;
        }

        let frontmatter = serde_yaml::to_string(&StubFrontmatter {
            title: flat.entry.label(),
        })
        .with_context(|| format!("Failed to serialize frontmatter for {slug}"))?;
        write_file(&page, &format!("---\n{frontmatter}---\n\nWIP\n"))?;
        created += 1;
    }

    Ok(created)
}

/// The NextJS v15 tutorial sidebar.
fn default_site() -> SiteSpec {
    const INTRO: [&str; 14] = [
        "Step 0 - Kenalan dengan NextJS",
        "Step 1 - Inisialisasi Proyek",
        "Step 2 - Analisa File / Folder",
        "Step 3 - Jalankan Proyek",
        "Step 4 - Membuat Routing /about",
        "Step 5 - Menambahkan anchor pada /about",
        "Step 6 - Membuat Routing /dashboard",
        "Step 7 - Membuat Component DashboardSidebar",
        "Step 8 - Membuat Routing /dashboard/jokes",
        "Step 9 - Mempopulasikan data pada /dashboard/jokes",
        "Step 10 - Membuat halaman loading untuk /dashboard/jokes",
        "Step 11 - Membuat halaman error untuk /dashboard/jokes",
        "Step 12 - Menampilkan error yang di-throw dari server",
        "Step 13 - Membuat Dynamic Router /dashboard/jokes/[id]",
    ];

    let intro = INTRO
        .iter()
        .enumerate()
        .map(|(step, label)| ItemSpec::slug(*label, format!("intro/step-{step:02}")))
        .collect();

    SiteSpec {
        title: "Pembelajaran NextJS v15".to_string(),
        sections: vec![
            ItemSpec::group("Introduction", intro),
            ItemSpec::group(
                "Client & Server Component",
                vec![ItemSpec::slug("WIP", "client-server/step-01")],
            ),
            ItemSpec::group(
                "Route Handler",
                vec![ItemSpec::slug("WIP", "route-handler/step-01")],
            ),
            ItemSpec::group(
                "Authentication & Middleware",
                vec![ItemSpec::slug("WIP", "auth-middleware/step-01")],
            ),
        ],
        social: BTreeMap::from([(
            "github".to_string(),
            "https://github.com/withered-flowers/docs-nextjs-v15".to_string(),
        )]),
    }
}

const DEFAULT_CONFIG: &str = r#"# navtree configuration

[site]
# Sidebar declaration (.yaml, .yml, .json or .toml)
sidebar = "sidebar.yaml"

[content]
# Pages that sidebar slugs resolve to
dir = "src/content/docs"

[export]
# Where `navtree export` writes, "-" for stdout
output = "dist/sidebar.json"

# starlight, manifest or tree
format = "starlight"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use navtree_core::ContentIndex;
    use tempfile::tempdir;

    #[test]
    fn default_site_is_valid() {
        let tree = NavigationTree::from_spec(default_site()).unwrap();

        assert_eq!(tree.sections().len(), 4);
        assert_eq!(tree.len(), 17);
        assert_eq!(
            tree.find_by_slug("intro/step-13").unwrap().label(),
            "Step 13 - Membuat Dynamic Router /dashboard/jokes/[id]"
        );
    }

    #[test]
    fn init_creates_a_project_that_checks_clean() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("navtree.toml");

        run(&config_path, false).unwrap();

        let config = load_config(&config_path).unwrap();
        let tree = load_tree(&config).unwrap();
        let content = ContentIndex::scan(&config.content_dir()).unwrap();
        assert!(tree.verify_content(&content).is_ok());
        assert_eq!(
            content.get("intro/step-00").and_then(|p| p.title.as_deref()),
            Some("Step 0 - Kenalan dengan NextJS")
        );
    }

    #[test]
    fn init_keeps_existing_pages_without_yes() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("navtree.toml");
        let page = temp.path().join("src/content/docs/intro/step-00.md");
        fs::create_dir_all(page.parent().unwrap()).unwrap();
        fs::write(&page, "---\ntitle: Custom\n---\n").unwrap();

        run(&config_path, false).unwrap();

        assert_eq!(fs::read_to_string(&page).unwrap(), "---\ntitle: Custom\n---\n");
    }

    #[test]
    fn init_stubs_the_existing_sidebar() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("navtree.toml");
        let sidebar = "title: Mine\nsidebar:\n  - label: Mine\n    items:\n      - label: One\n        slug: mine/one\n";
        fs::write(temp.path().join("sidebar.yaml"), sidebar).unwrap();

        run(&config_path, false).unwrap();

        let docs = temp.path().join("src/content/docs");
        let content = ContentIndex::scan(&docs).unwrap();
        assert_eq!(content.len(), 1);
        assert!(content.contains("mine/one"));
        assert!(!docs.join("intro/step-00.md").exists());
        assert_eq!(fs::read_to_string(temp.path().join("sidebar.yaml")).unwrap(), sidebar);
    }

    #[test]
    fn init_writes_sidebar_in_the_configured_format() {
        for name in ["nav.json", "nav.toml", "nav.yml"] {
            let temp = tempdir().unwrap();
            let config_path = temp.path().join("navtree.toml");
            fs::write(&config_path, format!("[site]\nsidebar = \"{name}\"\n")).unwrap();

            run(&config_path, false).unwrap();

            let config = load_config(&config_path).unwrap();
            let tree = load_tree(&config).unwrap();
            assert_eq!(tree.title(), "Pembelajaran NextJS v15", "{name}");
            assert_eq!(tree.len(), 17, "{name}");
        }
    }

    #[test]
    fn init_creates_missing_config_directories() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("cfg/navtree.toml");

        run(&config_path, false).unwrap();

        assert!(config_path.exists());
        assert!(temp.path().join("cfg/sidebar.yaml").exists());
        assert!(temp.path().join("cfg/src/content/docs/intro/step-00.md").exists());
    }

    #[test]
    fn stub_titles_survive_quotes_and_backslashes() {
        let temp = tempdir().unwrap();
        let label = r#"Paths like C:\new and "quoted" /x/[id]"#;
        let tree = NavigationTree::build("Docs", vec![ItemSpec::slug(label, "odd")]).unwrap();

        let created = write_stub_pages(&tree, temp.path(), false).unwrap();

        assert_eq!(created, 1);
        let content = ContentIndex::scan(temp.path()).unwrap();
        assert_eq!(content.get("odd").and_then(|p| p.title.as_deref()), Some(label));
    }
}
