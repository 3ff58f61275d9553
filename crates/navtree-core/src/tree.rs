//! The validated navigation tree.
//!
//! A tree is built once from declarative input and never mutated. Building
//! walks the whole input, collecting every problem, and only returns a tree
//! when there are none. Alongside validation it records each leaf's position
//! so that lookups don't need to search.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::content::ContentIndex;
use crate::error::{Ambiguity, LookupError, NodePath, ValidationError, ValidationIssue};
use crate::flatten::Flatten;
use crate::model::{Destination, NavItem, NavigationEntry, NavigationSection, SectionBody};
use crate::spec::{ItemSpec, SiteSpec};

/// Child indices from the top-level section down to a leaf.
type Route = Vec<usize>;

/// An immutable, validated sidebar.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationTree {
    title: String,
    sections: Vec<NavigationSection>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    social: BTreeMap<String, String>,
    /// Leaf routes in document order.
    #[serde(skip)]
    leaves: Vec<Route>,
    /// Slug to position in `leaves`.
    #[serde(skip)]
    slug_index: HashMap<String, usize>,
}

impl PartialEq for NavigationTree {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.sections == other.sections && self.social == other.social
    }
}

impl Eq for NavigationTree {}

/// Leaves adjacent to a page in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination<'a> {
    pub prev: Option<&'a NavigationEntry>,
    pub next: Option<&'a NavigationEntry>,
}

impl NavigationTree {
    /// Validate `sections` and build a tree titled `title`.
    ///
    /// Fails with every issue found, never just the first.
    pub fn build(
        title: impl Into<String>,
        sections: Vec<ItemSpec>,
    ) -> Result<Self, ValidationError> {
        Self::build_with_social(title.into(), sections, BTreeMap::new())
    }

    /// Build from a decoded site declaration, social links included.
    pub fn from_spec(spec: SiteSpec) -> Result<Self, ValidationError> {
        Self::build_with_social(spec.title, spec.sections, spec.social)
    }

    fn build_with_social(
        title: String,
        sections: Vec<ItemSpec>,
        social: BTreeMap<String, String>,
    ) -> Result<Self, ValidationError> {
        let mut validator = Validator::default();

        if title.trim().is_empty() {
            validator.issues.push(ValidationIssue::EmptyTitle);
        }
        if sections.is_empty() {
            validator.issues.push(ValidationIssue::EmptySections);
        }
        for (platform, url) in &social {
            if !is_valid_href(url) {
                validator.issues.push(ValidationIssue::InvalidHref {
                    href: url.clone(),
                    path: NodePath::new(vec!["social".to_string(), platform.clone()]),
                });
            }
        }

        let root = NodePath::default();
        let built: Vec<Option<NavigationSection>> = sections
            .into_iter()
            .enumerate()
            .map(|(index, spec)| validator.section(spec, &root, index))
            .collect();

        if !validator.issues.is_empty() {
            tracing::debug!(
                issues = validator.issues.len(),
                "Navigation validation failed"
            );
            return Err(ValidationError::new(validator.issues));
        }

        // No issues means every node was built.
        let sections: Vec<NavigationSection> = built.into_iter().flatten().collect();

        tracing::debug!(
            sections = sections.len(),
            leaves = validator.leaves.len(),
            "Built navigation tree"
        );

        Ok(Self {
            title,
            sections,
            social,
            leaves: validator.leaves,
            slug_index: validator.slug_index,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Top-level sections in render order.
    pub fn sections(&self) -> &[NavigationSection] {
        &self.sections
    }

    pub fn social(&self) -> &BTreeMap<String, String> {
        &self.social
    }

    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Every leaf in document order with the labels of its enclosing sections.
    pub fn flatten(&self) -> Flatten<'_> {
        Flatten::new(&self.sections)
    }

    /// All slugs in document order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> + '_ {
        self.flatten().filter_map(|flat| flat.entry.slug())
    }

    pub fn find_by_slug(&self, slug: &str) -> Result<&NavigationEntry, LookupError> {
        let position = self.position(slug)?;
        self.leaf(position)
            .map(|(_, entry)| entry)
            .ok_or_else(|| LookupError::SlugNotFound(slug.to_string()))
    }

    /// Section labels leading to `slug`, followed by the leaf's own label.
    pub fn breadcrumbs(&self, slug: &str) -> Result<Vec<&str>, LookupError> {
        let position = self.position(slug)?;
        let (mut trail, entry) = self
            .leaf(position)
            .ok_or_else(|| LookupError::SlugNotFound(slug.to_string()))?;
        trail.push(entry.label());
        Ok(trail)
    }

    /// Previous and next leaves around `slug`.
    pub fn pagination(&self, slug: &str) -> Result<Pagination<'_>, LookupError> {
        let position = self.position(slug)?;
        Ok(self.pagination_at(position))
    }

    /// Like [`pagination`](Self::pagination), by position in [`flatten`](Self::flatten) order.
    pub fn pagination_at(&self, position: usize) -> Pagination<'_> {
        let prev = position
            .checked_sub(1)
            .and_then(|p| self.leaf(p))
            .map(|(_, entry)| entry);
        let next = position
            .checked_add(1)
            .and_then(|p| self.leaf(p))
            .map(|(_, entry)| entry);
        Pagination { prev, next }
    }

    /// Check every slug against the pages in `content`.
    pub fn verify_content(&self, content: &ContentIndex) -> Result<(), ValidationError> {
        let issues: Vec<ValidationIssue> = self
            .flatten()
            .filter_map(|flat| {
                let slug = flat.entry.slug()?;
                if content.contains(slug) {
                    return None;
                }
                let mut segments: Vec<String> =
                    flat.path.iter().map(|s| (*s).to_string()).collect();
                segments.push(flat.entry.label().to_string());
                Some(ValidationIssue::UnresolvedSlug {
                    slug: slug.to_string(),
                    path: NodePath::new(segments),
                })
            })
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            tracing::debug!(unresolved = issues.len(), "Slugs without content");
            Err(ValidationError::new(issues))
        }
    }

    fn position(&self, slug: &str) -> Result<usize, LookupError> {
        self.slug_index
            .get(slug)
            .copied()
            .ok_or_else(|| LookupError::SlugNotFound(slug.to_string()))
    }

    fn leaf(&self, position: usize) -> Option<(Vec<&str>, &NavigationEntry)> {
        self.walk(self.leaves.get(position)?)
    }

    /// Follow a route to its leaf, collecting the enclosing section labels.
    fn walk(&self, route: &[usize]) -> Option<(Vec<&str>, &NavigationEntry)> {
        let (&first, mut rest) = route.split_first()?;
        let mut section = self.sections.get(first)?;
        let mut path = Vec::new();

        loop {
            match section.body() {
                SectionBody::Link(entry) => return rest.is_empty().then_some((path, entry)),
                SectionBody::Items(items) => {
                    path.push(section.label());
                    let (&index, tail) = rest.split_first()?;
                    rest = tail;
                    match items.get(index)? {
                        NavItem::Entry(entry) => return rest.is_empty().then_some((path, entry)),
                        NavItem::Section(next) => section = next,
                    }
                }
            }
        }
    }
}

#[derive(Default)]
struct Validator {
    issues: Vec<ValidationIssue>,
    /// First path seen for each slug.
    seen_slugs: HashMap<String, NodePath>,
    leaves: Vec<Route>,
    slug_index: HashMap<String, usize>,
}

impl Validator {
    /// A top-level item. Without `items` it becomes a link section.
    fn section(
        &mut self,
        spec: ItemSpec,
        parent: &NodePath,
        index: usize,
    ) -> Option<NavigationSection> {
        let collapsed = spec.collapsed.unwrap_or(false);
        match self.item(spec, parent, index, vec![index])? {
            NavItem::Section(section) => Some(section),
            NavItem::Entry(entry) => Some(NavigationSection::new(
                entry.label().to_string(),
                collapsed,
                SectionBody::Link(entry),
            )),
        }
    }

    fn item(
        &mut self,
        spec: ItemSpec,
        parent: &NodePath,
        index: usize,
        route: Route,
    ) -> Option<NavItem> {
        let path = parent.child(&spec.label, index);
        let mut valid = true;

        if spec.label.trim().is_empty() {
            self.issues.push(ValidationIssue::EmptyLabel { path: path.clone() });
            valid = false;
        }

        let Some(items) = spec.items else {
            let destination = self.destination(&spec.label, &path, spec.slug, spec.href)?;
            if !valid {
                return None;
            }
            self.record_leaf(&destination, route);
            return Some(NavItem::Entry(NavigationEntry::new(spec.label, destination)));
        };

        if spec.slug.is_some() || spec.href.is_some() {
            self.issues.push(ValidationIssue::AmbiguousDestination {
                label: spec.label.clone(),
                path: path.clone(),
                reason: Ambiguity::ChildrenAndLink,
            });
            valid = false;
        }
        if items.is_empty() {
            self.issues.push(ValidationIssue::EmptySection { path: path.clone() });
            valid = false;
        }

        let mut children = Vec::with_capacity(items.len());
        for (child_index, child) in items.into_iter().enumerate() {
            let mut child_route = route.clone();
            child_route.push(child_index);
            match self.item(child, &path, child_index, child_route) {
                Some(item) => children.push(item),
                None => valid = false,
            }
        }

        valid.then(|| {
            NavItem::Section(NavigationSection::new(
                spec.label,
                spec.collapsed.unwrap_or(false),
                SectionBody::Items(children),
            ))
        })
    }

    /// Resolve an entry's slug/href pair into exactly one destination.
    fn destination(
        &mut self,
        label: &str,
        path: &NodePath,
        slug: Option<String>,
        href: Option<String>,
    ) -> Option<Destination> {
        let destination = match (slug, href) {
            (Some(slug), None) => Destination::Slug(slug),
            (None, Some(href)) => Destination::Href(href),
            (slug, _) => {
                let reason = if slug.is_some() {
                    Ambiguity::BothSet
                } else {
                    Ambiguity::NeitherSet
                };
                self.issues.push(ValidationIssue::AmbiguousDestination {
                    label: label.to_string(),
                    path: path.clone(),
                    reason,
                });
                return None;
            }
        };

        match &destination {
            Destination::Slug(slug) => {
                if !is_valid_slug(slug) {
                    self.issues.push(ValidationIssue::InvalidSlug {
                        slug: slug.clone(),
                        path: path.clone(),
                    });
                    return None;
                }
                if let Some(first) = self.seen_slugs.get(slug) {
                    self.issues.push(ValidationIssue::DuplicateSlug {
                        slug: slug.clone(),
                        first: first.clone(),
                        second: path.clone(),
                    });
                    return None;
                }
                self.seen_slugs.insert(slug.clone(), path.clone());
            }
            Destination::Href(href) => {
                if !is_valid_href(href) {
                    self.issues.push(ValidationIssue::InvalidHref {
                        href: href.clone(),
                        path: path.clone(),
                    });
                    return None;
                }
            }
        }

        Some(destination)
    }

    fn record_leaf(&mut self, destination: &Destination, route: Route) {
        if let Destination::Slug(slug) = destination {
            self.slug_index.insert(slug.clone(), self.leaves.len());
        }
        self.leaves.push(route);
    }
}

/// Lowercase path segments of `[a-z0-9._-]`, no leading or trailing slash.
fn is_valid_slug(slug: &str) -> bool {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| {
        Regex::new(r"^[a-z0-9._-]+(/[a-z0-9._-]+)*$").expect("slug pattern is valid")
    })
    .is_match(slug)
}

/// Absolute URL, `mailto:` address, or site-absolute path.
fn is_valid_href(href: &str) -> bool {
    static HREF: OnceLock<Regex> = OnceLock::new();
    HREF.get_or_init(|| {
        Regex::new(r"^([a-zA-Z][a-zA-Z0-9+.-]*://\S+|mailto:\S+|/\S*)$")
            .expect("href pattern is valid")
    })
    .is_match(href)
}
