//! Validated navigation nodes.
//!
//! Values in this module are only produced by [`NavigationTree::build`], so
//! every invariant checked there holds for any instance a caller can see.
//!
//! [`NavigationTree::build`]: crate::NavigationTree::build

use serde::Serialize;

/// Where a leaf points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Internal content identifier, resolved by the site engine.
    Slug(String),
    /// External or site-absolute address.
    Href(String),
}

impl Destination {
    /// The raw destination string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Slug(s) | Self::Href(s) => s,
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slug(slug) => write!(f, "slug:{slug}"),
            Self::Href(href) => write!(f, "{href}"),
        }
    }
}

/// A clickable leaf link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    label: String,
    #[serde(flatten)]
    destination: Destination,
}

impl NavigationEntry {
    pub(crate) fn new(label: String, destination: Destination) -> Self {
        Self { label, destination }
    }

    /// Display text.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// The slug, if this entry points at internal content.
    pub fn slug(&self) -> Option<&str> {
        match &self.destination {
            Destination::Slug(slug) => Some(slug),
            Destination::Href(_) => None,
        }
    }

    /// The href, if this entry points at an external address.
    pub fn href(&self) -> Option<&str> {
        match &self.destination {
            Destination::Href(href) => Some(href),
            Destination::Slug(_) => None,
        }
    }
}

/// Contents of a section: nested items, or a single link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionBody {
    Items(Vec<NavItem>),
    /// The section itself is clickable. The entry carries the section label.
    Link(NavigationEntry),
}

/// A named group of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationSection {
    label: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    collapsed: bool,
    #[serde(flatten)]
    body: SectionBody,
}

impl NavigationSection {
    pub(crate) fn new(label: String, collapsed: bool, body: SectionBody) -> Self {
        Self {
            label,
            collapsed,
            body,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Renderer hint: start the group folded.
    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn body(&self) -> &SectionBody {
        &self.body
    }

    /// Child items, empty for a link section.
    pub fn items(&self) -> &[NavItem] {
        match &self.body {
            SectionBody::Items(items) => items,
            SectionBody::Link(_) => &[],
        }
    }

    /// The section's own link, if it has no children.
    pub fn link(&self) -> Option<&NavigationEntry> {
        match &self.body {
            SectionBody::Link(entry) => Some(entry),
            SectionBody::Items(_) => None,
        }
    }
}

/// A node below a top-level section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    Entry(NavigationEntry),
    Section(NavigationSection),
}

impl NavItem {
    pub fn label(&self) -> &str {
        match self {
            Self::Entry(entry) => entry.label(),
            Self::Section(section) => section.label(),
        }
    }
}
