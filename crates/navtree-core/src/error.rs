//! Validation and lookup errors.

use std::fmt;

/// Labels from the root down to a node, used to point at problems.
///
/// Unlabelled nodes appear as `[item N]` (1-based position among siblings).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<String>);

impl NodePath {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    pub(crate) fn child(&self, label: &str, index: usize) -> Self {
        let segment = if label.trim().is_empty() {
            format!("[item {}]", index + 1)
        } else {
            label.to_string()
        };
        let mut segments = self.0.clone();
        segments.push(segment);
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.0.join(" > "))
    }
}

/// What was wrong with a node's destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ambiguity {
    /// Entry has both `slug` and `href`.
    BothSet,
    /// Entry has neither `slug` nor `href`.
    NeitherSet,
    /// Section has children and its own destination.
    ChildrenAndLink,
}

impl fmt::Display for Ambiguity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BothSet => "both slug and href are set",
            Self::NeitherSet => "neither slug nor href is set",
            Self::ChildrenAndLink => "section has items and its own slug/href",
        })
    }
}

/// A single problem found while building a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("Site title is empty")]
    EmptyTitle,

    #[error("Sidebar has no sections")]
    EmptySections,

    #[error("Ambiguous destination for '{label}' at {path}: {reason}")]
    AmbiguousDestination {
        label: String,
        path: NodePath,
        reason: Ambiguity,
    },

    #[error("Duplicate slug '{slug}' at {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: NodePath,
        second: NodePath,
    },

    #[error("Empty label at {path}")]
    EmptyLabel { path: NodePath },

    #[error("Section {path} has an empty item list")]
    EmptySection { path: NodePath },

    #[error("Invalid slug '{slug}' at {path}")]
    InvalidSlug { slug: String, path: NodePath },

    #[error("Invalid href '{href}' at {path}")]
    InvalidHref { href: String, path: NodePath },

    #[error("Slug '{slug}' at {path} has no matching content")]
    UnresolvedSlug { slug: String, path: NodePath },
}

/// Every issue found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", summarize(.issues))]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub(crate) fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

/// Count line followed by one bullet per issue.
fn summarize(issues: &[ValidationIssue]) -> String {
    let noun = if issues.len() == 1 { "issue" } else { "issues" };
    let mut summary = format!("Navigation has {} {}:", issues.len(), noun);
    for issue in issues {
        summary.push_str(&format!("\n  - {issue}"));
    }
    summary
}

/// Errors from queries on a built tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Slug not found: {0}")]
    SlugNotFound(String),
}
