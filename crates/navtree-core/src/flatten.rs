//! Depth-first, document-order iteration over leaves.

use std::iter::FusedIterator;
use std::slice;

use crate::model::{NavItem, NavigationEntry, NavigationSection, SectionBody};

/// A leaf and the labels of the sections enclosing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEntry<'a> {
    /// Enclosing section labels from the root; excludes the leaf's own label.
    pub path: Vec<&'a str>,
    pub entry: &'a NavigationEntry,
}

/// Lazy leaf iterator returned by [`NavigationTree::flatten`].
///
/// [`NavigationTree::flatten`]: crate::NavigationTree::flatten
#[derive(Debug, Clone)]
pub struct Flatten<'a> {
    sections: slice::Iter<'a, NavigationSection>,
    stack: Vec<slice::Iter<'a, NavItem>>,
    path: Vec<&'a str>,
}

impl<'a> Flatten<'a> {
    pub(crate) fn new(sections: &'a [NavigationSection]) -> Self {
        Self {
            sections: sections.iter(),
            stack: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Descend into a section, or yield it directly if it is a link.
    fn enter(&mut self, section: &'a NavigationSection) -> Option<FlatEntry<'a>> {
        match section.body() {
            SectionBody::Link(entry) => Some(FlatEntry {
                path: self.path.clone(),
                entry,
            }),
            SectionBody::Items(items) => {
                self.path.push(section.label());
                self.stack.push(items.iter());
                None
            }
        }
    }
}

impl<'a> Iterator for Flatten<'a> {
    type Item = FlatEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(items) = self.stack.last_mut() {
                match items.next() {
                    Some(NavItem::Entry(entry)) => {
                        return Some(FlatEntry {
                            path: self.path.clone(),
                            entry,
                        });
                    }
                    Some(NavItem::Section(section)) => {
                        if let Some(flat) = self.enter(section) {
                            return Some(flat);
                        }
                    }
                    None => {
                        self.stack.pop();
                        self.path.pop();
                    }
                }
                continue;
            }

            let section = self.sections.next()?;
            if let Some(flat) = self.enter(section) {
                return Some(flat);
            }
        }
    }
}

impl FusedIterator for Flatten<'_> {}

#[cfg(test)]
mod tests {
    use crate::spec::ItemSpec;
    use crate::NavigationTree;

    #[test]
    fn is_lazy_and_can_stop_early() {
        let tree = NavigationTree::build(
            "Docs",
            vec![ItemSpec::group(
                "Intro",
                vec![
                    ItemSpec::slug("A", "a"),
                    ItemSpec::slug("B", "b"),
                    ItemSpec::slug("C", "c"),
                ],
            )],
        )
        .unwrap();

        let mut flat = tree.flatten();

        assert_eq!(flat.next().map(|f| f.entry.label()), Some("A"));
        let rest: Vec<_> = flat.clone().map(|f| f.entry.label()).collect();
        assert_eq!(rest, vec!["B", "C"]);
        assert_eq!(flat.nth(1).map(|f| f.entry.label()), Some("C"));
        assert!(flat.next().is_none());
        assert!(flat.next().is_none());
    }

    #[test]
    fn pops_path_when_leaving_nested_section() {
        let tree = NavigationTree::build(
            "Docs",
            vec![ItemSpec::group(
                "Outer",
                vec![
                    ItemSpec::group("Inner", vec![ItemSpec::slug("Deep", "deep")]),
                    ItemSpec::slug("Shallow", "shallow"),
                ],
            )],
        )
        .unwrap();

        let paths: Vec<Vec<&str>> = tree.flatten().map(|f| f.path).collect();

        assert_eq!(paths, vec![vec!["Outer", "Inner"], vec!["Outer"]]);
    }
}
