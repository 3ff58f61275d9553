//! Starlight `sidebar` configuration output.

use navtree_core::{
    Destination, NavItem, NavigationEntry, NavigationSection, NavigationTree, SectionBody,
};
use serde_json::{json, Map, Value};

/// Convert a tree into the array Starlight expects under `sidebar`.
pub fn sidebar(tree: &NavigationTree) -> Value {
    Value::Array(tree.sections().iter().map(section).collect())
}

fn section(section: &NavigationSection) -> Value {
    match section.body() {
        SectionBody::Link(entry) => link(entry),
        SectionBody::Items(items) => {
            let mut object = Map::new();
            object.insert("label".into(), json!(section.label()));
            if section.collapsed() {
                object.insert("collapsed".into(), json!(true));
            }
            object.insert(
                "items".into(),
                Value::Array(items.iter().map(item).collect()),
            );
            Value::Object(object)
        }
    }
}

fn item(item: &NavItem) -> Value {
    match item {
        NavItem::Entry(entry) => link(entry),
        NavItem::Section(nested) => section(nested),
    }
}

fn link(entry: &NavigationEntry) -> Value {
    match entry.destination() {
        Destination::Slug(slug) => json!({ "label": entry.label(), "slug": slug }),
        Destination::Href(href) => json!({ "label": entry.label(), "link": href }),
    }
}
