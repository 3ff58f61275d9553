//! Validated navigation trees for documentation sidebars.
//!
//! A sidebar is declared as data ([`SiteSpec`]), validated in one pass into an
//! immutable [`NavigationTree`], then traversed or queried by the site engine.
//!
//! ```
//! use navtree_core::{ItemSpec, NavigationTree};
//!
//! let tree = NavigationTree::build(
//!     "Docs",
//!     vec![ItemSpec::group("Intro", vec![ItemSpec::slug("Step 1", "intro/step-01")])],
//! )
//! .unwrap();
//!
//! let flat: Vec<_> = tree.flatten().collect();
//! assert_eq!(flat[0].path, vec!["Intro"]);
//! assert_eq!(tree.find_by_slug("intro/step-01").unwrap().label(), "Step 1");
//! ```

pub mod content;
pub mod error;
pub mod flatten;
pub mod frontmatter;
pub mod model;
pub mod spec;
pub mod tree;

pub use content::{ContentError, ContentIndex, ContentPage};
pub use error::{Ambiguity, LookupError, NodePath, ValidationError, ValidationIssue};
pub use flatten::{FlatEntry, Flatten};
pub use model::{Destination, NavItem, NavigationEntry, NavigationSection, SectionBody};
pub use spec::{ItemSpec, SiteSpec, SpecError, SpecFormat};
pub use tree::{NavigationTree, Pagination};
