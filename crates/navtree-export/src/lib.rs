//! Export validated navigation trees for static-site engines.
//!
//! The site engine owns rendering; this crate only hands it data: a
//! Starlight-style sidebar, or a per-page manifest of breadcrumbs and
//! prev/next links.

pub mod manifest;
pub mod render;
pub mod starlight;

pub use manifest::{build_manifest, Manifest, ManifestLink, ManifestPage};
pub use render::{render, ExportError, ExportFormat};
pub use starlight::sidebar;
