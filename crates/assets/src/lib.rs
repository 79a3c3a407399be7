//! Scene catalogs: the static description a gallery session is built from.
//!
//! A catalog lists walls and exhibits with their placement and info records,
//! plus optional tunables and a starting viewpoint. Catalogs are plain data;
//! all validation happens when they are turned into a kernel [`Scene`].
//!
//! [`Scene`]: gallery_kernel::Scene

pub mod builtin;
mod catalog;

pub use catalog::{CatalogError, ExhibitDescription, SceneDescription, ViewpointStart, WallDescription};

pub fn crate_info() -> &'static str {
    "gallery-assets v0.1.0"
}
