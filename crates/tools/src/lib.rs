//! Developer tooling: read-only inspection of a gallery session.
//!
//! # Invariants
//! - Inspection never mutates the session.

mod inspector;

pub use inspector::{ExhibitInfo, GalleryInspector, GallerySummary};

pub fn crate_info() -> &'static str {
    "gallery-tools v0.1.0"
}
