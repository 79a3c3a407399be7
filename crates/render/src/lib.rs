//! Presentation adapters: the host side of the kernel's collaborator seams.
//!
//! # Invariants
//! - Nothing here mutates the session; presentation derives from session state.
//! - [`InfoPanel`] only changes through [`ContentDisplay`] calls made by the frame step.
//!
//! The text renderer stands in for a GPU view. The [`Renderer`] trait is the
//! seam; a graphical backend implements it without changing consumers.
//!
//! [`ContentDisplay`]: gallery_kernel::ContentDisplay

mod opener;
mod panel;
mod renderer;

pub use opener::LinkLog;
pub use panel::InfoPanel;
pub use renderer::{DebugTextRenderer, RenderView, Renderer, TopDownMap};

pub fn crate_info() -> &'static str {
    "gallery-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
