//! Gallery kernel: the per-frame spatial interaction core.
//!
//! Per frame: input snapshot -> movement proposal -> collision check (revert
//! on hit) -> proximity disclosure. Picking runs on click events, outside the
//! frame step.
//!
//! # Invariants
//! - Static geometry is validated and its bounding boxes computed once, at scene build.
//! - Every operation is synchronous and deterministic for the same inputs.
//! - Picking and disclosure never mutate the scene or the viewpoint.

pub mod bounds;
pub mod clock;
pub mod collision;
pub mod config;
pub mod gallery;
pub mod hooks;
pub mod movement;
pub mod pick;
pub mod proximity;
pub mod scene;
pub mod viewpoint;

pub use bounds::Shape;
pub use clock::FrameClock;
pub use collision::MoveOutcome;
pub use config::{DisclosurePolicy, GalleryConfig};
pub use gallery::{FrameEvent, FrameReport, Gallery};
pub use hooks::{ContentDisplay, ReferenceOpener};
pub use pick::Ray;
pub use proximity::{DisclosureChange, DisclosureState};
pub use scene::{Exhibit, Obstacle, Scene, SceneBuilder, SceneError};
pub use viewpoint::Viewpoint;
