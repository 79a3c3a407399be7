//! Shared value types: transforms, axis-aligned boxes, exhibit records.
//!
//! # Invariants
//! - Every `Aabb` satisfies `min <= max` componentwise.
//! - Types here carry data only; spatial logic lives in `gallery-kernel`.

mod aabb;
mod types;

pub use aabb::Aabb;
pub use types::{ExhibitId, InfoRecord, Transform};
