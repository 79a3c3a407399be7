//! Input: recognized movement keys, the per-frame direction snapshot, and the
//! event messages the host delivers to the session.
//!
//! # Invariants
//! - Unrecognized keys are ignored, never an error.
//! - A direction reads as pressed while any key bound to it is held.
//! - Tracking is pure bookkeeping; movement logic lives in the kernel.

pub mod action;
mod tracker;

pub use action::{InputEvent, Key, MoveDirection};
pub use tracker::{InputState, InputTracker};

pub fn crate_info() -> &'static str {
    "gallery-input v0.1.0"
}
