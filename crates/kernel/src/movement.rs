//! Movement integrator: turns the input snapshot and frame delta into a
//! candidate position. Acceptance is the collision detector's job.

use gallery_input::{InputState, MoveDirection};
use glam::Vec3;

use crate::viewpoint::Viewpoint;

/// Walking speed in world units per second, per pressed axis.
pub const MOVE_SPEED: f32 = 5.0;

/// Propose the next viewpoint position without touching the viewpoint.
///
/// Each pressed direction contributes `speed * delta_seconds` along the
/// viewpoint's horizontal forward or right axis, and contributions add up, so
/// diagonal input moves faster than a single axis. A non-finite or
/// non-positive delta proposes the current position.
pub fn propose_move(viewpoint: &Viewpoint, input: &InputState, delta_seconds: f32, speed: f32) -> Vec3 {
    viewpoint.position + displacement(viewpoint, input, delta_seconds, speed, false)
}

/// Displacement for one frame. With `normalize_diagonal`, the combined
/// direction is rescaled to unit length before applying the speed.
pub fn displacement(
    viewpoint: &Viewpoint,
    input: &InputState,
    delta_seconds: f32,
    speed: f32,
    normalize_diagonal: bool,
) -> Vec3 {
    if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
        return Vec3::ZERO;
    }

    let forward = viewpoint.flat_forward();
    let right = viewpoint.right();
    let mut direction = Vec3::ZERO;
    for d in MoveDirection::ALL {
        if !input.is_pressed(d) {
            continue;
        }
        direction += match d {
            MoveDirection::Forward => forward,
            MoveDirection::Backward => -forward,
            MoveDirection::Right => right,
            MoveDirection::Left => -right,
        };
    }

    if normalize_diagonal {
        direction = direction.normalize_or_zero();
    }
    direction * speed * delta_seconds
}
