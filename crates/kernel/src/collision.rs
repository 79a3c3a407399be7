//! Collision detector: player cube against static obstacle boxes.
//!
//! A move that would overlap any obstacle is rejected as a whole; the
//! viewpoint keeps its previous position. There is no sliding response.

use gallery_common::Aabb;
use glam::Vec3;

use crate::scene::Obstacle;

/// Half-size of the player's collision cube (a 1x1x1 cube).
pub const PLAYER_HALF_EXTENT: f32 = 0.5;

/// Result of validating a proposed move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    Accepted(Vec3),
    /// The candidate overlapped an obstacle; `kept` is the unchanged position.
    Blocked { kept: Vec3, candidate: Vec3 },
}

impl MoveOutcome {
    /// Where the viewpoint ends up.
    pub fn position(&self) -> Vec3 {
        match *self {
            MoveOutcome::Accepted(p) => p,
            MoveOutcome::Blocked { kept, .. } => kept,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, MoveOutcome::Blocked { .. })
    }
}

/// The player's volume centered on `center`.
pub fn player_aabb(center: Vec3, half_extent: f32) -> Aabb {
    Aabb::from_center_half_extents(center, Vec3::splat(half_extent))
}

/// True if the default-size player cube at `candidate` overlaps any obstacle.
pub fn would_collide(candidate: Vec3, obstacles: &[Obstacle]) -> bool {
    would_collide_with_extent(candidate, obstacles, PLAYER_HALF_EXTENT)
}

/// Stops at the first intersecting obstacle.
pub fn would_collide_with_extent(candidate: Vec3, obstacles: &[Obstacle], half_extent: f32) -> bool {
    let player = player_aabb(candidate, half_extent);
    obstacles.iter().any(|o| player.intersects(&o.aabb))
}

/// Accept `candidate` or keep `current` if the candidate collides.
pub fn resolve_move(current: Vec3, candidate: Vec3, obstacles: &[Obstacle], half_extent: f32) -> MoveOutcome {
    if candidate == current {
        return MoveOutcome::Accepted(current);
    }
    if would_collide_with_extent(candidate, obstacles, half_extent) {
        tracing::debug!(?candidate, kept = ?current, "move blocked");
        MoveOutcome::Blocked {
            kept: current,
            candidate,
        }
    } else {
        MoveOutcome::Accepted(candidate)
    }
}
