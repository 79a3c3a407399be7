use serde::{Deserialize, Serialize};

use crate::collision::PLAYER_HALF_EXTENT;
use crate::movement::MOVE_SPEED;
use crate::proximity::DISCLOSURE_RADIUS;
use crate::scene::SceneError;

/// How the discloser chooses among several exhibits inside the radius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclosurePolicy {
    /// The last qualifying exhibit in catalog order wins.
    #[default]
    LastInOrder,
    /// The closest qualifying exhibit wins.
    Nearest,
}

impl std::str::FromStr for DisclosurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last" | "last_in_order" => Ok(Self::LastInOrder),
            "nearest" => Ok(Self::Nearest),
            other => Err(format!("unknown disclosure policy '{other}' (expected 'last' or 'nearest')")),
        }
    }
}

/// Tunables of the walkthrough session. Every field has a default, so a
/// partial `config` section in a scene file is enough.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// World units per second along each pressed axis.
    pub move_speed: f32,
    /// Exhibits strictly closer than this are disclosed.
    pub disclosure_radius: f32,
    /// Half-size of the player's collision cube on every axis.
    pub player_half_extent: f32,
    /// Longest movement sub-step, in seconds; longer frames are split. Zero
    /// walks every frame in one step.
    pub max_frame_delta: f32,
    pub disclosure_policy: DisclosurePolicy,
    /// Rescale combined diagonal input to unit speed.
    pub normalize_diagonal: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            disclosure_radius: DISCLOSURE_RADIUS,
            player_half_extent: PLAYER_HALF_EXTENT,
            max_frame_delta: 0.1,
            disclosure_policy: DisclosurePolicy::LastInOrder,
            normalize_diagonal: false,
        }
    }
}

impl GalleryConfig {
    /// Reject tunables the frame loop cannot run with.
    pub fn validate(&self) -> Result<(), SceneError> {
        let checks = [
            ("move_speed", self.move_speed, self.move_speed >= 0.0, "a finite value >= 0"),
            (
                "disclosure_radius",
                self.disclosure_radius,
                self.disclosure_radius > 0.0,
                "a finite value > 0",
            ),
            (
                "player_half_extent",
                self.player_half_extent,
                self.player_half_extent > 0.0,
                "a finite value > 0",
            ),
            (
                "max_frame_delta",
                self.max_frame_delta,
                self.max_frame_delta >= 0.0,
                "a finite value >= 0",
            ),
        ];
        for (name, value, in_range, expected) in checks {
            if !value.is_finite() || !in_range {
                return Err(SceneError::InvalidTunable { name, value, expected });
            }
        }
        Ok(())
    }
}
