use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Identifier of an exhibit: its index in the scene's catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExhibitId(pub u32);

impl std::fmt::Display for ExhibitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Translation only.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Translation plus a rotation about the vertical axis.
    pub fn from_position_yaw(position: Vec3, yaw: f32) -> Self {
        Self {
            position,
            rotation: Quat::from_rotation_y(yaw),
            ..Self::default()
        }
    }

    /// Map a local-space point into world space (scale, then rotate, then translate).
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * (local * self.scale)
    }

    /// True if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}

/// Descriptive record attached to an exhibit and shown while the viewer is near it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoRecord {
    pub title: String,
    #[serde(alias = "artist")]
    pub creator: String,
    pub description: String,
    #[serde(alias = "year")]
    pub period: String,
    /// Reference opened when the exhibit is clicked.
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn transform_point_applies_scale_rotation_translation() {
        let t = Transform {
            position: Vec3::new(10.0, 0.0, 0.0),
            rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            scale: Vec3::splat(2.0),
        };
        // +X scaled to 2, rotated a quarter turn about Y lands on -Z.
        let p = t.transform_point(Vec3::X);
        assert!((p - Vec3::new(10.0, 0.0, -2.0)).length() < 1e-5);
    }

    #[test]
    fn non_finite_transform_is_detected() {
        let t = Transform::from_position(Vec3::new(f32::NAN, 0.0, 0.0));
        assert!(!t.is_finite());
        assert!(Transform::default().is_finite());
    }

    #[test]
    fn exhibit_id_display() {
        assert_eq!(ExhibitId(3).to_string(), "#3");
    }
}
