//! Bounding-volume builder: world-space AABBs for static geometry.

use gallery_common::{Aabb, Transform};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Local-space extent of a static object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Box centered on the origin with the given full size.
    Box { size: Vec3 },
    /// Flat quad in the local XY plane, centered on the origin, facing +Z.
    Plane { width: f32, height: f32 },
}

impl Shape {
    /// Corners of the shape in local space.
    pub fn corners(&self) -> Vec<Vec3> {
        match *self {
            Shape::Box { size } => {
                let h = size * 0.5;
                let mut corners = Vec::with_capacity(8);
                for sx in [-1.0, 1.0] {
                    for sy in [-1.0, 1.0] {
                        for sz in [-1.0, 1.0] {
                            corners.push(h * Vec3::new(sx, sy, sz));
                        }
                    }
                }
                corners
            }
            Shape::Plane { width, height } => {
                let (hw, hh) = (width * 0.5, height * 0.5);
                vec![
                    Vec3::new(-hw, -hh, 0.0),
                    Vec3::new(hw, -hh, 0.0),
                    Vec3::new(hw, hh, 0.0),
                    Vec3::new(-hw, hh, 0.0),
                ]
            }
        }
    }
}

/// Tightest axis-aligned box around the shape placed by `transform`.
///
/// Pure. Called once per obstacle and exhibit while the scene is built.
pub fn compute_aabb(transform: &Transform, shape: &Shape) -> Aabb {
    Aabb::from_points(shape.corners().into_iter().map(|c| transform.transform_point(c)))
        .unwrap_or_else(|| Aabb::new(transform.position, transform.position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-4
    }

    #[test]
    fn axis_aligned_box() {
        let t = Transform::from_position(Vec3::new(0.0, 0.0, -20.0));
        let b = compute_aabb(
            &t,
            &Shape::Box {
                size: Vec3::new(85.0, 20.0, 0.001),
            },
        );
        assert!(approx(b.min, Vec3::new(-42.5, -10.0, -20.0005)));
        assert!(approx(b.max, Vec3::new(42.5, 10.0, -19.9995)));
    }

    #[test]
    fn rotated_box_swaps_extents() {
        // Side wall: 80 long on X before a quarter turn, ends up spanning Z.
        let t = Transform::from_position_yaw(Vec3::new(-20.0, 0.0, 0.0), FRAC_PI_2);
        let b = compute_aabb(
            &t,
            &Shape::Box {
                size: Vec3::new(80.0, 20.0, 0.001),
            },
        );
        assert!(approx(b.min, Vec3::new(-20.0005, -10.0, -40.0)));
        assert!(approx(b.max, Vec3::new(-19.9995, 10.0, 40.0)));
    }

    #[test]
    fn plane_is_flat_along_its_normal() {
        let t = Transform::from_position(Vec3::new(-15.0, 2.0, -19.5));
        let b = compute_aabb(
            &t,
            &Shape::Plane {
                width: 5.0,
                height: 3.0,
            },
        );
        assert!(approx(b.min, Vec3::new(-17.5, 0.5, -19.5)));
        assert!(approx(b.max, Vec3::new(-12.5, 3.5, -19.5)));
        assert!(b.is_valid());
    }

    #[test]
    fn scale_is_applied() {
        let t = Transform {
            scale: Vec3::splat(2.0),
            ..Transform::default()
        };
        let b = compute_aabb(&t, &Shape::Box { size: Vec3::ONE });
        assert!(approx(b.size(), Vec3::splat(2.0)));
    }

    #[test]
    fn deterministic() {
        let t = Transform::from_position_yaw(Vec3::new(3.0, 1.0, 2.0), 0.7);
        let s = Shape::Plane {
            width: 2.0,
            height: 1.0,
        };
        assert_eq!(compute_aabb(&t, &s), compute_aabb(&t, &s));
    }
}
