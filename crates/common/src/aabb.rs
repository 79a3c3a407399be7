use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box given by its minimum and maximum corners.
///
/// Constructors always order the corners, so `min <= max` holds componentwise
/// for every box built through this API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning two arbitrary corners.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        Self::from_center_half_extents(center, size * 0.5)
    }

    /// Tightest box around a set of points. `None` for an empty set.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn half_extents(&self) -> Vec3 {
        self.size() * 0.5
    }

    /// Overlap on all three axes. Closed intervals: boxes sharing a face intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(other.max.x < self.min.x
            || other.min.x > self.max.x
            || other.max.y < self.min.y
            || other.min.y > self.max.y
            || other.max.z < self.min.z
            || other.min.z > self.max.z)
    }

    pub fn contains_point(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Finite corners with `min <= max`.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_at(center: Vec3) -> Aabb {
        Aabb::from_center_half_extents(center, Vec3::splat(0.5))
    }

    #[test]
    fn new_orders_corners() {
        let b = Aabb::new(Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 2.0, -3.0));
        assert_eq!(b.min, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(b.max, Vec3::new(1.0, 2.0, 3.0));
        assert!(b.is_valid());
    }

    #[test]
    fn from_points_is_tight() {
        let b = Aabb::from_points([
            Vec3::new(0.0, 1.0, 2.0),
            Vec3::new(-4.0, 0.5, 9.0),
            Vec3::new(3.0, -1.0, 0.0),
        ])
        .unwrap();
        assert_eq!(b.min, Vec3::new(-4.0, -1.0, 0.0));
        assert_eq!(b.max, Vec3::new(3.0, 1.0, 9.0));
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        assert!(a.intersects(&unit_at(Vec3::ZERO)));
        assert!(unit_at(Vec3::ZERO).intersects(&a));
    }

    #[test]
    fn separated_on_one_axis_do_not_intersect() {
        let a = unit_at(Vec3::ZERO);
        assert!(!a.intersects(&unit_at(Vec3::new(0.0, 0.0, 1.01))));
        assert!(!a.intersects(&unit_at(Vec3::new(-1.01, 0.0, 0.0))));
        assert!(!a.intersects(&unit_at(Vec3::new(0.0, 5.0, 0.0))));
    }

    #[test]
    fn touching_faces_intersect() {
        let a = unit_at(Vec3::ZERO);
        assert!(a.intersects(&unit_at(Vec3::new(1.0, 0.0, 0.0))));
    }

    #[test]
    fn center_size_roundtrip() {
        let b = Aabb::from_center_size(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b.center(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(b.size(), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b.half_extents(), Vec3::new(1.0, 2.0, 3.0));
        assert!(b.contains_point(Vec3::new(0.0, 0.0, 0.0)));
        assert!(!b.contains_point(Vec3::new(3.0, 0.0, 0.0)));
    }

    #[test]
    fn nan_corner_is_invalid() {
        let b = Aabb {
            min: Vec3::new(f32::NAN, 0.0, 0.0),
            max: Vec3::ONE,
        };
        assert!(!b.is_valid());
    }
}
