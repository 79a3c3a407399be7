//! Static scene model: obstacles and exhibits with precomputed bounding boxes.
//!
//! A [`Scene`] can only be produced by [`SceneBuilder::build`], which validates
//! every object and computes its AABB exactly once. The frame loop assumes the
//! geometry it reads is well-formed.

use gallery_common::{Aabb, ExhibitId, InfoRecord, Transform};
use glam::Vec3;

use crate::bounds::{Shape, compute_aabb};

/// Errors raised while validating scene input. All are fatal at setup.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("{what} has a non-finite transform")]
    NonFiniteTransform { what: String },
    #[error("{what} has a zero scale component: {scale}")]
    ZeroScale { what: String, scale: Vec3 },
    #[error("exhibit {index} has non-positive extent {width}x{height}")]
    DegenerateExhibit { index: usize, width: f32, height: f32 },
    #[error("obstacle '{name}' has degenerate shape {shape:?}")]
    DegenerateObstacle { name: String, shape: Shape },
    #[error("exhibit {index} ('{title}') has an empty reference link")]
    MissingLink { index: usize, title: String },
    #[error("config field '{name}' is {value}, expected {expected}")]
    InvalidTunable {
        name: &'static str,
        value: f32,
        expected: &'static str,
    },
}

/// Static collidable volume, such as a wall.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub name: String,
    pub transform: Transform,
    pub shape: Shape,
    pub aabb: Aabb,
}

/// Flat, oriented exhibit surface with an attached info record.
#[derive(Debug, Clone, PartialEq)]
pub struct Exhibit {
    pub id: ExhibitId,
    pub transform: Transform,
    pub width: f32,
    pub height: f32,
    pub aabb: Aabb,
    pub info: InfoRecord,
}

impl Exhibit {
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Unit normal of the visible face.
    pub fn normal(&self) -> Vec3 {
        (self.transform.rotation * Vec3::Z).normalize()
    }

    /// World-space half-width vector (along the surface's local X).
    pub fn half_width_axis(&self) -> Vec3 {
        self.transform.rotation * Vec3::X * (self.width * 0.5 * self.transform.scale.x)
    }

    /// World-space half-height vector (along the surface's local Y).
    pub fn half_height_axis(&self) -> Vec3 {
        self.transform.rotation * Vec3::Y * (self.height * 0.5 * self.transform.scale.y)
    }
}

/// Read-only collection of obstacles and exhibits in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    obstacles: Vec<Obstacle>,
    exhibits: Vec<Exhibit>,
}

impl Scene {
    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn exhibits(&self) -> &[Exhibit] {
        &self.exhibits
    }

    pub fn exhibit(&self, id: ExhibitId) -> Option<&Exhibit> {
        self.exhibits.get(id.0 as usize)
    }
}

#[derive(Debug, Clone)]
struct PendingExhibit {
    transform: Transform,
    width: f32,
    height: f32,
    info: InfoRecord,
}

/// Collects scene input and validates it in [`SceneBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    obstacles: Vec<(String, Transform, Shape)>,
    exhibits: Vec<PendingExhibit>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a box-shaped wall of the given full size.
    pub fn wall(self, name: impl Into<String>, transform: Transform, size: Vec3) -> Self {
        self.obstacle(name, transform, Shape::Box { size })
    }

    pub fn obstacle(mut self, name: impl Into<String>, transform: Transform, shape: Shape) -> Self {
        self.obstacles.push((name.into(), transform, shape));
        self
    }

    /// Add an exhibit. Ids are assigned in insertion order.
    pub fn exhibit(mut self, transform: Transform, width: f32, height: f32, info: InfoRecord) -> Self {
        self.exhibits.push(PendingExhibit {
            transform,
            width,
            height,
            info,
        });
        self
    }

    pub fn build(self) -> Result<Scene, SceneError> {
        let mut obstacles = Vec::with_capacity(self.obstacles.len());
        for (name, transform, shape) in self.obstacles {
            let what = format!("obstacle '{name}'");
            check_transform(&what, &transform)?;
            if !shape_is_valid(&shape) {
                return Err(SceneError::DegenerateObstacle { name, shape });
            }
            let aabb = compute_aabb(&transform, &shape);
            obstacles.push(Obstacle {
                name,
                transform,
                shape,
                aabb,
            });
        }

        let mut exhibits = Vec::with_capacity(self.exhibits.len());
        for (index, pending) in self.exhibits.into_iter().enumerate() {
            check_transform(&format!("exhibit {index}"), &pending.transform)?;
            let shape = Shape::Plane {
                width: pending.width,
                height: pending.height,
            };
            if !shape_is_valid(&shape) {
                return Err(SceneError::DegenerateExhibit {
                    index,
                    width: pending.width,
                    height: pending.height,
                });
            }
            if pending.info.link.trim().is_empty() {
                return Err(SceneError::MissingLink {
                    index,
                    title: pending.info.title,
                });
            }
            let aabb = compute_aabb(&pending.transform, &shape);
            exhibits.push(Exhibit {
                id: ExhibitId(index as u32),
                transform: pending.transform,
                width: pending.width,
                height: pending.height,
                aabb,
                info: pending.info,
            });
        }

        tracing::info!(
            obstacles = obstacles.len(),
            exhibits = exhibits.len(),
            "scene built"
        );
        Ok(Scene {
            obstacles,
            exhibits,
        })
    }
}

fn check_transform(what: &str, transform: &Transform) -> Result<(), SceneError> {
    if !transform.is_finite() {
        return Err(SceneError::NonFiniteTransform { what: what.into() });
    }
    if transform.scale.cmpeq(Vec3::ZERO).any() {
        return Err(SceneError::ZeroScale {
            what: what.into(),
            scale: transform.scale,
        });
    }
    Ok(())
}

fn shape_is_valid(shape: &Shape) -> bool {
    match *shape {
        Shape::Box { size } => {
            size.is_finite() && size.cmpge(Vec3::ZERO).all() && size.cmpgt(Vec3::ZERO).any()
        }
        Shape::Plane { width, height } => {
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(title: &str) -> InfoRecord {
        InfoRecord {
            title: title.into(),
            creator: "Unknown".into(),
            description: String::new(),
            period: "1889".into(),
            link: "https://example.org/".into(),
        }
    }

    #[test]
    fn builds_and_assigns_ids_in_order() {
        let scene = Scene::builder()
            .wall(
                "front",
                Transform::from_position(Vec3::new(0.0, 0.0, -20.0)),
                Vec3::new(85.0, 20.0, 0.001),
            )
            .exhibit(Transform::default(), 5.0, 3.0, info("a"))
            .exhibit(Transform::default(), 5.0, 3.0, info("b"))
            .build()
            .unwrap();

        assert_eq!(scene.obstacles().len(), 1);
        assert_eq!(scene.exhibits().len(), 2);
        assert_eq!(scene.exhibits()[1].id, ExhibitId(1));
        assert_eq!(scene.exhibit(ExhibitId(0)).unwrap().info.title, "a");
        assert!(scene.exhibit(ExhibitId(7)).is_none());
        assert!(scene.obstacles()[0].aabb.is_valid());
    }

    #[test]
    fn rejects_non_positive_exhibit_extent() {
        let err = Scene::builder()
            .exhibit(Transform::default(), 0.0, 3.0, info("flat"))
            .build()
            .unwrap_err();
        assert!(matches!(err, SceneError::DegenerateExhibit { index: 0, .. }));

        let err = Scene::builder()
            .exhibit(Transform::default(), 2.0, -1.0, info("neg"))
            .build()
            .unwrap_err();
        assert!(matches!(err, SceneError::DegenerateExhibit { .. }));
    }

    #[test]
    fn rejects_degenerate_obstacle() {
        let err = Scene::builder()
            .wall("ghost", Transform::default(), Vec3::ZERO)
            .build()
            .unwrap_err();
        assert!(matches!(err, SceneError::DegenerateObstacle { .. }));
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn thin_walls_are_allowed() {
        assert!(
            Scene::builder()
                .wall("thin", Transform::default(), Vec3::new(10.0, 10.0, 0.0))
                .build()
                .is_ok()
        );
    }

    #[test]
    fn rejects_non_finite_transform() {
        let err = Scene::builder()
            .exhibit(
                Transform::from_position(Vec3::new(f32::INFINITY, 0.0, 0.0)),
                1.0,
                1.0,
                info("x"),
            )
            .build()
            .unwrap_err();
        assert!(matches!(err, SceneError::NonFiniteTransform { .. }));
    }

    #[test]
    fn rejects_zero_scale() {
        let t = Transform {
            scale: Vec3::new(1.0, 0.0, 1.0),
            ..Transform::default()
        };
        let err = Scene::builder()
            .wall("squashed", t, Vec3::ONE)
            .build()
            .unwrap_err();
        assert!(matches!(err, SceneError::ZeroScale { .. }));
    }

    #[test]
    fn rejects_empty_link() {
        let mut record = info("nolink");
        record.link = "  ".into();
        let err = Scene::builder()
            .exhibit(Transform::default(), 1.0, 1.0, record)
            .build()
            .unwrap_err();
        assert!(matches!(err, SceneError::MissingLink { index: 0, .. }));
    }

    #[test]
    fn exhibit_axes_follow_rotation() {
        let scene = Scene::builder()
            .exhibit(
                Transform::from_position_yaw(Vec3::ZERO, std::f32::consts::PI),
                4.0,
                2.0,
                info("back"),
            )
            .build()
            .unwrap();
        let e = &scene.exhibits()[0];
        assert!((e.normal() - Vec3::NEG_Z).length() < 1e-5);
        assert!((e.half_width_axis().length() - 2.0).abs() < 1e-5);
        assert!((e.half_height_axis() - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-5);
    }
}
