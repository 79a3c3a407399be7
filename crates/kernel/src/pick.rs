//! Pick selector: screen-space click to the first exhibit along the view ray.

use glam::{Vec2, Vec3, Vec4};

use crate::scene::Exhibit;
use crate::viewpoint::Viewpoint;

/// Half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// `None` if `direction` cannot be normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        origin.is_finite().then_some(Self { origin, direction })
    }

    /// Ray from the viewpoint through a point in normalized device coordinates.
    pub fn from_viewpoint(viewpoint: &Viewpoint, ndc: Vec2) -> Option<Self> {
        let inverse = viewpoint.view_projection().inverse();
        // perspective_rh maps the far plane to depth 1.
        let far = inverse * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        if far.w.abs() <= f32::EPSILON {
            return None;
        }
        let target = far.truncate() / far.w;
        Self::new(viewpoint.position, target - viewpoint.position)
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Pixel coordinates (origin top-left, y down) to NDC in [-1, 1], y up.
/// `None` for an empty or non-finite viewport.
pub fn ndc_from_pixels(click: Vec2, viewport: Vec2) -> Option<Vec2> {
    if !viewport.is_finite() || viewport.x <= 0.0 || viewport.y <= 0.0 || !click.is_finite() {
        return None;
    }
    Some(Vec2::new(
        click.x / viewport.x * 2.0 - 1.0,
        -(click.y / viewport.y) * 2.0 + 1.0,
    ))
}

/// Where a world point lands on screen, in pixels. `None` behind the viewpoint.
pub fn pixels_from_world(viewpoint: &Viewpoint, point: Vec3, viewport: Vec2) -> Option<Vec2> {
    let clip = viewpoint.view_projection() * point.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.x,
        (1.0 - ndc.y) * 0.5 * viewport.y,
    ))
}

/// Distance along `ray` to the exhibit's front face, if the ray crosses the quad.
///
/// Single-sided: a ray reaching the surface from behind does not hit it.
pub fn intersect_exhibit(ray: &Ray, exhibit: &Exhibit) -> Option<f32> {
    let normal = exhibit.normal();
    let denom = ray.direction.dot(normal);
    if denom > -1e-6 {
        return None;
    }
    let center = exhibit.position();
    let t = (center - ray.origin).dot(normal) / denom;
    if !t.is_finite() || t < 0.0 {
        return None;
    }

    let local = ray.at(t) - center;
    let u_axis = exhibit.half_width_axis();
    let v_axis = exhibit.half_height_axis();
    let u = local.dot(u_axis) / u_axis.length_squared();
    let v = local.dot(v_axis) / v_axis.length_squared();
    (u.abs() <= 1.0 && v.abs() <= 1.0).then_some(t)
}

/// Nearest exhibit hit by `ray`. The earlier exhibit wins an exact tie.
pub fn first_hit<'a>(ray: &Ray, exhibits: &'a [Exhibit]) -> Option<(&'a Exhibit, f32)> {
    let mut best: Option<(&Exhibit, f32)> = None;
    for e in exhibits {
        let Some(t) = intersect_exhibit(ray, e) else {
            continue;
        };
        match best {
            Some((_, best_t)) if best_t <= t => {}
            _ => best = Some((e, t)),
        }
    }
    best
}

/// Resolve a click at pixel coordinates to the first exhibit under it.
pub fn pick<'a>(click: Vec2, viewport: Vec2, viewpoint: &Viewpoint, exhibits: &'a [Exhibit]) -> Option<&'a Exhibit> {
    let ndc = ndc_from_pixels(click, viewport)?;
    let ray = Ray::from_viewpoint(viewpoint, ndc)?;
    first_hit(&ray, exhibits).map(|(e, _)| e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use gallery_common::{ExhibitId, InfoRecord, Transform};
    use std::f32::consts::PI;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn info(title: &str) -> InfoRecord {
        InfoRecord {
            title: title.into(),
            creator: "Vincent van Gogh".into(),
            description: String::new(),
            period: String::new(),
            link: format!("https://example.org/{title}"),
        }
    }

    fn viewpoint() -> Viewpoint {
        let mut vp = Viewpoint::default();
        vp.set_viewport(VIEWPORT.x, VIEWPORT.y);
        vp
    }

    #[test]
    fn ndc_mapping() {
        assert_eq!(ndc_from_pixels(Vec2::new(400.0, 300.0), VIEWPORT), Some(Vec2::ZERO));
        assert_eq!(ndc_from_pixels(Vec2::ZERO, VIEWPORT), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(ndc_from_pixels(VIEWPORT, VIEWPORT), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(ndc_from_pixels(Vec2::ZERO, Vec2::new(0.0, 600.0)), None);
    }

    #[test]
    fn center_ray_follows_forward() {
        let vp = viewpoint();
        let ray = Ray::from_viewpoint(&vp, Vec2::ZERO).unwrap();
        assert_eq!(ray.origin, vp.position);
        assert!((ray.direction - vp.forward()).length() < 1e-3);
    }

    #[test]
    fn zero_direction_is_rejected() {
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_none());
    }

    #[test]
    fn click_on_projected_center_picks_exhibit() {
        let vp = viewpoint();
        // Off-axis exhibit facing the viewer.
        let scene = Scene::builder()
            .exhibit(Transform::from_position(Vec3::new(4.0, 4.0, -12.0)), 5.0, 3.0, info("target"))
            .build()
            .unwrap();
        let target = &scene.exhibits()[0];
        let click = pixels_from_world(&vp, target.position(), VIEWPORT).unwrap();

        let hit = pick(click, VIEWPORT, &vp, scene.exhibits()).unwrap();
        assert_eq!(hit.id, ExhibitId(0));
    }

    #[test]
    fn click_on_empty_space_picks_nothing() {
        let vp = viewpoint();
        let scene = Scene::builder()
            .exhibit(Transform::from_position(Vec3::new(20.0, 3.0, -10.0)), 5.0, 3.0, info("aside"))
            .build()
            .unwrap();
        assert!(pick(VIEWPORT * 0.5, VIEWPORT, &vp, scene.exhibits()).is_none());
    }

    #[test]
    fn nearest_hit_wins() {
        let vp = viewpoint();
        let scene = Scene::builder()
            .exhibit(Transform::from_position(Vec3::new(0.0, 3.0, -15.0)), 5.0, 3.0, info("far"))
            .exhibit(Transform::from_position(Vec3::new(0.0, 3.0, -6.0)), 5.0, 3.0, info("near"))
            .build()
            .unwrap();
        let hit = pick(VIEWPORT * 0.5, VIEWPORT, &vp, scene.exhibits()).unwrap();
        assert_eq!(hit.info.title, "near");
    }

    #[test]
    fn back_face_is_not_hit() {
        let vp = viewpoint();
        // Rotated half a turn: its visible face points away from the viewer.
        let scene = Scene::builder()
            .exhibit(Transform::from_position_yaw(Vec3::new(0.0, 3.0, -10.0), PI), 5.0, 3.0, info("turned"))
            .build()
            .unwrap();
        assert!(pick(VIEWPORT * 0.5, VIEWPORT, &vp, scene.exhibits()).is_none());
    }

    #[test]
    fn behind_viewpoint_is_not_hit() {
        let vp = viewpoint();
        let scene = Scene::builder()
            .exhibit(Transform::from_position(Vec3::new(0.0, 3.0, 10.0)), 5.0, 3.0, info("behind"))
            .build()
            .unwrap();
        assert!(pick(VIEWPORT * 0.5, VIEWPORT, &vp, scene.exhibits()).is_none());
    }

    #[test]
    fn quad_edges_bound_the_hit() {
        let ray = Ray::new(Vec3::new(2.4, 0.0, 5.0), Vec3::NEG_Z).unwrap();
        let scene = Scene::builder()
            .exhibit(Transform::default(), 5.0, 3.0, info("edge"))
            .build()
            .unwrap();
        assert_eq!(intersect_exhibit(&ray, &scene.exhibits()[0]), Some(5.0));

        let miss = Ray::new(Vec3::new(2.6, 0.0, 5.0), Vec3::NEG_Z).unwrap();
        assert_eq!(intersect_exhibit(&miss, &scene.exhibits()[0]), None);
    }

    #[test]
    fn picking_does_not_mutate_inputs() {
        let vp = viewpoint();
        let scene = Scene::builder()
            .exhibit(Transform::from_position(Vec3::new(0.0, 3.0, -6.0)), 5.0, 3.0, info("still"))
            .build()
            .unwrap();
        let before = (vp, scene.exhibits().to_vec());
        let _ = pick(VIEWPORT * 0.5, VIEWPORT, &vp, scene.exhibits());
        assert_eq!(before, (vp, scene.exhibits().to_vec()));
    }
}
