use glam::{Mat4, Vec3};

/// Maximum look-up/look-down angle.
const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// First-person viewpoint: eye position, yaw/pitch orientation, and the
/// perspective projection used for picking.
///
/// Writers: the frame step (position) and look events (yaw, pitch).
/// Everything else in the kernel only reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewpoint {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub sensitivity: f32,
}

impl Default for Viewpoint {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 3.0, 0.0),
            yaw: -90.0_f32.to_radians(),
            pitch: 0.0,
            fov: 60.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            sensitivity: 0.002,
        }
    }
}

impl Viewpoint {
    /// Viewpoint at `position` looking along the horizontal heading `yaw`.
    pub fn at(position: Vec3, yaw: f32) -> Self {
        Self {
            position,
            yaw,
            ..Self::default()
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Horizontal right axis. Never tilts, since the viewpoint has no roll.
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Forward projected onto the ground plane: walking does not climb when looking up.
    pub fn flat_forward(&self) -> Vec3 {
        Vec3::Y.cross(self.right())
    }

    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Update the aspect ratio from a viewport size in pixels.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn default_looks_down_negative_z() {
        let vp = Viewpoint::default();
        assert!(approx(vp.forward(), Vec3::NEG_Z));
        assert!(approx(vp.right(), Vec3::X));
        assert!(approx(vp.up(), Vec3::Y));
        assert!(!vp.view_projection().col(0).x.is_nan());
    }

    #[test]
    fn flat_forward_ignores_pitch() {
        let mut vp = Viewpoint::default();
        vp.pitch = 45.0_f32.to_radians();
        assert!(vp.forward().y > 0.5);
        assert!(approx(vp.flat_forward(), Vec3::NEG_Z));
    }

    #[test]
    fn pitch_is_clamped() {
        let mut vp = Viewpoint::default();
        vp.rotate(0.0, -1.0e6);
        assert!(vp.pitch <= PITCH_LIMIT);
        vp.rotate(0.0, 1.0e6);
        assert!(vp.pitch >= -PITCH_LIMIT);
    }

    #[test]
    fn yaw_turns_right_axis() {
        let vp = Viewpoint::at(Vec3::ZERO, 0.0);
        assert!(approx(vp.forward(), Vec3::X));
        assert!(approx(vp.right(), Vec3::Z));
    }

    #[test]
    fn viewport_sets_aspect() {
        let mut vp = Viewpoint::default();
        vp.set_viewport(800.0, 400.0);
        assert_eq!(vp.aspect, 2.0);
        vp.set_viewport(0.0, 400.0);
        assert_eq!(vp.aspect, 2.0);
    }
}
