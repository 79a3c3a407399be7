use gallery_common::Aabb;
use gallery_kernel::{Gallery, Viewpoint};
use glam::Vec3;

/// Camera configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self::from_viewpoint(&Viewpoint::default())
    }
}

impl RenderView {
    pub fn from_viewpoint(viewpoint: &Viewpoint) -> Self {
        Self {
            eye: viewpoint.position,
            target: viewpoint.position + viewpoint.forward(),
            fov_degrees: viewpoint.fov.to_degrees(),
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads session state and a view configuration and produces
/// output. It never mutates the session.
pub trait Renderer {
    type Output;

    fn render(&self, gallery: &Gallery, view: &RenderView) -> Self::Output;
}

/// Human-readable dump of a frame: viewer, disclosure, exhibits by distance.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, gallery: &Gallery, view: &RenderView) -> String {
        let radius = gallery.config().disclosure_radius;
        let disclosed = gallery.disclosed().map(|e| e.id);
        let mut out = String::new();
        out.push_str(&format!("=== Gallery (tick={}) ===\n", gallery.tick()));
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2}) fov={:.0}\n",
            view.eye.x, view.eye.y, view.eye.z, view.target.x, view.target.y, view.target.z, view.fov_degrees
        ));
        match gallery.disclosed() {
            Some(e) => out.push_str(&format!("Disclosed: {} {}\n", e.id, e.info.title)),
            None => out.push_str("Disclosed: none\n"),
        }
        out.push_str(&format!("Exhibits: {}\n", gallery.scene().exhibits().len()));
        for e in gallery.scene().exhibits() {
            let d = view.eye.distance(e.position());
            let marker = if Some(e.id) == disclosed {
                '*'
            } else if d < radius {
                '+'
            } else {
                ' '
            };
            out.push_str(&format!(" {marker}[{:>3}] d={d:>6.2} {}\n", e.id.0, e.info.title));
        }
        out
    }
}

/// Top-down character map of the room on the X/Z plane, -Z at the top.
///
/// `#` obstacle, `o` exhibit, `*` disclosed exhibit, `@` viewer.
#[derive(Debug, Clone, Copy)]
pub struct TopDownMap {
    pub columns: usize,
    pub rows: usize,
}

impl Default for TopDownMap {
    fn default() -> Self {
        Self {
            columns: 41,
            rows: 21,
        }
    }
}

impl TopDownMap {
    fn cell(&self, bounds: &Aabb, p: Vec3) -> (usize, usize) {
        let size = bounds.size();
        let fx = if size.x > 0.0 { (p.x - bounds.min.x) / size.x } else { 0.5 };
        let fz = if size.z > 0.0 { (p.z - bounds.min.z) / size.z } else { 0.5 };
        let col = (fx.clamp(0.0, 1.0) * (self.columns - 1) as f32).round() as usize;
        let row = (fz.clamp(0.0, 1.0) * (self.rows - 1) as f32).round() as usize;
        (col, row)
    }
}

impl Renderer for TopDownMap {
    type Output = String;

    fn render(&self, gallery: &Gallery, view: &RenderView) -> String {
        if self.columns < 2 || self.rows < 2 {
            return String::new();
        }
        let scene = gallery.scene();
        let points = scene
            .obstacles()
            .iter()
            .flat_map(|o| [o.aabb.min, o.aabb.max])
            .chain(scene.exhibits().iter().map(|e| e.position()))
            .chain(std::iter::once(view.eye));
        let Some(bounds) = Aabb::from_points(points) else {
            return String::new();
        };

        let mut grid = vec![vec!['.'; self.columns]; self.rows];
        for o in scene.obstacles() {
            let (c0, r0) = self.cell(&bounds, o.aabb.min);
            let (c1, r1) = self.cell(&bounds, o.aabb.max);
            for row in grid.iter_mut().take(r1 + 1).skip(r0) {
                for ch in row.iter_mut().take(c1 + 1).skip(c0) {
                    *ch = '#';
                }
            }
        }
        let disclosed = gallery.disclosed().map(|e| e.id);
        for e in scene.exhibits() {
            let (c, r) = self.cell(&bounds, e.position());
            grid[r][c] = if Some(e.id) == disclosed { '*' } else { 'o' };
        }
        let (c, r) = self.cell(&bounds, view.eye);
        grid[r][c] = '@';

        let mut out = String::with_capacity((self.columns + 1) * self.rows);
        for row in grid {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}
