use gallery_common::ExhibitId;
use gallery_kernel::{Gallery, Scene};
use glam::Vec3;

/// Gallery inspector for developer tooling.
///
/// Read-only queries against a session for debugging and CLI output.
pub struct GalleryInspector;

impl GalleryInspector {
    pub fn summary(gallery: &Gallery) -> GallerySummary {
        let vp = gallery.viewpoint();
        GallerySummary {
            tick: gallery.tick(),
            position: vp.position,
            yaw_degrees: vp.yaw.to_degrees(),
            pitch_degrees: vp.pitch.to_degrees(),
            disclosed: gallery.disclosed().map(|e| (e.id, e.info.title.clone())),
            obstacle_count: gallery.scene().obstacles().len(),
            exhibit_count: gallery.scene().exhibits().len(),
            pending_events: gallery.events().len(),
            state_hash: gallery.state_hash(),
        }
    }

    /// Placement and distance of one exhibit relative to the viewer.
    pub fn inspect_exhibit(gallery: &Gallery, id: ExhibitId) -> Option<ExhibitInfo> {
        let exhibit = gallery.scene().exhibit(id)?;
        let distance = gallery.viewpoint().position.distance(exhibit.position());
        Some(ExhibitInfo {
            id,
            title: exhibit.info.title.clone(),
            link: exhibit.info.link.clone(),
            position: exhibit.position(),
            normal: exhibit.normal(),
            width: exhibit.width,
            height: exhibit.height,
            distance,
            in_range: distance < gallery.config().disclosure_radius,
        })
    }

    pub fn list_exhibits(gallery: &Gallery) -> Vec<ExhibitId> {
        gallery.scene().exhibits().iter().map(|e| e.id).collect()
    }

    /// Pairs of exhibits whose disclosure spheres overlap. Inside such an
    /// overlap the disclosure policy decides which record is shown.
    pub fn disclosure_overlaps(scene: &Scene, radius: f32) -> Vec<(ExhibitId, ExhibitId)> {
        let exhibits = scene.exhibits();
        let mut pairs = Vec::new();
        for (i, a) in exhibits.iter().enumerate() {
            for b in &exhibits[i + 1..] {
                if a.position().distance(b.position()) < 2.0 * radius {
                    pairs.push((a.id, b.id));
                }
            }
        }
        pairs
    }
}

/// Summary of session state for the inspector.
#[derive(Debug, Clone)]
pub struct GallerySummary {
    pub tick: u64,
    pub position: Vec3,
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
    pub disclosed: Option<(ExhibitId, String)>,
    pub obstacle_count: usize,
    pub exhibit_count: usize,
    pub pending_events: usize,
    pub state_hash: u64,
}

impl std::fmt::Display for GallerySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gallery: tick={} pos=({:.2}, {:.2}, {:.2}) yaw={:.1} pitch={:.1} obstacles={} exhibits={} pending_events={} hash={:016x}",
            self.tick,
            self.position.x,
            self.position.y,
            self.position.z,
            self.yaw_degrees,
            self.pitch_degrees,
            self.obstacle_count,
            self.exhibit_count,
            self.pending_events,
            self.state_hash,
        )?;
        match &self.disclosed {
            Some((id, title)) => write!(f, " disclosed={id} \"{title}\""),
            None => write!(f, " disclosed=none"),
        }
    }
}

/// Detailed info about a single exhibit.
#[derive(Debug, Clone)]
pub struct ExhibitInfo {
    pub id: ExhibitId,
    pub title: String,
    pub link: String,
    pub position: Vec3,
    pub normal: Vec3,
    pub width: f32,
    pub height: f32,
    pub distance: f32,
    pub in_range: bool,
}

impl std::fmt::Display for ExhibitInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Exhibit {} \"{}\" pos=({:.2}, {:.2}, {:.2}) facing=({:.2}, {:.2}, {:.2}) size={}x{} distance={:.2}{} link={}",
            self.id,
            self.title,
            self.position.x,
            self.position.y,
            self.position.z,
            self.normal.x,
            self.normal.y,
            self.normal.z,
            self.width,
            self.height,
            self.distance,
            if self.in_range { " (in range)" } else { "" },
            self.link,
        )
    }
}
