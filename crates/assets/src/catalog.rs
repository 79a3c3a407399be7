use std::path::{Path, PathBuf};

use gallery_common::{InfoRecord, Transform};
use gallery_kernel::collision::would_collide_with_extent;
use gallery_kernel::{Gallery, GalleryConfig, Scene, SceneError, Viewpoint};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Errors from loading, saving, or building a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported catalog format: {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("invalid scene: {0}")]
    Scene(#[from] SceneError),
    #[error("starting viewpoint is not finite")]
    InvalidViewpoint,
    #[error("starting viewpoint at {position} overlaps an obstacle")]
    BlockedStart { position: Vec3 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, CatalogError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Format::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => Ok(Format::Yaml),
            _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// A wall slab. `size` is the full extent before the vertical rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallDescription {
    pub name: String,
    pub position: Vec3,
    /// Rotation about the vertical axis, in radians.
    #[serde(default)]
    pub rotation_y: f32,
    pub size: Vec3,
}

impl WallDescription {
    pub fn transform(&self) -> Transform {
        Transform::from_position_yaw(self.position, self.rotation_y)
    }
}

/// A flat exhibit. With zero rotation it faces +Z.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhibitDescription {
    pub position: Vec3,
    #[serde(default)]
    pub rotation_y: f32,
    pub width: f32,
    pub height: f32,
    pub info: InfoRecord,
}

impl ExhibitDescription {
    pub fn transform(&self) -> Transform {
        Transform::from_position_yaw(self.position, self.rotation_y)
    }
}

/// Where the viewer starts. `yaw` follows [`Viewpoint::yaw`]: zero looks
/// along +X, minus a quarter turn looks along -Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewpointStart {
    pub position: Vec3,
    #[serde(default = "default_yaw")]
    pub yaw: f32,
}

fn default_yaw() -> f32 {
    Viewpoint::default().yaw
}

/// A complete gallery: geometry, exhibits, optional tunables and start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<GalleryConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewpoint: Option<ViewpointStart>,
    #[serde(default)]
    pub walls: Vec<WallDescription>,
    #[serde(default)]
    pub exhibits: Vec<ExhibitDescription>,
}

impl SceneDescription {
    /// Read a catalog, choosing JSON or YAML from the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let data = std::fs::read_to_string(path)?;
        let description: Self = match format {
            Format::Json => serde_json::from_str(&data)?,
            Format::Yaml => serde_yaml::from_str(&data)?,
        };
        tracing::debug!(
            path = %path.display(),
            walls = description.walls.len(),
            exhibits = description.exhibits.len(),
            "catalog loaded"
        );
        Ok(description)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let file = std::fs::File::create(path)?;
        match format {
            Format::Json => serde_json::to_writer_pretty(file, self)?,
            Format::Yaml => serde_yaml::to_writer(file, self)?,
        }
        Ok(())
    }

    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn from_yaml(data: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(data)?)
    }

    /// Validate the catalog and produce the kernel scene, the starting
    /// viewpoint, and the effective tunables.
    pub fn build(&self) -> Result<(Scene, Viewpoint, GalleryConfig), CatalogError> {
        let mut builder = Scene::builder();
        for wall in &self.walls {
            builder = builder.wall(wall.name.clone(), wall.transform(), wall.size);
        }
        for exhibit in &self.exhibits {
            builder = builder.exhibit(exhibit.transform(), exhibit.width, exhibit.height, exhibit.info.clone());
        }
        let scene = builder.build()?;
        let config = self.config.unwrap_or_default();
        config.validate()?;

        let viewpoint = match self.viewpoint {
            Some(start) => {
                if !start.position.is_finite() || !start.yaw.is_finite() {
                    return Err(CatalogError::InvalidViewpoint);
                }
                Viewpoint::at(start.position, start.yaw)
            }
            None => Viewpoint::default(),
        };
        if would_collide_with_extent(viewpoint.position, scene.obstacles(), config.player_half_extent) {
            return Err(CatalogError::BlockedStart {
                position: viewpoint.position,
            });
        }
        Ok((scene, viewpoint, config))
    }

    /// Build a ready-to-run session.
    pub fn into_gallery(&self) -> Result<Gallery, CatalogError> {
        let (scene, viewpoint, config) = self.build()?;
        Ok(Gallery::new(scene, viewpoint, config))
    }
}
