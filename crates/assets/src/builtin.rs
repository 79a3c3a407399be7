//! The built-in gallery: a square room with four paintings on each wall.

use std::f32::consts::{FRAC_PI_2, PI};

use gallery_common::InfoRecord;
use glam::Vec3;

use crate::catalog::{ExhibitDescription, SceneDescription, ViewpointStart, WallDescription};

/// Distance from the room center to each wall.
pub const ROOM_HALF_EXTENT: f32 = 20.0;
pub const WALL_HEIGHT: f32 = 20.0;
pub const WALL_THICKNESS: f32 = 0.001;
/// Paintings hang this far in front of their wall.
pub const PAINTING_INSET: f32 = 0.5;
pub const PAINTING_HEIGHT_ABOVE_FLOOR: f32 = 2.0;
pub const PAINTINGS_PER_WALL: usize = 4;

const PAINTING_WIDTH: f32 = 5.0;
const PAINTING_HEIGHT: f32 = 3.0;
const LINK: &str = "https://github.com/theringsofsaturn";

/// Offset along a wall of the `i`-th painting: -15, -5, 5, 15.
fn slot(i: usize) -> f32 {
    -15.0 + 10.0 * i as f32
}

fn info(number: usize, description: String) -> InfoRecord {
    InfoRecord {
        title: format!("Van Gogh {number}"),
        creator: "Vincent van Gogh".into(),
        description,
        period: format!("Year {number}"),
        link: LINK.into(),
    }
}

fn walls() -> Vec<WallDescription> {
    let long = Vec3::new(85.0, WALL_HEIGHT, WALL_THICKNESS);
    let side = Vec3::new(80.0, WALL_HEIGHT, WALL_THICKNESS);
    vec![
        WallDescription {
            name: "front".into(),
            position: Vec3::new(0.0, 0.0, -ROOM_HALF_EXTENT),
            rotation_y: 0.0,
            size: long,
        },
        WallDescription {
            name: "back".into(),
            position: Vec3::new(0.0, 0.0, ROOM_HALF_EXTENT),
            rotation_y: 0.0,
            size: long,
        },
        WallDescription {
            name: "left".into(),
            position: Vec3::new(-ROOM_HALF_EXTENT, 0.0, 0.0),
            rotation_y: FRAC_PI_2,
            size: side,
        },
        WallDescription {
            name: "right".into(),
            position: Vec3::new(ROOM_HALF_EXTENT, 0.0, 0.0),
            rotation_y: FRAC_PI_2,
            size: side,
        },
    ]
}

fn paintings() -> Vec<ExhibitDescription> {
    let near_wall = ROOM_HALF_EXTENT - PAINTING_INSET;
    let y = PAINTING_HEIGHT_ABOVE_FLOOR;
    let painting = |position: Vec3, rotation_y: f32, info: InfoRecord| ExhibitDescription {
        position,
        rotation_y,
        width: PAINTING_WIDTH,
        height: PAINTING_HEIGHT,
        info,
    };

    let mut out = Vec::with_capacity(4 * PAINTINGS_PER_WALL);
    for i in 0..PAINTINGS_PER_WALL {
        let n = i + 1;
        out.push(painting(
            Vec3::new(slot(i), y, -near_wall),
            0.0,
            info(
                n,
                format!(
                    "This is one of the masterpieces by Vincent van Gogh, showcasing his unique style and \
                     emotional honesty. Artwork {n} perfectly encapsulates his love for the beauty of everyday life."
                ),
            ),
        ));
    }
    for i in 0..PAINTINGS_PER_WALL {
        let n = i + 5;
        out.push(painting(
            Vec3::new(slot(i), y, near_wall),
            PI,
            info(
                n,
                format!(
                    "Artwork {n} by Vincent van Gogh is an exceptional piece showcasing his remarkable ability \
                     to capture emotion and atmosphere."
                ),
            ),
        ));
    }
    for i in 0..PAINTINGS_PER_WALL {
        let n = i + 9;
        out.push(painting(
            Vec3::new(-near_wall, y, slot(i)),
            FRAC_PI_2,
            info(
                n,
                format!(
                    "With its striking use of color and brushwork, Artwork {n} is a testament to Van Gogh's \
                     artistic genius."
                ),
            ),
        ));
    }
    for i in 0..PAINTINGS_PER_WALL {
        let n = i + 13;
        out.push(painting(
            Vec3::new(near_wall, y, slot(i)),
            -FRAC_PI_2,
            info(
                n,
                format!(
                    "Artwork {n} is a captivating piece by Vincent van Gogh, reflecting his distinctive style \
                     and deep passion for art."
                ),
            ),
        ));
    }
    out
}

/// The reference gallery with default tunables, starting at the room center
/// looking toward the front wall.
pub fn default_gallery() -> SceneDescription {
    SceneDescription {
        name: "Van Gogh gallery".into(),
        config: None,
        viewpoint: Some(ViewpointStart {
            position: Vec3::new(0.0, 3.0, 0.0),
            yaw: -FRAC_PI_2,
        }),
        walls: walls(),
        exhibits: paintings(),
    }
}
