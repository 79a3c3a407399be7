use gallery_common::ExhibitId;
use gallery_input::{InputEvent, InputTracker};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::collision::{self, MoveOutcome};
use crate::config::GalleryConfig;
use crate::hooks::{ContentDisplay, ReferenceOpener};
use crate::movement;
use crate::pick;
use crate::proximity::{self, DisclosureChange, DisclosureState};
use crate::scene::{Exhibit, Scene};
use crate::viewpoint::Viewpoint;

/// Upper bound on the sub-steps of one frame; time beyond it is dropped.
const MAX_SUBSTEPS: u32 = 600;

/// A record of every observable decision the session makes.
///
/// Hosts drain the log for HUD overlays, telemetry, or scripted assertions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FrameEvent {
    /// The viewpoint moved to an accepted position.
    Moved { from: Vec3, to: Vec3 },
    /// A proposed move was rejected; the viewpoint stayed at `at`.
    Blocked { at: Vec3, candidate: Vec3 },
    /// A different exhibit became the disclosed one.
    Disclosed { exhibit: ExhibitId },
    /// No exhibit is in range any more.
    Concealed,
    /// A click resolved to an exhibit and its reference was opened.
    Picked { exhibit: ExhibitId },
    /// One frame step completed.
    Stepped { tick: u64, delta: f32 },
}

/// Summary of a single frame step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub tick: u64,
    pub outcome: MoveOutcome,
    pub disclosed: Option<ExhibitId>,
    pub change: DisclosureChange,
}

impl FrameReport {
    pub fn position(&self) -> Vec3 {
        self.outcome.position()
    }
}

/// The walkthrough session: static scene plus the per-frame mutable state.
///
/// Field writers, one per step:
/// - `input`: key events, between frames.
/// - `viewpoint.position`: [`Gallery::step`] after the collision check.
/// - `viewpoint` orientation: look events.
/// - `disclosure`: [`Gallery::step`], after movement.
///
/// The scene is never written after construction.
#[derive(Debug, Clone)]
pub struct Gallery {
    scene: Scene,
    viewpoint: Viewpoint,
    input: InputTracker,
    disclosure: DisclosureState,
    config: GalleryConfig,
    tick: u64,
    /// Append-only log of frame decisions.
    event_log: Vec<FrameEvent>,
}

impl Gallery {
    pub fn new(scene: Scene, viewpoint: Viewpoint, config: GalleryConfig) -> Self {
        Self {
            scene,
            viewpoint,
            input: InputTracker::new(),
            disclosure: DisclosureState::default(),
            config,
            tick: 0,
            event_log: Vec::new(),
        }
    }

    /// Default viewpoint and tunables.
    pub fn with_scene(scene: Scene) -> Self {
        Self::new(scene, Viewpoint::default(), GalleryConfig::default())
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn viewpoint(&self) -> &Viewpoint {
        &self.viewpoint
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    /// Number of completed frame steps.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// The exhibit disclosed by the last step.
    pub fn disclosed(&self) -> Option<&Exhibit> {
        self.disclosure
            .current()
            .and_then(|id| self.scene.exhibit(id))
    }

    pub fn events(&self) -> &[FrameEvent] {
        &self.event_log
    }

    pub fn drain_events(&mut self) -> Vec<FrameEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Match the projection to the host viewport.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewpoint.set_viewport(width, height);
    }

    /// Move the viewpoint directly, bypassing collision. For session setup and
    /// scripted tours, never from inside a frame step.
    pub fn place(&mut self, position: Vec3, yaw: f32) {
        self.viewpoint.position = position;
        self.viewpoint.yaw = yaw;
    }

    /// Apply one host input message. Returns the picked exhibit for clicks.
    pub fn handle_event<O>(&mut self, event: &InputEvent, opener: &mut O) -> Option<ExhibitId>
    where
        O: ReferenceOpener + ?Sized,
    {
        match event {
            InputEvent::Key { key, pressed } => {
                self.input.on_key_change(key, *pressed);
                None
            }
            InputEvent::Look { dx, dy } => {
                self.viewpoint.rotate(*dx, *dy);
                None
            }
            InputEvent::Click { position, viewport } => self.click(*position, *viewport, opener),
        }
    }

    /// The exhibit under a click, without side effects.
    pub fn pick_at(&self, position: Vec2, viewport: Vec2) -> Option<&Exhibit> {
        let view = self.view_for(viewport);
        pick::pick(position, viewport, &view, self.scene.exhibits())
    }

    /// Resolve a click and open the picked exhibit's reference.
    pub fn click<O>(&mut self, position: Vec2, viewport: Vec2, opener: &mut O) -> Option<ExhibitId>
    where
        O: ReferenceOpener + ?Sized,
    {
        let view = self.view_for(viewport);
        let Some(exhibit) = pick::pick(position, viewport, &view, self.scene.exhibits()) else {
            tracing::debug!(?position, "click hit no exhibit");
            return None;
        };
        tracing::info!(exhibit = %exhibit.id, title = %exhibit.info.title, "exhibit picked");
        opener.open(&exhibit.info.link);
        self.event_log.push(FrameEvent::Picked {
            exhibit: exhibit.id,
        });
        Some(exhibit.id)
    }

    /// Advance one frame: movement, collision, then disclosure.
    ///
    /// `delta_seconds` is the real time since the previous frame; a negative or
    /// non-finite delta is treated as zero. A delta longer than
    /// `max_frame_delta` is walked in sub-steps of at most that length, each
    /// collision-checked in turn, so the distance covered does not depend on
    /// the frame rate and no sub-step can carry the viewer through a wall.
    /// The display is driven every frame.
    pub fn step<D>(&mut self, delta_seconds: f32, display: &mut D) -> FrameReport
    where
        D: ContentDisplay + ?Sized,
    {
        let _span = tracing::debug_span!("gallery_step", tick = self.tick + 1).entered();
        let delta = if delta_seconds.is_finite() {
            delta_seconds.max(0.0)
        } else {
            0.0
        };

        let input = self.input.current_state();
        let start = self.viewpoint.position;
        let (substeps, sub_delta) = self.substeps(delta);
        let offset = movement::displacement(
            &self.viewpoint,
            &input,
            sub_delta,
            self.config.move_speed,
            self.config.normalize_diagonal,
        );

        let mut outcome = MoveOutcome::Accepted(start);
        if offset != Vec3::ZERO {
            for _ in 0..substeps {
                let current = self.viewpoint.position;
                outcome = collision::resolve_move(
                    current,
                    current + offset,
                    self.scene.obstacles(),
                    self.config.player_half_extent,
                );
                match outcome {
                    MoveOutcome::Accepted(to) => self.viewpoint.position = to,
                    MoveOutcome::Blocked { .. } => break,
                }
            }
        }
        let end = self.viewpoint.position;
        if end != start {
            self.event_log.push(FrameEvent::Moved { from: start, to: end });
        }
        if let MoveOutcome::Blocked { kept, candidate } = outcome {
            self.event_log.push(FrameEvent::Blocked { at: kept, candidate });
        }

        let selected = proximity::disclose(
            self.viewpoint.position,
            self.scene.exhibits(),
            self.config.disclosure_radius,
            self.config.disclosure_policy,
        );
        match selected {
            Some(exhibit) => display.show(&exhibit.info),
            None => display.hide(),
        }
        let disclosed = selected.map(|e| e.id);
        let change = self.disclosure.apply(disclosed);
        match change {
            DisclosureChange::Shown(id) => {
                tracing::debug!(exhibit = %id, "disclosing exhibit");
                self.event_log.push(FrameEvent::Disclosed { exhibit: id });
            }
            DisclosureChange::Hidden => {
                tracing::debug!("no exhibit in range");
                self.event_log.push(FrameEvent::Concealed);
            }
            DisclosureChange::Unchanged => {}
        }

        self.tick += 1;
        self.event_log.push(FrameEvent::Stepped {
            tick: self.tick,
            delta,
        });

        FrameReport {
            tick: self.tick,
            outcome,
            disclosed,
            change,
        }
    }

    /// Deterministic hash of the mutable session state, for replay comparison.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &self.tick.to_le_bytes());
        let vp = &self.viewpoint;
        for v in [vp.position.x, vp.position.y, vp.position.z, vp.yaw, vp.pitch] {
            mix(&mut h, &v.to_le_bytes());
        }
        let disclosed = self.disclosure.current().map_or(u32::MAX, |id| id.0);
        mix(&mut h, &disclosed.to_le_bytes());
        h
    }

    /// Number of sub-steps for `delta` and the length of each.
    fn substeps(&self, delta: f32) -> (u32, f32) {
        let max = self.config.max_frame_delta;
        if max.is_nan() || max <= 0.0 || delta <= max {
            return (1, delta);
        }
        let needed = (delta / max).ceil();
        if needed > MAX_SUBSTEPS as f32 {
            tracing::warn!(delta, walked = MAX_SUBSTEPS as f32 * max, "frame stall truncated");
            return (MAX_SUBSTEPS, max);
        }
        let count = needed as u32;
        (count, delta / count as f32)
    }

    fn view_for(&self, viewport: Vec2) -> Viewpoint {
        let mut view = self.viewpoint;
        view.set_viewport(viewport.x, viewport.y);
        view
    }
}
