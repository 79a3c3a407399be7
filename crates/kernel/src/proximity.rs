//! Proximity discloser: which exhibit's record to show for the current position.

use gallery_common::ExhibitId;
use glam::Vec3;

use crate::config::DisclosurePolicy;
use crate::scene::Exhibit;

/// Exhibits strictly closer than this many world units are disclosed.
pub const DISCLOSURE_RADIUS: f32 = 8.0;

/// Among exhibits strictly inside `threshold`, the last one in iteration order.
///
/// This is not a nearest-neighbor query: with two exhibits in range, the one
/// listed later wins even if it is farther away. See [`nearest_within`].
pub fn update_disclosure<'a>(position: Vec3, exhibits: &'a [Exhibit], threshold: f32) -> Option<&'a Exhibit> {
    exhibits
        .iter()
        .rev()
        .find(|e| position.distance(e.position()) < threshold)
}

/// The closest exhibit strictly inside `threshold`. Equal distances keep the earlier exhibit.
pub fn nearest_within<'a>(position: Vec3, exhibits: &'a [Exhibit], threshold: f32) -> Option<&'a Exhibit> {
    let mut best: Option<(&Exhibit, f32)> = None;
    for e in exhibits {
        let d = position.distance(e.position());
        if d >= threshold {
            continue;
        }
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((e, d)),
        }
    }
    best.map(|(e, _)| e)
}

pub fn disclose<'a>(
    position: Vec3,
    exhibits: &'a [Exhibit],
    threshold: f32,
    policy: DisclosurePolicy,
) -> Option<&'a Exhibit> {
    match policy {
        DisclosurePolicy::LastInOrder => update_disclosure(position, exhibits, threshold),
        DisclosurePolicy::Nearest => nearest_within(position, exhibits, threshold),
    }
}

/// Transition of the disclosed exhibit between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureChange {
    Shown(ExhibitId),
    Hidden,
    Unchanged,
}

/// The exhibit currently disclosed, if any. Written once per frame step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisclosureState {
    current: Option<ExhibitId>,
}

impl DisclosureState {
    pub fn current(&self) -> Option<ExhibitId> {
        self.current
    }

    /// Replace the disclosed exhibit and report what changed.
    pub fn apply(&mut self, next: Option<ExhibitId>) -> DisclosureChange {
        let previous = std::mem::replace(&mut self.current, next);
        match (previous, next) {
            (a, b) if a == b => DisclosureChange::Unchanged,
            (_, Some(id)) => DisclosureChange::Shown(id),
            (_, None) => DisclosureChange::Hidden,
        }
    }
}
