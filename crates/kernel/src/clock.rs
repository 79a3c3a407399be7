use std::time::{Duration, Instant};

/// Converts host frame timestamps into frame deltas.
///
/// The first tick yields zero; later ticks yield the full elapsed time. Long
/// deltas are split into sub-steps by [`crate::Gallery::step`].
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick at `now`.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = match self.last.replace(now) {
            Some(prev) => now.saturating_duration_since(prev),
            None => Duration::ZERO,
        };
        delta.as_secs_f32()
    }

    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Forget the previous timestamp, e.g. after the loop was paused.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
