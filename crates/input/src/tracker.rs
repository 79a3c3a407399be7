use crate::action::{Key, MoveDirection};

/// Snapshot of which movement directions are active, read once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pressed: [bool; 4],
}

impl InputState {
    pub fn is_pressed(&self, direction: MoveDirection) -> bool {
        self.pressed[direction.index()]
    }

    pub fn any(&self) -> bool {
        self.pressed.iter().any(|p| *p)
    }

    /// Build a snapshot directly from a set of directions (tests, scripted walks).
    pub fn with(directions: &[MoveDirection]) -> Self {
        let mut state = Self::default();
        for d in directions {
            state.pressed[d.index()] = true;
        }
        state
    }
}

/// Tracks the held state of every recognized key.
///
/// Writer: key events. Reader: the frame step, through [`InputTracker::current_state`].
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    held: [bool; 8],
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Returns false (and changes nothing) for keys
    /// outside the recognized set.
    pub fn on_key_change(&mut self, key: &str, pressed: bool) -> bool {
        let Some(key) = Key::parse(key) else {
            tracing::trace!(key, "ignoring unbound key");
            return false;
        };
        self.set(key, pressed);
        true
    }

    pub fn set(&mut self, key: Key, pressed: bool) {
        self.held[key.index()] = pressed;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    /// Release every key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held = [false; 8];
    }

    pub fn current_state(&self) -> InputState {
        let mut state = InputState::default();
        for key in Key::ALL {
            if self.is_held(key) {
                state.pressed[key.direction().index()] = true;
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nothing_pressed() {
        let tracker = InputTracker::new();
        assert!(!tracker.current_state().any());
    }

    #[test]
    fn press_and_release() {
        let mut tracker = InputTracker::new();
        assert!(tracker.on_key_change("w", true));
        assert!(tracker.current_state().is_pressed(MoveDirection::Forward));
        assert!(!tracker.current_state().is_pressed(MoveDirection::Backward));

        assert!(tracker.on_key_change("w", false));
        assert!(!tracker.current_state().any());
    }

    #[test]
    fn unknown_key_is_ignored() {
        let mut tracker = InputTracker::new();
        tracker.on_key_change("d", true);
        let before = tracker.current_state();
        assert!(!tracker.on_key_change("Enter", true));
        assert_eq!(tracker.current_state(), before);
    }

    #[test]
    fn direction_stays_pressed_while_any_bound_key_is_held() {
        let mut tracker = InputTracker::new();
        tracker.on_key_change("ArrowUp", true);
        tracker.on_key_change("w", true);
        tracker.on_key_change("w", false);
        assert!(tracker.current_state().is_pressed(MoveDirection::Forward));
        tracker.on_key_change("ArrowUp", false);
        assert!(!tracker.current_state().is_pressed(MoveDirection::Forward));
    }

    #[test]
    fn opposite_directions_are_independent() {
        let mut tracker = InputTracker::new();
        tracker.on_key_change("a", true);
        tracker.on_key_change("ArrowRight", true);
        let state = tracker.current_state();
        assert!(state.is_pressed(MoveDirection::Left));
        assert!(state.is_pressed(MoveDirection::Right));
    }

    #[test]
    fn clear_releases_everything() {
        let mut tracker = InputTracker::new();
        tracker.on_key_change("s", true);
        tracker.on_key_change("ArrowLeft", true);
        tracker.clear();
        assert!(!tracker.current_state().any());
    }

    #[test]
    fn snapshot_from_directions() {
        let state = InputState::with(&[MoveDirection::Forward, MoveDirection::Right]);
        assert!(state.is_pressed(MoveDirection::Forward));
        assert!(state.is_pressed(MoveDirection::Right));
        assert!(!state.is_pressed(MoveDirection::Left));
    }
}
