use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Logical movement direction relative to the viewpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Left,
        MoveDirection::Right,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// A physical key the tracker recognizes. Everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
}

impl Key {
    pub const ALL: [Key; 8] = [
        Key::ArrowUp,
        Key::ArrowDown,
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::W,
        Key::A,
        Key::S,
        Key::D,
    ];

    /// Parse a host key identifier (web-style `KeyboardEvent.key` names).
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "w" | "W" => Some(Key::W),
            "a" | "A" => Some(Key::A),
            "s" | "S" => Some(Key::S),
            "d" | "D" => Some(Key::D),
            _ => None,
        }
    }

    /// The movement direction this key drives.
    pub fn direction(self) -> MoveDirection {
        match self {
            Key::ArrowUp | Key::W => MoveDirection::Forward,
            Key::ArrowDown | Key::S => MoveDirection::Backward,
            Key::ArrowLeft | Key::A => MoveDirection::Left,
            Key::ArrowRight | Key::D => MoveDirection::Right,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// An input message delivered by the host and consumed synchronously by the
/// session at a defined point of the frame loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Key went down (`pressed = true`) or up. `key` is the raw host identifier.
    Key { key: String, pressed: bool },
    /// Relative pointer motion while the pointer is captured.
    Look { dx: f32, dy: f32 },
    /// Primary click at pixel coordinates within a viewport of the given size.
    Click { position: Vec2, viewport: Vec2 },
}

impl InputEvent {
    pub fn key_down(key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            pressed: true,
        }
    }

    pub fn key_up(key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            pressed: false,
        }
    }
}
