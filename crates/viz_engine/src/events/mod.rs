//! Raw input events
//!
//! The host render loop translates windowing events into these named kinds
//! and hands them to the router one at a time. Events are plain data and
//! serializable, so interaction sessions can be recorded and replayed.

use serde::{Deserialize, Serialize};

/// The named event kinds delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Left pointer button went down
    LeftButtonPress,
    /// Left pointer button came up
    LeftButtonRelease,
    /// Right pointer button went down
    RightButtonPress,
    /// Right pointer button came up
    RightButtonRelease,
    /// Middle pointer button went down
    MiddleButtonPress,
    /// Middle pointer button came up
    MiddleButtonRelease,
    /// Pointer moved
    MouseMove,
    /// Wheel scrolled away from the user
    MouseWheelForward,
    /// Wheel scrolled toward the user
    MouseWheelBackward,
    /// A character (or named key token) was typed
    Char,
    /// A key went down
    KeyPress,
    /// A key came up
    KeyRelease,
}

impl EventKind {
    /// Every kind the router recognizes, in a fixed order
    pub const ALL: [EventKind; 12] = [
        EventKind::LeftButtonPress,
        EventKind::LeftButtonRelease,
        EventKind::RightButtonPress,
        EventKind::RightButtonRelease,
        EventKind::MiddleButtonPress,
        EventKind::MiddleButtonRelease,
        EventKind::MouseMove,
        EventKind::MouseWheelForward,
        EventKind::MouseWheelBackward,
        EventKind::Char,
        EventKind::KeyPress,
        EventKind::KeyRelease,
    ];

    /// Whether this kind is a pointer-button press
    pub fn is_press(self) -> bool {
        matches!(
            self,
            EventKind::LeftButtonPress | EventKind::RightButtonPress | EventKind::MiddleButtonPress
        )
    }

    /// Whether this kind is a pointer-button release
    pub fn is_release(self) -> bool {
        matches!(
            self,
            EventKind::LeftButtonRelease
                | EventKind::RightButtonRelease
                | EventKind::MiddleButtonRelease
        )
    }

    /// Whether this kind is a wheel event
    pub fn is_wheel(self) -> bool {
        matches!(self, EventKind::MouseWheelForward | EventKind::MouseWheelBackward)
    }

    /// Whether this kind carries a key token instead of a position
    pub fn is_keyboard(self) -> bool {
        matches!(self, EventKind::Char | EventKind::KeyPress | EventKind::KeyRelease)
    }
}

/// One raw input event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    /// What happened
    pub kind: EventKind,
    /// Pointer position in screen pixels (lower-left origin); keyboard events
    /// carry the last known pointer position
    pub position: (f64, f64),
    /// Key token for keyboard kinds: a single character, or a named token
    /// such as "return", "backspace", "left", "right", "space"
    pub key: Option<String>,
}

impl InputEvent {
    /// Create a pointer event at a position
    pub fn pointer(kind: EventKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            position: (x, y),
            key: None,
        }
    }

    /// Create a keyboard event with a key token
    pub fn keyboard(kind: EventKind, key: &str) -> Self {
        Self {
            kind,
            position: (0.0, 0.0),
            key: Some(key.to_string()),
        }
    }

    /// Create a character event with a key token
    pub fn character(key: &str) -> Self {
        Self::keyboard(EventKind::Char, key)
    }

    /// The key token, or an empty string for pointer events
    pub fn key_str(&self) -> &str {
        self.key.as_deref().unwrap_or("")
    }
}
