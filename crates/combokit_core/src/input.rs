//! Input event types
//!
//! Unified keyboard and pointer events supplied by the embedder. Combokit is
//! headless: it never talks to a windowing system directly, the host
//! translates its platform events (winit, DOM, terminal) into these types and
//! feeds them to the widget layer.

// ============================================================================
// Keyboard Events
// ============================================================================

/// Keyboard event
#[derive(Clone, Debug)]
pub struct KeyboardEvent {
    /// The key that was pressed or released
    pub key: Key,
    /// Whether the key was pressed or released
    pub state: KeyState,
    /// Modifier keys held during this event
    pub modifiers: Modifiers,
}

impl KeyboardEvent {
    /// Convenience constructor for a plain key press (no modifiers)
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
        }
    }
}

/// Key press/release state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyState {
    /// Key was pressed
    Pressed,
    /// Key was released
    Released,
}

/// Modifier key state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key is held
    pub shift: bool,
    /// Control key is held
    pub ctrl: bool,
    /// Alt key is held (Option on macOS)
    pub alt: bool,
    /// Meta key is held (Command on macOS, Windows key on Windows)
    pub meta: bool,
}

impl Modifiers {
    /// Check if no modifiers are held
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }
}

/// Key codes relevant to widget interaction
///
/// Text content arrives as `Char` events; everything the combobox dispatches
/// on is a named key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Enter / Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Tab
    Tab,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// Home
    Home,
    /// End
    End,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Character input (for text entry)
    Char(char),
    /// Any key the widget layer has no use for
    Unknown,
}

// ============================================================================
// Pointer Events
// ============================================================================

/// Pointer button identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left / primary button
    Left,
    /// Right / secondary button
    Right,
    /// Middle button (scroll wheel click)
    Middle,
    /// Other button with index
    Other(u16),
}

/// Pointer event in window coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Button pressed at a position
    Down {
        /// Which button
        button: PointerButton,
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
    },
    /// Button released at a position
    Up {
        /// Which button
        button: PointerButton,
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
    },
    /// Pointer moved
    Moved {
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
    },
}

impl PointerEvent {
    /// Get the event position
    pub fn position(&self) -> (f32, f32) {
        match self {
            PointerEvent::Down { x, y, .. } => (*x, *y),
            PointerEvent::Up { x, y, .. } => (*x, *y),
            PointerEvent::Moved { x, y } => (*x, *y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_constructor() {
        let ev = KeyboardEvent::pressed(Key::Down);
        assert_eq!(ev.key, Key::Down);
        assert_eq!(ev.state, KeyState::Pressed);
        assert!(ev.modifiers.is_empty());
    }

    #[test]
    fn test_pointer_position() {
        let ev = PointerEvent::Down {
            button: PointerButton::Left,
            x: 12.0,
            y: 34.0,
        };
        assert_eq!(ev.position(), (12.0, 34.0));
    }
}
