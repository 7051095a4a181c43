//! Press/hover state machine shared by the pressable widgets.
//!
//! ```text
//!            move in                  down inside
//!   Idle  ───────────▶  Hovered  ─────────────────▶  Pressed
//!     ▲   ◀───────────     ▲                            │
//!     │      move out      │       up (inside)          │
//!     │                    └────────────────────────────┤
//!     └─────────────────────────────────────────────────┘
//!                          up (outside)
//! ```
//!
//! `Pressed` is only entered from a pointer-down whose position was inside
//! the widget. While pressed, moves never change the state; the widget keeps
//! tracking the pointer until the release decides between `Hovered` and
//! `Idle`.

/// Interaction state of a pressable widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressState {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

impl PressState {
    pub fn is_pressed(&self) -> bool {
        matches!(self, PressState::Pressed)
    }

    pub fn is_hovered(&self) -> bool {
        matches!(self, PressState::Hovered)
    }

    /// Pointer-down; returns `true` if the widget became pressed.
    pub fn press(&mut self, inside: bool) -> bool {
        if inside && !self.is_pressed() {
            *self = PressState::Pressed;
            true
        } else {
            false
        }
    }

    /// Pointer move; returns `true` if the state changed.
    pub fn hover(&mut self, inside: bool) -> bool {
        let next = match self {
            PressState::Pressed => return false,
            _ if inside => PressState::Hovered,
            _ => PressState::Idle,
        };
        let changed = *self != next;
        *self = next;
        changed
    }

    /// Pointer-up; returns `true` if the widget was pressed before.
    pub fn release(&mut self, inside: bool) -> bool {
        let was_pressed = self.is_pressed();
        if was_pressed {
            *self = if inside {
                PressState::Hovered
            } else {
                PressState::Idle
            };
        }
        was_pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_requires_inside() {
        let mut state = PressState::Idle;
        assert!(!state.press(false));
        assert_eq!(state, PressState::Idle);
        assert!(state.press(true));
        assert!(state.is_pressed());
    }

    #[test]
    fn test_hover_transitions() {
        let mut state = PressState::default();
        assert!(state.hover(true));
        assert!(state.is_hovered());
        assert!(!state.hover(true));
        assert!(state.hover(false));
        assert_eq!(state, PressState::Idle);
    }

    #[test]
    fn test_pressed_ignores_moves() {
        let mut state = PressState::Idle;
        state.press(true);
        assert!(!state.hover(false));
        assert!(state.is_pressed());
    }

    #[test]
    fn test_release_resolves_by_position() {
        let mut state = PressState::Idle;
        state.press(true);
        assert!(state.release(true));
        assert_eq!(state, PressState::Hovered);

        state.press(true);
        assert!(state.release(false));
        assert_eq!(state, PressState::Idle);

        assert!(!state.release(true));
        assert_eq!(state, PressState::Idle);
    }
}
