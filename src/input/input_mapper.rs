//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to application actions. Pointer input is never mapped
//! here; it goes to the overlay's pointer tracker untouched.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Application-level actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
}

/// Maps raw key events to actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for bound keys on press, `None` otherwise
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_f_toggles_fullscreen() {
        let action = InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::ToggleFullscreen));
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released);
        assert_eq!(action, None);
    }

    #[test]
    fn test_unbound_keys_not_mapped() {
        for key in [KeyCode::KeyW, KeyCode::Space, KeyCode::Enter] {
            assert_eq!(
                InputMapper::map_keyboard(key, ElementState::Pressed),
                None,
                "Key {:?} should not be mapped",
                key
            );
        }
    }
}
