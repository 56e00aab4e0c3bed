//! Pointer tracker for window events
//!
//! Events:
//! - Cursor moved: `Move` at the new position
//! - Left button pressed then released: `Click` at the last known position
//! - Window resized: `Resize` with the new inner size
//!
//! All coordinates are physical pixels, matching the render surface.

use pointerfx_math::Vec2;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// A pointer or viewport event, in the shape the overlay consumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to a new position
    Move(Vec2),
    /// Primary button clicked at a position
    Click(Vec2),
    /// Viewport resized
    Resize { width: u32, height: u32 },
}

/// Event category, one per listener the overlay registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Move,
    Click,
    Resize,
}

impl PointerEvent {
    /// The listener category this event is delivered to
    pub fn kind(&self) -> PointerKind {
        match self {
            PointerEvent::Move(_) => PointerKind::Move,
            PointerEvent::Click(_) => PointerKind::Click,
            PointerEvent::Resize { .. } => PointerKind::Resize,
        }
    }
}

/// Tracks cursor state across window events
///
/// winit reports button presses without a position, so the tracker keeps the
/// last cursor position to attach to clicks.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Option<Vec2>,
    primary_down: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position, if the cursor has entered the window
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Whether the primary button is currently held
    pub fn is_primary_down(&self) -> bool {
        self.primary_down
    }

    /// Process any window event, returning the pointer event it maps to
    pub fn process_window_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.process_cursor_moved(position.x, position.y))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.process_mouse_button(*button, *state)
            }
            WindowEvent::Resized(size) => Some(self.process_resize(size.width, size.height)),
            WindowEvent::CursorLeft { .. } => {
                // Releasing outside the window is not a click
                self.primary_down = false;
                None
            }
            _ => None,
        }
    }

    /// Process cursor movement in physical pixels
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) -> PointerEvent {
        let position = Vec2::from((x, y));
        self.position = Some(position);
        PointerEvent::Move(position)
    }

    /// Process a mouse button transition
    ///
    /// A click is reported on release of the primary button, provided the
    /// press was seen and the cursor position is known.
    pub fn process_mouse_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
    ) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed => {
                self.primary_down = true;
                None
            }
            ElementState::Released => {
                let was_down = std::mem::replace(&mut self.primary_down, false);
                match (was_down, self.position) {
                    (true, Some(position)) => Some(PointerEvent::Click(position)),
                    _ => None,
                }
            }
        }
    }

    /// Process a viewport resize
    pub fn process_resize(&mut self, width: u32, height: u32) -> PointerEvent {
        PointerEvent::Resize { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_updates_position() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.position(), None);

        let event = tracker.process_cursor_moved(120.5, 40.0);
        assert_eq!(event, PointerEvent::Move(Vec2::new(120.5, 40.0)));
        assert_eq!(tracker.position(), Some(Vec2::new(120.5, 40.0)));
    }

    #[test]
    fn test_click_on_release_at_last_position() {
        let mut tracker = PointerTracker::new();
        tracker.process_cursor_moved(10.0, 20.0);

        assert_eq!(
            tracker.process_mouse_button(MouseButton::Left, ElementState::Pressed),
            None
        );
        assert!(tracker.is_primary_down());

        tracker.process_cursor_moved(15.0, 25.0);
        let event = tracker.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert_eq!(event, Some(PointerEvent::Click(Vec2::new(15.0, 25.0))));
        assert!(!tracker.is_primary_down());
    }

    #[test]
    fn test_release_without_press_is_not_a_click() {
        let mut tracker = PointerTracker::new();
        tracker.process_cursor_moved(10.0, 20.0);
        assert_eq!(
            tracker.process_mouse_button(MouseButton::Left, ElementState::Released),
            None
        );
    }

    #[test]
    fn test_click_without_position_ignored() {
        let mut tracker = PointerTracker::new();
        tracker.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(
            tracker.process_mouse_button(MouseButton::Left, ElementState::Released),
            None
        );
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut tracker = PointerTracker::new();
        tracker.process_cursor_moved(1.0, 1.0);
        for button in [MouseButton::Right, MouseButton::Middle] {
            assert_eq!(tracker.process_mouse_button(button, ElementState::Pressed), None);
            assert_eq!(tracker.process_mouse_button(button, ElementState::Released), None);
        }
        assert!(!tracker.is_primary_down());
    }

    #[test]
    fn test_resize() {
        let mut tracker = PointerTracker::new();
        let event = tracker.process_resize(1920, 1080);
        assert_eq!(event, PointerEvent::Resize { width: 1920, height: 1080 });
        assert_eq!(event.kind(), PointerKind::Resize);
    }

    #[test]
    fn test_event_kinds() {
        assert_eq!(PointerEvent::Move(Vec2::ZERO).kind(), PointerKind::Move);
        assert_eq!(PointerEvent::Click(Vec2::ZERO).kind(), PointerKind::Click);
    }
}
