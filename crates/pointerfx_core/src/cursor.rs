//! Cursor indicator rings

use pointerfx_math::{Rgba, Vec2};

use crate::canvas::Canvas;

/// A stroked ring of fixed radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorRing {
    /// Ring radius in pixels
    pub radius: f32,
    /// Stroke width in pixels
    pub line_width: f32,
    /// Stroke color
    pub color: Rgba,
}

impl CursorRing {
    pub fn new(radius: f32, line_width: f32, color: Rgba) -> Self {
        Self {
            radius,
            line_width,
            color,
        }
    }
}

/// The two concentric rings drawn at the latest pointer position
///
/// Static size: unaffected by the particle simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorRings {
    pub inner: CursorRing,
    pub outer: CursorRing,
}

impl Default for CursorRings {
    fn default() -> Self {
        Self {
            // rgba(79, 70, 229, 0.6)
            inner: CursorRing::new(
                12.0,
                2.0,
                Rgba::new(79.0 / 255.0, 70.0 / 255.0, 229.0 / 255.0, 0.6),
            ),
            // rgba(225, 29, 72, 0.3)
            outer: CursorRing::new(
                18.0,
                1.0,
                Rgba::new(225.0 / 255.0, 29.0 / 255.0, 72.0 / 255.0, 0.3),
            ),
        }
    }
}

impl CursorRings {
    /// Stroke inner then outer ring centred on `position`
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, position: Vec2) {
        for ring in [self.inner, self.outer] {
            canvas.stroke_circle(position, ring.radius, ring.line_width, ring.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};

    #[test]
    fn test_default_rings() {
        let rings = CursorRings::default();
        assert_eq!(rings.inner.radius, 12.0);
        assert_eq!(rings.inner.line_width, 2.0);
        assert_eq!(rings.inner.color.a, 0.6);
        assert_eq!(rings.outer.radius, 18.0);
        assert_eq!(rings.outer.line_width, 1.0);
        assert_eq!(rings.outer.color.a, 0.3);
    }

    #[test]
    fn test_draw_inner_then_outer() {
        let rings = CursorRings::default();
        let mut canvas = RecordingCanvas::new(100, 100);
        rings.draw(&mut canvas, Vec2::new(40.0, 50.0));

        let radii: Vec<f32> = canvas
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Stroke { center, radius, .. } => {
                    assert_eq!(*center, Vec2::new(40.0, 50.0));
                    *radius
                }
                DrawCommand::Fill { .. } => panic!("Rings are stroked, not filled"),
            })
            .collect();
        assert_eq!(radii, vec![12.0, 18.0]);
    }
}
