//! Drawing surface abstraction
//!
//! The effect draws through [`Canvas`] so the same frame logic runs against the
//! GPU overlay and against [`RecordingCanvas`] in tests.

use pointerfx_math::{Rgba, Vec2};

/// Error presenting a finished frame
#[derive(Debug, Clone, PartialEq)]
pub enum PresentError {
    /// Surface was lost and could not be recovered this frame
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for PresentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresentError::SurfaceLost => write!(f, "Surface lost"),
            PresentError::OutOfMemory => write!(f, "Out of memory"),
            PresentError::Other(msg) => write!(f, "Present error: {}", msg),
        }
    }
}

impl std::error::Error for PresentError {}

/// A full-viewport drawing surface in pixel coordinates
pub trait Canvas {
    /// Current surface size in pixels
    fn size(&self) -> (u32, u32);
    /// Match the surface to a new viewport size
    fn resize(&mut self, width: u32, height: u32);
    /// Clear the whole surface to transparent
    fn clear(&mut self);
    /// Fill a disc
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Stroke a ring centred on the circle of `radius`
    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgba);
    /// Show everything drawn since the last clear
    fn present(&mut self) -> Result<(), PresentError> {
        Ok(())
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Stroke {
        center: Vec2,
        radius: f32,
        line_width: f32,
        color: Rgba,
    },
}

/// Canvas that records draw calls instead of rasterizing them
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    clears: u64,
    presents: u64,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Draw calls since the last clear
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Filled discs since the last clear
    pub fn fills(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill { .. }))
    }

    /// Stroked rings since the last clear
    pub fn strokes(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { .. }))
    }

    /// Number of times the canvas was cleared
    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    /// Number of frames presented
    pub fn present_count(&self) -> u64 {
        self.presents
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Fill { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Stroke {
            center,
            radius,
            line_width,
            color,
        });
    }

    fn present(&mut self) -> Result<(), PresentError> {
        self.presents += 1;
        Ok(())
    }
}
