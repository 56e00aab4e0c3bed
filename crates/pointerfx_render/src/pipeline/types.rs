//! GPU-compatible data types for the overlay pipeline
//!
//! These types match the layouts in `overlay.wgsl` exactly.

use bytemuck::{Pod, Zeroable};
use pointerfx_math::{Rgba, Vec2};

/// One circle to draw, uploaded as per-instance vertex data
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    /// Center in window pixels, y down
    pub center: [f32; 2],
    /// Radius in pixels
    pub radius: f32,
    /// Stroke width in pixels; 0 fills the disc
    pub line_width: f32,
    /// Linear RGBA, straight (not premultiplied) alpha
    pub color: [f32; 4],
}

impl CircleInstance {
    /// A filled disc
    pub fn disc(center: Vec2, radius: f32, color: Rgba) -> Self {
        Self::ring(center, radius, 0.0, color)
    }

    /// A stroked ring
    pub fn ring(center: Vec2, radius: f32, line_width: f32, color: Rgba) -> Self {
        Self {
            center: center.to_array(),
            radius,
            line_width: line_width.max(0.0),
            color: color.to_linear().to_array(),
        }
    }

    pub fn is_fill(&self) -> bool {
        self.line_width == 0.0
    }
}

/// Overlay uniforms
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct OverlayUniforms {
    /// Viewport size in pixels
    pub viewport: [f32; 2],
    /// Padding to 16 bytes
    pub _padding: [f32; 2],
}

impl OverlayUniforms {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: [width.max(1) as f32, height.max(1) as f32],
            _padding: [0.0; 2],
        }
    }
}

impl Default for OverlayUniforms {
    fn default() -> Self {
        Self::new(1, 1)
    }
}
