//! Overlay rendering
//!
//! This crate provides the wgpu side of the pointer overlay.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and transparent surface
//! - [`pipeline::OverlayPipeline`] - Instanced circle rendering
//! - [`overlay_canvas::OverlayCanvas`] - A `Canvas` that draws through the pipeline

pub mod context;
pub mod pipeline;
pub mod overlay_canvas;

pub use context::{ContextError, RenderContext};
pub use overlay_canvas::OverlayCanvas;
