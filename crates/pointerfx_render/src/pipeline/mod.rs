//! Overlay pipeline components

pub mod types;
pub mod overlay_pipeline;

pub use types::{CircleInstance, OverlayUniforms};
pub use overlay_pipeline::OverlayPipeline;
