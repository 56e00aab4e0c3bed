//! Core of the pointer particle overlay
//!
//! - [`PointerEffect`] - The particle simulator: trail and burst spawning, per-frame step and draw
//! - [`Canvas`] - Drawing surface the effect renders into
//! - [`RecordingCanvas`] - Canvas that records draw calls
//! - [`CursorRings`] - The two rings drawn at the pointer
//! - [`EffectLifecycle`] - Mount, event dispatch, frame tick and teardown
//! - [`FrameLoop`] - Explicit frame request handle
//! - [`ContentLoader`] - Background load of profile and portfolio content
//! - [`RevealLatch`] - One-shot scroll visibility latch

mod canvas;
mod content;
mod content_error;
mod content_loader;
mod cursor;
mod effect;
mod frame_loop;
mod lifecycle;
mod reveal;

pub use canvas::{Canvas, DrawCommand, PresentError, RecordingCanvas};
pub use content::{
    sort_portfolio, PageContent, PortfolioDocument, PortfolioItem, PortfolioSource, Profile,
    RonContentSource, DEFAULT_INTRO_TITLE, PLACEHOLDER_IMAGE_URL, PLACEHOLDER_LINK,
};
pub use content_error::ContentError;
pub use content_loader::ContentLoader;
pub use cursor::{CursorRing, CursorRings};
pub use effect::{EffectConfig, FrameStats, PointerEffect};
pub use frame_loop::{FrameLoop, FrameState};
pub use lifecycle::{EffectLifecycle, FrameStatus};
pub use reveal::{RevealLatch, ScrollState, Span};

// Re-export the types callers need to drive the effect
pub use pointerfx_input::{PointerEvent, PointerKind};
pub use pointerfx_math::{Rgb, Rgba, Vec2};
pub use pointerfx_sim::{Palette, ParticleConfig, ParticleId, SpawnConfig, DEFAULT_PALETTE};
