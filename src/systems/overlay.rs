//! Pointer overlay system
//!
//! Owns the mounted pointer effect and the pointer tracker. Window events are
//! translated into pointer events and dispatched to the effect; each redraw
//! runs one frame tick.

use std::sync::Arc;
use std::time::Instant;

use winit::event::WindowEvent;
use winit::window::Window;

use pointerfx_core::{Canvas, EffectLifecycle, FrameStatus, PointerEffect, PointerEvent};
use pointerfx_input::PointerTracker;
use pointerfx_render::{OverlayCanvas, RenderContext};

use crate::config::AppConfig;

/// Drives the pointer effect from window events
pub struct OverlaySystem<C: Canvas = OverlayCanvas> {
    lifecycle: EffectLifecycle<C>,
    tracker: PointerTracker,
    stats_interval: u64,
}

impl OverlaySystem<OverlayCanvas> {
    /// Acquire a GPU canvas on `window` and mount the effect on it
    ///
    /// If the surface cannot be acquired the overlay stays inactive.
    pub fn attach(window: Arc<Window>, config: &AppConfig) -> Self {
        let canvas = pollster::block_on(RenderContext::new(window, config.window.vsync))
            .ok()
            .map(OverlayCanvas::new);
        Self::with_canvas(canvas, config)
    }
}

impl<C: Canvas> OverlaySystem<C> {
    /// Mount the effect on an already acquired canvas
    pub fn with_canvas(canvas: Option<C>, config: &AppConfig) -> Self {
        let effect_config = config.to_effect_config();
        let effect = match config.effect.seed {
            Some(seed) => PointerEffect::with_seed(effect_config, seed),
            None => PointerEffect::new(effect_config),
        };

        let lifecycle = EffectLifecycle::mount(canvas, effect);
        if lifecycle.is_mounted() {
            log::info!("Pointer effect mounted");
        }

        Self {
            lifecycle,
            tracker: PointerTracker::new(),
            stats_interval: config.rendering.stats_interval,
        }
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    pub fn lifecycle(&self) -> &EffectLifecycle<C> {
        &self.lifecycle
    }

    /// Forward a window event. Returns true if the effect handled it.
    ///
    /// The event is only observed; the caller remains free to act on it.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match self.tracker.process_window_event(event) {
            Some(pointer_event) => self.handle_pointer_event(pointer_event, Instant::now()),
            None => false,
        }
    }

    /// Dispatch an already translated pointer event
    pub fn handle_pointer_event(&mut self, event: PointerEvent, now: Instant) -> bool {
        self.lifecycle.dispatch(event, now)
    }

    /// Run one animation frame
    pub fn frame(&mut self) -> FrameStatus {
        let status = self.lifecycle.tick();

        match &status {
            FrameStatus::Rendered(stats) => {
                let frames = self.lifecycle.frames_rendered();
                if self.stats_interval > 0 && frames % self.stats_interval == 0 {
                    log::debug!(
                        "Frame {}: {} particles, {} drawn, {} culled",
                        frames,
                        stats.active,
                        stats.drawn,
                        stats.culled
                    );
                }
            }
            FrameStatus::Failed(e) => log::warn!("Frame not presented: {}", e),
            FrameStatus::Idle => {}
        }

        status
    }

    /// Tear the effect down
    pub fn unmount(&mut self) {
        self.lifecycle.unmount();
    }
}
