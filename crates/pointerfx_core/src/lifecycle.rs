//! Effect lifecycle
//!
//! Scoped registration for the overlay: mounting acquires the canvas, the
//! three pointer listeners and the frame handle together, and
//! [`EffectLifecycle::unmount`] releases all of them in one routine. Dropping
//! the lifecycle unmounts, so every exit path tears down.
//!
//! If no canvas could be acquired at mount time the lifecycle stays inactive:
//! nothing is registered, nothing is scheduled, nothing is reported.

use std::collections::HashSet;
use std::time::Instant;

use pointerfx_input::{PointerEvent, PointerKind};

use crate::canvas::{Canvas, PresentError};
use crate::effect::{FrameStats, PointerEffect};
use crate::frame_loop::FrameLoop;

/// Outcome of a frame callback
#[derive(Debug, Clone, PartialEq)]
pub enum FrameStatus {
    /// A frame was simulated and drawn, and the next one requested
    Rendered(FrameStats),
    /// No frame was pending (never mounted, or torn down)
    Idle,
    /// The frame ran but could not be shown; the next one is still requested
    /// unless the error is fatal
    Failed(PresentError),
}

impl FrameStatus {
    /// Whether the host should schedule another refresh callback
    pub fn wants_next_frame(&self) -> bool {
        match self {
            FrameStatus::Rendered(_) => true,
            FrameStatus::Idle => false,
            FrameStatus::Failed(e) => *e != PresentError::OutOfMemory,
        }
    }
}

struct Mounted<C> {
    effect: PointerEffect,
    canvas: C,
}

/// Owner of a mounted [`PointerEffect`], its canvas, listeners and frame loop
pub struct EffectLifecycle<C: Canvas> {
    mounted: Option<Mounted<C>>,
    listeners: HashSet<PointerKind>,
    frames: FrameLoop,
}

impl<C: Canvas> EffectLifecycle<C> {
    /// Mount the effect on `canvas`
    ///
    /// `None` means the drawing surface could not be acquired: the returned
    /// lifecycle is inert and the effect is dropped.
    pub fn mount(canvas: Option<C>, effect: PointerEffect) -> Self {
        let mut lifecycle = Self {
            mounted: None,
            listeners: HashSet::new(),
            frames: FrameLoop::new(),
        };

        let Some(canvas) = canvas else {
            return lifecycle;
        };

        lifecycle.mounted = Some(Mounted { effect, canvas });
        lifecycle
            .listeners
            .extend([PointerKind::Move, PointerKind::Click, PointerKind::Resize]);
        lifecycle.frames.request();
        lifecycle
    }

    /// Whether the effect is live
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Whether a listener for `kind` is registered
    pub fn is_listening(&self, kind: PointerKind) -> bool {
        self.listeners.contains(&kind)
    }

    /// Whether a frame callback is pending
    pub fn has_pending_frame(&self) -> bool {
        self.frames.is_pending()
    }

    /// Frames rendered since mount
    pub fn frames_rendered(&self) -> u64 {
        self.frames.frames_run()
    }

    /// The mounted effect, read-only
    pub fn effect(&self) -> Option<&PointerEffect> {
        self.mounted.as_ref().map(|m| &m.effect)
    }

    /// The mounted canvas, read-only
    pub fn canvas(&self) -> Option<&C> {
        self.mounted.as_ref().map(|m| &m.canvas)
    }

    /// Deliver a pointer event. Returns true if a registered listener handled it.
    ///
    /// The event is never consumed on behalf of other handlers; callers keep
    /// routing it wherever else it should go.
    pub fn dispatch(&mut self, event: PointerEvent, now: Instant) -> bool {
        if !self.listeners.contains(&event.kind()) {
            return false;
        }
        let Some(mounted) = self.mounted.as_mut() else {
            return false;
        };

        match event {
            PointerEvent::Move(position) => {
                mounted.effect.on_pointer_move(position, now);
            }
            PointerEvent::Click(position) => {
                mounted.effect.on_click(position);
            }
            PointerEvent::Resize { width, height } => {
                mounted.effect.on_resize(&mut mounted.canvas, width, height);
            }
        }
        true
    }

    /// Run the pending frame, if there is one, then request the next
    pub fn tick(&mut self) -> FrameStatus {
        if !self.frames.take() {
            return FrameStatus::Idle;
        }
        let Some(mounted) = self.mounted.as_mut() else {
            return FrameStatus::Idle;
        };

        let stats = mounted.effect.on_frame_tick(&mut mounted.canvas);
        let presented = mounted.canvas.present();

        let status = match presented {
            Ok(()) => FrameStatus::Rendered(stats),
            Err(e) => FrameStatus::Failed(e),
        };
        if status.wants_next_frame() {
            self.frames.request();
        }
        status
    }

    /// Tear down: deregister listeners, cancel the pending frame, clear the
    /// particle collection and release the canvas. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        self.listeners.clear();
        self.frames.cancel();
        if let Some(mut mounted) = self.mounted.take() {
            mounted.effect.clear();
            log::debug!(
                "Pointer effect unmounted after {} frames",
                self.frames.frames_run()
            );
        }
    }
}

impl<C: Canvas> Drop for EffectLifecycle<C> {
    fn drop(&mut self) {
        self.unmount();
    }
}
