//! Scroll reveal helpers
//!
//! Library-only: the overlay binary has no scrolling page, so these are used
//! by embedders that lay out the portfolio page themselves.

/// A vertical span in page coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Length of the overlap with `other`
    pub fn overlap(&self, other: &Span) -> f32 {
        (self.bottom().min(other.bottom()) - self.top.max(other.top)).max(0.0)
    }
}

/// One-shot visibility latch
///
/// Flips to visible the first time enough of the target enters the viewport
/// and stays visible after that.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f32,
    visible: bool,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl RevealLatch {
    /// `threshold` is the visible fraction of the target required, clamped to [0, 1]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed the current target and viewport spans. Returns true on the
    /// observation that flips the latch.
    pub fn observe(&mut self, target: Span, viewport: Span) -> bool {
        if self.visible {
            return false;
        }

        let overlap = target.overlap(&viewport);
        let intersecting = if target.height <= 0.0 {
            target.top >= viewport.top && target.top <= viewport.bottom()
        } else {
            overlap > 0.0 && overlap / target.height >= self.threshold
        };

        if intersecting {
            self.visible = true;
        }
        intersecting
    }
}

/// Navbar "scrolled" state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    scrolled: bool,
}

impl ScrollState {
    /// Scroll offset beyond which the page counts as scrolled
    pub const THRESHOLD: f32 = 10.0;

    pub fn is_scrolled_at(offset: f32) -> bool {
        offset > Self::THRESHOLD
    }

    /// Update from a scroll offset. Returns true if the state changed.
    pub fn update(&mut self, offset: f32) -> bool {
        let scrolled = Self::is_scrolled_at(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}
