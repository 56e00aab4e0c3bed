//! Frame scheduling handle
//!
//! Replaces "render, then ask to be called again" self-scheduling with an
//! explicit handle. The host's per-refresh callback calls [`FrameLoop::take`];
//! only a pending request turns into a frame. Cancelling is terminal, so a
//! callback that was already queued by the host finds nothing to run.

/// State of the next frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameState {
    /// No frame requested
    Idle,
    /// A frame will run on the next refresh
    Pending,
    /// Loop torn down, requests are refused
    Cancelled,
}

/// Explicit frame request handle for a single animation loop
#[derive(Debug)]
pub struct FrameLoop {
    state: FrameState,
    frames_run: u64,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            state: FrameState::Idle,
            frames_run: 0,
        }
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Frames handed out by `take` so far
    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    pub fn is_pending(&self) -> bool {
        self.state == FrameState::Pending
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == FrameState::Cancelled
    }

    /// Ask for a frame on the next refresh. Refused once cancelled.
    pub fn request(&mut self) -> bool {
        match self.state {
            FrameState::Cancelled => false,
            _ => {
                self.state = FrameState::Pending;
                true
            }
        }
    }

    /// Consume the pending request, if any
    pub fn take(&mut self) -> bool {
        if self.state == FrameState::Pending {
            self.state = FrameState::Idle;
            self.frames_run += 1;
            true
        } else {
            false
        }
    }

    /// Cancel the pending frame and refuse all future requests
    pub fn cancel(&mut self) {
        self.state = FrameState::Cancelled;
    }
}
