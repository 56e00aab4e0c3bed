//! Pointer Input Handling
//!
//! This crate turns raw winit window events into the three pointer events the
//! overlay listens for: move, click and resize.

mod pointer_tracker;

pub use pointer_tracker::{PointerEvent, PointerKind, PointerTracker};
