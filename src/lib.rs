//! Pointer particle overlay
//!
//! A transparent window that draws a particle trail behind the pointer,
//! bursts on click, and a two-ring cursor indicator.

pub mod config;
pub mod input;
pub mod systems;
