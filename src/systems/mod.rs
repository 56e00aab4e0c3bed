//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod overlay;
mod window;

pub use overlay::OverlaySystem;
pub use window::{WindowError, WindowSystem};
