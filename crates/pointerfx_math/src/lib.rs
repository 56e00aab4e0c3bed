//! 2D Mathematics Library
//!
//! This crate provides the screen-space vector and color types shared by the
//! pointerfx crates.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector in viewport pixel space
//! - [`Rgb`] - Opaque base color (8-bit channels)
//! - [`Rgba`] - Float color with straight alpha

mod vec2;
pub mod color;

pub use vec2::Vec2;
pub use color::{Rgb, Rgba};
