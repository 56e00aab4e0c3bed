//! Particle simulation for pointerfx
//!
//! This crate provides the frame-stepped particle model behind the pointer
//! effect:
//! - Particles with position, velocity, fading life and a base color
//! - A particle world with per-frame gravity, decay and lazy culling
//! - Color palettes
//! - Spawn rules for the continuous trail and click bursts

pub mod palette;
pub mod particle;
pub mod spawn;
pub mod world;

// Re-export commonly used types
pub use palette::{Palette, DEFAULT_PALETTE};
pub use particle::{Particle, ParticleId, INITIAL_LIFE};
pub use spawn::{burst_velocities, trail_velocity, SpawnConfig, TrailLimiter};
pub use world::{ParticleConfig, ParticleWorld};
