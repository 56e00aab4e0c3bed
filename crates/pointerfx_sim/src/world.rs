//! Particle world and per-frame simulation

use crate::particle::{Particle, ParticleId};
use pointerfx_math::{Rgb, Vec2};

/// Configuration for the particle simulation
///
/// All rates are per frame, not per second.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    /// Added to every particle's `vy` each frame (positive = down the screen)
    pub gravity: f32,
    /// Subtracted from every particle's life each frame
    pub decay: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            gravity: 0.2,
            decay: 0.02,
        }
    }
}

impl ParticleConfig {
    /// Create a new particle config
    pub fn new(gravity: f32, decay: f32) -> Self {
        Self { gravity, decay }
    }

    /// Frames a particle survives before its life reaches zero
    pub fn lifetime_frames(&self) -> u32 {
        if self.decay <= 0.0 {
            return u32::MAX;
        }
        (crate::INITIAL_LIFE / self.decay).ceil() as u32
    }
}

/// The active particle collection
///
/// No capacity limit: its size is bounded by spawn rate times lifetime.
pub struct ParticleWorld {
    /// Active particles in spawn order
    particles: Vec<Particle>,
    /// Id handed to the next spawned particle
    next_id: u64,
    /// Simulation configuration
    pub config: ParticleConfig,
}

impl ParticleWorld {
    /// Create a new world with default configuration
    pub fn new() -> Self {
        Self::with_config(ParticleConfig::default())
    }

    /// Create a new world with custom configuration
    pub fn with_config(config: ParticleConfig) -> Self {
        Self {
            particles: Vec::new(),
            next_id: 0,
            config,
        }
    }

    /// Add a particle with full life and return its id
    pub fn spawn(&mut self, position: Vec2, velocity: Vec2, color: Rgb) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        self.particles.push(Particle::new(id, position, velocity, color));
        id
    }

    /// Active particles in spawn order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of active particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether there are no active particles
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Total particles ever spawned in this world
    pub fn total_spawned(&self) -> u64 {
        self.next_id
    }

    /// Remove every particle with `life <= 0`, returning how many were removed
    pub fn cull(&mut self) -> usize {
        let before = self.particles.len();
        self.particles.retain(Particle::is_alive);
        before - self.particles.len()
    }

    /// Advance every particle one frame
    ///
    /// Particles are independent; none reads another's state.
    pub fn integrate(&mut self) {
        let ParticleConfig { gravity, decay } = self.config;
        for particle in &mut self.particles {
            particle.step(gravity, decay);
        }
    }

    /// One simulation frame: lazy cull, then integrate
    ///
    /// Particles that die during this integration stay in the collection
    /// until the next call culls them. Returns the number culled.
    pub fn step(&mut self) -> usize {
        let culled = self.cull();
        self.integrate();
        culled
    }

    /// Remove all particles. Ids keep counting from where they were.
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

impl Default for ParticleWorld {
    fn default() -> Self {
        Self::new()
    }
}
