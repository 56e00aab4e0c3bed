//! Pointer particle effect
//!
//! Owns the particle world, the cursor position and the trail spawn clock.
//! The only ways in are the three event handlers and the frame tick:
//!
//! - [`PointerEffect::on_pointer_move`]: move cursor, maybe spawn a trail particle
//! - [`PointerEffect::on_click`]: spawn a radial burst
//! - [`PointerEffect::on_resize`]: resize the canvas
//! - [`PointerEffect::on_frame_tick`]: cull, step, draw

use std::time::Instant;

use pointerfx_math::Vec2;
use pointerfx_sim::{
    burst_velocities, trail_velocity, Palette, Particle, ParticleConfig, ParticleId,
    ParticleWorld, SpawnConfig, TrailLimiter,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::canvas::Canvas;
use crate::cursor::CursorRings;

/// Everything that tunes the effect
#[derive(Clone, Debug, PartialEq)]
pub struct EffectConfig {
    /// Per-frame gravity and decay
    pub particles: ParticleConfig,
    /// Trail rate limit and burst shape
    pub spawn: SpawnConfig,
    /// Colors new particles draw from
    pub palette: Palette,
    /// Radius of a particle at full life
    pub max_radius: f32,
    /// Particles at or below this radius are not drawn
    pub min_visible_radius: f32,
    /// Cursor indicator
    pub rings: CursorRings,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            particles: ParticleConfig::default(),
            spawn: SpawnConfig::default(),
            palette: Palette::default(),
            max_radius: 8.0,
            min_visible_radius: 0.1,
            rings: CursorRings::default(),
        }
    }
}

/// Counters from one frame tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Particles removed at the start of the frame
    pub culled: usize,
    /// Particles stepped this frame
    pub active: usize,
    /// Particles drawn (visible radius)
    pub drawn: usize,
}

/// The pointer particle simulator
pub struct PointerEffect {
    world: ParticleWorld,
    cursor: Vec2,
    trail: TrailLimiter,
    spawn: SpawnConfig,
    palette: Palette,
    max_radius: f32,
    min_visible_radius: f32,
    rings: CursorRings,
    rng: StdRng,
}

impl PointerEffect {
    /// Create an effect seeded from the OS
    pub fn new(config: EffectConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create an effect with a deterministic seed
    pub fn with_seed(config: EffectConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EffectConfig, rng: StdRng) -> Self {
        Self {
            world: ParticleWorld::with_config(config.particles),
            cursor: Vec2::ZERO,
            trail: TrailLimiter::new(config.spawn.trail_interval),
            spawn: config.spawn,
            palette: config.palette,
            max_radius: config.max_radius,
            min_visible_radius: config.min_visible_radius,
            rings: config.rings,
            rng,
        }
    }

    /// Latest known pointer position
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Active particles, read-only
    pub fn particles(&self) -> &[Particle] {
        self.world.particles()
    }

    /// Number of active particles
    pub fn particle_count(&self) -> usize {
        self.world.len()
    }

    /// Total particles spawned since creation
    pub fn total_spawned(&self) -> u64 {
        self.world.total_spawned()
    }

    /// Pointer moved: always updates the cursor, spawns at most one trail
    /// particle per rate-limit window
    pub fn on_pointer_move(&mut self, position: Vec2, now: Instant) -> Option<ParticleId> {
        self.cursor = position;

        if !self.trail.try_spawn(now) {
            return None;
        }

        let velocity = trail_velocity(&mut self.rng, self.spawn.trail_speed);
        let color = self.palette.pick(&mut self.rng);
        Some(self.world.spawn(position, velocity, color))
    }

    /// Click: spawns a full burst at `position`, returns how many were spawned
    pub fn on_click(&mut self, position: Vec2) -> usize {
        let mut spawned = 0;
        for velocity in burst_velocities(self.spawn.burst_count, self.spawn.burst_speed) {
            let color = self.palette.pick(&mut self.rng);
            self.world.spawn(position, velocity, color);
            spawned += 1;
        }
        spawned
    }

    /// Viewport resized: the canvas follows, particles and cursor do not move
    pub fn on_resize<C: Canvas + ?Sized>(&mut self, canvas: &mut C, width: u32, height: u32) {
        canvas.resize(width, height);
    }

    /// One animation frame
    ///
    /// Clears the canvas, culls dead particles, steps the rest, draws every
    /// particle with a visible radius, then draws the cursor rings.
    pub fn on_frame_tick<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> FrameStats {
        canvas.clear();

        let culled = self.world.step();

        let mut drawn = 0;
        for particle in self.world.particles() {
            let radius = particle.radius(self.max_radius);
            if radius > self.min_visible_radius {
                canvas.fill_circle(
                    particle.position,
                    radius,
                    particle.color.with_alpha(particle.opacity()),
                );
                drawn += 1;
            }
        }

        self.rings.draw(canvas, self.cursor);

        FrameStats {
            culled,
            active: self.world.len(),
            drawn,
        }
    }

    /// Drop all particles and forget the trail clock
    pub fn clear(&mut self) {
        self.world.clear();
        self.trail.reset();
    }
}
