//! Particle type for the pointer effect

use pointerfx_math::{Rgb, Vec2};

/// Life every particle is born with
pub const INITIAL_LIFE: f32 = 1.0;

/// Identifier of a particle, unique for the lifetime of its world
///
/// Ids are handed out in increasing order and never reused. They exist for
/// identity and debugging; the world does not index particles by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(pub u64);

/// A short-lived point with position, velocity and fading life
#[derive(Clone, Debug)]
pub struct Particle {
    /// Unique id (monotonic)
    pub id: ParticleId,
    /// Position in viewport pixels
    pub position: Vec2,
    /// Velocity in pixels per frame
    pub velocity: Vec2,
    /// Remaining life: 1.0 when spawned, removable once <= 0.0
    pub life: f32,
    /// Base color, opacity is derived from `life` at draw time
    pub color: Rgb,
    /// Frames stepped since spawn
    age: u32,
}

impl Particle {
    /// Create a freshly spawned particle
    pub fn new(id: ParticleId, position: Vec2, velocity: Vec2, color: Rgb) -> Self {
        Self {
            id,
            position,
            velocity,
            life: INITIAL_LIFE,
            color,
            age: 0,
        }
    }

    /// Number of frames this particle has been stepped
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Whether the particle is still in the active set after the next cull
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Advance one frame: move, apply gravity to `vy`, decay life
    ///
    /// Life is recomputed from the frame age rather than decremented in place,
    /// so after `n` steps it is exactly `INITIAL_LIFE - n * decay`.
    pub fn step(&mut self, gravity: f32, decay: f32) {
        self.position += self.velocity;
        self.velocity.y += gravity;
        self.age += 1;
        self.life = INITIAL_LIFE - self.age as f32 * decay;
    }

    /// Draw radius: shrinks linearly with life, never negative
    pub fn radius(&self, max_radius: f32) -> f32 {
        self.life.max(0.0) * max_radius
    }

    /// Draw opacity: equal to life, clamped at zero, rounded to two decimals
    pub fn opacity(&self) -> f32 {
        (self.life.max(0.0) * 100.0).round() / 100.0
    }
}
