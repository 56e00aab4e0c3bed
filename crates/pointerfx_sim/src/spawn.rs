//! Spawn rules for the pointer trail and click bursts
//!
//! The trail is rate limited on wall-clock time: a pointer move only spawns a
//! particle when more than `trail_interval` has elapsed since the last trail
//! spawn. Physics is stepped per frame, independently of that clock.

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

use pointerfx_math::Vec2;
use rand::Rng;

/// Spawn parameters
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnConfig {
    /// Minimum wall-clock gap between trail particles
    pub trail_interval: Duration,
    /// Trail velocity components are drawn from [-trail_speed, trail_speed)
    pub trail_speed: f32,
    /// Particles per click burst
    pub burst_count: u32,
    /// Speed of every burst particle (pixels per frame)
    pub burst_speed: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            trail_interval: Duration::from_millis(30),
            trail_speed: 4.0,
            burst_count: 12,
            burst_speed: 5.0,
        }
    }
}

/// Wall-clock rate limiter for trail spawns
///
/// A limiter, not a sampler: any number of moves inside one interval yields
/// at most one spawn.
#[derive(Clone, Debug)]
pub struct TrailLimiter {
    interval: Duration,
    last_spawn: Option<Instant>,
}

impl TrailLimiter {
    /// Create a limiter that has never spawned
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_spawn: None,
        }
    }

    /// The configured interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time of the last permitted spawn, if any
    pub fn last_spawn(&self) -> Option<Instant> {
        self.last_spawn
    }

    /// Returns true and restarts the clock if a spawn is permitted at `now`
    ///
    /// The first call always succeeds. After that, strictly more than
    /// `interval` must have elapsed since the last permitted spawn.
    pub fn try_spawn(&mut self, now: Instant) -> bool {
        let permitted = match self.last_spawn {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.interval,
        };
        if permitted {
            self.last_spawn = Some(now);
        }
        permitted
    }

    /// Forget the last spawn
    pub fn reset(&mut self) {
        self.last_spawn = None;
    }
}

/// Random trail velocity, each component uniform in [-speed, speed)
pub fn trail_velocity<R: Rng + ?Sized>(rng: &mut R, speed: f32) -> Vec2 {
    let vx = (rng.random::<f32>() - 0.5) * 2.0 * speed;
    let vy = (rng.random::<f32>() - 0.5) * 2.0 * speed;
    Vec2::new(vx, vy)
}

/// `count` velocities of magnitude `speed` at equal angular spacing, starting at angle 0
pub fn burst_velocities(count: u32, speed: f32) -> impl Iterator<Item = Vec2> {
    (0..count).map(move |i| {
        let angle = i as f32 / count as f32 * TAU;
        Vec2::from_angle(angle) * speed
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_spawn_config() {
        let config = SpawnConfig::default();
        assert_eq!(config.trail_interval, Duration::from_millis(30));
        assert_eq!(config.trail_speed, 4.0);
        assert_eq!(config.burst_count, 12);
        assert_eq!(config.burst_speed, 5.0);
    }

    #[test]
    fn test_first_move_always_spawns() {
        let mut limiter = TrailLimiter::new(Duration::from_millis(30));
        assert!(limiter.try_spawn(Instant::now()));
    }

    #[test]
    fn test_limiter_blocks_inside_interval() {
        let start = Instant::now();
        let mut limiter = TrailLimiter::new(Duration::from_millis(30));
        assert!(limiter.try_spawn(start));

        for ms in [1, 10, 29, 30] {
            assert!(
                !limiter.try_spawn(start + Duration::from_millis(ms)),
                "Spawn at +{}ms should be blocked",
                ms
            );
        }
        // Blocked attempts do not move the clock
        assert_eq!(limiter.last_spawn(), Some(start));

        assert!(limiter.try_spawn(start + Duration::from_millis(31)));
        assert_eq!(limiter.last_spawn(), Some(start + Duration::from_millis(31)));
    }

    #[test]
    fn test_limiter_clock_going_backwards_blocks() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut limiter = TrailLimiter::new(Duration::from_millis(30));
        assert!(limiter.try_spawn(start));
        assert!(!limiter.try_spawn(start - Duration::from_millis(500)));
    }

    #[test]
    fn test_limiter_reset() {
        let start = Instant::now();
        let mut limiter = TrailLimiter::new(Duration::from_millis(30));
        assert!(limiter.try_spawn(start));
        limiter.reset();
        assert!(limiter.try_spawn(start + Duration::from_millis(1)));
    }

    #[test]
    fn test_trail_velocity_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let v = trail_velocity(&mut rng, 4.0);
            assert!(v.x >= -4.0 && v.x < 4.0, "vx out of range: {}", v.x);
            assert!(v.y >= -4.0 && v.y < 4.0, "vy out of range: {}", v.y);
        }
    }

    #[test]
    fn test_trail_velocity_zero_speed() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(trail_velocity(&mut rng, 0.0), Vec2::ZERO);
    }

    #[test]
    fn test_burst_is_radial_and_uniform() {
        let velocities: Vec<Vec2> = burst_velocities(12, 5.0).collect();
        assert_eq!(velocities.len(), 12);

        let step = TAU / 12.0;
        for (i, v) in velocities.iter().enumerate() {
            assert!((v.length() - 5.0).abs() < 1e-5, "Magnitude {} at {}", v.length(), i);

            let next = velocities[(i + 1) % 12];
            let mut delta = next.angle() - v.angle();
            if delta < 0.0 {
                delta += TAU;
            }
            assert!((delta - step).abs() < 1e-4, "Angular gap {} at {}", delta, i);
        }

        // First particle points along +X
        assert!((velocities[0].x - 5.0).abs() < 1e-6);
        assert!(velocities[0].y.abs() < 1e-6);
    }

    #[test]
    fn test_burst_zero_count() {
        assert_eq!(burst_velocities(0, 5.0).count(), 0);
    }
}
