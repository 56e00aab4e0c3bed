//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`PFX_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;

use pointerfx_core::{
    CursorRing, CursorRings, EffectConfig, Palette, ParticleConfig, Rgb, SpawnConfig,
};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Particle effect configuration
    #[serde(default)]
    pub effect: EffectSettings,
    /// Cursor ring configuration
    #[serde(default)]
    pub cursor: CursorConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Page content configuration
    #[serde(default)]
    pub content: ContentConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`PFX_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // PFX_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("PFX_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Build the effect's runtime configuration
    pub fn to_effect_config(&self) -> EffectConfig {
        EffectConfig {
            particles: self.effect.to_particle_config(),
            spawn: self.effect.to_spawn_config(),
            palette: self.effect.to_palette(),
            max_radius: self.effect.max_radius,
            min_visible_radius: self.effect.min_visible_radius,
            rings: self.cursor.to_cursor_rings(),
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Draw without title bar and borders
    pub decorations: bool,
    /// Keep above other windows
    pub always_on_top: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            decorations: true,
            always_on_top: false,
            vsync: true,
        }
    }
}

/// Particle effect configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectSettings {
    /// Added to vertical velocity each frame (positive = down)
    pub gravity: f32,
    /// Life lost per frame
    pub decay: f32,
    /// Minimum time between trail particles, in milliseconds
    pub trail_interval_ms: u64,
    /// Maximum trail velocity component, pixels per frame
    pub trail_speed: f32,
    /// Particles per click burst
    pub burst_count: u32,
    /// Burst speed, pixels per frame
    pub burst_speed: f32,
    /// Particle radius at full life
    pub max_radius: f32,
    /// Particles at or below this radius are skipped
    pub min_visible_radius: f32,
    /// Particle colors as [r, g, b]
    pub palette: Vec<[u8; 3]>,
    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
}

impl Default for EffectSettings {
    fn default() -> Self {
        let defaults = EffectConfig::default();
        Self {
            gravity: defaults.particles.gravity,
            decay: defaults.particles.decay,
            trail_interval_ms: defaults.spawn.trail_interval.as_millis() as u64,
            trail_speed: defaults.spawn.trail_speed,
            burst_count: defaults.spawn.burst_count,
            burst_speed: defaults.spawn.burst_speed,
            max_radius: defaults.max_radius,
            min_visible_radius: defaults.min_visible_radius,
            palette: defaults
                .palette
                .colors()
                .iter()
                .map(|c| [c.r, c.g, c.b])
                .collect(),
            seed: None,
        }
    }
}

impl EffectSettings {
    /// Falls back to the default when decay is not a positive number
    pub fn to_particle_config(&self) -> ParticleConfig {
        if !(self.decay.is_finite() && self.decay > 0.0) {
            log::warn!(
                "effect.decay must be positive (got {}), using default particle config",
                self.decay
            );
            return ParticleConfig::default();
        }
        ParticleConfig::new(self.gravity, self.decay)
    }

    pub fn to_spawn_config(&self) -> SpawnConfig {
        SpawnConfig {
            trail_interval: Duration::from_millis(self.trail_interval_ms),
            trail_speed: self.trail_speed,
            burst_count: self.burst_count,
            burst_speed: self.burst_speed,
        }
    }

    /// An empty list falls back to the default palette
    pub fn to_palette(&self) -> Palette {
        Palette::new(
            self.palette
                .iter()
                .map(|[r, g, b]| Rgb::new(*r, *g, *b))
                .collect(),
        )
    }
}

/// One cursor ring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingConfig {
    pub radius: f32,
    pub line_width: f32,
    /// [r, g, b] in 0-255
    pub color: [u8; 3],
    /// 0.0 - 1.0
    pub alpha: f32,
}

impl RingConfig {
    fn from_ring(ring: &CursorRing) -> Self {
        let c = ring.color;
        Self {
            radius: ring.radius,
            line_width: ring.line_width,
            color: [
                (c.r * 255.0).round() as u8,
                (c.g * 255.0).round() as u8,
                (c.b * 255.0).round() as u8,
            ],
            alpha: c.a,
        }
    }

    fn to_ring(&self) -> CursorRing {
        let [r, g, b] = self.color;
        CursorRing::new(self.radius, self.line_width, Rgb::new(r, g, b).with_alpha(self.alpha))
    }
}

/// Cursor ring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub inner: RingConfig,
    pub outer: RingConfig,
}

impl Default for CursorConfig {
    fn default() -> Self {
        let rings = CursorRings::default();
        Self {
            inner: RingConfig::from_ring(&rings.inner),
            outer: RingConfig::from_ring(&rings.outer),
        }
    }
}

impl CursorConfig {
    pub fn to_cursor_rings(&self) -> CursorRings {
        CursorRings {
            inner: self.inner.to_ring(),
            outer: self.outer.to_ring(),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Log a frame summary every N frames (0 = never)
    pub stats_interval: u64,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self { stats_interval: 0 }
    }
}

/// Page content configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// RON document with profile and portfolio
    pub path: String,
    /// Load content on startup
    pub enabled: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: "content/portfolio.ron".to_string(),
            enabled: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
