//! Tunables for a session, loadable from JSON.
//!
//! Every struct uses `#[serde(default)]`, so a config file only needs the keys
//! it wants to change.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Half-open range `[min, max)` sampled on respawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRange {
    pub min: f32,
    pub max: f32,
}

impl SpawnRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && (v < self.max || (self.max <= self.min && v == self.min))
    }

    /// Swap inverted bounds and pull both ends to at least `floor`.
    fn sanitize(&mut self, name: &str, floor: f32) {
        if !self.min.is_finite() || !self.max.is_finite() {
            log::warn!("config: {} is not finite, using [{}, {})", name, floor, floor);
            self.min = floor;
            self.max = floor;
            return;
        }
        if self.max < self.min {
            log::warn!("config: {} is inverted ({} > {}), swapping", name, self.min, self.max);
            std::mem::swap(&mut self.min, &mut self.max);
        }
        if self.min < floor {
            log::warn!("config: {} starts below {}, clamping", name, floor);
            self.min = floor;
            self.max = self.max.max(floor);
        }
    }
}

/// Screen and gravity. Coordinates are y-down with the origin top-left.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    /// Downward acceleration in units/s², applied to bodies affected by gravity.
    pub gravity: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            gravity: 3000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub size: Vec2,
    /// Where the player reappears after a fatal fall.
    pub spawn: Vec2,
    pub run_speed: f32,
    /// Magnitude of the upward velocity set on jump.
    pub jump_impulse: f32,
    /// Falling below this y triggers the respawn.
    pub fall_limit: f32,
    /// Seconds per animation frame.
    pub frame_delay: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(176.0, 128.0),
            spawn: Vec2::new(100.0, 100.0),
            run_speed: 200.0,
            jump_impulse: 1500.0,
            fall_limit: 1080.0,
            frame_delay: 0.2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectibleConfig {
    pub size: Vec2,
    pub frame_delay: f32,
    /// Seconds a collected coin stays hidden.
    pub respawn_delay: f32,
    pub respawn_x: SpawnRange,
    pub respawn_y: SpawnRange,
    /// Leftward speed after a respawn (sign applied by the coin).
    pub respawn_speed: SpawnRange,
    /// Number of coin rows in the sheet.
    pub kinds: u32,
    pub fall_limit: f32,
}

impl Default for CollectibleConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(50.0, 50.0),
            frame_delay: 0.1,
            respawn_delay: 2.0,
            respawn_x: SpawnRange::new(1200.0, 1400.0),
            respawn_y: SpawnRange::new(100.0, 400.0),
            respawn_speed: SpawnRange::new(50.0, 150.0),
            kinds: 3,
            fall_limit: 800.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Leftward speed of a freshly built moving platform.
    pub initial_speed: f32,
    /// X a platform is moved to once it has scrolled off the left edge.
    pub respawn_x: f32,
    pub respawn_y: SpawnRange,
    pub respawn_width: SpawnRange,
    pub respawn_speed: SpawnRange,
    pub spawn_delay: SpawnRange,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            initial_speed: 100.0,
            respawn_x: 1200.0,
            respawn_y: SpawnRange::new(100.0, 600.0),
            respawn_width: SpawnRange::new(100.0, 400.0),
            respawn_speed: SpawnRange::new(80.0, 150.0),
            spawn_delay: SpawnRange::new(1.0, 4.0),
        }
    }
}

/// Configuration for a session, provided by the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Cap on fixed steps run for one rendered frame.
    pub max_steps_per_frame: u32,
    /// Seed for the session's random source.
    pub seed: u64,
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub collectible: CollectibleConfig,
    pub platform: PlatformConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            seed: 42,
            world: WorldConfig::default(),
            player: PlayerConfig::default(),
            collectible: CollectibleConfig::default(),
            platform: PlatformConfig::default(),
        }
    }
}

fn positive_or(name: &str, value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("config: {} must be positive (got {}), using {}", name, value, fallback);
        fallback
    }
}

fn positive_size(name: &str, value: Vec2, fallback: Vec2) -> Vec2 {
    Vec2::new(
        positive_or(name, value.x, fallback.x),
        positive_or(name, value.y, fallback.y),
    )
}

impl GameConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Clamp values that would put entities into unrepresentable states.
    /// Never fails; each correction is logged.
    pub fn sanitized(mut self) -> Self {
        let d = GameConfig::default();
        self.fixed_dt = positive_or("fixed_dt", self.fixed_dt, d.fixed_dt);
        self.max_steps_per_frame = self.max_steps_per_frame.max(1);

        self.world.width = positive_or("world.width", self.world.width, d.world.width);
        self.world.height = positive_or("world.height", self.world.height, d.world.height);
        if !self.world.gravity.is_finite() {
            log::warn!("config: world.gravity is not finite, using {}", d.world.gravity);
            self.world.gravity = d.world.gravity;
        }

        let p = &mut self.player;
        p.size = positive_size("player.size", p.size, d.player.size);
        p.run_speed = positive_or("player.run_speed", p.run_speed, d.player.run_speed);
        p.jump_impulse = positive_or("player.jump_impulse", p.jump_impulse, d.player.jump_impulse);
        p.frame_delay = positive_or("player.frame_delay", p.frame_delay, d.player.frame_delay);

        let c = &mut self.collectible;
        c.size = positive_size("collectible.size", c.size, d.collectible.size);
        c.frame_delay = positive_or("collectible.frame_delay", c.frame_delay, d.collectible.frame_delay);
        c.respawn_delay = c.respawn_delay.max(0.0);
        c.respawn_x.sanitize("collectible.respawn_x", f32::MIN);
        c.respawn_y.sanitize("collectible.respawn_y", f32::MIN);
        c.respawn_speed.sanitize("collectible.respawn_speed", 0.0);
        c.kinds = c.kinds.max(1);

        let pl = &mut self.platform;
        pl.respawn_y.sanitize("platform.respawn_y", f32::MIN);
        pl.respawn_width.sanitize("platform.respawn_width", 1.0);
        pl.respawn_speed.sanitize("platform.respawn_speed", 0.0);
        pl.spawn_delay.sanitize("platform.spawn_delay", 0.0);

        self
    }
}
