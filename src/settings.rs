//! Tunable game parameters.
//!
//! Static values are fixed for the life of the process. The dynamic subset
//! (speeds, fleet direction, points per kill) is reset at the start of every
//! game and scaled up each time the fleet is cleared.

use crate::error::ConfigError;
use crate::geometry::Rgb;

// ── Defaults ──────────────────────────────────────────────────────────────────

pub const DEFAULT_SCREEN_WIDTH: i32 = 1152;
pub const DEFAULT_SCREEN_HEIGHT: i32 = 768;
pub const DEFAULT_BG_COLOR: Rgb = Rgb(10, 10, 10);

pub const DEFAULT_SHIP_WIDTH: i32 = 48;
pub const DEFAULT_SHIP_HEIGHT: i32 = 40;
pub const DEFAULT_SHIPS_LIMIT: u32 = 3;

pub const DEFAULT_LASER_WIDTH: i32 = 5;
pub const DEFAULT_LASER_HEIGHT: i32 = 45;
pub const DEFAULT_LASER_COLOR: Rgb = Rgb(12, 255, 110);
pub const DEFAULT_MAX_SHOTS: usize = 3;

pub const DEFAULT_ALIEN_WIDTH: i32 = 24;
pub const DEFAULT_ALIEN_HEIGHT: i32 = 24;
pub const DEFAULT_FLEET_DROP_SPEED: i32 = 10;

pub const DEFAULT_SPEEDUP_SCALE: f32 = 1.1;
pub const DEFAULT_SCORE_SCALE: f32 = 1.5;

pub const DEFAULT_SHIP_SPEED: f32 = 1.5;
pub const DEFAULT_LASER_SPEED: f32 = 1.5;
pub const DEFAULT_ALIEN_SPEED: f32 = 1.0;
pub const DEFAULT_ALIEN_POINTS: u32 = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    // Screen
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Rgb,

    // Vessel
    pub ship_width: i32,
    pub ship_height: i32,
    pub ships_limit: u32,

    // Projectiles
    pub laser_width: i32,
    pub laser_height: i32,
    pub laser_color: Rgb,
    pub max_shots: usize,

    // Enemies
    pub alien_width: i32,
    pub alien_height: i32,
    pub fleet_drop_speed: i32,

    // Difficulty scaling
    pub speedup_scale: f32,
    pub score_scale: f32,

    // Base values the dynamic subset is reset to
    pub base_ship_speed: f32,
    pub base_laser_speed: f32,
    pub base_alien_speed: f32,
    pub base_alien_points: u32,

    // Dynamic
    pub ship_speed: f32,
    pub laser_speed: f32,
    pub alien_speed: f32,
    /// `1` sweeps right, `-1` sweeps left.
    pub fleet_direction: i32,
    pub alien_points: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    pub fn new() -> Self {
        let mut settings = Settings {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            bg_color: DEFAULT_BG_COLOR,
            ship_width: DEFAULT_SHIP_WIDTH,
            ship_height: DEFAULT_SHIP_HEIGHT,
            ships_limit: DEFAULT_SHIPS_LIMIT,
            laser_width: DEFAULT_LASER_WIDTH,
            laser_height: DEFAULT_LASER_HEIGHT,
            laser_color: DEFAULT_LASER_COLOR,
            max_shots: DEFAULT_MAX_SHOTS,
            alien_width: DEFAULT_ALIEN_WIDTH,
            alien_height: DEFAULT_ALIEN_HEIGHT,
            fleet_drop_speed: DEFAULT_FLEET_DROP_SPEED,
            speedup_scale: DEFAULT_SPEEDUP_SCALE,
            score_scale: DEFAULT_SCORE_SCALE,
            base_ship_speed: DEFAULT_SHIP_SPEED,
            base_laser_speed: DEFAULT_LASER_SPEED,
            base_alien_speed: DEFAULT_ALIEN_SPEED,
            base_alien_points: DEFAULT_ALIEN_POINTS,
            ship_speed: 0.0,
            laser_speed: 0.0,
            alien_speed: 0.0,
            fleet_direction: 1,
            alien_points: 0,
        };
        settings.initialize_dynamic_settings();
        settings
    }

    /// Reset speeds, direction and points to their base values.
    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = self.base_ship_speed;
        self.laser_speed = self.base_laser_speed;
        self.alien_speed = self.base_alien_speed;
        self.fleet_direction = 1;
        self.alien_points = self.base_alien_points;
    }

    /// Scale speeds by `speedup_scale` and points by `score_scale`.
    ///
    /// Each call applies the same multipliers to the current values; points are
    /// truncated to an integer after scaling.
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.laser_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;

        self.alien_points = (self.alien_points as f32 * self.score_scale) as u32;
    }

    /// Reject settings the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("screen width", self.screen_width),
            ("screen height", self.screen_height),
            ("ship width", self.ship_width),
            ("ship height", self.ship_height),
            ("laser width", self.laser_width),
            ("laser height", self.laser_height),
            ("alien width", self.alien_width),
            ("alien height", self.alien_height),
            ("fleet drop speed", self.fleet_drop_speed),
        ];
        for (what, value) in sizes {
            if value <= 0 {
                return Err(ConfigError::NonPositiveSize { what, value });
            }
        }

        let values = [
            ("max shots", self.max_shots as f64),
            ("ship speed", self.base_ship_speed as f64),
            ("laser speed", self.base_laser_speed as f64),
            ("alien speed", self.base_alien_speed as f64),
            ("speedup scale", self.speedup_scale as f64),
            ("score scale", self.score_scale as f64),
        ];
        for (what, value) in values {
            // Written this way round so NaN is rejected too.
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveValue { what, value });
            }
        }

        Ok(())
    }
}
