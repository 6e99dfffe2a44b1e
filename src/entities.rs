//! Game entities: the vessel, its projectiles, the enemies and the stats.
//!
//! Each entity keeps a continuous position along the axis it moves on and an
//! integer bounding box snapped from it. Shared parameters (speeds, sizes,
//! fleet direction) live in [`Settings`] and are passed in by reference.

use crate::geometry::Rect;
use crate::settings::Settings;

// ── Vessel ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Vessel {
    /// Exact horizontal position of the left edge.
    pub x: f32,
    pub rect: Rect,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Vessel {
    /// A vessel parked at the bottom center of the screen.
    pub fn new(settings: &Settings) -> Self {
        let mut vessel = Vessel {
            x: 0.0,
            rect: Rect::new(0, 0, settings.ship_width, settings.ship_height),
            moving_left: false,
            moving_right: false,
        };
        vessel.center(settings);
        vessel
    }

    /// Snap back to the bottom center of the screen.
    pub fn center(&mut self, settings: &Settings) {
        self.rect
            .set_midbottom(settings.screen_width / 2, settings.screen_height);
        self.x = self.rect.x as f32;
    }

    /// Apply the movement flags for one tick.
    pub fn update(&mut self, settings: &Settings) {
        if self.moving_right && self.rect.right() < settings.screen_width {
            self.x += settings.ship_speed;
        }
        if self.moving_left && self.rect.left() > 0 {
            self.x -= settings.ship_speed;
        }

        let max_x = (settings.screen_width - self.rect.w).max(0) as f32;
        self.x = self.x.clamp(0.0, max_x);
        self.rect.x = self.x as i32;
    }
}

// ── Projectile ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    /// Exact vertical position of the top edge.
    pub y: f32,
    pub rect: Rect,
}

impl Projectile {
    /// A projectile whose top edge midpoint matches the vessel's.
    pub fn new(vessel: &Vessel, settings: &Settings) -> Self {
        let mut rect = Rect::new(0, 0, settings.laser_width, settings.laser_height);
        rect.set_midtop(vessel.rect.center_x(), vessel.rect.top());
        Projectile {
            y: rect.y as f32,
            rect,
        }
    }

    pub fn update(&mut self, settings: &Settings) {
        self.y -= settings.laser_speed;
        self.rect.y = self.y as i32;
    }

    /// True once the whole projectile has left through the top of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    /// Exact horizontal position of the left edge.
    pub x: f32,
    pub rect: Rect,
}

impl Enemy {
    /// A template enemy one body-width in from the top-left corner.
    pub fn new(settings: &Settings) -> Self {
        Self::at(settings.alien_width, settings.alien_height, settings)
    }

    pub fn at(x: i32, y: i32, settings: &Settings) -> Self {
        Enemy {
            x: x as f32,
            rect: Rect::new(x, y, settings.alien_width, settings.alien_height),
        }
    }

    /// Sweep sideways in the shared fleet direction.
    pub fn update(&mut self, settings: &Settings) {
        self.x += settings.alien_speed * settings.fleet_direction as f32;
        self.rect.x = self.x as i32;
    }

    pub fn at_edge(&self, settings: &Settings) -> bool {
        self.rect.right() >= settings.screen_width || self.rect.left() <= 0
    }
}

// ── Stats ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u32,
    pub level: u32,
    /// Survives [`GameStats::reset`]; only ever grows.
    pub high_score: u32,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        GameStats {
            ships_left: settings.ships_limit,
            score: 0,
            level: 1,
            high_score: 0,
        }
    }

    /// Start-of-game values. The high score is left alone.
    pub fn reset(&mut self, settings: &Settings) {
        self.ships_left = settings.ships_limit;
        self.score = 0;
        self.level = 1;
    }

    /// Raise the high score to the current score if it was beaten.
    /// Returns true when it changed.
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
