//! The game session: owns every piece of mutable game state and advances it
//! one tick at a time.
//!
//! Lifecycle:
//!
//! ```text
//!   Idle ──start──▶ Active ──last ship lost──▶ Idle
//!                   │    ▲
//!                   └────┘ ship lost / fleet cleared
//! ```
//!
//! Within a tick the order is fixed: vessel, projectiles, projectile/enemy
//! collisions (and level clear), fleet movement, then vessel/enemy and floor
//! checks.

use std::time::Duration;

use log::info;

use crate::collision::{
    check_fleet_reached_floor, check_vessel_enemy_collision, resolve_projectile_enemy_collisions,
};
use crate::entities::{Enemy, GameStats, Projectile, Vessel};
use crate::error::ConfigError;
use crate::fleet::{build_fleet, is_empty, update_fleet};
use crate::hud::{Hud, PlayButton};
use crate::settings::Settings;
use crate::snapshot::Frame;

/// How long play freezes after the vessel is hit.
pub const HIT_PAUSE: Duration = Duration::from_millis(500);

/// Discrete input from the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    MoveLeftStart,
    MoveLeftStop,
    MoveRightStart,
    MoveRightStop,
    Fire,
    /// The dedicated start key.
    StartGame,
    /// Pointer press in world coordinates.
    Click { x: i32, y: i32 },
    Quit,
}

/// Whether the host loop should keep running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// Menu: nothing moves, the Play button is shown.
    Idle,
    Active,
}

#[derive(Clone, Debug)]
pub struct Session {
    pub settings: Settings,
    pub stats: GameStats,
    pub vessel: Vessel,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub state: GameState,
    pub cursor_visible: bool,
    pub play_button: PlayButton,
    pending_pause: Option<Duration>,
}

impl Session {
    /// An idle session with a fleet already on screen behind the Play button.
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let stats = GameStats::new(&settings);
        let vessel = Vessel::new(&settings);
        let enemies = build_fleet(&settings, vessel.rect.h);
        let play_button = PlayButton::new(&settings);
        Ok(Session {
            settings,
            stats,
            vessel,
            projectiles: Vec::new(),
            enemies,
            state: GameState::Idle,
            cursor_visible: true,
            play_button,
            pending_pause: None,
        })
    }

    pub fn is_active(&self) -> bool {
        self.state == GameState::Active
    }

    // ── Input ────────────────────────────────────────────────────────────────

    pub fn handle(&mut self, signal: Signal) -> Flow {
        match signal {
            Signal::MoveLeftStart => self.vessel.moving_left = true,
            Signal::MoveLeftStop => self.vessel.moving_left = false,
            Signal::MoveRightStart => self.vessel.moving_right = true,
            Signal::MoveRightStop => self.vessel.moving_right = false,
            Signal::Fire => {
                if self.is_active() {
                    self.fire_laser();
                }
            }
            Signal::StartGame => {
                if !self.is_active() {
                    self.start_game();
                }
            }
            Signal::Click { x, y } => {
                if !self.is_active() && self.play_button.is_clicked(x, y) {
                    self.start_game();
                }
            }
            Signal::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Reset stats and difficulty, lay out a fresh fleet and go active.
    pub fn start_game(&mut self) {
        self.stats.reset(&self.settings);
        self.settings.initialize_dynamic_settings();

        self.projectiles.clear();
        self.enemies = build_fleet(&self.settings, self.vessel.rect.h);
        self.vessel.center(&self.settings);

        self.state = GameState::Active;
        self.cursor_visible = false;
        self.pending_pause = None;
        info!(
            "game started: {} enemies, {} ships",
            self.enemies.len(),
            self.stats.ships_left
        );
    }

    /// Spawn a projectile at the vessel's nose unless `max_shots` are already
    /// in flight. Returns whether one was fired.
    pub fn fire_laser(&mut self) -> bool {
        if self.projectiles.len() < self.settings.max_shots {
            self.projectiles
                .push(Projectile::new(&self.vessel, &self.settings));
            true
        } else {
            false
        }
    }

    // ── Simulation ───────────────────────────────────────────────────────────

    /// Advance one tick if a game is running, then snapshot the result.
    pub fn tick(&mut self) -> Frame {
        if self.is_active() {
            self.vessel.update(&self.settings);
            self.update_projectiles();
            self.update_aliens();
        }
        self.snapshot()
    }

    fn update_projectiles(&mut self) {
        for projectile in self.projectiles.iter_mut() {
            projectile.update(&self.settings);
        }
        self.projectiles.retain(|p| !p.is_off_screen());

        self.check_projectile_enemy_collisions();
    }

    fn check_projectile_enemy_collisions(&mut self) {
        let report = resolve_projectile_enemy_collisions(
            &mut self.projectiles,
            &mut self.enemies,
            self.settings.alien_points,
        );
        if report.kills > 0 {
            self.stats.score = self.stats.score.saturating_add(report.score_delta);
            self.stats.check_high_score();
        }

        if is_empty(&self.enemies) {
            self.projectiles.clear();
            self.enemies = build_fleet(&self.settings, self.vessel.rect.h);
            self.settings.increase_speed();
            self.stats.level += 1;
            info!(
                "fleet cleared, level {} (points per kill now {})",
                self.stats.level, self.settings.alien_points
            );
        }
    }

    fn update_aliens(&mut self) {
        update_fleet(&mut self.enemies, &mut self.settings);

        if check_vessel_enemy_collision(&self.vessel, &self.enemies) {
            self.on_vessel_hit();
            return;
        }
        if check_fleet_reached_floor(&self.enemies, self.settings.screen_height) {
            self.on_vessel_hit();
        }
    }

    /// Lose a ship. With ships to spare the board is reset and a pause is
    /// queued; with none left the game ends.
    pub fn on_vessel_hit(&mut self) {
        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);

        if self.stats.ships_left > 0 {
            self.projectiles.clear();
            self.enemies = build_fleet(&self.settings, self.vessel.rect.h);
            self.vessel.center(&self.settings);
            self.pending_pause = Some(HIT_PAUSE);
            info!("vessel hit, {} ships left", self.stats.ships_left);
        } else {
            self.state = GameState::Idle;
            self.cursor_visible = true;
            info!(
                "game over: score {}, high score {}",
                self.stats.score, self.stats.high_score
            );
        }
    }

    /// The pause queued by the last vessel hit, if any. The host blocks on it
    /// before the next tick.
    pub fn take_pause(&mut self) -> Option<Duration> {
        self.pending_pause.take()
    }

    // ── Output ───────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Frame {
        Frame {
            background: self.settings.bg_color,
            vessel: self.vessel.rect,
            projectiles: self.projectiles.iter().map(|p| p.rect).collect(),
            projectile_color: self.settings.laser_color,
            enemies: self.enemies.iter().map(|e| e.rect).collect(),
            hud: Hud::new(&self.stats, &self.settings),
            play_button: if self.is_active() {
                None
            } else {
                Some(self.play_button.clone())
            },
            cursor_visible: self.cursor_visible,
        }
    }
}
