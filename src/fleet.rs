//! Fleet layout and synchronized sweep-and-drop movement.
//!
//! Enemies carry no velocity of their own. Speed and direction come from
//! [`Settings`], so the whole fleet always moves as one block.

use log::debug;

use crate::entities::Enemy;
use crate::settings::Settings;

/// Columns and rows that fit on screen for the current enemy and vessel sizes.
///
/// Either count may be zero when the screen is too small; never negative.
pub fn grid_dimensions(settings: &Settings, vessel_height: i32) -> (usize, usize) {
    let w = settings.alien_width;
    let h = settings.alien_height;

    let available_x = settings.screen_width - 2 * w;
    let columns = (available_x / (2 * w)).max(0);

    let available_y = settings.screen_height - 3 * h - vessel_height;
    let rows = (available_y / (2 * h)).max(0);

    (columns as usize, rows as usize)
}

/// Lay out a fresh fleet, one body-width apart, row by row from the top-left.
pub fn build_fleet(settings: &Settings, vessel_height: i32) -> Vec<Enemy> {
    let (columns, rows) = grid_dimensions(settings, vessel_height);
    let w = settings.alien_width;
    let h = settings.alien_height;

    let mut enemies = Vec::with_capacity(columns * rows);
    for row in 0..rows as i32 {
        for column in 0..columns as i32 {
            let x = w + 2 * w * column;
            let y = h + 2 * h * row;
            enemies.push(Enemy::at(x, y, settings));
        }
    }
    debug!("built fleet: {columns} columns x {rows} rows");
    enemies
}

/// Move every enemy `ticks` steps in the current fleet direction.
pub fn advance(enemies: &mut [Enemy], settings: &Settings, ticks: u32) {
    for _ in 0..ticks {
        for enemy in enemies.iter_mut() {
            enemy.update(settings);
        }
    }
}

/// True if any enemy touches the left or right screen edge.
pub fn check_edges(enemies: &[Enemy], settings: &Settings) -> bool {
    enemies.iter().any(|e| e.at_edge(settings))
}

/// Drop the whole fleet one step, then reverse its direction.
pub fn on_edge_reached(enemies: &mut [Enemy], settings: &mut Settings) {
    for enemy in enemies.iter_mut() {
        enemy.rect.y += settings.fleet_drop_speed;
    }
    settings.fleet_direction = -settings.fleet_direction;
    debug!("fleet dropped, direction now {}", settings.fleet_direction);
}

pub fn is_empty(enemies: &[Enemy]) -> bool {
    enemies.is_empty()
}

/// One tick of fleet motion: edge check (and drop/flip), then one step.
pub fn update_fleet(enemies: &mut [Enemy], settings: &mut Settings) {
    if check_edges(enemies, settings) {
        on_edge_reached(enemies, settings);
    }
    advance(enemies, settings, 1);
}
