//! Collision checks between projectiles, enemies, the vessel and the floor.
//!
//! All of them reduce to [`Rect::overlaps`] or a plain edge comparison.
//!
//! [`Rect::overlaps`]: crate::geometry::Rect::overlaps

use crate::entities::{Enemy, Projectile, Vessel};

/// What one round of projectile/enemy resolution removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub kills: u32,
    pub score_delta: u32,
}

/// Remove every projectile that hit an enemy, along with the enemy it hit.
///
/// Projectiles are checked in order. Each one claims the first still-live
/// enemy it overlaps, so a projectile kills at most one enemy and an enemy
/// is never counted twice within a call.
pub fn resolve_projectile_enemy_collisions(
    projectiles: &mut Vec<Projectile>,
    enemies: &mut Vec<Enemy>,
    points_per_kill: u32,
) -> CollisionReport {
    let mut spent = vec![false; projectiles.len()];
    let mut destroyed = vec![false; enemies.len()];
    let mut kills = 0u32;

    for (pi, projectile) in projectiles.iter().enumerate() {
        let hit = enemies
            .iter()
            .enumerate()
            .find(|(ei, enemy)| !destroyed[*ei] && projectile.rect.overlaps(&enemy.rect));
        if let Some((ei, _)) = hit {
            destroyed[ei] = true;
            spent[pi] = true;
            kills += 1;
        }
    }

    if kills == 0 {
        return CollisionReport::default();
    }

    let mut spent_iter = spent.into_iter();
    projectiles.retain(|_| !spent_iter.next().unwrap_or(false));
    let mut destroyed_iter = destroyed.into_iter();
    enemies.retain(|_| !destroyed_iter.next().unwrap_or(false));

    CollisionReport {
        kills,
        score_delta: points_per_kill.saturating_mul(kills),
    }
}

/// True if any enemy overlaps the vessel.
pub fn check_vessel_enemy_collision(vessel: &Vessel, enemies: &[Enemy]) -> bool {
    enemies.iter().any(|e| e.rect.overlaps(&vessel.rect))
}

/// True if any enemy's bottom edge has reached `screen_bottom`.
pub fn check_fleet_reached_floor(enemies: &[Enemy], screen_bottom: i32) -> bool {
    enemies.iter().any(|e| e.rect.bottom() >= screen_bottom)
}
