use alien_invasion::entities::Enemy;
use alien_invasion::fleet::*;
use alien_invasion::settings::Settings;

const VESSEL_HEIGHT: i32 = 40;

fn positions(enemies: &[Enemy]) -> Vec<(i32, i32)> {
    enemies.iter().map(|e| (e.rect.x, e.rect.y)).collect()
}

// ── build_fleet ───────────────────────────────────────────────────────────────

#[test]
fn grid_dimensions_default_screen() {
    let s = Settings::new();
    // columns = (1152 - 48) / 48, rows = (768 - 72 - 40) / 48
    assert_eq!(grid_dimensions(&s, VESSEL_HEIGHT), (23, 13));
}

#[test]
fn build_fleet_fills_the_grid() {
    let s = Settings::new();
    let fleet = build_fleet(&s, VESSEL_HEIGHT);
    assert_eq!(fleet.len(), 23 * 13);
    assert_eq!((fleet[0].rect.x, fleet[0].rect.y), (24, 24));
    assert_eq!((fleet[1].rect.x, fleet[1].rect.y), (72, 24));
    // first enemy of the second row
    assert_eq!((fleet[23].rect.x, fleet[23].rect.y), (24, 72));
    let last = fleet.last().unwrap();
    assert_eq!((last.rect.x, last.rect.y), (24 + 48 * 22, 24 + 48 * 12));
}

#[test]
fn build_fleet_is_deterministic() {
    let s = Settings::new();
    let a = build_fleet(&s, VESSEL_HEIGHT);
    let b = build_fleet(&s, VESSEL_HEIGHT);
    assert_eq!(a, b);
}

#[test]
fn build_fleet_on_tiny_screen_is_empty() {
    let mut s = Settings::new();
    s.screen_width = 40;
    assert!(build_fleet(&s, VESSEL_HEIGHT).is_empty());

    s.screen_width = 0;
    assert_eq!(grid_dimensions(&s, VESSEL_HEIGHT).0, 0);
    assert!(build_fleet(&s, VESSEL_HEIGHT).is_empty());
}

#[test]
fn build_fleet_with_no_room_for_rows_is_empty() {
    let mut s = Settings::new();
    s.screen_height = 100;
    assert_eq!(grid_dimensions(&s, VESSEL_HEIGHT).1, 0);
    assert!(is_empty(&build_fleet(&s, VESSEL_HEIGHT)));
}

// ── advance ───────────────────────────────────────────────────────────────────

#[test]
fn advance_right_preserves_formation() {
    let s = Settings::new();
    let mut fleet = build_fleet(&s, VESSEL_HEIGHT);
    let before = positions(&fleet);
    advance(&mut fleet, &s, 1);
    for ((x0, y0), (x1, y1)) in before.iter().zip(positions(&fleet)) {
        assert_eq!(x1 - x0, 1);
        assert_eq!(y1, *y0);
    }
}

#[test]
fn advance_left_moves_by_negative_delta() {
    let mut s = Settings::new();
    s.fleet_direction = -1;
    let mut fleet = build_fleet(&s, VESSEL_HEIGHT);
    let before = positions(&fleet);
    advance(&mut fleet, &s, 3);
    for ((x0, _), (x1, _)) in before.iter().zip(positions(&fleet)) {
        assert_eq!(x1 - x0, -3);
    }
}

#[test]
fn advance_zero_ticks_is_a_no_op() {
    let s = Settings::new();
    let mut fleet = build_fleet(&s, VESSEL_HEIGHT);
    let before = fleet.clone();
    advance(&mut fleet, &s, 0);
    assert_eq!(fleet, before);
}

// ── Edges ─────────────────────────────────────────────────────────────────────

#[test]
fn fresh_fleet_is_not_at_an_edge() {
    let s = Settings::new();
    assert!(!check_edges(&build_fleet(&s, VESSEL_HEIGHT), &s));
}

#[test]
fn any_enemy_on_an_edge_counts() {
    let s = Settings::new();
    let mut fleet = vec![Enemy::at(500, 24, &s), Enemy::at(1128, 72, &s)];
    assert!(check_edges(&fleet, &s));
    fleet[1] = Enemy::at(0, 72, &s);
    assert!(check_edges(&fleet, &s));
}

#[test]
fn on_edge_reached_drops_and_flips() {
    let mut s = Settings::new();
    let mut fleet = build_fleet(&s, VESSEL_HEIGHT);
    let before = positions(&fleet);

    on_edge_reached(&mut fleet, &mut s);
    assert_eq!(s.fleet_direction, -1);
    for ((x0, y0), (x1, y1)) in before.iter().zip(positions(&fleet)) {
        assert_eq!(x1, *x0);
        assert_eq!(y1 - y0, 10);
    }

    on_edge_reached(&mut fleet, &mut s);
    assert_eq!(s.fleet_direction, 1);
    assert_eq!(fleet[0].rect.y, 24 + 20);
}

#[test]
fn single_enemy_fleet_drops_and_flips() {
    let mut s = Settings::new();
    let mut fleet = vec![Enemy::at(1128, 24, &s)];
    update_fleet(&mut fleet, &mut s);
    assert_eq!(s.fleet_direction, -1);
    assert_eq!(fleet[0].rect.y, 34);
    // dropped first, then moved one step in the new direction
    assert_eq!(fleet[0].rect.x, 1127);
}

#[test]
fn update_fleet_away_from_edges_only_moves() {
    let mut s = Settings::new();
    let mut fleet = vec![Enemy::at(500, 24, &s)];
    update_fleet(&mut fleet, &mut s);
    assert_eq!(s.fleet_direction, 1);
    assert_eq!((fleet[0].rect.x, fleet[0].rect.y), (501, 24));
}

#[test]
fn fleet_sweeps_until_right_edge_then_drops() {
    let mut s = Settings::new();
    let mut fleet = build_fleet(&s, VESSEL_HEIGHT);
    // rightmost enemy starts with its right edge at 1104; 48 steps to the wall
    for _ in 0..48 {
        update_fleet(&mut fleet, &mut s);
    }
    assert_eq!(s.fleet_direction, 1);
    assert_eq!(fleet[0].rect.y, 24);

    update_fleet(&mut fleet, &mut s);
    assert_eq!(s.fleet_direction, -1);
    assert_eq!(fleet[0].rect.y, 34);
}

#[test]
fn is_empty_reports_cleared_fleet() {
    let s = Settings::new();
    assert!(is_empty(&[]));
    assert!(!is_empty(&[Enemy::new(&s)]));
}
