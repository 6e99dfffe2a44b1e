use std::io::Write;

use alien_invasion::error::ConfigError;
use alien_invasion::geometry::Rgb;
use alien_invasion::session::Session;
use alien_invasion::settings::Settings;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// ── Defaults ──────────────────────────────────────────────────────────────────

#[test]
fn defaults_match_the_classic_game() {
    let s = Settings::new();
    assert_eq!((s.screen_width, s.screen_height), (1152, 768));
    assert_eq!(s.bg_color, Rgb(10, 10, 10));
    assert_eq!(s.ships_limit, 3);
    assert_eq!((s.laser_width, s.laser_height), (5, 45));
    assert_eq!(s.laser_color, Rgb(12, 255, 110));
    assert_eq!(s.max_shots, 3);
    assert_eq!(s.fleet_drop_speed, 10);
    assert_eq!(s.fleet_direction, 1);
    assert_eq!(s.alien_points, 50);
    assert!(approx(s.ship_speed, 1.5));
    assert!(approx(s.laser_speed, 1.5));
    assert!(approx(s.alien_speed, 1.0));
}

// ── Dynamic settings ──────────────────────────────────────────────────────────

#[test]
fn increase_speed_scales_speeds_and_points() {
    let mut s = Settings::new();
    s.increase_speed();
    assert!(approx(s.ship_speed, 1.65));
    assert!(approx(s.laser_speed, 1.65));
    assert!(approx(s.alien_speed, 1.1));
    assert_eq!(s.alien_points, 75);
}

#[test]
fn increase_speed_applies_same_multiplier_each_call() {
    let mut s = Settings::new();
    s.increase_speed();
    s.increase_speed();
    assert!(approx(s.alien_speed, 1.21));
    // 75 * 1.5 = 112.5, truncated
    assert_eq!(s.alien_points, 112);
}

#[test]
fn initialize_dynamic_settings_restores_base_values() {
    let mut s = Settings::new();
    s.increase_speed();
    s.fleet_direction = -1;
    s.initialize_dynamic_settings();
    assert_eq!(s, Settings::new());
}

// ── Validation ────────────────────────────────────────────────────────────────

#[test]
fn validate_accepts_defaults() {
    assert_eq!(Settings::new().validate(), Ok(()));
}

#[test]
fn validate_rejects_zero_alien_width() {
    let mut s = Settings::new();
    s.alien_width = 0;
    assert_eq!(
        s.validate(),
        Err(ConfigError::NonPositiveSize { what: "alien width", value: 0 })
    );
}

#[test]
fn validate_rejects_negative_alien_height() {
    let mut s = Settings::new();
    s.alien_height = -3;
    assert!(matches!(
        s.validate(),
        Err(ConfigError::NonPositiveSize { what: "alien height", value: -3 })
    ));
}

#[test]
fn validate_rejects_non_positive_drop_speed() {
    let mut s = Settings::new();
    s.fleet_drop_speed = 0;
    assert_eq!(
        s.validate(),
        Err(ConfigError::NonPositiveSize { what: "fleet drop speed", value: 0 })
    );

    let err = Settings::from_ini_str("[alien]\ndrop_speed = -5\n").unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveSize { what: "fleet drop speed", value: -5 });
}

#[test]
fn validate_rejects_zero_max_shots() {
    let mut s = Settings::new();
    s.max_shots = 0;
    assert!(matches!(
        s.validate(),
        Err(ConfigError::NonPositiveValue { what: "max shots", .. })
    ));
}

#[test]
fn session_refuses_invalid_settings() {
    let mut s = Settings::new();
    s.alien_width = 0;
    assert!(Session::new(s).is_err());
}

#[test]
fn config_error_messages_name_the_field() {
    let err = ConfigError::NonPositiveSize { what: "alien width", value: 0 };
    assert_eq!(err.to_string(), "alien width must be positive, got 0");
}

// ── INI config ────────────────────────────────────────────────────────────────

#[test]
fn empty_ini_gives_defaults() {
    let s = Settings::from_ini_str("").unwrap();
    assert_eq!(s, Settings::new());
}

#[test]
fn ini_overrides_selected_keys() {
    let text = "\
[screen]
width = 800
bg_color = 1, 2, 3

[laser]
max_shots = 5
color = 255,0,0

[alien]
speed = 2.5
points = 10
";
    let s = Settings::from_ini_str(text).unwrap();
    assert_eq!(s.screen_width, 800);
    assert_eq!(s.screen_height, 768); // untouched
    assert_eq!(s.bg_color, Rgb(1, 2, 3));
    assert_eq!(s.max_shots, 5);
    assert_eq!(s.laser_color, Rgb(255, 0, 0));
    // dynamic values follow the configured base
    assert!(approx(s.alien_speed, 2.5));
    assert_eq!(s.alien_points, 10);
}

#[test]
fn ini_bad_number_is_invalid_value() {
    let err = Settings::from_ini_str("[ship]\nwidth = wide\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref section, ref key, .. }
        if section == "ship" && key == "width"));
}

#[test]
fn ini_bad_color_is_invalid_value() {
    let err = Settings::from_ini_str("[laser]\ncolor = 1, 2\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    let err = Settings::from_ini_str("[laser]\ncolor = 1, 2, 300\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn ini_values_are_validated() {
    let err = Settings::from_ini_str("[alien]\nwidth = 0\n").unwrap_err();
    assert_eq!(err, ConfigError::NonPositiveSize { what: "alien width", value: 0 });
}

#[test]
fn load_from_file_reads_ini() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[difficulty]\nspeedup_scale = 2.0\nscore_scale = 3.0").unwrap();

    let mut s = Settings::load_from_file(file.path()).unwrap();
    s.increase_speed();
    assert!(approx(s.alien_speed, 2.0));
    assert_eq!(s.alien_points, 150);
}

#[test]
fn load_from_missing_file_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load_from_file(dir.path().join("nope.ini")).unwrap_err();
    assert!(matches!(err, ConfigError::Load { .. }));
}
