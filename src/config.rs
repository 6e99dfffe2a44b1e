//! INI overrides for [`Settings`].
//!
//! Every key is optional; anything missing keeps its default.
//!
//! ```ini
//! [screen]
//! width = 1152
//! height = 768
//! bg_color = 10, 10, 10
//!
//! [ship]
//! width = 48
//! height = 40
//! speed = 1.5
//! limit = 3
//!
//! [laser]
//! width = 5
//! height = 45
//! speed = 1.5
//! color = 12, 255, 110
//! max_shots = 3
//!
//! [alien]
//! width = 24
//! height = 24
//! speed = 1.0
//! drop_speed = 10
//! points = 50
//!
//! [difficulty]
//! speedup_scale = 1.1
//! score_scale = 1.5
//! ```

use std::path::Path;

use configparser::ini::Ini;
use log::info;

use crate::error::ConfigError;
use crate::geometry::Rgb;
use crate::settings::Settings;

impl Settings {
    /// Defaults overridden by the INI file at `path`, validated.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
        let path = path.as_ref();
        let mut ini = Ini::new();
        ini.load(path).map_err(|reason| ConfigError::Load {
            path: path.display().to_string(),
            reason,
        })?;
        let settings = Self::from_ini(&ini)?;
        info!(
            "Loaded config from {}: screen {}x{}, alien {}x{}, max_shots={}",
            path.display(),
            settings.screen_width,
            settings.screen_height,
            settings.alien_width,
            settings.alien_height,
            settings.max_shots
        );
        Ok(settings)
    }

    /// Same as [`Settings::load_from_file`] for INI text already in memory.
    pub fn from_ini_str(text: &str) -> Result<Settings, ConfigError> {
        let mut ini = Ini::new();
        ini.read(text.to_string()).map_err(|reason| ConfigError::Load {
            path: "<memory>".to_string(),
            reason,
        })?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Settings, ConfigError> {
        let mut s = Settings::new();

        // [screen]
        if let Some(v) = get_int(ini, "screen", "width")? {
            s.screen_width = v;
        }
        if let Some(v) = get_int(ini, "screen", "height")? {
            s.screen_height = v;
        }
        if let Some(v) = get_color(ini, "screen", "bg_color")? {
            s.bg_color = v;
        }

        // [ship]
        if let Some(v) = get_int(ini, "ship", "width")? {
            s.ship_width = v;
        }
        if let Some(v) = get_int(ini, "ship", "height")? {
            s.ship_height = v;
        }
        if let Some(v) = get_float(ini, "ship", "speed")? {
            s.base_ship_speed = v;
        }
        if let Some(v) = get_uint(ini, "ship", "limit")? {
            s.ships_limit = v as u32;
        }

        // [laser]
        if let Some(v) = get_int(ini, "laser", "width")? {
            s.laser_width = v;
        }
        if let Some(v) = get_int(ini, "laser", "height")? {
            s.laser_height = v;
        }
        if let Some(v) = get_float(ini, "laser", "speed")? {
            s.base_laser_speed = v;
        }
        if let Some(v) = get_color(ini, "laser", "color")? {
            s.laser_color = v;
        }
        if let Some(v) = get_uint(ini, "laser", "max_shots")? {
            s.max_shots = v as usize;
        }

        // [alien]
        if let Some(v) = get_int(ini, "alien", "width")? {
            s.alien_width = v;
        }
        if let Some(v) = get_int(ini, "alien", "height")? {
            s.alien_height = v;
        }
        if let Some(v) = get_float(ini, "alien", "speed")? {
            s.base_alien_speed = v;
        }
        if let Some(v) = get_int(ini, "alien", "drop_speed")? {
            s.fleet_drop_speed = v;
        }
        if let Some(v) = get_uint(ini, "alien", "points")? {
            s.base_alien_points = v as u32;
        }

        // [difficulty]
        if let Some(v) = get_float(ini, "difficulty", "speedup_scale")? {
            s.speedup_scale = v;
        }
        if let Some(v) = get_float(ini, "difficulty", "score_scale")? {
            s.score_scale = v;
        }

        s.initialize_dynamic_settings();
        s.validate()?;
        Ok(s)
    }
}

// ── Typed getters ─────────────────────────────────────────────────────────────

fn invalid(section: &str, key: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.into(),
    }
}

fn get_int(ini: &Ini, section: &str, key: &str) -> Result<Option<i32>, ConfigError> {
    match ini.getint(section, key) {
        Ok(Some(v)) => i32::try_from(v)
            .map(Some)
            .map_err(|_| invalid(section, key, format!("{v} is out of range"))),
        Ok(None) => Ok(None),
        Err(reason) => Err(invalid(section, key, reason)),
    }
}

fn get_uint(ini: &Ini, section: &str, key: &str) -> Result<Option<u64>, ConfigError> {
    ini.getuint(section, key)
        .map_err(|reason| invalid(section, key, reason))
}

fn get_float(ini: &Ini, section: &str, key: &str) -> Result<Option<f32>, ConfigError> {
    ini.getfloat(section, key)
        .map(|v| v.map(|f| f as f32))
        .map_err(|reason| invalid(section, key, reason))
}

fn get_color(ini: &Ini, section: &str, key: &str) -> Result<Option<Rgb>, ConfigError> {
    let Some(raw) = ini.get(section, key) else {
        return Ok(None);
    };
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(invalid(section, key, format!("expected r,g,b but got '{raw}'")));
    }
    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| invalid(section, key, format!("'{part}' is not a 0-255 channel")))?;
    }
    Ok(Some(Rgb(channels[0], channels[1], channels[2])))
}
