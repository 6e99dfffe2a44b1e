//! Scoreboard text, remaining-ship icons and the Play button.

use crate::entities::GameStats;
use crate::geometry::{Rect, Rgb};
use crate::settings::Settings;

pub const HUD_TEXT_COLOR: Rgb = Rgb(230, 230, 230);
pub const SHIP_ICON_MARGIN: i32 = 10;

pub const BUTTON_WIDTH: i32 = 200;
pub const BUTTON_HEIGHT: i32 = 50;
pub const BUTTON_COLOR: Rgb = Rgb(0, 255, 0);
pub const BUTTON_TEXT_COLOR: Rgb = Rgb(255, 255, 255);
pub const BUTTON_LABEL: &str = "Play";

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hud {
    pub score_text: String,
    pub high_score_text: String,
    pub level_text: String,
    /// One vessel-sized icon per remaining ship, left to right.
    pub ship_icons: Vec<Rect>,
    pub text_color: Rgb,
}

impl Hud {
    pub fn new(stats: &GameStats, settings: &Settings) -> Self {
        let ship_icons = (0..stats.ships_left as i32)
            .map(|i| {
                Rect::new(
                    SHIP_ICON_MARGIN + i * settings.ship_width,
                    SHIP_ICON_MARGIN,
                    settings.ship_width,
                    settings.ship_height,
                )
            })
            .collect();

        Hud {
            score_text: group_thousands(stats.score),
            high_score_text: group_thousands(stats.high_score),
            level_text: stats.level.to_string(),
            ship_icons,
            text_color: HUD_TEXT_COLOR,
        }
    }
}

/// The button shown while no game is running.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayButton {
    pub rect: Rect,
    pub color: Rgb,
    pub text_color: Rgb,
    pub label: &'static str,
}

impl PlayButton {
    /// Centered on the screen.
    pub fn new(settings: &Settings) -> Self {
        let mut rect = Rect::new(0, 0, BUTTON_WIDTH, BUTTON_HEIGHT);
        rect.set_center(settings.screen_width / 2, settings.screen_height / 2);
        PlayButton {
            rect,
            color: BUTTON_COLOR,
            text_color: BUTTON_TEXT_COLOR,
            label: BUTTON_LABEL,
        }
    }

    pub fn is_clicked(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point(x, y)
    }
}
