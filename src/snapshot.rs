//! What the renderer needs to draw one frame. Produced by the session, never
//! read back by it.

use crate::geometry::{Rect, Rgb};
use crate::hud::{Hud, PlayButton};

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub background: Rgb,
    pub vessel: Rect,
    pub projectiles: Vec<Rect>,
    pub projectile_color: Rgb,
    pub enemies: Vec<Rect>,
    pub hud: Hud,
    /// Present only while no game is running.
    pub play_button: Option<PlayButton>,
    pub cursor_visible: bool,
}
