//! Terminal renderer: all terminal output lives here.
//!
//! The simulation works in world pixels. A [`Viewport`] squeezes that world
//! into the terminal's play area (every row except the HUD line at the top
//! and the controls hint at the bottom) and maps mouse cells back.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::geometry::{Rect, Rgb};
use crate::hud::{Hud, PlayButton};
use crate::snapshot::Frame;

// ── Palette ───────────────────────────────────────────────────────────────────

const C_VESSEL: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_SHIPS_LEFT: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

const VESSEL_CELL: &str = "█";
const ENEMY_CELL: &str = "▓";
const PROJECTILE_CELL: &str = "║";
const SHIP_ICON: &str = "▲";

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps world pixels onto terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub world_width: i32,
    pub world_height: i32,
}

impl Viewport {
    /// First terminal row of the play area; row 0 is the HUD.
    pub const TOP: u16 = 1;

    pub fn new(cols: u16, rows: u16, world_width: i32, world_height: i32) -> Self {
        Viewport {
            cols,
            rows,
            world_width,
            world_height,
        }
    }

    /// Rows available to the play area.
    pub fn play_rows(&self) -> u16 {
        self.rows.saturating_sub(2).max(1)
    }

    /// Cell range `[start, end)` covering world span `[lo, hi)` on an axis of
    /// `cells` cells and `world` pixels. Never empty for a visible span.
    fn span(lo: i32, hi: i32, cells: u16, world: i32) -> (u16, u16) {
        let cells_i = cells as i64;
        let world = world.max(1) as i64;
        let lo = (lo as i64).clamp(0, world);
        let hi = (hi as i64).clamp(0, world);
        let start = (lo * cells_i / world).min(cells_i - 1).max(0);
        let end = ((hi * cells_i + world - 1) / world).clamp(start + 1, cells_i);
        (start as u16, end as u16)
    }

    /// Columns `[start, end)` covered by `rect`.
    pub fn columns(&self, rect: &Rect) -> (u16, u16) {
        Self::span(rect.left(), rect.right(), self.cols.max(1), self.world_width)
    }

    /// Absolute terminal rows `[start, end)` covered by `rect`.
    pub fn rows_of(&self, rect: &Rect) -> (u16, u16) {
        let (start, end) = Self::span(
            rect.top(),
            rect.bottom(),
            self.play_rows(),
            self.world_height,
        );
        (start + Self::TOP, end + Self::TOP)
    }

    /// True if any part of `rect` is inside the world.
    pub fn is_visible(&self, rect: &Rect) -> bool {
        rect.right() > 0
            && rect.left() < self.world_width
            && rect.bottom() > 0
            && rect.top() < self.world_height
    }

    /// World pixel at the center of a terminal cell, or `None` outside the
    /// play area.
    pub fn to_world(&self, col: u16, row: u16) -> Option<(i32, i32)> {
        if col >= self.cols || row < Self::TOP || row >= Self::TOP + self.play_rows() {
            return None;
        }
        let play_row = (row - Self::TOP) as i64;
        let x = (2 * col as i64 + 1) * self.world_width as i64 / (2 * self.cols as i64);
        let y = (2 * play_row + 1) * self.world_height as i64 / (2 * self.play_rows() as i64);
        Some((x as i32, y as i32))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, frame: &Frame, view: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(to_color(frame.background)))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for enemy in &frame.enemies {
        fill_rect(out, view, enemy, ENEMY_CELL, C_ENEMY)?;
    }
    let projectile_color = to_color(frame.projectile_color);
    for projectile in &frame.projectiles {
        fill_rect(out, view, projectile, PROJECTILE_CELL, projectile_color)?;
    }
    fill_rect(out, view, &frame.vessel, VESSEL_CELL, C_VESSEL)?;

    draw_hud(out, &frame.hud, view)?;
    draw_controls_hint(out, view)?;

    if let Some(button) = &frame.play_button {
        draw_play_button(out, button, view)?;
    }

    out.queue(style::ResetColor)?;
    match (&frame.play_button, frame.cursor_visible) {
        (Some(button), true) => {
            // Park the cursor on the button label so there is something to aim at.
            let (col, row) = label_origin(button, view);
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(cursor::Show)?;
        }
        _ => {
            out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
            out.queue(cursor::Hide)?;
        }
    }
    out.flush()?;
    Ok(())
}

// ── Shapes ────────────────────────────────────────────────────────────────────

fn fill_rect<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    cell: &str,
    color: Color,
) -> std::io::Result<()> {
    if !view.is_visible(rect) {
        return Ok(());
    }
    let (c0, c1) = view.columns(rect);
    let (r0, r1) = view.rows_of(rect);
    let line = cell.repeat((c1 - c0) as usize);

    out.queue(style::SetForegroundColor(color))?;
    for row in r0..r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, hud: &Hud, view: &Viewport) -> std::io::Result<()> {
    let text_color = to_color(hud.text_color);

    // Ships remaining, one icon per slot along the left side
    out.queue(style::SetForegroundColor(C_SHIPS_LEFT))?;
    for icon in &hud.ship_icons {
        let (col, _) = view.columns(icon);
        out.queue(cursor::MoveTo(col, 0))?;
        out.queue(Print(SHIP_ICON))?;
    }

    // High score, centered
    let high = format!("High: {}", hud.high_score_text);
    let hx = (view.cols / 2).saturating_sub(high.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(hx, 0))?;
    out.queue(style::SetForegroundColor(text_color))?;
    out.queue(Print(&high))?;

    // Score and level, right side
    let right = format!("Score: {}  Level: {}", hud.score_text, hud.level_text);
    let rx = view.cols.saturating_sub(right.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(&right))?;

    Ok(())
}

// ── Play button ───────────────────────────────────────────────────────────────

fn label_origin(button: &PlayButton, view: &Viewport) -> (u16, u16) {
    let (c0, c1) = view.columns(&button.rect);
    let (r0, r1) = view.rows_of(&button.rect);
    let width = button.label.chars().count() as u16;
    let col = c0 + (c1 - c0).saturating_sub(width) / 2;
    let row = r0 + (r1 - r0 - 1) / 2;
    (col, row)
}

fn draw_play_button<W: Write>(
    out: &mut W,
    button: &PlayButton,
    view: &Viewport,
) -> std::io::Result<()> {
    let (c0, c1) = view.columns(&button.rect);
    let (r0, r1) = view.rows_of(&button.rect);
    let blank = " ".repeat((c1 - c0) as usize);

    out.queue(style::SetBackgroundColor(to_color(button.color)))?;
    for row in r0..r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&blank))?;
    }

    let (col, row) = label_origin(button, view);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(to_color(button.text_color)))?;
    out.queue(Print(button.label))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "← → / A D : Move   SPACE : Shoot   ↑ : Start   Q : Quit",
    ))?;
    Ok(())
}
