//! Alien Invasion: a single-player arcade shooter.
//!
//! The simulation core (`settings`, `entities`, `fleet`, `collision`,
//! `session`) is pure game state with no I/O. `input` and `display` adapt it
//! to a crossterm terminal.

pub mod collision;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod fleet;
pub mod geometry;
pub mod hud;
pub mod input;
pub mod session;
pub mod settings;
pub mod snapshot;
