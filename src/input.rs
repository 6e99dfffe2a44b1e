//! Turns terminal key events into session [`Signal`]s.
//!
//! Terminals differ in what they report. Keyboard-enhancement capable ones
//! (kitty protocol) send `Press` / `Repeat` / `Release`; classic ones only send
//! `Press`, with OS key-repeat showing up as more presses. The tracker records
//! the frame each key was last seen and treats it as held for [`HOLD_WINDOW`]
//! frames, so both kinds work. Movement is reported as start/stop edges of
//! that held state; everything else fires once per press.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::Signal;

/// A key counts as held if a press/repeat arrived within this many frames.
/// OS key-repeat runs at 15 Hz or more, so at 30+ FPS four frames is always
/// refreshed before expiry.
pub const HOLD_WINDOW: u64 = 4;

pub fn is_left(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A'))
}

pub fn is_right(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D'))
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
    left_held: bool,
    right_held: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one key event seen during `frame`, returning the one-shot
    /// signal it maps to, if any.
    pub fn record(&mut self, event: &KeyEvent, frame: u64) -> Option<Signal> {
        match event.kind {
            KeyEventKind::Press => {
                self.key_frame.insert(event.code, frame);
                match event.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Signal::Quit),
                    KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(Signal::Quit)
                    }
                    KeyCode::Char(' ') => Some(Signal::Fire),
                    KeyCode::Up => Some(Signal::StartGame),
                    _ => None,
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(event.code, frame);
                None
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&event.code);
                None
            }
        }
    }

    fn is_held(&self, matches: fn(&KeyCode) -> bool, frame: u64) -> bool {
        self.key_frame
            .iter()
            .any(|(code, &last)| matches(code) && frame.saturating_sub(last) <= HOLD_WINDOW)
    }

    /// Movement start/stop signals for keys whose held state changed since the
    /// previous poll.
    pub fn poll(&mut self, frame: u64) -> Vec<Signal> {
        let mut signals = Vec::new();

        let left = self.is_held(is_left, frame);
        if left != self.left_held {
            self.left_held = left;
            signals.push(if left {
                Signal::MoveLeftStart
            } else {
                Signal::MoveLeftStop
            });
        }

        let right = self.is_held(is_right, frame);
        if right != self.right_held {
            self.right_held = right;
            signals.push(if right {
                Signal::MoveRightStart
            } else {
                Signal::MoveRightStop
            });
        }

        // Forget keys that have long expired.
        self.key_frame
            .retain(|_, last| frame.saturating_sub(*last) <= HOLD_WINDOW);

        signals
    }
}
