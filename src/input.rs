//! Turns raw crossterm key events into one [`Input`] per frame.
//!
//! Instead of acting on each key event individually, we keep a `key_frame`
//! map recording the frame number of the last press/repeat event for every
//! key.  A key counts as held while that frame is within `HOLD_WINDOW` of the
//! current one, which lets thrust, rotation and fire be combined freely.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
//!   `Press` / `Repeat` / `Release` events → keys are removed on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows as
//!   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};

use asteroids::entities::Input;

/// 8 frames @ 60 FPS ≈ 133 ms, shorter than any OS key-repeat interval.
const HOLD_WINDOW: u64 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
    /// Keys pressed (not repeated) during the current frame.
    pressed: Vec<KeyCode>,
    frame: u64,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.frame += 1;
        self.pressed.clear();
    }

    pub fn record(&mut self, code: KeyCode, kind: KeyEventKind, modifiers: KeyModifiers) -> KeyAction {
        match kind {
            KeyEventKind::Press => {
                match code {
                    KeyCode::Esc => return KeyAction::Quit,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return KeyAction::Quit;
                    }
                    _ => {}
                }
                // Classic terminals report auto-repeat as fresh presses, so
                // only a key that was not already held is a new press.
                if !self.is_held(&code) {
                    self.pressed.push(code);
                }
                self.key_frame.insert(code, self.frame);
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(code, self.frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
            }
        }
        KeyAction::Continue
    }

    fn is_held(&self, key: &KeyCode) -> bool {
        self.key_frame
            .get(key)
            .map(|&last| self.frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn was_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    pub fn input(&self) -> Input {
        Input {
            thrust: self.is_held(&KeyCode::Up),
            rotate_left: self.is_held(&KeyCode::Left),
            rotate_right: self.is_held(&KeyCode::Right),
            fire: self.is_held(&KeyCode::Char(' ')),
            menu_up: self.was_pressed(KeyCode::Up),
            menu_down: self.was_pressed(KeyCode::Down),
            confirm: self.was_pressed(KeyCode::Enter) || self.was_pressed(KeyCode::Char(' ')),
        }
    }
}
