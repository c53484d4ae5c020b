//! Translating crossterm events into per-frame input.
//!
//! Input model: instead of acting on each key event individually, the tracker
//! records the frame number of the last press/repeat event for every key.
//! Each frame, keys still within the hold window count as held, so several
//! directions and the fire button can be active at once.
//!
//! Works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol): proper
//!   `Press` / `Repeat` / `Release` events, keys are dropped on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows as
//!   repeated `Press`). Keys expire after the hold window of silence.

use std::collections::HashMap;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::Movement;
use crate::viewport::Viewport;

/// How long a key stays held after its last press/repeat event. The OS
/// key-repeat rate is at least 15 Hz, so this is refreshed before expiry.
const HOLD_WINDOW_MS: u64 = 133;

/// One-shot actions triggered by a single key press or click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    CycleWeapon,
    TogglePause,
    Sword,
    /// Left mouse button pressed.
    Fire,
}

/// Continuous input sampled once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub movement: Movement,
    /// Left mouse button currently held.
    pub fire_held: bool,
    /// Mouse position in world coordinates.
    pub aim: (f32, f32),
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            movement: Movement::default(),
            fire_held: false,
            aim: (SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
        }
    }
}

#[derive(Debug)]
pub struct InputTracker {
    /// Maps each held key to the frame it was last seen (press or repeat).
    key_frame: HashMap<KeyCode, u64>,
    hold_frames: u64,
    frame: u64,
    fire_held: bool,
    aim: (f32, f32),
}

impl InputTracker {
    pub fn new(fps: u32) -> Self {
        Self {
            key_frame: HashMap::new(),
            hold_frames: (HOLD_WINDOW_MS * fps as u64).div_ceil(1000).max(1),
            frame: 0,
            fire_held: false,
            aim: FrameInput::default().aim,
        }
    }

    /// Advance the tracker's frame counter; call once per game frame.
    pub fn next_frame(&mut self) {
        self.frame += 1;
    }

    pub fn aim(&self) -> (f32, f32) {
        self.aim
    }

    /// Record an event, returning the one-shot command it triggers, if any.
    pub fn handle(&mut self, event: &Event, viewport: &Viewport) -> Option<Command> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, viewport),
            _ => None,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Option<Command> {
        let code = normalize(key.code);
        match key.kind {
            KeyEventKind::Press => {
                // Classic terminals report a held key as repeated presses.
                let already_held = self.is_held(code);
                self.key_frame.insert(code, self.frame);
                if already_held {
                    return None;
                }
                match code {
                    KeyCode::Esc => Some(Command::Quit),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(Command::Quit)
                    }
                    KeyCode::Char('q') => Some(Command::CycleWeapon),
                    KeyCode::Char('p') => Some(Command::TogglePause),
                    KeyCode::Char('e') => Some(Command::Sword),
                    _ => None,
                }
            }
            KeyEventKind::Repeat => {
                self.key_frame.insert(code, self.frame);
                None
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
                None
            }
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, viewport: &Viewport) -> Option<Command> {
        self.aim = viewport.to_world(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.fire_held = true;
                Some(Command::Fire)
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.fire_held = false;
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.fire_held = true;
                None
            }
            _ => None,
        }
    }

    fn is_held(&self, key: KeyCode) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| self.frame.saturating_sub(last) <= self.hold_frames)
            .unwrap_or(false)
    }

    /// Snapshot of the continuous input for the current frame.
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            movement: Movement {
                up: self.is_held(KeyCode::Up) || self.is_held(KeyCode::Char('w')),
                down: self.is_held(KeyCode::Down) || self.is_held(KeyCode::Char('s')),
                left: self.is_held(KeyCode::Left) || self.is_held(KeyCode::Char('a')),
                right: self.is_held(KeyCode::Right) || self.is_held(KeyCode::Char('d')),
            },
            fire_held: self.fire_held,
            aim: self.aim,
        }
    }
}

/// Fold upper-case letters onto lower-case so Caps Lock doesn't matter.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
