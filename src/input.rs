//! Input handling.
//!
//! Window events are folded into an `InputState`; once per tick the game loop
//! takes an `InputSnapshot` from it, so gameplay code never sees winit events.

use glam::Vec2;
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Up,
    Down,
    Left,
    Right,
    Attack,
    ZoomIn,
    ZoomOut,
    ToggleInventory,
    SpawnTestItem,
    SelfDamage,
}

impl GameKey {
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        let key = match code {
            KeyCode::KeyW | KeyCode::ArrowUp => GameKey::Up,
            KeyCode::KeyS | KeyCode::ArrowDown => GameKey::Down,
            KeyCode::KeyA | KeyCode::ArrowLeft => GameKey::Left,
            KeyCode::KeyD | KeyCode::ArrowRight => GameKey::Right,
            KeyCode::Space => GameKey::Attack,
            KeyCode::KeyQ => GameKey::ZoomIn,
            KeyCode::KeyE => GameKey::ZoomOut,
            KeyCode::Tab => GameKey::ToggleInventory,
            KeyCode::KeyP => GameKey::SpawnTestItem,
            KeyCode::KeyH => GameKey::SelfDamage,
            _ => return None,
        };
        Some(key)
    }
}

/// Input state tracking between ticks
#[derive(Default)]
pub struct InputState {
    keys_down: HashSet<GameKey>,
    /// Keys that went down since the last snapshot
    keys_pressed: HashSet<GameKey>,
    /// Pointer position in logical pixels
    pub pointer_pos: Vec2,
    pub pointer_down: bool,
    /// Primary button went down since the last snapshot
    pointer_pressed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, code: KeyCode) {
        if let Some(key) = GameKey::from_key_code(code) {
            if self.keys_down.insert(key) {
                self.keys_pressed.insert(key);
            }
        }
    }

    pub fn key_up(&mut self, code: KeyCode) {
        if let Some(key) = GameKey::from_key_code(code) {
            self.keys_down.remove(&key);
        }
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer_pos = pos;
    }

    pub fn pointer_button(&mut self, down: bool) {
        if down && !self.pointer_down {
            self.pointer_pressed = true;
        }
        self.pointer_down = down;
    }

    /// Forget everything held, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.keys_down.clear();
        self.pointer_down = false;
    }

    /// Capture this tick's input and consume the rising edges
    pub fn snapshot(&mut self) -> InputSnapshot {
        InputSnapshot {
            held: self.keys_down.clone(),
            pressed: std::mem::take(&mut self.keys_pressed),
            pointer: self.pointer_pos,
            pointer_down: self.pointer_down,
            pointer_pressed: std::mem::take(&mut self.pointer_pressed),
        }
    }
}

/// Immutable view of the input for one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub held: HashSet<GameKey>,
    pub pressed: HashSet<GameKey>,
    pub pointer: Vec2,
    pub pointer_down: bool,
    /// Primary button went down this tick
    pub pointer_pressed: bool,
}

impl InputSnapshot {
    pub fn is_held(&self, key: GameKey) -> bool {
        self.held.contains(&key)
    }

    pub fn was_pressed(&self, key: GameKey) -> bool {
        self.pressed.contains(&key)
    }

    /// Snapshot with `keys` held and freshly pressed
    #[cfg(test)]
    pub fn holding(keys: &[GameKey]) -> Self {
        Self {
            held: keys.iter().copied().collect(),
            pressed: keys.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Snapshot with a fresh primary-button press at `pointer`
    #[cfg(test)]
    pub fn click_at(pointer: Vec2) -> Self {
        Self {
            pointer,
            pointer_down: true,
            pointer_pressed: true,
            ..Self::default()
        }
    }
}
