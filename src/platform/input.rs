//! Keyboard state polled once per tick

use crate::sim::TickInput;

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Held key for moving up
    Up,
    /// Held key for moving down
    Down,
    /// Toggle attract mode (keydown only)
    ToggleIdle,
    /// Toggle audio mute (keydown only)
    ToggleMute,
}

impl KeyAction {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(KeyAction::Up),
            "ArrowDown" | "s" | "S" => Some(KeyAction::Down),
            "i" | "I" => Some(KeyAction::ToggleIdle),
            "m" | "M" => Some(KeyAction::ToggleMute),
            _ => None,
        }
    }
}

/// Which direction keys are currently held
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    up: bool,
    down: bool,
}

impl HeldKeys {
    /// Record a key going down. Returns the action so the caller can
    /// handle toggles.
    pub fn key_down(&mut self, key: &str) -> Option<KeyAction> {
        let action = KeyAction::from_key(key)?;
        match action {
            KeyAction::Up => self.up = true,
            KeyAction::Down => self.down = true,
            _ => {}
        }
        Some(action)
    }

    /// Record a key going up
    pub fn key_up(&mut self, key: &str) {
        match KeyAction::from_key(key) {
            Some(KeyAction::Up) => self.up = false,
            Some(KeyAction::Down) => self.down = false,
            _ => {}
        }
    }

    /// Forget everything held (focus lost, so key-ups may never arrive)
    pub fn release_all(&mut self) {
        self.up = false;
        self.down = false;
    }

    /// Snapshot for the next tick
    pub fn tick_input(&self, idle_mode: bool) -> TickInput {
        TickInput {
            up: self.up,
            down: self.down,
            idle_mode,
        }
    }
}
