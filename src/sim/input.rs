//! Keyboard handling
//!
//! Key presses move the ship and change the shared rock speed. They apply in
//! any mode; a frozen GameOver world simply does not show the change until the
//! next round.

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    /// The `=` key; raises the speed only with Shift held (i.e. `+`)
    Equals,
    Minus,
    /// Anything else, ignored
    Other,
}

impl Key {
    /// Decode a backend key name into a key plus the modifiers it implies.
    ///
    /// `"+"` is reported as `=` with Shift held, matching what a US keyboard sends.
    pub fn from_name(name: &str) -> (Key, Modifiers) {
        match name {
            "ArrowLeft" | "Left" => (Key::Left, Modifiers::NONE),
            "ArrowRight" | "Right" => (Key::Right, Modifiers::NONE),
            "=" | "Equal" => (Key::Equals, Modifiers::NONE),
            "+" => (Key::Equals, Modifiers::SHIFT),
            "-" | "Minus" => (Key::Minus, Modifiers::NONE),
            _ => (Key::Other, Modifiers::NONE),
        }
    }
}

/// Modifier keys held during a press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { shift: false };
    pub const SHIFT: Modifiers = Modifiers { shift: true };
}

/// Apply one key press. Returns true if the state changed.
pub fn handle_key(state: &mut GameState, key: Key, modifiers: Modifiers) -> bool {
    let step = state.config.move_step;
    match key {
        Key::Left => {
            let x = state.player.x.saturating_sub(step).max(0);
            let changed = x != state.player.x;
            state.player.x = x;
            changed
        }
        Key::Right => {
            let x = state
                .player
                .x
                .saturating_add(step)
                .min(state.config.player_max_x());
            let changed = x != state.player.x;
            state.player.x = x;
            changed
        }
        Key::Equals if modifiers.shift => {
            state.obstacle_speed = state.obstacle_speed.saturating_add(1);
            log::debug!("Obstacle speed raised to {}", state.obstacle_speed);
            true
        }
        Key::Minus => {
            let speed = (state.obstacle_speed - 1).max(1);
            let changed = speed != state.obstacle_speed;
            state.obstacle_speed = speed;
            if changed {
                log::debug!("Obstacle speed lowered to {}", speed);
            }
            changed
        }
        Key::Equals | Key::Other => false,
    }
}
