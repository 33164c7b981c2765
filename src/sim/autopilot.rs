//! Idle/demo mode - AI plays the game
//!
//! Produces at most one action per tick, the same way a player would: by
//! pressing arrow keys, and by hitting restart after a crash.

use super::input::Key;
use super::rect::Rect;
use super::state::GameState;

/// Extra horizontal clearance the autopilot keeps around the ship
pub const DANGER_MARGIN: i32 = 20;

/// What the autopilot wants to do this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Press(Key),
    Restart,
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    pub margin: i32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            margin: DANGER_MARGIN,
        }
    }
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decide(&self, state: &GameState) -> Option<Action> {
        if state.is_game_over() {
            return Some(Action::Restart);
        }

        let ship = state.player.rect();
        let max_x = state.config.player_max_x();

        if let Some(threat) = self.nearest_threat(state, &ship) {
            // Dodge away from the rock's center; turn around at the walls
            let away = if threat.center().x >= ship.center().x {
                Key::Left
            } else {
                Key::Right
            };
            let blocked = match away {
                Key::Left => ship.left() <= 0,
                _ => ship.left() >= max_x,
            };
            let key = match (away, blocked) {
                (Key::Left, true) => Key::Right,
                (Key::Right, true) => Key::Left,
                (key, _) => key,
            };
            return Some(Action::Press(key));
        }

        // Nothing overhead - drift back to the middle
        let home = state.config.player_start_x();
        let offset = home - ship.left();
        if offset.abs() < state.config.move_step {
            None
        } else if offset < 0 {
            Some(Action::Press(Key::Left))
        } else {
            Some(Action::Press(Key::Right))
        }
    }

    /// Lowest rock still above the ship's bottom edge inside the danger lane
    fn nearest_threat(&self, state: &GameState, ship: &Rect) -> Option<Rect> {
        state
            .obstacles
            .iter()
            .map(|obstacle| obstacle.rect)
            .filter(|rock| rock.top() < ship.bottom())
            .filter(|rock| {
                rock.right() + self.margin > ship.left() && rock.left() - self.margin < ship.right()
            })
            .max_by_key(|rock| rock.top())
    }
}
