//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod input;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use input::{Key, Modifiers, handle_key};
pub use rect::Rect;
pub use state::{GameEvent, GameMode, GameState, Obstacle, Player};
pub use tick::tick;
