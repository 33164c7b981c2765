//! Rock Dodge - steer a ship along the bottom of the screen and dodge falling rocks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (obstacles, collisions, input, game state)
//! - `game`: Controller tying the simulation to a command queue and a fixed clock
//! - `renderer`: Backend-agnostic frame snapshots and quad tessellation
//! - `platform`: Fixed timestep clock
//! - `config`: Startup configuration

pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::{Error, Result};
pub use game::{Command, Game};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Window dimensions
    pub const WINDOW_WIDTH: i32 = 800;
    pub const WINDOW_HEIGHT: i32 = 600;

    /// Rock size
    pub const OBSTACLE_WIDTH: i32 = 50;
    pub const OBSTACLE_HEIGHT: i32 = 50;

    /// Ship size
    pub const PLAYER_WIDTH: i32 = 60;
    pub const PLAYER_HEIGHT: i32 = 60;
    /// Gap between the ship and the bottom of the window
    pub const PLAYER_BOTTOM_MARGIN: i32 = 20;

    /// Fixed simulation timestep (~60 Hz)
    pub const TICK_INTERVAL: Duration = Duration::from_micros(16_667);
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the clock accepts
    pub const MAX_FRAME_DT: Duration = Duration::from_millis(100);

    /// Chance per tick that a new rock appears
    pub const SPAWN_PROBABILITY: f64 = 0.02;
    /// Rock fall speed after a restart (pixels per tick)
    pub const DEFAULT_OBSTACLE_SPEED: i32 = 5;
    /// Horizontal distance per arrow key press
    pub const MOVE_STEP: i32 = 10;
}
