//! Game configuration
//!
//! Fixed at startup. Every field falls back to the value in [`crate::consts`],
//! so a config file only needs to list what it overrides.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV: &str = "ROCK_DODGE_CONFIG";

/// Largest accepted window side; keeps all playfield arithmetic far from `i32` limits
pub const MAX_WINDOW_DIMENSION: i32 = 1 << 16;

/// Playfield dimensions and simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub window_width: i32,
    pub window_height: i32,

    // === Ship ===
    pub player_width: i32,
    pub player_height: i32,
    /// Gap between the ship's bottom edge and the window bottom
    pub player_bottom_margin: i32,
    /// Pixels moved per arrow key press
    pub move_step: i32,

    // === Rocks ===
    pub obstacle_width: i32,
    pub obstacle_height: i32,
    /// Fall speed after a restart (pixels per tick)
    pub default_obstacle_speed: i32,
    /// Chance per tick of spawning a rock, in [0, 1]
    pub spawn_probability: f64,

    // === Timing ===
    /// Tick length in microseconds
    pub tick_interval_us: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            move_step: MOVE_STEP,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            default_obstacle_speed: DEFAULT_OBSTACLE_SPEED,
            spawn_probability: SPAWN_PROBABILITY,

            tick_interval_us: TICK_INTERVAL.as_micros() as u64,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the file named by `ROCK_DODGE_CONFIG`, or the defaults when unset
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_file(path),
            None => {
                log::info!("Using default config");
                Ok(Self::default())
            }
        }
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let invalid =
            |reason: &str| -> Result<()> { Err(Error::InvalidConfig(reason.to_string())) };

        if self.window_width <= 0 || self.window_height <= 0 {
            return invalid("window dimensions must be positive");
        }
        if self.window_width > MAX_WINDOW_DIMENSION
            || self.window_height > MAX_WINDOW_DIMENSION
        {
            return invalid("window dimensions are too large");
        }
        if self.player_width <= 0 || self.player_height <= 0 {
            return invalid("player dimensions must be positive");
        }
        if self.obstacle_width <= 0 || self.obstacle_height <= 0 {
            return invalid("obstacle dimensions must be positive");
        }
        if self.player_width > self.window_width {
            return invalid("player is wider than the window");
        }
        if self.obstacle_width > self.window_width {
            return invalid("obstacle is wider than the window");
        }
        if self.obstacle_height > self.window_height {
            return invalid("obstacle is taller than the window");
        }
        let fits_vertically = self.player_bottom_margin >= 0
            && self
                .player_height
                .checked_add(self.player_bottom_margin)
                .is_some_and(|total| total <= self.window_height);
        if !fits_vertically {
            return invalid("player does not fit vertically in the window");
        }
        if self.move_step < 1 || self.move_step > self.window_width {
            return invalid("move_step must be within [1, window_width]");
        }
        if self.default_obstacle_speed < 1 {
            return invalid("default_obstacle_speed must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return invalid("spawn_probability must be within [0, 1]");
        }
        if self.tick_interval_us == 0 {
            return invalid("tick_interval_us must be positive");
        }
        Ok(())
    }

    /// Tick length as a duration
    pub fn tick_interval(&self) -> Duration {
        Duration::from_micros(self.tick_interval_us)
    }

    /// Ship x after a restart (horizontally centered)
    pub fn player_start_x(&self) -> i32 {
        self.window_width / 2 - self.player_width / 2
    }

    /// Fixed ship y
    pub fn player_y(&self) -> i32 {
        self.window_height - self.player_height - self.player_bottom_margin
    }

    /// Rightmost ship x
    pub fn player_max_x(&self) -> i32 {
        self.window_width - self.player_width
    }

    /// Rightmost rock spawn x
    pub fn obstacle_max_x(&self) -> i32 {
        self.window_width - self.obstacle_width
    }
}
