//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; nothing is global.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Rocks fall, the ship can be hit
    #[default]
    Playing,
    /// The ship was hit; the world is frozen until a restart
    GameOver,
}

/// Something the presentation layer may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A rock appeared at the top of the window
    Spawned { id: u32, x: i32 },
    /// A rock fell past the bottom of the window
    Dodged { id: u32 },
    /// The ship was hit by this rock
    Collision { id: u32 },
    /// A new round started
    Restarted,
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Left edge, within [0, window_width - width]
    pub x: i32,
    /// Top edge, fixed for the whole game
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Player {
    /// Ship centered horizontally near the bottom of the window
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.player_start_x(),
            y: config.player_y(),
            width: config.player_width,
            height: config.player_height,
        }
    }

    /// Bounding box for collision checks
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A falling rock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub rect: Rect,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Startup configuration
    pub config: GameConfig,
    /// Session seed for reproducibility
    pub seed: u64,
    /// Spawn RNG, deliberately not reset on restart
    rng: Pcg32,
    /// Current phase
    pub mode: GameMode,
    /// Player ship
    pub player: Player,
    /// Active rocks in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Fall speed shared by every rock (pixels per tick, never below 1)
    pub obstacle_speed: i32,
    /// Ticks simulated this round
    pub ticks: u64,
    /// Rocks that fell past the bottom this round
    pub dodged: u32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given config and seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            player: Player::new(&config),
            obstacle_speed: config.default_obstacle_speed,
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            mode: GameMode::Playing,
            obstacles: Vec::new(),
            ticks: 0,
            dodged: 0,
            next_id: 1,
        }
    }

    /// Start a new round: ship centered, no rocks, default speed, Playing
    pub fn restart(&mut self) {
        self.player = Player::new(&self.config);
        self.obstacles.clear();
        self.obstacle_speed = self.config.default_obstacle_speed;
        self.mode = GameMode::Playing;
        self.ticks = 0;
        self.dodged = 0;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a rock at the top of the window and return its ID
    pub fn spawn_obstacle(&mut self, x: i32) -> u32 {
        let id = self.next_entity_id();
        let rect = Rect::new(x, 0, self.config.obstacle_width, self.config.obstacle_height);
        self.obstacles.push(Obstacle { id, rect });
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.mode == GameMode::GameOver
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameConfig::default(), 7);
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.player.x, 370);
        assert_eq!(state.player.y, 520);
        assert_eq!(state.obstacle_speed, 5);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_restart_resets_round() {
        let mut state = GameState::new(GameConfig::default(), 7);
        state.player.x = 0;
        state.obstacle_speed = 12;
        state.spawn_obstacle(100);
        state.spawn_obstacle(100);
        state.mode = GameMode::GameOver;
        state.ticks = 300;
        state.dodged = 4;

        state.restart();
        assert_eq!(state.player, Player::new(&state.config));
        assert!(state.obstacles.is_empty());
        assert_eq!(state.obstacle_speed, 5);
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.ticks, 0);
        assert_eq!(state.dodged, 0);
    }

    #[test]
    fn test_restart_is_idempotent() {
        let mut once = GameState::new(GameConfig::default(), 3);
        once.player.x = 90;
        once.spawn_obstacle(10);
        once.mode = GameMode::GameOver;
        let mut twice = once.clone();

        once.restart();
        twice.restart();
        twice.restart();

        assert_eq!(once.player, twice.player);
        assert_eq!(once.obstacles, twice.obstacles);
        assert_eq!(once.obstacle_speed, twice.obstacle_speed);
        assert_eq!(once.mode, twice.mode);
    }

    #[test]
    fn test_spawn_keeps_order_and_allows_duplicates() {
        let mut state = GameState::new(GameConfig::default(), 1);
        let a = state.spawn_obstacle(200);
        let b = state.spawn_obstacle(200);
        assert_ne!(a, b);
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(state.obstacles[0].id, a);
        assert_eq!(state.obstacles[1].rect, Rect::new(200, 0, 50, 50));
    }
}
