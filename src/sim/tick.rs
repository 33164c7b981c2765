//! Fixed timestep simulation tick
//!
//! Core game loop step: rocks fall, leave, hit the ship, or appear.

use rand::Rng;

use super::state::{GameEvent, GameMode, GameState};

/// Advance the game state by one tick.
///
/// Does nothing once the game is over. Returns the events produced this tick
/// in the order they happened.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Frozen world until restart
    if state.mode == GameMode::GameOver {
        return events;
    }

    state.ticks += 1;

    let speed = state.obstacle_speed;
    for obstacle in &mut state.obstacles {
        obstacle.rect.pos.y = obstacle.rect.pos.y.saturating_add(speed);
    }

    // Drop rocks that fell past the bottom before checking for hits
    let height = state.config.window_height;
    let before = state.obstacles.len();
    state.obstacles.retain(|obstacle| {
        let gone = obstacle.rect.top() > height;
        if gone {
            events.push(GameEvent::Dodged { id: obstacle.id });
        }
        !gone
    });
    state.dodged += (before - state.obstacles.len()) as u32;

    let player = state.player.rect();
    if let Some(hit) = state
        .obstacles
        .iter()
        .find(|obstacle| obstacle.rect.intersects(&player))
    {
        log::info!(
            "Ship hit by rock {} at ({}, {}) after {} ticks, {} dodged",
            hit.id,
            hit.rect.left(),
            hit.rect.top(),
            state.ticks,
            state.dodged
        );
        events.push(GameEvent::Collision { id: hit.id });
        state.mode = GameMode::GameOver;
        return events;
    }

    if let Some(event) = maybe_spawn(state) {
        events.push(event);
    }

    events
}

/// Roll for a new rock at the top of the window
fn maybe_spawn(state: &mut GameState) -> Option<GameEvent> {
    let probability = state.config.spawn_probability;
    let max_x = state.config.obstacle_max_x();

    let rng = state.rng_mut();
    if rng.random::<f64>() >= probability {
        return None;
    }
    let x = rng.random_range(0..=max_x);

    let id = state.spawn_obstacle(x);
    log::debug!("Spawned rock {} at x={}", id, x);
    Some(GameEvent::Spawned { id, x })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::rect::Rect;
    use crate::sim::state::Obstacle;
    use proptest::prelude::*;

    /// Default playfield with spawning switched off
    fn quiet_state() -> GameState {
        let config = GameConfig {
            spawn_probability: 0.0,
            ..Default::default()
        };
        GameState::new(config, 12345)
    }

    fn place(state: &mut GameState, x: i32, y: i32) -> u32 {
        let id = state.spawn_obstacle(x);
        state.obstacles.last_mut().unwrap().rect.pos.y = y;
        id
    }

    #[test]
    fn test_rocks_fall_by_speed() {
        let mut state = quiet_state();
        place(&mut state, 0, 0);
        place(&mut state, 700, 100);
        state.obstacle_speed = 7;

        let events = tick(&mut state);
        assert!(events.is_empty());
        assert_eq!(state.obstacles[0].rect.top(), 7);
        assert_eq!(state.obstacles[1].rect.top(), 107);
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn test_collision_ends_game() {
        let mut state = quiet_state();
        let id = place(&mut state, 390, 545);

        let events = tick(&mut state);
        assert_eq!(state.obstacles[0].rect, Rect::new(390, 550, 50, 50));
        assert_eq!(events, vec![GameEvent::Collision { id }]);
        assert_eq!(state.mode, GameMode::GameOver);
    }

    #[test]
    fn test_first_contact_from_top() {
        // Rock dropped straight onto the centered ship: touching at y=470 is
        // not a hit, the next tick (y=475) is.
        let mut state = quiet_state();
        place(&mut state, 390, 0);

        for _ in 0..94 {
            tick(&mut state);
        }
        assert_eq!(state.obstacles[0].rect.top(), 470);
        assert_eq!(state.mode, GameMode::Playing);

        tick(&mut state);
        assert_eq!(state.obstacles[0].rect.top(), 475);
        assert_eq!(state.mode, GameMode::GameOver);
    }

    #[test]
    fn test_rock_removed_past_bottom() {
        let mut state = quiet_state();
        let id = place(&mut state, 700, 0);

        for _ in 0..120 {
            tick(&mut state);
        }
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].rect.top(), 600);

        let events = tick(&mut state);
        assert!(state.obstacles.is_empty());
        assert_eq!(events, vec![GameEvent::Dodged { id }]);
        assert_eq!(state.dodged, 1);
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_removed_rock_cannot_collide() {
        // A rock that leaves the window this tick is not tested against the ship
        let config = GameConfig {
            spawn_probability: 0.0,
            player_bottom_margin: 0,
            ..Default::default()
        };
        let mut state = GameState::new(config, 1);
        state.obstacle_speed = 100;
        state.obstacles.push(Obstacle {
            id: 99,
            rect: Rect::new(state.player.x, 550, 50, 50),
        });

        tick(&mut state);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_max_speed_does_not_overflow() {
        let mut state = quiet_state();
        let id = place(&mut state, 700, 300);
        state.obstacle_speed = i32::MAX;

        let events = tick(&mut state);
        assert_eq!(events, vec![GameEvent::Dodged { id }]);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_game_over_freezes_world() {
        let mut state = quiet_state();
        place(&mut state, 10, 10);
        state.mode = GameMode::GameOver;
        let before = state.clone();

        assert!(tick(&mut state).is_empty());
        assert_eq!(state.obstacles, before.obstacles);
        assert_eq!(state.ticks, before.ticks);
        assert_eq!(state.player, before.player);
    }

    #[test]
    fn test_certain_spawn() {
        let config = GameConfig {
            spawn_probability: 1.0,
            ..Default::default()
        };
        let mut state = GameState::new(config, 5);
        state.obstacle_speed = 1;

        for n in 1..=20 {
            let events = tick(&mut state);
            assert!(matches!(events.last(), Some(GameEvent::Spawned { .. })));
            assert_eq!(state.obstacles.len(), n);
        }
        let newest = state.obstacles.last().unwrap();
        assert_eq!(newest.rect.top(), 0);
        for obstacle in &state.obstacles {
            assert!((0..=750).contains(&obstacle.rect.left()));
        }
    }

    #[test]
    fn test_no_spawn_at_zero_probability() {
        let mut state = quiet_state();
        for _ in 0..1000 {
            tick(&mut state);
        }
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_no_spawn_on_collision_tick() {
        let config = GameConfig {
            spawn_probability: 1.0,
            ..Default::default()
        };
        let mut state = GameState::new(config, 5);
        place(&mut state, 390, 545);
        let events = tick(&mut state);
        assert_eq!(state.obstacles.len(), 1);
        assert!(matches!(events.as_slice(), [GameEvent::Collision { .. }]));
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(GameConfig::default(), 99999);
        let mut state2 = GameState::new(GameConfig::default(), 99999);

        for _ in 0..2000 {
            let e1 = tick(&mut state1);
            let e2 = tick(&mut state2);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.ticks, state2.ticks);
        assert_eq!(state1.mode, state2.mode);
        assert_eq!(state1.obstacles, state2.obstacles);
    }

    proptest! {
        #[test]
        fn surviving_rocks_fall_exactly_speed(seed in any::<u64>(), speed in 1i32..40, ticks in 1usize..200) {
            let config = GameConfig {
                spawn_probability: 0.3,
                ..Default::default()
            };
            let mut state = GameState::new(config, seed);
            state.obstacle_speed = speed;

            for _ in 0..ticks {
                let was_playing = state.mode == GameMode::Playing;
                let before = state.obstacles.clone();
                tick(&mut state);

                for obstacle in &state.obstacles {
                    prop_assert!(obstacle.rect.top() >= 0);
                    prop_assert!(obstacle.rect.top() <= state.config.window_height);
                    if let Some(old) = before.iter().find(|o| o.id == obstacle.id) {
                        let expected = if was_playing { old.rect.top() + speed } else { old.rect.top() };
                        prop_assert_eq!(obstacle.rect.top(), expected);
                    }
                }
            }
        }

        #[test]
        fn game_over_iff_overlap(seed in any::<u64>()) {
            let mut state = GameState::new(GameConfig::default(), seed);
            for _ in 0..600 {
                if state.mode == GameMode::GameOver {
                    break;
                }
                tick(&mut state);
                let player = state.player.rect();
                let overlapping = state.obstacles.iter().any(|o| o.rect.intersects(&player));
                prop_assert_eq!(overlapping, state.mode == GameMode::GameOver);
            }
        }
    }
}
