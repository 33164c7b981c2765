//! Game instance holding all state
//!
//! Hosts push key presses and restart requests as [`Command`]s whenever they
//! arrive; they are applied in order at the next tick boundary, so the
//! simulation never observes input in the middle of a tick.

use std::collections::VecDeque;
use std::time::Duration;

use crate::config::GameConfig;
use crate::platform::FixedTimestep;
use crate::renderer::Frame;
use crate::sim::autopilot::{Action, Autopilot};
use crate::sim::{GameEvent, GameState, Key, Modifiers, handle_key, tick};

/// Input delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Key { key: Key, modifiers: Modifiers },
    Restart,
}

pub struct Game {
    state: GameState,
    clock: FixedTimestep,
    pending: VecDeque<Command>,
    autopilot: Option<Autopilot>,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let clock = FixedTimestep::new(config.tick_interval());
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(config, seed),
            clock,
            pending: VecDeque::new(),
            autopilot: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Toggle idle/demo mode
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled.then(Autopilot::new);
        log::info!("Idle mode: {}", enabled);
    }

    /// Queue a command for the next tick boundary
    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn key_pressed(&mut self, key: Key, modifiers: Modifiers) {
        self.push(Command::Key { key, modifiers });
    }

    /// Pointer click at window coordinates. Queues a restart if it landed on
    /// the restart button of the current frame.
    pub fn click(&mut self, x: i32, y: i32) -> bool {
        let hit = self.frame().hits_restart(x, y);
        if hit {
            self.push(Command::Restart);
        }
        hit
    }

    /// Start a new round immediately
    pub fn restart(&mut self) -> GameEvent {
        self.state.restart();
        log::info!("Game restarted");
        GameEvent::Restarted
    }

    /// Feed a frame delta; applies queued commands and runs every tick due
    pub fn update(&mut self, dt: Duration) -> Vec<GameEvent> {
        let mut events = self.apply_pending();
        for _ in 0..self.clock.advance(dt) {
            self.run_tick(&mut events);
        }
        events
    }

    /// Apply queued commands and run exactly one tick, ignoring the clock
    pub fn step(&mut self) -> Vec<GameEvent> {
        let mut events = self.apply_pending();
        self.run_tick(&mut events);
        events
    }

    pub fn frame(&self) -> Frame {
        Frame::capture(&self.state)
    }

    fn apply_pending(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Some(command) = self.pending.pop_front() {
            match command {
                Command::Key { key, modifiers } => {
                    handle_key(&mut self.state, key, modifiers);
                }
                Command::Restart => events.push(self.restart()),
            }
        }
        events
    }

    fn run_tick(&mut self, events: &mut Vec<GameEvent>) {
        if let Some(pilot) = &self.autopilot {
            match pilot.decide(&self.state) {
                Some(Action::Press(key)) => {
                    handle_key(&mut self.state, key, Modifiers::NONE);
                }
                Some(Action::Restart) => events.push(self.restart()),
                None => {}
            }
        }
        events.extend(tick(&mut self.state));
    }
}
