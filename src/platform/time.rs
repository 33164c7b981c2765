//! Fixed timestep accumulator

use std::time::Duration;

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};

/// Converts variable frame deltas into whole simulation steps
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
    max_substeps: u32,
}

impl FixedTimestep {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            accumulator: Duration::ZERO,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps;
        self
    }

    /// Add a frame delta and return how many steps are due.
    ///
    /// Deltas are capped at 100 ms, and time beyond `max_substeps` steps is
    /// dropped to prevent a spiral of death after a stall.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.step.is_zero() {
            return 0;
        }
        self.accumulator += dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        if substeps == self.max_substeps && self.accumulator >= self.step {
            log::debug!("Dropping {:?} of simulation backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }
        substeps
    }

    /// Forget any partially accumulated step
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
