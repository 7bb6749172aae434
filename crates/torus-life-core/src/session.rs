use std::time::Duration;

use rand_chacha::ChaCha12Rng;

use crate::config::{ConfigError, SessionConfig};
use crate::engine::TickEngine;
use crate::grid::{AgeGrid, CellGrid};
use crate::rng::create_rng;

/// Held-key state captured once per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Restart key held this tick.
    pub restart: bool,
    /// Quit requested, by key or by window close.
    pub quit: bool,
}

impl InputSnapshot {
    /// Snapshot with nothing held.
    pub const NONE: Self = Self {
        restart: false,
        quit: false,
    };
}

/// What the per-tick policy decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Keep ticking.
    Continue,
    /// The board was regenerated this tick.
    Restarted(RestartCause),
    /// Stop the loop.
    Quit,
}

/// Why a restart fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartCause {
    KeyHeld,
    StepCap,
}

/// Collaborators the session loop needs from its host: input, presentation
/// and time. Tests script all three.
pub trait SessionIo {
    /// Capture the held-key state for this tick.
    fn poll(&mut self) -> InputSnapshot;
    /// Show the current board. Called before the tick advances it.
    fn present(&mut self, grid: &CellGrid, ages: &AgeGrid, steps: usize);
    /// Pause between ticks.
    fn sleep(&mut self, duration: Duration);
}

/// One interactive Life run: board, ages, tick counter and restart policy.
///
/// The RNG is consumed only when a board is (re)generated, never while
/// ticking, so a fixed seed reproduces a whole session tick for tick.
pub struct Session {
    // Kept private so the constructor's validation holds for the whole run.
    config: SessionConfig,
    grid: CellGrid,
    ages: AgeGrid,
    steps: usize,
    rng: ChaCha12Rng,
    engine: TickEngine,
}

impl Session {
    /// Validate the config and start with a freshly randomized board.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = create_rng(config.seed);
        let grid = CellGrid::random(config.grid_size, &mut rng);
        let ages = AgeGrid::zeroed(config.grid_size);
        let engine = TickEngine::new(config.grid_size);
        Ok(Self {
            config,
            grid,
            ages,
            steps: 0,
            rng,
            engine,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn ages(&self) -> &AgeGrid {
        &self.ages
    }

    /// Ticks since the last restart.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Per-tick policy: restart (held key, or the step cap expired) is
    /// evaluated first, then quit. Restart reads held-key state, so keeping
    /// the key down re-randomizes the board every tick.
    pub fn apply(&mut self, input: InputSnapshot) -> Directive {
        let cap = self.config.step_cap;
        let cap_expired = cap > 0 && self.steps > cap;
        if input.restart || cap_expired {
            self.restart();
            if input.quit {
                return Directive::Quit;
            }
            let cause = if input.restart {
                RestartCause::KeyHeld
            } else {
                RestartCause::StepCap
            };
            return Directive::Restarted(cause);
        }
        if input.quit {
            return Directive::Quit;
        }
        Directive::Continue
    }

    /// Throw the board away: fresh random cells, zero ages, zero counter.
    pub fn restart(&mut self) {
        self.grid.randomize(&mut self.rng);
        self.ages.reset();
        self.steps = 0;
    }

    /// One engine tick plus the counter increment.
    pub fn advance(&mut self) {
        self.engine
            .advance(&mut self.grid, &mut self.ages, self.config.age_cap);
        self.steps += 1;
    }

    /// Drive the blocking loop until quit: poll, apply the restart/quit
    /// policy, present the pre-tick board, advance, sleep.
    pub fn run(&mut self, io: &mut impl SessionIo) {
        let delay = self.config.effective_tick_delay();
        loop {
            let input = io.poll();
            if self.apply(input) == Directive::Quit {
                return;
            }
            io.present(&self.grid, &self.ages, self.steps);
            self.advance();
            io.sleep(delay);
        }
    }
}
