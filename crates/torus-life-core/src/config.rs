use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::constants::{DEBUG_TICK_DELAY, MAX_GRID_SIZE, MAX_SURFACE_SIDE};

/// Immutable per-run settings for a Life session.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of cells along each edge of the square board.
    pub grid_size: usize,
    /// Rendered size of one cell in pixels.
    pub cell_px: u32,
    /// Pause between ticks in seconds. Ignored while `debug` is set.
    pub tick_delay: f64,
    /// Replace `tick_delay` with the fixed slow delay for manual inspection.
    pub debug: bool,
    /// Colour alive cells by age bucket instead of plain white.
    pub color: bool,
    /// Consecutive alive ticks after which a cell is forcibly killed (0 = unlimited).
    pub age_cap: u32,
    /// Ticks since the last restart after which the board re-randomizes (0 = never).
    pub step_cap: usize,
    /// Fixed seed for the board RNG; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: 64,
            cell_px: 5,
            tick_delay: 0.03,
            debug: false,
            color: false,
            age_cap: 0,
            step_cap: 0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidGridSize,
    GridSizeTooLarge { max: usize, actual: usize },
    InvalidCellSize,
    InvalidTickDelay,
    SurfaceTooLarge { max: u32, actual: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGridSize => write!(f, "grid_size must be greater than 0"),
            ConfigError::GridSizeTooLarge { max, actual } => {
                write!(f, "grid_size ({actual}) exceeds supported maximum ({max})")
            }
            ConfigError::InvalidCellSize => write!(f, "cell_px must be greater than 0"),
            ConfigError::InvalidTickDelay => {
                write!(f, "tick_delay must be non-negative and finite")
            }
            ConfigError::SurfaceTooLarge { max, actual } => {
                write!(
                    f,
                    "window side ({actual} px) exceeds supported maximum ({max} px)"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl SessionConfig {
    /// Check every constraint, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_board()?;
        self.validate_timing()?;
        self.validate_surface()?;
        Ok(())
    }

    fn validate_board(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::InvalidGridSize);
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridSizeTooLarge {
                max: MAX_GRID_SIZE,
                actual: self.grid_size,
            });
        }
        Ok(())
    }

    fn validate_timing(&self) -> Result<(), ConfigError> {
        if !self.tick_delay.is_finite() || self.tick_delay < 0.0 {
            return Err(ConfigError::InvalidTickDelay);
        }
        Ok(())
    }

    fn validate_surface(&self) -> Result<(), ConfigError> {
        if self.cell_px == 0 {
            return Err(ConfigError::InvalidCellSize);
        }
        let side = self.surface_side_wide();
        if side > u64::from(MAX_SURFACE_SIDE) {
            return Err(ConfigError::SurfaceTooLarge {
                max: MAX_SURFACE_SIDE,
                actual: side,
            });
        }
        Ok(())
    }

    /// Window edge in pixels: `(S + 1) * N - 1`, leaving a one-pixel gutter
    /// between cells. Only meaningful on a validated config.
    pub fn surface_side(&self) -> u32 {
        self.surface_side_wide() as u32
    }

    fn surface_side_wide(&self) -> u64 {
        ((u64::from(self.cell_px) + 1) * self.grid_size as u64).saturating_sub(1)
    }

    /// Effective pause between ticks; debug mode pins the slow fixed delay.
    pub fn effective_tick_delay(&self) -> Duration {
        if self.debug {
            DEBUG_TICK_DELAY
        } else {
            Duration::from_secs_f64(self.tick_delay)
        }
    }
}
