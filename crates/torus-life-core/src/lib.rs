pub mod config;
pub mod constants;
pub mod engine;
pub mod grid;
pub mod neighborhood;
pub mod rng;
pub mod rule;
pub mod session;

pub use config::{ConfigError, SessionConfig};
pub use engine::TickEngine;
pub use grid::{AgeGrid, CellGrid};
pub use session::{Directive, InputSnapshot, RestartCause, Session, SessionIo};
