//! Commonly used types and utilities for ease of import.

pub use crate::{Game, GameConfig, GameError, GameStatus, Grid, GuessResult, ShipType};

#[cfg(feature = "std")]
pub use crate::{render_grid, run_session, Console, SessionOptions};
