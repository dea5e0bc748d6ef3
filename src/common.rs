//! Common types for Battleships: game errors and guess results.

use core::fmt;

/// Result of a guess against the ocean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess struck a ship segment.
    Hit,
    /// Nothing here.
    Miss,
    /// The cell was guessed before. `hit` repeats the first outcome.
    AlreadyGuessed { hit: bool },
}

impl GuessResult {
    /// Whether the targeted cell holds a ship segment, regardless of repeats.
    pub fn is_hit(&self) -> bool {
        match self {
            GuessResult::Hit => true,
            GuessResult::Miss => false,
            GuessResult::AlreadyGuessed { hit } => *hit,
        }
    }

    /// `true` for a guess that had already been made.
    pub fn is_repeat(&self) -> bool {
        matches!(self, GuessResult::AlreadyGuessed { .. })
    }
}

/// Errors returned by grid, placement and game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Column or row lies outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// A ship of `length` found no free run within `attempts` tries.
    PlacementImpossible { length: usize, attempts: u32 },
    /// The game configuration cannot describe a playable ocean.
    InvalidConfig(&'static str),
    /// Guess made after every ship was sunk.
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds { x, y } => {
                write!(f, "Cell ({}, {}) is outside the ocean", x, y)
            }
            GameError::PlacementImpossible { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
            GameError::InvalidConfig(reason) => write!(f, "Invalid game configuration: {}", reason),
            GameError::GameOver => write!(f, "Game is over, no more guesses are accepted"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
