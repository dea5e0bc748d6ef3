use alloc::vec::Vec;
use log::{debug, info};
use rand::Rng;

use crate::{
    common::{GameError, GuessResult},
    config::GameConfig,
    grid::Grid,
    placement::place_fleet,
    ship::ShipRun,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
}

/// Shot counters for the running game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    /// First-time guesses.
    pub shots: u32,
    pub hits: u32,
    pub repeats: u32,
}

/// Single-player game: one placed ocean and the guesses made against it.
pub struct Game {
    grid: Grid,
    status: GameStatus,
    stats: GameStats,
}

impl Game {
    /// Validate `config`, place its fleet on a fresh ocean and start playing.
    pub fn new<R: Rng>(rng: &mut R, config: &GameConfig) -> Result<Self, GameError> {
        Self::with_runs(rng, config).map(|(game, _)| game)
    }

    /// Like [`Game::new`], also returning where each ship ended up.
    pub fn with_runs<R: Rng>(
        rng: &mut R,
        config: &GameConfig,
    ) -> Result<(Self, Vec<ShipRun>), GameError> {
        config.validate()?;
        let mut grid = Grid::new(config.width, config.height);
        let runs = place_fleet(&mut grid, rng, &config.fleet, config.max_attempts)?;
        info!(
            "new game on {}x{} ocean with {} ships",
            config.width,
            config.height,
            runs.len()
        );
        Ok((Self::from_grid(grid), runs))
    }

    /// Start playing on an already populated ocean.
    ///
    /// An ocean with nothing left afloat starts out `Won`.
    pub fn from_grid(grid: Grid) -> Self {
        let status = if grid.ships_remaining() {
            GameStatus::Playing
        } else {
            GameStatus::Won
        };
        Self {
            grid,
            status,
            stats: GameStats::default(),
        }
    }

    /// Throw this game away and deal a fresh ocean.
    pub fn restart<R: Rng>(self, rng: &mut R, config: &GameConfig) -> Result<Self, GameError> {
        debug!("restarting after {} shots", self.stats.shots);
        Self::new(rng, config)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Attack column `x`, row `y`.
    ///
    /// Out-of-bounds guesses and guesses after the win leave the ocean untouched.
    pub fn guess(&mut self, x: usize, y: usize) -> Result<GuessResult, GameError> {
        if self.status == GameStatus::Won {
            return Err(GameError::GameOver);
        }
        let result = self.grid.cell_mut(x, y)?.strike();
        match result {
            GuessResult::Hit => {
                self.stats.shots += 1;
                self.stats.hits += 1;
            }
            GuessResult::Miss => self.stats.shots += 1,
            GuessResult::AlreadyGuessed { .. } => self.stats.repeats += 1,
        }
        debug!("guess ({}, {}) -> {:?}", x, y, result);

        if !self.grid.ships_remaining() {
            info!("all ships sunk after {} shots", self.stats.shots);
            self.status = GameStatus::Won;
        }
        Ok(result)
    }
}
