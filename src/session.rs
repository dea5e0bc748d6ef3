#![cfg(feature = "std")]

//! Interactive turn loop with replay.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use log::{info, warn};
use rand::Rng;

use crate::{
    cli::Console,
    common::{GameError, GuessResult},
    config::GameConfig,
    game::Game,
    ui::{clear_console, coord_to_string, describe, show_grid},
};

/// Presentation knobs for a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Show ship positions on the board.
    pub reveal: bool,
    /// Clear the console before drawing the board.
    pub clear: bool,
    /// Pause after reporting each guess.
    pub delay: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            reveal: false,
            clear: true,
            delay: Duration::from_secs(1),
        }
    }
}

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Player won and declined to play again.
    Declined,
    /// Input ran out.
    InputClosed,
}

/// Apply one guess and report it to the player.
///
/// An out-of-bounds cell is reported as invalid and yields `None` so the
/// caller can prompt again; other errors end the session.
pub fn play_guess<W: Write>(
    out: &mut W,
    game: &mut Game,
    x: usize,
    y: usize,
) -> anyhow::Result<Option<GuessResult>> {
    match game.guess(x, y) {
        Ok(result) => {
            writeln!(out, "{}: {}", coord_to_string(x, y), describe(result))?;
            Ok(Some(result))
        }
        Err(GameError::OutOfBounds { .. }) => {
            warn!("guess ({}, {}) fell outside the ocean", x, y);
            writeln!(out, "Invalid cell")?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Play games until the player declines a replay or input ends.
///
/// Returns the number of games won alongside the reason the session ended.
pub fn run_session<R, W, G>(
    console: &mut Console<R, W>,
    rng: &mut G,
    config: &GameConfig,
    options: &SessionOptions,
) -> anyhow::Result<(u32, SessionEnd)>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let mut game = Game::new(rng, config)?;
    let mut wins = 0;
    loop {
        if options.clear {
            clear_console(console.output())?;
        }
        show_grid(console.output(), game.grid(), options.reveal)?;

        let (x, y) = match console.get_cell(config.width, config.height)? {
            Some(cell) => cell,
            None => return Ok((wins, SessionEnd::InputClosed)),
        };
        if play_guess(console.output(), &mut game, x, y)?.is_none() {
            continue;
        }
        if !options.delay.is_zero() {
            thread::sleep(options.delay);
        }

        if game.is_won() {
            wins += 1;
            let stats = game.stats();
            if options.clear {
                clear_console(console.output())?;
            }
            writeln!(console.output(), "You hit all the ships, well done!")?;
            writeln!(
                console.output(),
                "{} shots, {} hits, {} repeated guesses.",
                stats.shots,
                stats.hits,
                stats.repeats
            )?;
            if !console.confirm("Play again? y/N ")? {
                info!("player declined replay after {} wins", wins);
                return Ok((wins, SessionEnd::Declined));
            }
            game = game.restart(rng, config)?;
        }
    }
}
