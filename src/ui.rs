#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::io::{self, Write};
use std::string::String;

use crate::{common::GuessResult, config::MAX_OCEAN_WIDTH, grid::Grid};

/// ANSI sequence: clear screen, cursor home.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Shown for columns past `Z`, which players cannot type.
const UNLABELLED: char = '?';

/// Letter labelling column `x` (0 -> 'A'), `None` past `Z`.
pub fn column_label(x: usize) -> Option<char> {
    if x < MAX_OCEAN_WIDTH {
        Some((b'A' + x as u8) as char)
    } else {
        None
    }
}

/// Format a coordinate the way players type it, e.g. `C7`.
pub fn coord_to_string(x: usize, y: usize) -> String {
    format!("{}{}", column_label(x).unwrap_or(UNLABELLED), y)
}

/// Draw the ocean as ASCII with column letters on top and row numbers on the left.
///
/// `*` hit, `o` miss, `-` untouched. With `reveal`, afloat ship segments show `#`.
pub fn render_grid(grid: &Grid, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str("  ");
    for x in 0..grid.width() {
        let _ = write!(out, " {} ", column_label(x).unwrap_or(UNLABELLED));
    }
    out.push('\n');
    for y in 0..grid.height() {
        let _ = write!(out, "{:>2}", y);
        for x in 0..grid.width() {
            let marker = match grid.cell(x, y) {
                Ok(cell) if cell.hit() => '*',
                Ok(cell) if cell.guessed() => 'o',
                Ok(cell) if reveal && cell.occupied() => '#',
                _ => '-',
            };
            let _ = write!(out, " {} ", marker);
        }
        out.push('\n');
    }
    out
}

pub fn show_grid<W: Write>(out: &mut W, grid: &Grid, reveal: bool) -> io::Result<()> {
    out.write_all(render_grid(grid, reveal).as_bytes())?;
    out.flush()
}

pub fn clear_console<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(CLEAR_SCREEN.as_bytes())?;
    out.flush()
}

/// Message shown to the player for a guess.
pub fn describe(result: GuessResult) -> &'static str {
    match result {
        GuessResult::Hit => "You hit something!",
        GuessResult::Miss => "Nothing here!",
        GuessResult::AlreadyGuessed { .. } => "You already guessed this one!",
    }
}
