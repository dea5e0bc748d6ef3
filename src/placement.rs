//! Random fleet placement with collision and overflow avoidance.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::Rng;

use crate::common::GameError;
use crate::grid::Grid;
use crate::ship::{Orientation, ShipRun, ShipType};

/// Pick a random, non-overlapping run for a ship of `length` cells.
///
/// Orientation is drawn once per ship; each attempt then draws a fresh anchor
/// uniformly over the ocean and pulls it back along the orientation axis until
/// the run fits. A run touching any occupied cell is discarded whole.
pub fn random_run<R: Rng>(
    grid: &Grid,
    rng: &mut R,
    length: usize,
    max_attempts: u32,
) -> Result<ShipRun, GameError> {
    let (width, height) = (grid.width(), grid.height());
    let mut orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    if !axis_fits(orientation, length, width, height) {
        orientation = orientation.flipped();
        if !axis_fits(orientation, length, width, height) {
            return Err(GameError::PlacementImpossible {
                length,
                attempts: 0,
            });
        }
    }

    for attempt in 1..=max_attempts {
        let mut x = rng.random_range(0..width);
        let mut y = rng.random_range(0..height);
        match orientation {
            Orientation::Horizontal => x = x.min(width - length),
            Orientation::Vertical => y = y.min(height - length),
        }
        let run = ShipRun::new(x, y, orientation, length);
        if is_free(grid, &run)? {
            trace!("found free run {:?} on attempt {}", run, attempt);
            return Ok(run);
        }
        trace!("run {:?} collides, retrying", run);
    }
    Err(GameError::PlacementImpossible {
        length,
        attempts: max_attempts,
    })
}

fn axis_fits(orientation: Orientation, length: usize, width: usize, height: usize) -> bool {
    if width == 0 || height == 0 {
        return false;
    }
    match orientation {
        Orientation::Horizontal => length <= width,
        Orientation::Vertical => length <= height,
    }
}

fn is_free(grid: &Grid, run: &ShipRun) -> Result<bool, GameError> {
    for (x, y) in run.cells() {
        if grid.cell(x, y)?.occupied() {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Mark every cell of `run` as occupied, refusing overlap or overflow.
pub fn commit_run(grid: &mut Grid, run: &ShipRun) -> Result<(), GameError> {
    if !run.fits(grid.width(), grid.height()) {
        let (x, y) = run.origin();
        return Err(GameError::OutOfBounds { x, y });
    }
    if !is_free(grid, run)? {
        return Err(GameError::PlacementImpossible {
            length: run.length(),
            attempts: 1,
        });
    }
    for (x, y) in run.cells() {
        grid.cell_mut(x, y)?.place_ship();
    }
    Ok(())
}

/// Place the whole fleet, in order, onto `grid`.
///
/// Returns the committed runs so callers can inspect where ships went; the
/// grid itself only records occupancy.
pub fn place_fleet<R: Rng>(
    grid: &mut Grid,
    rng: &mut R,
    fleet: &[ShipType],
    max_attempts: u32,
) -> Result<Vec<ShipRun>, GameError> {
    let mut runs = Vec::with_capacity(fleet.len());
    for ship in fleet {
        let run = random_run(grid, rng, ship.length(), max_attempts).map_err(|e| {
            debug!("could not place {}: {}", ship.name(), e);
            e
        })?;
        commit_run(grid, &run)?;
        debug!(
            "placed {} (length {}) at {:?} {:?}",
            ship.name(),
            ship.length(),
            run.origin(),
            run.orientation()
        );
        runs.push(run);
    }
    Ok(runs)
}
