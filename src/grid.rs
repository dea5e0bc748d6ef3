//! The ocean grid and its cells.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{GameError, GuessResult};

/// One square of the ocean.
///
/// Fields are only changed through [`Cell::place_ship`] and [`Cell::strike`],
/// which keep `hit` implying both `occupied` and `guessed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    occupied: bool,
    hit: bool,
    guessed: bool,
}

impl Cell {
    /// A ship segment sits on this cell.
    pub fn occupied(&self) -> bool {
        self.occupied
    }

    /// The ship segment on this cell has been struck.
    pub fn hit(&self) -> bool {
        self.hit
    }

    /// The cell has been attacked at least once.
    pub fn guessed(&self) -> bool {
        self.guessed
    }

    /// Mark a ship segment on this cell.
    pub fn place_ship(&mut self) {
        self.occupied = true;
    }

    /// Attack the cell. Only the first strike changes anything.
    pub fn strike(&mut self) -> GuessResult {
        let result = if self.guessed {
            GuessResult::AlreadyGuessed { hit: self.hit }
        } else if self.occupied {
            self.hit = true;
            GuessResult::Hit
        } else {
            GuessResult::Miss
        };
        self.guessed = true;
        result
    }
}

/// A `width × height` ocean stored row-major, indexed by (x, y).
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty ocean: nothing placed, nothing guessed.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether (x, y) lies inside the ocean.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GameError> {
        if !self.contains(x, y) {
            return Err(GameError::OutOfBounds { x, y });
        }
        Ok(y * self.width + x)
    }

    /// Look up the cell at column `x`, row `y`.
    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell, GameError> {
        let idx = self.index(x, y)?;
        Ok(&self.cells[idx])
    }

    /// Mutable access to the cell at column `x`, row `y`.
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, GameError> {
        let idx = self.index(x, y)?;
        Ok(&mut self.cells[idx])
    }

    /// All cells with their coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i % width, i / width), cell))
    }

    /// Number of cells carrying a ship segment.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.occupied()).count()
    }

    /// Number of ship segments already struck.
    pub fn hit_count(&self) -> usize {
        self.cells.iter().filter(|c| c.hit()).count()
    }

    /// Returns `true` while any ship segment is still afloat.
    pub fn ships_remaining(&self) -> bool {
        self.cells.iter().any(|c| c.occupied() && !c.hit())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{} {{", self.width, self.height)?;
        for row in self.cells.chunks(self.width.max(1)) {
            f.write_str("  ")?;
            for cell in row {
                let ch = match (cell.occupied(), cell.hit(), cell.guessed()) {
                    (_, true, _) => '*',
                    (true, false, _) => '#',
                    (false, _, true) => 'o',
                    _ => '-',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
