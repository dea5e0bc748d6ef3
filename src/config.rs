use alloc::vec::Vec;

use crate::common::GameError;
use crate::ship::ShipType;

pub const OCEAN_WIDTH: usize = 10;
pub const OCEAN_HEIGHT: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&SHIPS);

/// Sum of ship lengths, usable in const context.
pub const fn fleet_cells(fleet: &[ShipType]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}

/// Anchor attempts allowed per ship before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Column labels run from `A`, so the ocean can be at most this wide.
pub const MAX_OCEAN_WIDTH: usize = 26;

/// Dimensions and fleet for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub fleet: Vec<ShipType>,
    pub max_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: OCEAN_WIDTH,
            height: OCEAN_HEIGHT,
            fleet: SHIPS.to_vec(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Sum of all ship lengths in the fleet.
    pub fn total_ship_cells(&self) -> usize {
        fleet_cells(&self.fleet)
    }

    /// Reject configurations no game can be played on.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::InvalidConfig("ocean dimensions must be non-zero"));
        }
        if self.width > MAX_OCEAN_WIDTH {
            return Err(GameError::InvalidConfig("ocean is wider than the column labels allow"));
        }
        if self.fleet.is_empty() {
            return Err(GameError::InvalidConfig("fleet must contain at least one ship"));
        }
        if self.fleet.iter().any(|s| s.length() == 0) {
            return Err(GameError::InvalidConfig("ships must have a non-zero length"));
        }
        if self.max_attempts == 0 {
            return Err(GameError::InvalidConfig("placement needs at least one attempt"));
        }
        Ok(())
    }
}
