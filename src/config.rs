use alloc::vec::Vec;

use crate::common::GameError;

pub const DEFAULT_GRID_SIZE: usize = 8;
pub const DEFAULT_FLEET: [usize; 4] = [4, 3, 3, 2];
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;
/// Pause before each computer shot in the interactive game.
pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 700;
/// Column labels run `A..=Z`, which bounds the grid size.
pub const MAX_GRID_SIZE: usize = 26;

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&DEFAULT_FLEET);

/// Sum of ship lengths, usable in constant context.
pub const fn fleet_cells(fleet: &[usize]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i];
        i += 1;
    }
    total
}

/// Grid size, fleet composition and placement retry bound for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub fleet: Vec<usize>,
    pub max_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            fleet: DEFAULT_FLEET.to_vec(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Standard fleet on a grid of `size`.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Check that the configuration can produce a game at all.
    pub fn validate(&self) -> Result<(), GameError> {
        validate_fleet(self.size, &self.fleet)?;
        if self.max_attempts == 0 {
            return Err(GameError::InvalidConfig("placement attempts must be positive"));
        }
        Ok(())
    }
}

/// Reject grid/fleet combinations that can never be placed.
pub fn validate_fleet(size: usize, fleet: &[usize]) -> Result<(), GameError> {
    if size == 0 || size > MAX_GRID_SIZE {
        return Err(GameError::InvalidConfig("grid size must be between 1 and 26"));
    }
    if fleet.is_empty() {
        return Err(GameError::InvalidConfig("fleet must contain at least one ship"));
    }
    if fleet.iter().any(|&len| len == 0 || len > size) {
        return Err(GameError::InvalidConfig("ship length must be between 1 and the grid size"));
    }
    if fleet.iter().sum::<usize>() > size * size {
        return Err(GameError::InvalidConfig("fleet has more cells than the grid"));
    }
    Ok(())
}
