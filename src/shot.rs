//! Shot resolution against a fleet grid and the attacker's view of it.

use log::debug;

use crate::common::GameError;
use crate::grid::{FleetCell, FleetGrid, ViewCell, ViewGrid};

/// Classification of a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The coordinate was shot before; nothing changed.
    AlreadyShot,
    Hit,
    Miss,
}

impl ShotOutcome {
    /// Whether the shot was scored. Repeated coordinates are rejected.
    pub fn accepted(self) -> bool {
        !matches!(self, ShotOutcome::AlreadyShot)
    }
}

/// Fire at (`row`, `col`). `view` is the attacker's record of `fleet`.
///
/// Coordinates outside the grids are an error and mutate nothing.
pub fn apply_shot(
    fleet: &mut FleetGrid,
    view: &mut ViewGrid,
    row: usize,
    col: usize,
) -> Result<ShotOutcome, GameError> {
    if view.size() != fleet.size() {
        return Err(GameError::InconsistentState("view and fleet grid sizes differ"));
    }
    // prevent duplicates
    if view.get(row, col)? != ViewCell::Empty {
        debug!("repeated shot at ({}, {})", row, col);
        return Ok(ShotOutcome::AlreadyShot);
    }
    let outcome = if fleet.get(row, col)? == FleetCell::Ship {
        fleet.set(row, col, FleetCell::Hit)?;
        view.set(row, col, ViewCell::Hit)?;
        ShotOutcome::Hit
    } else {
        view.set(row, col, ViewCell::Miss)?;
        ShotOutcome::Miss
    };
    debug!("shot at ({}, {}) -> {:?}", row, col, outcome);
    Ok(outcome)
}
