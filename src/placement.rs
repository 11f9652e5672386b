//! Randomized, non-overlapping fleet placement.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::common::GameError;
use crate::grid::{FleetCell, FleetGrid};
use crate::ship::{Orientation, Ship};

/// Returns a random ship of `length` that fits on `grid` without overlapping
/// existing ships. Gives up after `max_attempts` rejected candidates.
pub fn random_placement<R: Rng + ?Sized>(
    grid: &FleetGrid,
    length: usize,
    rng: &mut R,
    max_attempts: usize,
) -> Result<Ship, GameError> {
    let size = grid.size();
    if length == 0 || length > size {
        warn!("ship of length {} cannot fit a {}x{} grid", length, size, size);
        return Err(GameError::PlacementExhausted {
            length,
            attempts: 0,
        });
    }
    for _ in 0..max_attempts {
        let orient = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let max_r = if orient == Orientation::Vertical {
            size - length
        } else {
            size - 1
        };
        let max_c = if orient == Orientation::Horizontal {
            size - length
        } else {
            size - 1
        };
        let r = rng.random_range(0..=max_r);
        let c = rng.random_range(0..=max_c);
        let ship = Ship::new(length, orient, r, c, size)?;
        if fits(grid, &ship) {
            return Ok(ship);
        }
    }
    warn!(
        "gave up placing ship of length {} after {} attempts",
        length, max_attempts
    );
    Err(GameError::PlacementExhausted {
        length,
        attempts: max_attempts,
    })
}

/// `true` if every cell of `ship` is inside `grid` and not already a ship.
pub fn fits(grid: &FleetGrid, ship: &Ship) -> bool {
    ship.cells()
        .all(|(r, c)| matches!(grid.get(r, c), Ok(FleetCell::Empty)))
}

/// Mark the cells of `ship` on `grid`. Rejects out-of-bounds or overlapping ships
/// without touching the grid.
pub fn place_ship(grid: &mut FleetGrid, ship: &Ship) -> Result<(), GameError> {
    for (r, c) in ship.cells() {
        if grid.get(r, c)? != FleetCell::Empty {
            return Err(GameError::InvalidCoordinate { row: r, col: c });
        }
    }
    for (r, c) in ship.cells() {
        grid.set(r, c, FleetCell::Ship)?;
    }
    Ok(())
}

/// Place one ship per entry of `lengths`, in order, onto `grid`.
///
/// Ships are placed on a copy of the grid which replaces `grid` only when the
/// whole fleet fits, so a failure leaves `grid` untouched.
pub fn place_fleet<R: Rng + ?Sized>(
    grid: &mut FleetGrid,
    lengths: &[usize],
    rng: &mut R,
    max_attempts: usize,
) -> Result<Vec<Ship>, GameError> {
    let mut scratch = grid.clone();
    let mut ships = Vec::with_capacity(lengths.len());
    for &length in lengths {
        let ship = random_placement(&scratch, length, rng, max_attempts)?;
        place_ship(&mut scratch, &ship)?;
        debug!(
            "placed ship len={} at {:?} {:?}",
            length,
            ship.origin(),
            ship.orientation()
        );
        ships.push(ship);
    }
    *grid = scratch;
    Ok(ships)
}
