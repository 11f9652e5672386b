//! Common types for the engine: errors and game sides.

use crate::game::TurnState;

/// The two participants of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// The side being shot at when `self` fires.
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A ship could not be placed within the retry bound.
    PlacementExhausted { length: usize, attempts: usize },
    /// Row or column outside the grid.
    InvalidCoordinate { row: usize, col: usize },
    /// Input text is not a coordinate in any accepted format.
    MalformedCoordinate,
    /// Action attempted in a turn state that does not allow it.
    InvalidOperation { state: TurnState },
    /// Grid size or fleet composition cannot form a game.
    InvalidConfig(&'static str),
    /// A restored snapshot disagrees with itself.
    InconsistentState(&'static str),
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::PlacementExhausted { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
            GameError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinate out of bounds: row={}, col={}", row, col)
            }
            GameError::MalformedCoordinate => write!(f, "Input is not a valid coordinate"),
            GameError::InvalidOperation { state } => {
                write!(f, "Operation not allowed in state {:?}", state)
            }
            GameError::InvalidConfig(reason) => write!(f, "Invalid configuration: {}", reason),
            GameError::InconsistentState(reason) => write!(f, "Inconsistent game state: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
