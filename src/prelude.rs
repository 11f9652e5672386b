//! Commonly used types and utilities for ease of import.

pub use crate::{
    coord_to_string, parse_command, Command, ComputerMove, GameConfig, GameEngine, GameError,
    ShotOutcome, Side, TurnState,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, outcome_message, print_player_view};
