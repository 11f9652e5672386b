#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod common;
mod config;
pub mod coord;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placement;
pub mod prelude;
mod shot;
mod ship;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use common::*;
pub use config::*;
pub use coord::{coord_to_string, parse_command, parse_coord, Command};
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use placement::*;
pub use shot::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use ui::*;
