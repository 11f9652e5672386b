#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use rand::Rng;

use crate::{
    common::Side,
    coord::column_label,
    game::{GameEngine, TurnState},
    grid::{FleetCell, FleetGrid, Symbol, ViewCell, ViewGrid},
};

fn header(out: &mut String, size: usize) {
    out.push_str("   ");
    for c in 0..size {
        let _ = write!(out, " {}", column_label(c));
    }
    out.push('\n');
}

/// Render a shot record: `.` unknown, `X` hit, `o` miss.
pub fn render_view(view: &ViewGrid) -> String {
    let size = view.size();
    let mut out = String::new();
    header(&mut out, size);
    for r in 0..size {
        let _ = write!(out, "{:2} ", r + 1);
        for &cell in view.row(r) {
            let _ = write!(out, " {}", cell.symbol());
        }
        out.push('\n');
    }
    out
}

/// Render a side's own board. `incoming` is the opponent's shot record, used to
/// show misses in the water around the ships.
pub fn render_fleet(fleet: &FleetGrid, incoming: &ViewGrid) -> String {
    let size = fleet.size();
    let mut out = String::new();
    header(&mut out, size);
    for r in 0..size {
        let _ = write!(out, "{:2} ", r + 1);
        for (c, &cell) in fleet.row(r).iter().enumerate() {
            let ch = match (cell, incoming.get(r, c)) {
                (FleetCell::Empty, Ok(ViewCell::Miss)) => ViewCell::Miss.symbol(),
                _ => cell.symbol(),
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Render the player's shot record with the computer's remaining ships shown.
pub fn render_revealed(view: &ViewGrid, fleet: &FleetGrid) -> String {
    let size = view.size();
    let mut out = String::new();
    header(&mut out, size);
    for r in 0..size {
        let _ = write!(out, "{:2} ", r + 1);
        for (c, &cell) in view.row(r).iter().enumerate() {
            let ch = match (cell, fleet.get(r, c)) {
                (ViewCell::Empty, Ok(FleetCell::Ship)) => FleetCell::Ship.symbol(),
                _ => cell.symbol(),
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Display the enemy board (top) and the player's board (bottom).
pub fn print_player_view<R: Rng>(engine: &GameEngine<R>, reveal: bool) {
    let enemy = if reveal {
        render_revealed(
            engine.view_grid(Side::Player),
            engine.fleet_grid(Side::Computer),
        )
    } else {
        render_view(engine.view_grid(Side::Player))
    };
    std::println!("\nEnemy board (your shots):");
    std::print!("{}", enemy);
    std::println!("\nYour board:");
    std::print!(
        "{}",
        render_fleet(
            engine.fleet_grid(Side::Player),
            engine.view_grid(Side::Computer)
        )
    );
}

/// One-line description of a finished game.
pub fn outcome_message(state: TurnState) -> Option<&'static str> {
    match state {
        TurnState::PlayerWon => Some("Congratulations! You sank the whole enemy fleet."),
        TurnState::ComputerWon => Some("You lost. The computer sank your whole fleet."),
        TurnState::Exhausted => Some("No shots left. Technical draw."),
        TurnState::PlayerTurn | TurnState::ComputerTurn => None,
    }
}
