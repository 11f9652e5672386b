//! User-facing coordinate text.
//!
//! Two formats are accepted: a column letter followed by a 1-based row
//! (`A5`, `c3`), or two 1-based numbers `row col` separated by spaces or a
//! comma (`5 1`, `5,1`). Both are converted to 0-based `(row, col)`.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::GameError;

/// Parse `input` into an in-bounds `(row, col)` for a `size × size` grid.
pub fn parse_coord(input: &str, size: usize) -> Result<(usize, usize), GameError> {
    let s = input.trim().to_ascii_uppercase();
    if s.is_empty() {
        return Err(GameError::MalformedCoordinate);
    }

    let mut chars = s.chars();
    if let Some(col_ch) = chars.next().filter(char::is_ascii_alphabetic) {
        let row_part = chars.as_str().trim();
        if row_part.is_empty() || !row_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GameError::MalformedCoordinate);
        }
        let col = (col_ch as u8 - b'A') as usize;
        let row = parse_one_based(row_part)?;
        return checked(row, col, size);
    }

    let parts: Vec<&str> = s
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [r, c] => {
            let row = parse_one_based(r)?;
            let col = parse_one_based(c)?;
            checked(row, col, size)
        }
        _ => Err(GameError::MalformedCoordinate),
    }
}

fn parse_one_based(part: &str) -> Result<usize, GameError> {
    match part.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(GameError::MalformedCoordinate),
    }
}

fn checked(row: usize, col: usize, size: usize) -> Result<(usize, usize), GameError> {
    if row < size && col < size {
        Ok((row, col))
    } else {
        Err(GameError::InvalidCoordinate { row, col })
    }
}

/// Format a 0-based coordinate as `A5`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    alloc::format!("{}{}", column_label(col), row + 1)
}

/// Letter for a 0-based column.
pub fn column_label(col: usize) -> char {
    (b'A' + (col % 26) as u8) as char
}

/// A line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reset,
    Reveal,
    Fire { row: usize, col: usize },
}

/// Parse one line of input: a quit/reset/reveal keyword or a coordinate.
pub fn parse_command(input: &str, size: usize) -> Result<Command, GameError> {
    let word = input.trim().to_ascii_lowercase();
    match word.as_str() {
        "q" | "salir" | "exit" => Ok(Command::Quit),
        "reset" | "reiniciar" => Ok(Command::Reset),
        "reveal" | "mostrar" => Ok(Command::Reveal),
        _ => parse_coord(input, size).map(|(row, col)| Command::Fire { row, col }),
    }
}
