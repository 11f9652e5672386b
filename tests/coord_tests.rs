use aviones::{coord_to_string, parse_command, parse_coord, Command, GameError};

#[test]
fn test_letter_number_format() {
    assert_eq!(parse_coord("A5", 8), Ok((4, 0)));
    assert_eq!(parse_coord("a5", 8), Ok((4, 0)));
    assert_eq!(parse_coord("  h8 ", 8), Ok((7, 7)));
    assert_eq!(parse_coord("C 3", 8), Ok((2, 2)));
}

#[test]
fn test_row_col_format() {
    assert_eq!(parse_coord("5 1", 8), Ok((4, 0)));
    assert_eq!(parse_coord("5,1", 8), Ok((4, 0)));
    assert_eq!(parse_coord("1   8", 8), Ok((0, 7)));
}

#[test]
fn test_out_of_range_rejected() {
    assert!(parse_coord("Z9", 8).is_err());
    assert!(parse_coord("9 9", 8).is_err());
    assert_eq!(
        parse_coord("I1", 8),
        Err(GameError::InvalidCoordinate { row: 0, col: 8 })
    );
    assert_eq!(
        parse_coord("A9", 8),
        Err(GameError::InvalidCoordinate { row: 8, col: 0 })
    );
}

#[test]
fn test_malformed_rejected() {
    for input in ["", "   ", "A", "A0", "0 1", "5", "1 2 3", "AB", "A-1", "x y", "5a"] {
        assert_eq!(
            parse_coord(input, 8),
            Err(GameError::MalformedCoordinate),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_coord_to_string() {
    assert_eq!(coord_to_string(4, 0), "A5");
    assert_eq!(coord_to_string(0, 7), "H1");
    assert_eq!(parse_coord(&coord_to_string(6, 3), 8), Ok((6, 3)));
}

#[test]
fn test_commands() {
    for quit in ["q", "Q", "salir", "exit", " EXIT "] {
        assert_eq!(parse_command(quit, 8), Ok(Command::Quit));
    }
    assert_eq!(parse_command("reset", 8), Ok(Command::Reset));
    assert_eq!(parse_command("reiniciar", 8), Ok(Command::Reset));
    assert_eq!(parse_command("reveal", 8), Ok(Command::Reveal));
    assert_eq!(
        parse_command("b2", 8),
        Ok(Command::Fire { row: 1, col: 1 })
    );
    assert!(parse_command("quit now", 8).is_err());
}
