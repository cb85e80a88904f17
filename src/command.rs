//! Text command parsing.
//!
//! A line is split at its first space; the part before it is the keyword.
//! `MOVE`, `LEFT`, `RIGHT`, `REPORT` and `EXIT` take no arguments. A keyword
//! starting with `PLACE` must match `PLACE <x>,<y>,<DIRECTION>` exactly, where
//! each comma may be followed by a single space and the direction name is
//! matched without regard to case.

use crate::geometry::Direction;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static PLACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PLACE ([0-9]+), ?([0-9]+), ?((?i:NORTH|EAST|SOUTH|WEST))$")
        .expect("PLACE pattern is a valid regex")
});

/// The six commands understood by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place,
    Move,
    Left,
    Right,
    Report,
    Exit,
}

/// Arguments carried by a `PLACE` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceArgs {
    pub x: i32,
    pub y: i32,
    pub facing: Direction,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognised command: {0:?}")]
    InvalidCommand(String),
    #[error("malformed PLACE command: {0:?}")]
    InvalidPlace(String),
}

/// Stateless line parser.
pub struct CommandParser;

impl CommandParser {
    /// Parse one line. Trailing whitespace is ignored; leading whitespace is not.
    ///
    /// # Errors
    ///
    /// [`ParseError::InvalidCommand`] for an unknown keyword and
    /// [`ParseError::InvalidPlace`] for a `PLACE` line with bad arguments.
    pub fn parse(line: &str) -> Result<(Command, Option<PlaceArgs>), ParseError> {
        let line = line.trim_end();
        let keyword = line.split(' ').next().unwrap_or_default();

        let command = match keyword {
            "MOVE" => Command::Move,
            "LEFT" => Command::Left,
            "RIGHT" => Command::Right,
            "REPORT" => Command::Report,
            "EXIT" => Command::Exit,
            k if k.starts_with("PLACE") => {
                return Ok((Command::Place, Some(Self::parse_place_args(line)?)));
            }
            _ => return Err(ParseError::InvalidCommand(line.to_string())),
        };
        Ok((command, None))
    }

    fn parse_place_args(line: &str) -> Result<PlaceArgs, ParseError> {
        let invalid = || ParseError::InvalidPlace(line.to_string());
        let caps = PLACE_PATTERN.captures(line).ok_or_else(invalid)?;

        let x = caps[1].parse::<i32>().map_err(|_| invalid())?;
        let y = caps[2].parse::<i32>().map_err(|_| invalid())?;
        let facing = Direction::from_name(&caps[3]).ok_or_else(invalid)?;
        Ok(PlaceArgs { x, y, facing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn place(x: i32, y: i32, facing: Direction) -> (Command, Option<PlaceArgs>) {
        (Command::Place, Some(PlaceArgs { x, y, facing }))
    }

    #[test]
    fn test_simple_commands() {
        let cases = [
            ("MOVE", Command::Move),
            ("MOVE ", Command::Move),
            ("MOVE\t", Command::Move),
            ("LEFT", Command::Left),
            ("RIGHT", Command::Right),
            ("REPORT", Command::Report),
            ("REPORT\r\n", Command::Report),
            ("EXIT", Command::Exit),
        ];
        for (line, expected) in cases {
            assert_eq!(CommandParser::parse(line), Ok((expected, None)), "{line:?}");
        }
    }

    #[test]
    fn test_text_after_keyword_is_ignored() {
        assert_eq!(CommandParser::parse("MOVE now"), Ok((Command::Move, None)));
    }

    #[test]
    fn test_place_variants() {
        assert_eq!(
            CommandParser::parse("PLACE 1,1,NORTH"),
            Ok(place(1, 1, Direction::North))
        );
        assert_eq!(
            CommandParser::parse("PLACE 1, 1, SOUTH"),
            Ok(place(1, 1, Direction::South))
        );
        assert_eq!(
            CommandParser::parse("PLACE 3,0,west"),
            Ok(place(3, 0, Direction::West))
        );
        assert_eq!(
            CommandParser::parse("PLACE 12,40,East  "),
            Ok(place(12, 40, Direction::East))
        );
    }

    #[test]
    fn test_unknown_keywords() {
        for line in [
            "INVALID",
            "MOVER",
            "    REPORT",
            "left",
            "right",
            "FOO",
            "",
            " PLACE 1,2,SOUTH",
        ] {
            assert_eq!(
                CommandParser::parse(line),
                Err(ParseError::InvalidCommand(line.trim_end().to_string())),
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_malformed_place() {
        for line in [
            "PLACE",
            "PLACE X,Y,NORTH",
            "PLACE, 0,0,UP",
            "PLACE 0,0,UP",
            "PLACE 0,0",
            "PLACE  0,0,NORTH",
            "PLACE 0,  0,NORTH",
            "PLACE -1,0,NORTH",
            "PLACE 0,0,NORTH,EXTRA",
            "PLACEMENT 0,0,NORTH",
            "PLACE 99999999999,0,NORTH",
        ] {
            assert_eq!(
                CommandParser::parse(line),
                Err(ParseError::InvalidPlace(line.to_string())),
                "{line:?}"
            );
        }
    }
}
