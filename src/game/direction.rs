use ratatui::layout::Position;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// Return the position one cell away from `pos` in this direction, or
    /// `None` if that would leave the coordinate space.  No other bounds are
    /// checked.
    pub(crate) fn advance(self, pos: Position) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::Up => y = y.checked_sub(1)?,
            Direction::Left => x = x.checked_sub(1)?,
            Direction::Down => y = y.checked_add(1)?,
            Direction::Right => x = x.checked_add(1)?,
        }
        Some(Position { x, y })
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parse a line of player input.  Surrounding whitespace and case are
    /// ignored.
    fn from_str(s: &str) -> Result<Direction, ParseDirectionError> {
        match s.trim().to_lowercase().as_str() {
            "w" => Ok(Direction::Up),
            "a" => Ok(Direction::Left),
            "s" => Ok(Direction::Down),
            "d" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.trim().to_owned())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid move: {0:?}")]
pub(crate) struct ParseDirectionError(String);
