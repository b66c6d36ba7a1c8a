//! Coordinate text form: a square is a column letter (A-H, any case) and a
//! row digit; a move is two squares separated by whitespace.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParseMoveError, ParseSquareError};
use crate::types::{Move, Square};

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column(), self.row())
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(column), Some(row), None) => row
                .to_digit(10)
                .and_then(|row| Square::at(column, row as u8)),
            _ => None,
        };
        parsed.ok_or_else(|| ParseSquareError(s.to_string()))
    }
}

impl TryFrom<String> for Square {
    type Error = ParseSquareError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> String {
        sq.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [from, to] => Ok(Move::new(from.parse()?, to.parse()?)),
            _ => Err(ParseMoveError::Shape(s.to_string())),
        }
    }
}

impl Move {
    /// History form, e.g. `E2→E4`.
    pub fn arrow(&self) -> String {
        format!("{}→{}", self.from, self.to)
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
