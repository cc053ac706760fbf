use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use nom::Finish;

use crate::game::square::{Direction, Square};

/// A rook move from one square to another on the same row or column.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("invalid move '{0}'")]
pub struct InvalidMove(pub String);

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("invalid square '{0}'")]
pub struct InvalidSquare(pub String);

impl Move {
    /// Build the move `from-to`, or `None` if the squares are equal or don't share a row or column.
    pub fn new(from: Square, to: Square) -> Option<Move> {
        from.direction_to(to).map(|_| Move { from, to })
    }

    /// Every rook move on the board, legal or not, ordered by `from` and then by `to` square index.
    pub fn all() -> impl Iterator<Item = Move> {
        Square::all().flat_map(|from| Square::all().filter_map(move |to| Move::new(from, to)))
    }

    pub(crate) fn new_unchecked(from: Square, to: Square) -> Move {
        debug_assert!(from.direction_to(to).is_some(), "{}-{} is not a rook move", from, to);
        Move { from, to }
    }

    pub fn from(self) -> Square {
        self.from
    }

    pub fn to(self) -> Square {
        self.to
    }

    pub fn direction(self) -> Direction {
        // SAFETY: the constructors ensure the squares are aligned and distinct
        self.from.direction_to(self.to).unwrap()
    }

    /// The shortest notation for this move, eg. `d1-3` for d1 to d3 and `e1-c` for e1 to c1.
    pub fn to_notation(self) -> String {
        if self.from.col() == self.to.col() {
            format!("{}-{}", self.from, self.to.row() + 1)
        } else {
            format!("{}-{}", self.from, (b'a' + self.to.col()) as char)
        }
    }

    /// Parse a move written as `d1-d3`, `d1-3` or `e1-c`.
    pub fn from_notation(s: &str) -> Result<Move, InvalidMove> {
        let err = || InvalidMove(s.to_owned());

        let (_, (from, dest)) = parse::mv(s).finish().map_err(|_| err())?;
        let to = match dest {
            parse::Dest::Full(to) => to,
            parse::Dest::Row(row) => Square::new(from.col(), row),
            parse::Dest::Col(col) => Square::new(col, from.row()),
        };

        Move::new(from, to).ok_or_else(err)
    }
}

mod parse {
    use nom::branch::alt;
    use nom::character::complete::{char, satisfy};
    use nom::combinator::{eof, map};
    use nom::sequence::{pair, preceded, terminated};
    use nom::IResult;

    use super::*;

    pub(super) enum Dest {
        Full(Square),
        Row(u8),
        Col(u8),
    }

    fn col(input: &str) -> IResult<&str, u8> {
        map(satisfy(|c| ('a'..='i').contains(&c)), |c| c as u8 - b'a')(input)
    }

    fn row(input: &str) -> IResult<&str, u8> {
        map(satisfy(|c| ('1'..='9').contains(&c)), |c| c as u8 - b'1')(input)
    }

    pub(super) fn square(input: &str) -> IResult<&str, Square> {
        map(pair(col, row), |(col, row)| Square::new(col, row))(input)
    }

    fn dest(input: &str) -> IResult<&str, Dest> {
        alt((map(square, Dest::Full), map(row, Dest::Row), map(col, Dest::Col)))(input)
    }

    pub(super) fn mv(input: &str) -> IResult<&str, (Square, Dest)> {
        terminated(pair(square, preceded(char('-'), dest)), eof)(input)
    }

    pub(super) fn single_square(input: &str) -> IResult<&str, Square> {
        terminated(square, eof)(input)
    }
}

impl FromStr for Move {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_notation(s)
    }
}

impl FromStr for Square {
    type Err = InvalidSquare;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::single_square(s)
            .finish()
            .map(|(_, square)| square)
            .map_err(|_| InvalidSquare(s.to_owned()))
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
