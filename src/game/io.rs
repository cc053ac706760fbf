use std::fmt::{Debug, Display, Formatter};

use nom::Finish;

use crate::board::Side;
use crate::game::board::TablutBoard;
use crate::game::grid::Grid;
use crate::game::piece::Piece;
use crate::game::square::{Square, SIZE};

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("invalid board layout, failed to parse at '{rest}'")]
pub struct InvalidLayout {
    pub rest: String,
}

mod parse {
    use nom::character::complete::{anychar, multispace0};
    use nom::combinator::{eof, map_opt};
    use nom::multi::count;
    use nom::sequence::{pair, preceded, terminated};
    use nom::IResult;

    use super::*;

    fn piece(input: &str) -> IResult<&str, Piece> {
        map_opt(anychar, Piece::from_char)(input)
    }

    pub(super) fn layout(input: &str) -> IResult<&str, Vec<Piece>> {
        let area = (SIZE * SIZE) as usize;
        terminated(count(preceded(multispace0, piece), area), pair(multispace0, eof))(input)
    }
}

fn side_char(side: Side) -> char {
    match side {
        Side::Attacker => Piece::Attacker.to_char(),
        Side::Defender => Piece::Defender.to_char(),
    }
}

impl TablutBoard {
    /// Build a board from a textual layout, written as 9 rows of 9 piece characters from row 9 down to row 1,
    /// using `-` for empty squares, `B` for attackers, `W` for defenders and `K` for the king.
    /// Whitespace between pieces is ignored.
    pub fn from_layout(layout: &str, turn: Side) -> Result<TablutBoard, InvalidLayout> {
        let (_, pieces) = parse::layout(layout).finish().map_err(|e| InvalidLayout {
            rest: e.input.to_owned(),
        })?;

        let mut grid = Grid::empty();
        for (i, piece) in pieces.into_iter().enumerate() {
            let col = (i % SIZE as usize) as u8;
            let row = SIZE - 1 - (i / SIZE as usize) as u8;
            grid.set(Square::new(col, row), piece);
        }

        Ok(TablutBoard::from_grid(grid, turn))
    }

    /// The side to move followed by the pieces in square index order, one character each.
    pub fn encoded(&self) -> String {
        std::iter::once(side_char(self.turn))
            .chain(Square::all().map(|sq| self.grid[sq].to_char()))
            .collect()
    }
}

impl Debug for TablutBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TablutBoard")
            .field("grid", &self.grid)
            .field("turn", &self.turn)
            .field("move_count", &self.move_count)
            .field("winner", &self.winner)
            .field("repeated", &self.repeated)
            .finish()
    }
}

/// Renders the board with row 9 at the top. The alternate form `{:#}` leaves out the coordinates.
impl Display for TablutBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let coordinates = !f.alternate();

        for row in (0..SIZE).rev() {
            if coordinates {
                write!(f, "{:2}", row + 1)?;
            } else {
                write!(f, "  ")?;
            }
            for col in 0..SIZE {
                write!(f, " {}", self.grid[Square::new(col, row)])?;
            }
            writeln!(f)?;
        }

        if coordinates {
            write!(f, "  ")?;
            for col in 0..SIZE {
                write!(f, " {}", (b'a' + col) as char)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
