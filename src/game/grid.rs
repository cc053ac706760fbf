use std::fmt::{Debug, Formatter};
use std::ops::Index;

use crate::board::Side;
use crate::game::piece::Piece;
use crate::game::square::{Square, AREA, THRONE};

/// The piece layout of a board, without any of the game state around it.
/// Two grids are equal exactly when every square holds the same piece.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Grid {
    pieces: [Piece; AREA as usize],
}

/// Starting squares of the attackers, as `(col, row)`.
pub const INITIAL_ATTACKERS: [(u8, u8); 16] = [
    (0, 3),
    (0, 4),
    (0, 5),
    (1, 4),
    (8, 3),
    (8, 4),
    (8, 5),
    (7, 4),
    (3, 0),
    (4, 0),
    (5, 0),
    (4, 1),
    (3, 8),
    (4, 8),
    (5, 8),
    (4, 7),
];

/// Starting squares of the defenders, as `(col, row)`. The king starts on the throne.
pub const INITIAL_DEFENDERS: [(u8, u8); 8] = [(4, 5), (5, 4), (4, 3), (3, 4), (4, 6), (4, 2), (2, 4), (6, 4)];

impl Grid {
    pub fn empty() -> Grid {
        Grid {
            pieces: [Piece::Empty; AREA as usize],
        }
    }

    pub fn initial() -> Grid {
        let mut grid = Grid::empty();
        for (col, row) in INITIAL_ATTACKERS {
            grid.set(Square::new(col, row), Piece::Attacker);
        }
        for (col, row) in INITIAL_DEFENDERS {
            grid.set(Square::new(col, row), Piece::Defender);
        }
        grid.set(THRONE, Piece::King);
        grid
    }

    pub fn get(&self, square: Square) -> Piece {
        self.pieces[square.index() as usize]
    }

    pub fn set(&mut self, square: Square, piece: Piece) {
        self.pieces[square.index() as usize] = piece;
    }

    /// The squares holding pieces of `side` in square index order, including the king for the defenders.
    pub fn squares_of(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.get(sq).side() == Some(side))
    }

    pub fn count(&self, side: Side) -> usize {
        self.pieces.iter().filter(|p| p.side() == Some(side)).count()
    }

    pub fn king_position(&self) -> Option<Square> {
        Square::all().find(|&sq| self.get(sq) == Piece::King)
    }

    /// Count the neighbors of `square` that hold an attacker.
    pub fn attacker_neighbors(&self, square: Square) -> usize {
        square.neighbors().filter(|&n| self.get(n) == Piece::Attacker).count()
    }
}

impl Index<Square> for Grid {
    type Output = Piece;

    fn index(&self, square: Square) -> &Self::Output {
        &self.pieces[square.index() as usize]
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s: String = self.pieces.iter().map(|p| p.to_char()).collect();
        write!(f, "Grid({})", s)
    }
}
