//! Capture resolution, run once after every move around the destination square.
//!
//! A regular piece is captured when the moving piece and a hostile square sandwich it along a line.
//! The king is captured the same way everywhere except on or next to the throne,
//! where it has to be surrounded on all four sides by attackers, with the empty throne counting as one of them.
use crate::board::Side;
use crate::game::grid::Grid;
use crate::game::piece::Piece;
use crate::game::square::{Direction, Square, THRONE};

/// The pieces removed by a single move, indexed by the direction they were in relative to the moved piece.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Captures {
    squares: [Option<Square>; 4],
    king: bool,
}

impl Captures {
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares.iter().flatten().copied()
    }

    pub fn count(&self) -> usize {
        self.squares().count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn king_captured(&self) -> bool {
        self.king
    }
}

/// Remove every piece captured by `mover` moving a piece onto `dest`.
pub fn resolve_captures(grid: &mut Grid, dest: Square, mover: Side) -> Captures {
    let mut captures = Captures::default();

    for (i, dir) in Direction::ALL.into_iter().enumerate() {
        let neighbor = match dest.step(dir, 1) {
            Some(neighbor) => neighbor,
            None => continue,
        };

        let victim = grid[neighbor];
        if victim.side() != Some(mover.other()) {
            continue;
        }

        let captured = if victim == Piece::King && neighbor.is_throne_area() {
            king_surrounded(grid, neighbor)
        } else {
            neighbor.step(dir, 1).map_or(false, |far| is_hostile(grid, far, mover))
        };

        if captured {
            grid.set(neighbor, Piece::Empty);
            captures.squares[i] = Some(neighbor);
            captures.king |= victim == Piece::King;
        }
    }

    captures
}

/// Whether the king on `king` (the throne or a square next to it) is enclosed on all four sides.
/// Every neighbor has to be an attacker or the (then necessarily empty) throne.
pub fn king_surrounded(grid: &Grid, king: Square) -> bool {
    let enclosing = king
        .neighbors()
        .filter(|&n| grid[n] == Piece::Attacker || n == THRONE)
        .count();
    enclosing == 4
}

/// Whether `square` is hostile to the opponents of `mover`, ie. whether it can act as the far side of a capture.
///
/// * a square holding a piece of `mover` is hostile
/// * the empty throne is hostile to both sides
/// * the throne holding the king is hostile to defenders once exactly three attackers surround it
pub fn is_hostile(grid: &Grid, square: Square, mover: Side) -> bool {
    let piece = grid[square];

    if square == THRONE {
        match piece {
            Piece::Empty => return true,
            Piece::King if mover == Side::Attacker => return grid.attacker_neighbors(THRONE) == 3,
            _ => {}
        }
    }

    piece.side() == Some(mover)
}
