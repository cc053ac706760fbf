//! Legal move generation: every piece slides like a rook through empty squares.
//!
//! The throne is special: only the king may stop on it, other pieces may slide over it while it is empty,
//! and once it is occupied it blocks every piece.
use std::ops::ControlFlow;

use internal_iterator::InternalIterator;

use crate::board::Side;
use crate::game::grid::Grid;
use crate::game::mv::Move;
use crate::game::piece::Piece;
use crate::game::square::{Direction, Square, THRONE};

/// Iterator over the squares a piece standing on `from` can reach in a single direction.
#[derive(Debug, Clone)]
pub struct Slide<'a> {
    grid: &'a Grid,
    from: Square,
    dir: Direction,
    steps: u8,
    king: bool,
    done: bool,
}

impl<'a> Slide<'a> {
    pub fn new(grid: &'a Grid, from: Square, dir: Direction) -> Self {
        Slide {
            grid,
            from,
            dir,
            steps: 0,
            king: grid[from] == Piece::King,
            done: false,
        }
    }
}

impl Iterator for Slide<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        while !self.done {
            self.steps += 1;

            let square = match self.from.step(self.dir, self.steps) {
                Some(square) if self.grid[square].is_empty() => square,
                _ => {
                    self.done = true;
                    break;
                }
            };

            // the empty throne can be crossed by anyone but only the king can stop there
            if square == THRONE && !self.king {
                continue;
            }

            return Some(square);
        }

        None
    }
}

/// All legal moves for the piece on `from`, in north, east, south, west order.
pub fn moves_from(grid: &Grid, from: Square) -> impl Iterator<Item = Move> + '_ {
    Direction::ALL
        .into_iter()
        .flat_map(move |dir| Slide::new(grid, from, dir))
        .map(move |to| Move::new_unchecked(from, to))
}

/// Whether `from-to` is a straight line with every square after `from` empty.
pub fn is_unblocked_move(grid: &Grid, from: Square, to: Square) -> bool {
    let path = from.all_between(to);
    !path.is_empty() && path.iter().all(|&sq| grid[sq].is_empty())
}

/// Internal iterator over all legal moves of `side`, ignoring whose turn it is.
///
/// Moves are yielded ordered by square index of the moving piece, then by direction.
#[derive(Debug, Clone)]
pub struct SideMoves<'a> {
    grid: &'a Grid,
    side: Side,
}

impl<'a> SideMoves<'a> {
    pub fn new(grid: &'a Grid, side: Side) -> Self {
        SideMoves { grid, side }
    }
}

impl InternalIterator for SideMoves<'_> {
    type Item = Move;

    fn try_for_each<R, F: FnMut(Self::Item) -> ControlFlow<R>>(self, mut f: F) -> ControlFlow<R> {
        for from in self.grid.squares_of(self.side) {
            for mv in moves_from(self.grid, from) {
                f(mv)?;
            }
        }

        ControlFlow::Continue(())
    }
}

/// Whether `side` has at least one legal move.
pub fn has_move(grid: &Grid, side: Side) -> bool {
    grid.squares_of(side).any(|from| moves_from(grid, from).next().is_some())
}
