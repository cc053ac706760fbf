//! Bots that don't search: [RandomBot] and [FirstMoveBot].
use std::fmt::{Debug, Formatter};

use internal_iterator::InternalIterator;
use rand::Rng;

use crate::ai::Bot;
use crate::board::{Board, BoardDone, BoardMoves};

/// Bot that chooses moves randomly uniformly among possible moves.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<B: Board, R: Rng> Bot<B> for RandomBot<R> {
    fn select_move(&mut self, board: &B) -> Result<B::Move, BoardDone> {
        board.random_available_move(&mut self.rng)
    }
}

/// Bot that always plays the first available move, useful as a fully predictable opponent.
#[derive(Debug, Default, Copy, Clone)]
pub struct FirstMoveBot;

impl<B: Board> Bot<B> for FirstMoveBot {
    fn select_move(&mut self, board: &B) -> Result<B::Move, BoardDone> {
        // SAFETY: a board that is not done always has an available move
        Ok(board.available_moves()?.next().unwrap())
    }
}
