//! Utilities to generate a `Board` in a random state.
use rand::Rng;

use crate::board::{Board, BoardDone, Outcome};

/// Play the given moves, starting from `start`.
pub fn board_with_moves<B: Board>(start: B, moves: &[B::Move]) -> B {
    let mut curr = start;
    for &mv in moves {
        assert!(!curr.is_done(), "Board already done, playing {} on {}", mv, curr);
        assert_eq!(
            curr.is_available_move(mv),
            Ok(true),
            "Move not available, playing {} on {}",
            mv,
            curr
        );
        // SAFETY: the move was just checked to be available
        curr.play(mv).unwrap();
    }
    curr
}

/// Generate a `Board` by playing `n` random moves on `start`.
/// Retries from scratch whenever the game ends before `n` moves are played.
pub fn random_board_with_moves<B: Board>(start: &B, n: u32, rng: &mut impl Rng) -> B {
    'new_try: loop {
        let mut board = start.clone();
        for _ in 0..n {
            match board.play_random_available_move(rng) {
                Ok(()) => {}
                Err(BoardDone) => continue 'new_try,
            }
        }
        return board;
    }
}

/// Generate a random `Board` with a specific `Outcome`.
pub fn random_board_with_outcome<B: Board>(start: &B, outcome: Outcome, rng: &mut impl Rng) -> B {
    loop {
        let mut board = start.clone();
        while let Ok(()) = board.play_random_available_move(rng) {}

        if board.outcome() == Some(outcome) {
            return board;
        }
    }
}

/// Iterator over randomly generated boards.
/// Yields all intermediate boards, including the start and end of each simulation.
#[derive(Debug, Clone)]
pub struct RandomBoardIterator<B: Board, R: Rng> {
    start: B,
    rng: R,
    curr: B,
}

impl<B: Board, R: Rng> RandomBoardIterator<B, R> {
    pub fn new(start: B, rng: R) -> Result<Self, BoardDone> {
        start.check_done()?;
        Ok(RandomBoardIterator {
            start: start.clone(),
            rng,
            curr: start,
        })
    }
}

impl<B: Board, R: Rng> Iterator for RandomBoardIterator<B, R> {
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.curr.clone();

        match self.curr.play_random_available_move(&mut self.rng) {
            Ok(()) => {}
            Err(BoardDone) => {
                self.curr = self.start.clone();
            }
        }

        Some(result)
    }
}
