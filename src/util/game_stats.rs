//! Utilities for collecting game statistics and testing game and bot implementations.
use internal_iterator::InternalIterator;

use crate::ai::Bot;
use crate::board::{Board, UndoBoard};

/// The number of legal move sequences of length `depth`, see <https://www.chessprogramming.org/Perft>.
///
/// Games that end early don't contribute. Whether a game ends can depend on the positions that came before,
/// including those played before `board`, so this walks the tree with play and undo on a full copy
/// instead of caching positions.
pub fn perft<B: UndoBoard>(board: &B, depth: u32) -> u64 {
    let mut board = board.clone();
    perft_recurse(&mut board, depth)
}

fn perft_recurse<B: UndoBoard>(board: &mut B, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves: Vec<B::Move> = match board.available_moves() {
        Ok(moves) => moves.collect(),
        Err(_) => return 0,
    };

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut p = 0;
    for mv in moves {
        // SAFETY: the move was just generated on this board
        board.play(mv).unwrap();
        p += perft_recurse(board, depth - 1);
        board.undo();
    }
    p
}

/// Structure returned by [`average_game_stats`].
#[derive(Debug)]
pub struct GameStats {
    pub game_length: f32,
    pub available_moves: f32,
}

/// Return `GameStats` estimated from `n` games starting from `start` played by `bot`.
pub fn average_game_stats<B: Board>(start: &B, mut bot: impl Bot<B>, n: u64) -> GameStats {
    let mut total_moves = 0;
    let mut total_positions = 0;

    for _ in 0..n {
        let mut board = start.clone();
        loop {
            total_moves += match board.available_moves() {
                Ok(moves) => moves.count(),
                Err(_) => break,
            };
            total_positions += 1;

            // SAFETY: the board is not done, and bots only return available moves
            let mv = bot.select_move(&board).unwrap();
            board.play(mv).unwrap();
        }
    }

    GameStats {
        game_length: total_positions as f32 / n as f32,
        available_moves: total_moves as f32 / total_positions as f32,
    }
}
