#![warn(missing_debug_implementations)]

//! A rule engine and minimax search for [Tablut](https://en.wikipedia.org/wiki/Tafl_games#Tablut),
//! the asymmetric Scandinavian board game where the defenders try to get their king to the edge of the board
//! and the attackers try to capture him first.
//!
//! # Features
//!
//! * [TablutBoard](crate::game::TablutBoard) implements the full rules: rook-like movement, the throne,
//!     sandwich captures with hostile squares, capturing the king on and next to the throne,
//!     repetitions and an optional move limit. Every board keeps its own history so moves can be undone.
//! * The generic [Board](crate::board::Board) trait, so the algorithms in this crate don't depend on the rules.
//! * Game-playing algorithms:
//!     * [RandomBot](crate::ai::simple::RandomBot), which simply picks a random move.
//!     * [MiniMaxBot](crate::ai::minimax::MiniMaxBot),
//!         which picks the best move as evaluated by a customizable heuristic up to some depth
//!         and optionally within a time budget. (implemented as alpha-beta negamax with play/undo).
//! * Random board generation functions, see [board_gen](crate::util::board_gen).
//! * A bot vs bot game runner to compare playing strength, see [bot_game](crate::util::bot_game).
//! * Simple game statistics (perft, random game length) which can be used to test the rules.
//!
//! # Examples
//!
//! ## List the available moves on a board and play a random one.
//!
//! ```
//! # use tablut::game::TablutBoard;
//! # use tablut::board::{BoardMoves, Board};
//! # use internal_iterator::InternalIterator;
//! # let mut rng = rand::thread_rng();
//! let mut board = TablutBoard::default();
//! println!("{}", board);
//!
//! board.available_moves().unwrap().for_each(|mv| {
//!     println!("{}", mv)
//! });
//!
//! let mv = board.random_available_move(&mut rng).unwrap();
//! println!("Picked move {}", mv);
//! board.play(mv).unwrap();
//! println!("{}", board);
//! ```
//!
//! ## Get the best move according to minimax
//!
//! ```
//! # use tablut::ai::minimax::{find_move, SearchLimits};
//! # use tablut::game::TablutBoard;
//! # use tablut::heuristic::tablut::MaterialHeuristic;
//! let board = TablutBoard::default();
//! let result = find_move(&board, &MaterialHeuristic, SearchLimits::depth(2)).unwrap();
//! println!("{} with value {}", result.best_move, result.value);
//! ```

pub mod board;

pub mod ai;

pub mod game;

pub mod heuristic;

pub mod util;
