use std::hash::{Hash, Hasher};

use internal_iterator::InternalIterator;

use crate::board::{Board, BoardDone, BoardMoves, Outcome, PlayError, Side, UndoBoard};
use crate::game::capture::{resolve_captures, Captures};
use crate::game::grid::Grid;
use crate::game::history::{History, Snapshot};
use crate::game::movegen::{self, SideMoves};
use crate::game::mv::Move;
use crate::game::piece::Piece;
use crate::game::square::{Square, THRONE};

/// Who wins when a move recreates a piece layout that was already seen earlier in the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RepetitionRule {
    /// The side to move after the repeating move wins, so repeating a position loses.
    SideToMoveWins,
    /// The side that played the repeating move wins.
    MoverWins,
}

pub const DEFAULT_REPETITION_RULE: RepetitionRule = RepetitionRule::SideToMoveWins;

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[error("move limit {limit} is too small, {move_count} moves have already been played")]
pub struct MoveLimitError {
    pub limit: u32,
    pub move_count: u32,
}

/// A Tablut game in progress: the pieces on the 9x9 board, the side to move and the result if there is one.
///
/// Each board owns the history of positions it went through, used both to undo moves and to detect repetitions.
/// [Clone] copies that history too, use [TablutBoard::snapshot] to get a copy that starts a fresh history
/// at the current position instead.
///
/// Equality and hashing only look at the pieces, the side to move, the move count and the result,
/// not at the history or configuration.
#[derive(Clone)]
pub struct TablutBoard {
    pub(super) grid: Grid,
    pub(super) turn: Side,
    pub(super) move_count: u32,
    pub(super) winner: Option<Side>,
    pub(super) repeated: bool,

    move_limit: Option<u32>,
    repetition_rule: RepetitionRule,
    history: History,
}

impl Default for TablutBoard {
    fn default() -> Self {
        TablutBoard::from_grid(Grid::initial(), Side::Attacker)
    }
}

impl TablutBoard {
    /// The standard starting position.
    pub fn new() -> Self {
        Self::default()
    }

    /// A board without any pieces, attackers to move.
    /// Without a king this counts as won by the attackers until pieces are added and [TablutBoard::clear_undo] is called.
    pub fn empty() -> Self {
        TablutBoard::from_grid(Grid::empty(), Side::Attacker)
    }

    /// A board with the given layout and side to move, no moves played yet.
    /// The layout may already be decided, eg. when the king is missing or on the edge.
    pub fn from_grid(grid: Grid, turn: Side) -> Self {
        let root = Snapshot {
            grid: grid.clone(),
            turn,
            move_count: 0,
            winner: None,
            repeated: false,
        };

        let mut board = TablutBoard {
            grid,
            turn,
            move_count: 0,
            winner: None,
            repeated: false,
            move_limit: None,
            repetition_rule: DEFAULT_REPETITION_RULE,
            history: History::new(root),
        };
        board.clear_undo();
        board
    }

    /// Reset to the starting position, clearing the history and the move limit.
    pub fn init(&mut self) {
        let rule = self.repetition_rule;
        *self = TablutBoard::default();
        self.repetition_rule = rule;
    }

    /// Copy the current position and configuration, with a history that starts at this position.
    /// Moves played before can't be undone on the copy and don't count for repetitions.
    pub fn snapshot(&self) -> Self {
        TablutBoard {
            grid: self.grid.clone(),
            turn: self.turn,
            move_count: self.move_count,
            winner: self.winner,
            repeated: self.repeated,
            move_limit: self.move_limit,
            repetition_rule: self.repetition_rule,
            history: History::new(self.current_snapshot()),
        }
    }

    /// Forget the history and start a new one at the current position.
    /// Call this after setting up a position with [TablutBoard::put], the winner is recomputed for the new position.
    pub fn clear_undo(&mut self) {
        self.settle_winner();
        self.history = History::new(self.current_snapshot());
    }

    fn current_snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            turn: self.turn,
            move_count: self.move_count,
            winner: self.winner,
            repeated: self.repeated,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.grid = snapshot.grid;
        self.turn = snapshot.turn;
        self.move_count = snapshot.move_count;
        self.winner = snapshot.winner;
        self.repeated = snapshot.repeated;
    }

    pub fn get(&self, square: Square) -> Piece {
        self.grid[square]
    }

    /// Put `piece` on `square` without any checks or bookkeeping.
    pub fn put(&mut self, piece: Piece, square: Square) {
        self.grid.set(square, piece);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Whether the game was decided by a repeated position.
    pub fn repeated_position(&self) -> bool {
        self.repeated
    }

    /// The number of moves played and not undone.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// The number of moves that can still be undone on this board.
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn move_limit(&self) -> Option<u32> {
        self.move_limit
    }

    /// Limit both sides to `limit` moves each, a side that plays more loses.
    /// Fails without changing anything if `2 * limit` is less than the number of moves already played.
    pub fn set_move_limit(&mut self, limit: u32) -> Result<(), MoveLimitError> {
        if 2 * (limit as u64) < self.move_count as u64 {
            return Err(MoveLimitError {
                limit,
                move_count: self.move_count,
            });
        }
        self.move_limit = Some(limit);
        Ok(())
    }

    pub fn clear_move_limit(&mut self) {
        self.move_limit = None;
    }

    pub fn repetition_rule(&self) -> RepetitionRule {
        self.repetition_rule
    }

    pub fn set_repetition_rule(&mut self, rule: RepetitionRule) {
        self.repetition_rule = rule;
    }

    /// The number of moves `side` made so far, given that the attackers moved first.
    pub fn moves_made(&self, side: Side) -> u32 {
        let attacker = (self.move_count + 1) / 2;
        match side {
            Side::Attacker => attacker,
            Side::Defender => self.move_count - attacker,
        }
    }

    /// Whether `from` holds a piece of the side to move.
    pub fn is_legal_from(&self, from: Square) -> bool {
        self.grid[from].side() == Some(self.turn)
    }

    /// Whether `from-to` is a legal move for the side to move.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        if to == THRONE && self.grid[from] != Piece::King {
            return false;
        }
        self.is_legal_from(from) && movegen::is_unblocked_move(&self.grid, from, to)
    }

    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.is_legal(mv.from(), mv.to())
    }

    pub fn is_unblocked_move(&self, from: Square, to: Square) -> bool {
        movegen::is_unblocked_move(&self.grid, from, to)
    }

    /// Play `mv`, which must be legal, and return the pieces it captured.
    ///
    /// Panics if the move is not legal, use [Board::play] for a checked version.
    pub fn make_move(&mut self, mv: Move) -> Captures {
        assert!(self.is_legal_move(mv), "Illegal move {} on board\n{}", mv, self);

        let mover = self.turn;
        let piece = self.grid[mv.from()];
        self.grid.set(mv.to(), piece);
        self.grid.set(mv.from(), Piece::Empty);

        let captures = resolve_captures(&mut self.grid, mv.to(), mover);
        if captures.king_captured() {
            self.decide(Side::Attacker);
        }

        self.turn = mover.other();
        self.move_count += 1;
        self.update_winner(mover);

        let snapshot = self.current_snapshot();
        self.history.push(snapshot);
        captures
    }

    /// Take back the last move. Does nothing at the start of the history.
    pub fn undo(&mut self) {
        if let Some(prev) = self.history.pop().cloned() {
            self.restore(prev);
        }
    }

    /// All legal moves for `side`, whether or not it's their turn.
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        SideMoves::new(&self.grid, side).collect()
    }

    /// All legal moves for the piece on `from`.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        movegen::moves_from(&self.grid, from).collect()
    }

    pub fn has_move(&self, side: Side) -> bool {
        movegen::has_move(&self.grid, side)
    }

    pub fn king_position(&self) -> Option<Square> {
        self.grid.king_position()
    }

    /// The number of pieces of `side`, the king counts as a defender.
    pub fn num_pieces(&self, side: Side) -> usize {
        self.grid.count(side)
    }

    pub fn piece_locations(&self, side: Side) -> Vec<Square> {
        self.grid.squares_of(side).collect()
    }

    /// Set the winner unless the game has already been decided.
    fn decide(&mut self, winner: Side) {
        if self.winner.is_none() {
            self.winner = Some(winner);
        }
    }

    /// The winner according to the pieces alone, `mover` being the side that moved last.
    fn position_winner(&self, mover: Side) -> Option<Side> {
        match self.grid.king_position() {
            None => Some(Side::Attacker),
            Some(king) if king.is_edge() => Some(Side::Defender),
            Some(_) if !movegen::has_move(&self.grid, self.turn) => Some(mover),
            Some(_) => None,
        }
    }

    /// Recompute the winner of a position that was set up instead of reached by a move.
    /// A repetition result is kept since the history it depends on is gone.
    fn settle_winner(&mut self) {
        if self.repeated {
            return;
        }

        let mover = self.turn.other();
        self.winner = self.position_winner(mover);

        if let Some(limit) = self.move_limit {
            if self.moves_made(mover) > limit {
                self.decide(self.turn);
            }
        }
    }

    /// Check the end conditions after `mover` made a move, the first condition that holds decides the game.
    fn update_winner(&mut self, mover: Side) {
        if let Some(winner) = self.position_winner(mover) {
            self.decide(winner);
        }

        if self.winner.is_none() && self.history.has_seen(&self.grid) {
            self.repeated = true;
            self.winner = Some(match self.repetition_rule {
                RepetitionRule::SideToMoveWins => self.turn,
                RepetitionRule::MoverWins => mover,
            });
        }

        if let Some(limit) = self.move_limit {
            if self.moves_made(mover) > limit {
                self.decide(self.turn);
            }
        }
    }
}

impl Board for TablutBoard {
    type Move = Move;

    fn next_side(&self) -> Side {
        self.turn
    }

    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone> {
        self.check_done()?;
        Ok(self.is_legal_move(mv))
    }

    fn play(&mut self, mv: Self::Move) -> Result<(), PlayError> {
        self.check_can_play(mv)?;
        self.make_move(mv);
        Ok(())
    }

    fn outcome(&self) -> Option<Outcome> {
        self.winner.map(Outcome::WonBy)
    }
}

impl<'a> BoardMoves<'a, TablutBoard> for TablutBoard {
    type AvailableMovesIterator = SideMoves<'a>;

    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone> {
        self.check_done()?;
        Ok(SideMoves::new(&self.grid, self.turn))
    }
}

impl UndoBoard for TablutBoard {
    fn undo(&mut self) {
        TablutBoard::undo(self)
    }

    fn snapshot(&self) -> Self {
        TablutBoard::snapshot(self)
    }
}

impl PartialEq for TablutBoard {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
            && self.turn == other.turn
            && self.move_count == other.move_count
            && self.winner == other.winner
            && self.repeated == other.repeated
    }
}

impl Eq for TablutBoard {}

impl Hash for TablutBoard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
        self.turn.hash(state);
        self.move_count.hash(state);
        self.winner.hash(state);
        self.repeated.hash(state);
    }
}
