use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::panic::{RefUnwindSafe, UnwindSafe};

use internal_iterator::InternalIterator;
use rand::Rng;

/// One of the two sides. The attackers always make the first move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Attacker,
    Defender,
}

/// The absolute outcome for a game. Tablut can't end in a draw.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Side),
}

/// Error returned when an operation needs a board that is not done yet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[error("the board is done")]
pub struct BoardDone;

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum PlayError {
    #[error("the board is done")]
    BoardDone,
    #[error("the move is not available on this board")]
    UnavailableMove,
}

impl From<BoardDone> for PlayError {
    fn from(_: BoardDone) -> Self {
        PlayError::BoardDone
    }
}

/// The main trait of this crate. Represents the state of a game.
/// Implementations are supposed to provide their own constructors to allow for customizable start positions.
pub trait Board: 'static + Debug + Display + Clone + Eq + Hash + Send + Sync + UnwindSafe + RefUnwindSafe
where
    for<'a> Self: BoardMoves<'a, Self>,
{
    /// The type used to represent moves on this board.
    type Move: Debug + Display + Eq + Hash + Copy + Send + Sync + UnwindSafe + RefUnwindSafe;

    /// Return the next side to make a move.
    /// If the board is done this is the side that did not play the last move for consistency.
    fn next_side(&self) -> Side;

    /// Return whether the given move is available.
    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone>;

    /// Pick a random move from the `available_moves` with a uniform distribution.
    /// Can be overridden for better performance.
    fn random_available_move(&self, rng: &mut impl Rng) -> Result<Self::Move, BoardDone> {
        let count = self.available_moves()?.count();
        let index = rng.gen_range(0..count);
        // SAFETY: unwrap is safe because the index is less than the length of the iterator.
        Ok(self.available_moves()?.nth(index).unwrap())
    }

    /// Play the move `mv`, modifying this board.
    fn play(&mut self, mv: Self::Move) -> Result<(), PlayError>;

    /// Clone this board, play `mv` on it and return the new board.
    fn clone_and_play(&self, mv: Self::Move) -> Result<Self, PlayError> {
        let mut next = self.clone();
        next.play(mv)?;
        Ok(next)
    }

    /// Play a random available move, see [Board::random_available_move].
    fn play_random_available_move(&mut self, rng: &mut impl Rng) -> Result<(), BoardDone> {
        let mv = self.random_available_move(rng)?;
        // SAFETY: the move was just picked from the available moves.
        self.play(mv).unwrap();
        Ok(())
    }

    /// The outcome of this board, is `None` when this games is not done yet.
    fn outcome(&self) -> Option<Outcome>;

    /// Whether this games is done.
    fn is_done(&self) -> bool {
        self.outcome().is_some()
    }

    /// Return `Err(BoardDone)` if this board is done.
    fn check_done(&self) -> Result<(), BoardDone> {
        match self.is_done() {
            true => Err(BoardDone),
            false => Ok(()),
        }
    }

    /// Check whether `mv` can be played on this board right now.
    fn check_can_play(&self, mv: Self::Move) -> Result<(), PlayError> {
        match self.is_available_move(mv)? {
            true => Ok(()),
            false => Err(PlayError::UnavailableMove),
        }
    }
}

/// A helper trait to get the correct lifetimes for [BoardMoves::available_moves].
/// This is a workaround to get generic associated types, See <https://github.com/rust-lang/rust/issues/44265>.
pub trait BoardMoves<'a, B: Board> {
    type AvailableMovesIterator: InternalIterator<Item = B::Move>;

    /// Return an iterator over available moves, is always nonempty. No guarantees are made about the ordering except
    /// that it stays consistent when the board is not modified.
    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone>;
}

/// A board that remembers the moves played on it, so they can be taken back again.
///
/// Searches use this to explore positions in place instead of cloning the board for every child.
pub trait UndoBoard: Board {
    /// Take back the last move played on this board. Does nothing if there is no move to take back.
    fn undo(&mut self);

    /// A copy of the current position whose history starts here, so moves played on it can be undone
    /// without ever reaching back into the history of `self`.
    fn snapshot(&self) -> Self;
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Attacker, Side::Defender];

    pub fn other(self) -> Side {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Side::Attacker => 0,
            Side::Defender => 1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Side::Attacker => 'A',
            Side::Defender => 'D',
        }
    }

    /// `1` if `self == pov`, `-1` otherwise.
    pub fn sign<V: num_traits::One + std::ops::Neg<Output = V>>(self, pov: Side) -> V {
        if self == pov {
            V::one()
        } else {
            -V::one()
        }
    }
}

impl Outcome {
    pub fn winner(self) -> Side {
        match self {
            Outcome::WonBy(side) => side,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Attacker => write!(f, "attacker"),
            Side::Defender => write!(f, "defender"),
        }
    }
}
