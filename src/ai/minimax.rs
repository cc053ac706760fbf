use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::Neg;
use std::time::{Duration, Instant};

use internal_iterator::InternalIterator;

use crate::ai::Bot;
use crate::board::{Board, BoardDone, Side, UndoBoard};

/// The search depth used when nothing else is specified.
pub const DEFAULT_DEPTH: u32 = 3;

/// A reasonable time budget for a single move, searches only use it when asked to through [SearchLimits::time].
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(20);

/// How often (in nodes) the deadline is checked.
const DEADLINE_CHECK_INTERVAL: u64 = 256;

pub trait Heuristic<B: Board> {
    /// The type used to represent the heuristic value of a board.
    type V: Copy + Ord + Neg<Output = Self::V> + Debug;

    /// Return the heuristic value for the given board from the the next side POV.
    /// `length` is the number of moves played since the board the search was started on.
    /// Can be used to prefer faster wins or slower losses.
    fn value(&self, board: &B, length: u32) -> Self::V;
}

/// The limits of a single search. The depth is always respected,
/// the optional time budget additionally stops the search early once it runs out.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SearchLimits {
    pub depth: u32,
    pub time: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            depth: DEFAULT_DEPTH,
            time: None,
        }
    }
}

impl SearchLimits {
    pub fn depth(depth: u32) -> Self {
        SearchLimits { depth, time: None }
    }

    pub fn with_time(self, time: Duration) -> Self {
        SearchLimits {
            time: Some(time),
            ..self
        }
    }
}

#[derive(Debug)]
pub struct MinimaxResult<V, M> {
    /// The value of this board.
    pub value: V,

    /// The best move to play, `None` is the board is done or the search depth was 0.
    pub best_move: Option<M>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SearchResult<V, M> {
    /// The value of the board from the POV of the defender, positive values favor the defender.
    pub value: V,
    /// The best move for the side to move.
    pub best_move: M,
    /// The depth of the deepest fully completed search iteration.
    pub depth: u32,
    /// The total number of nodes visited, including those of aborted iterations.
    pub nodes: u64,
}

/// The search ran out of time.
#[derive(Debug, Copy, Clone)]
struct Aborted;

/// Search for the best move for the side to move with alpha-beta minimax,
/// searching up to `limits.depth` moves deep.
///
/// The search runs on [UndoBoard::snapshot] of `board`, every move played during the search is undone again.
/// If a time budget is set the search deepens iteratively starting from depth 1 and stops once the time runs out,
/// returning the result of the deepest iteration that completed. The first iteration always completes.
///
/// The search is deterministic: if multiple moves have the same value, the first one in move order is picked.
///
/// Fails with [BoardDone] if the board is done or the side to move has no available moves.
pub fn find_move<B: UndoBoard, H: Heuristic<B>>(
    board: &B,
    heuristic: &H,
    limits: SearchLimits,
) -> Result<SearchResult<H::V, B::Move>, BoardDone> {
    board.check_done()?;
    assert!(limits.depth > 0, "requires depth>0 to find the best move");

    let mut search_board = board.snapshot();
    let deadline = limits.time.map(|time| Instant::now() + time);
    let pov_sign = |v: H::V| match board.next_side() {
        Side::Defender => v,
        Side::Attacker => -v,
    };

    let mut searcher = Searcher {
        heuristic,
        deadline: None,
        nodes: 0,
    };

    let first_depth = if deadline.is_some() { 1 } else { limits.depth };
    let mut best = None;

    for depth in first_depth..=limits.depth {
        if searcher.deadline.map_or(false, |deadline| Instant::now() >= deadline) {
            break;
        }

        let result = searcher.negamax(&mut search_board, 0, depth, None, None, FirstBestMoveSelector);

        match result {
            Ok(MinimaxResult {
                value,
                best_move: Some(best_move),
            }) => best = Some((value, best_move, depth)),
            // the side to move has no moves, even though the board was not marked as done
            Ok(MinimaxResult { best_move: None, .. }) => return Err(BoardDone),
            Err(Aborted) => break,
        }

        searcher.deadline = deadline;
    }

    debug_assert_eq!(&search_board, board, "search did not undo all moves");

    // SAFETY: the first iteration runs without a deadline so it always completes
    let (value, best_move, depth) = best.unwrap();
    Ok(SearchResult {
        value: pov_sign(value),
        best_move,
        depth,
        nodes: searcher.nodes,
    })
}

/// Evaluate the board using minimax with the given heuristic up to the given depth.
/// Only returns the value without selecting a move. The returned value is from the POV of `board.next_side()`.
pub fn minimax_value<B: UndoBoard, H: Heuristic<B>>(board: &B, heuristic: &H, depth: u32) -> H::V {
    let mut searcher = Searcher {
        heuristic,
        deadline: None,
        nodes: 0,
    };

    let mut search_board = board.snapshot();
    match searcher.negamax(&mut search_board, 0, depth, None, None, NoMoveSelector) {
        Ok(result) => result.value,
        Err(Aborted) => unreachable!("searches without deadline can't be aborted"),
    }
}

/// This is a trait so negamax is instantiated twice,
/// once for the top-level search with move selection and once for deeper nodes without any moves.
trait MoveSelector {
    const SELECTS: bool;
}

/// Don't keep any move.
struct NoMoveSelector;

impl MoveSelector for NoMoveSelector {
    const SELECTS: bool = false;
}

/// Keep the first move that strictly improves on the best value so far.
struct FirstBestMoveSelector;

impl MoveSelector for FirstBestMoveSelector {
    const SELECTS: bool = true;
}

struct Searcher<'h, H> {
    heuristic: &'h H,
    deadline: Option<Instant>,
    nodes: u64,
}

impl<H> Searcher<'_, H> {
    fn check_deadline(&self) -> Result<(), Aborted> {
        match self.deadline {
            Some(deadline) if self.nodes % DEADLINE_CHECK_INTERVAL == 0 && Instant::now() >= deadline => Err(Aborted),
            _ => Ok(()),
        }
    }

    /// The core minimax implementation.
    /// Alpha-Beta Negamax, implementation based on
    /// <https://en.wikipedia.org/wiki/Negamax#Negamax_with_alpha_beta_pruning>
    ///
    /// Every move is undone before returning, also when the search is aborted.
    fn negamax<B: UndoBoard, S: MoveSelector>(
        &mut self,
        board: &mut B,
        length: u32,
        depth_left: u32,
        alpha: Option<H::V>,
        beta: Option<H::V>,
        _: S,
    ) -> Result<MinimaxResult<H::V, B::Move>, Aborted>
    where
        H: Heuristic<B>,
    {
        self.nodes += 1;
        self.check_deadline()?;

        let moves: Vec<B::Move> = match board.available_moves() {
            Ok(moves) if depth_left > 0 => moves.collect(),
            _ => Vec::new(),
        };

        if moves.is_empty() {
            return Ok(MinimaxResult {
                value: self.heuristic.value(board, length),
                best_move: None,
            });
        }

        let mut best_value: Option<H::V> = None;
        let mut best_move = None;
        let mut alpha = alpha;

        for mv in moves {
            // SAFETY: the move was just generated on this exact board
            board.play(mv).unwrap();
            let child = self.negamax(
                board,
                length + 1,
                depth_left - 1,
                beta.map(Neg::neg),
                alpha.map(Neg::neg),
                NoMoveSelector,
            );
            board.undo();
            let child_value = -child?.value;

            if best_value.map_or(true, |best| child_value > best) {
                best_value = Some(child_value);
                if S::SELECTS {
                    best_move = Some(mv);
                }
            }

            // SAFETY: best_value was set above
            let best = best_value.unwrap();
            alpha = Some(alpha.map_or(best, |alpha| alpha.max(best)));

            if beta.map_or(false, |beta| best >= beta) {
                break;
            }
        }

        Ok(MinimaxResult {
            // SAFETY: there was at least one move
            value: best_value.unwrap(),
            best_move,
        })
    }
}

pub struct MiniMaxBot<B: Board, H: Heuristic<B>> {
    limits: SearchLimits,
    heuristic: H,
    ph: PhantomData<B>,
}

impl<B: Board, H: Heuristic<B> + Debug> Debug for MiniMaxBot<B, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MiniMaxBot {{ limits: {:?}, heuristic: {:?} }}",
            self.limits, self.heuristic
        )
    }
}

impl<B: Board, H: Heuristic<B>> MiniMaxBot<B, H> {
    pub fn new(limits: SearchLimits, heuristic: H) -> Self {
        assert!(limits.depth > 0, "requires depth>0 to find the best move");
        MiniMaxBot {
            limits,
            heuristic,
            ph: PhantomData,
        }
    }
}

impl<B: UndoBoard, H: Heuristic<B> + Debug> Bot<B> for MiniMaxBot<B, H> {
    fn select_move(&mut self, board: &B) -> Result<B::Move, BoardDone> {
        find_move(board, &self.heuristic, self.limits).map(|result| result.best_move)
    }
}
