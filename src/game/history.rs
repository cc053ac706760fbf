use std::collections::HashMap;

use crate::board::Side;
use crate::game::grid::Grid;

/// The full game state after some move, everything needed to restore it on undo.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Snapshot {
    pub grid: Grid,
    pub turn: Side,
    pub move_count: u32,
    pub winner: Option<Side>,
    pub repeated: bool,
}

/// The positions a single board went through: a stack of snapshots for undo
/// and the multiset of piece layouts seen so far for repetition detection.
///
/// The bottom of the stack is the root position the history started from, it is never popped.
#[derive(Debug, Clone)]
pub struct History {
    stack: Vec<Snapshot>,
    seen: HashMap<Grid, u32>,
}

impl History {
    pub fn new(root: Snapshot) -> Self {
        let mut history = History {
            stack: vec![],
            seen: HashMap::new(),
        };
        history.push(root);
        history
    }

    /// Record the position reached after a move.
    pub fn push(&mut self, snapshot: Snapshot) {
        *self.seen.entry(snapshot.grid.clone()).or_insert(0) += 1;
        self.stack.push(snapshot);
    }

    /// Forget the most recent position and return the one before it,
    /// or `None` if only the root is left, in which case nothing changes.
    pub fn pop(&mut self) -> Option<&Snapshot> {
        if self.stack.len() <= 1 {
            return None;
        }

        // SAFETY: the stack contains at least two snapshots
        let top = self.stack.pop().unwrap();
        let count = self.seen.get(&top.grid).copied().unwrap_or(0);
        if count > 1 {
            self.seen.insert(top.grid, count - 1);
        } else {
            self.seen.remove(&top.grid);
        }

        self.stack.last()
    }

    /// Whether this layout has been reached before, at any point still on the stack.
    pub fn has_seen(&self, grid: &Grid) -> bool {
        self.seen.contains_key(grid)
    }

    /// The number of moves that can still be undone.
    pub fn undo_depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// The number of distinct layouts recorded.
    pub fn distinct_positions(&self) -> usize {
        self.seen.len()
    }
}
