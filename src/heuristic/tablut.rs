use crate::ai::minimax::Heuristic;
use crate::board::Side;
use crate::game::TablutBoard;

/// The value of a won board, always larger than any material difference.
/// Wins further away in the search are worth slightly less so the shortest win gets picked.
pub const WIN_VALUE: i32 = 1_000;

/// The deepest search for which won boards still outscore every material value.
pub const MAX_SEARCH_DEPTH: u32 = 512;

/// Counts pieces: the number of defenders (including the king) minus the number of attackers,
/// from the POV of the side to move.
#[derive(Debug, Default, Copy, Clone)]
pub struct MaterialHeuristic;

impl MaterialHeuristic {
    /// The material difference from the POV of the defender.
    pub fn material(board: &TablutBoard) -> i32 {
        board.num_pieces(Side::Defender) as i32 - board.num_pieces(Side::Attacker) as i32
    }
}

impl Heuristic<TablutBoard> for MaterialHeuristic {
    type V = i32;

    fn value(&self, board: &TablutBoard, length: u32) -> Self::V {
        let pov = board.turn();

        if let Some(winner) = board.winner() {
            debug_assert!(length <= MAX_SEARCH_DEPTH);
            return winner.sign::<i32>(pov) * (WIN_VALUE - length as i32);
        }

        Side::Defender.sign::<i32>(pov) * Self::material(board)
    }
}
