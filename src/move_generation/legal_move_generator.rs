//! Full legal move generation pipeline.
//!
//! Pawn destinations are legal by construction. Wall candidates are filtered
//! for overlap and crossing with set arithmetic, then probed for goal
//! reachability.

use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_types::Move;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_wall::generate_wall_moves;
use crate::move_generation::move_generator::MoveGenerator;

/// Wall placements available on an empty board, plus a few pawn steps.
const MOVE_LIST_CAPACITY: usize = 136;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move> {
        let mut moves = Vec::with_capacity(MOVE_LIST_CAPACITY);
        generate_pawn_moves(game_state, &mut moves);
        generate_wall_moves(game_state, &mut moves);
        moves
    }
}
