use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_types::Move;

/// Produces the full legal move list for the side to move.
///
/// Pawn moves come first, then horizontal walls, then vertical walls, each
/// group in ascending square order. Search relies on this order being stable.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<Move>;
}
