use crate::game_state::board_set::BoardSet;
use crate::game_state::board_tables::tables;
use crate::game_state::{game_state::GameState, quoridor_types::*};
use crate::move_generation::legal_move_checks::has_wall_between;

/// Destination squares for the side to move's pawn.
pub fn pawn_destinations(game_state: &GameState) -> BoardSet {
    let us = game_state.side_to_move;
    let us_sq = game_state.pawn_of(us);
    let them_sq = game_state.pawn_of(!us);
    let steps = tables().pawn_steps[us_sq as usize];

    let pawns = BoardSet::from_square(us_sq) | BoardSet::from_square(them_sq);
    let mut destinations = BoardSet::EMPTY;

    // Jumps over an adjacent, unseparated opponent.
    if steps.contains(them_sq) && !has_wall_between(game_state, us_sq, them_sq) {
        if let Some(dir) = Direction::between(us_sq, them_sq) {
            match step(them_sq, dir) {
                Some(jump) if !has_wall_between(game_state, them_sq, jump) => {
                    destinations.insert(jump);
                }
                _ => {
                    for side in dir.perpendicular() {
                        if let Some(diagonal) = step(them_sq, side) {
                            if !has_wall_between(game_state, them_sq, diagonal) {
                                destinations.insert(diagonal);
                            }
                        }
                    }
                }
            }
        }
    }

    let mut plain = steps & !pawns;
    while let Some(to) = plain.pop_lsb() {
        if !has_wall_between(game_state, us_sq, to) {
            destinations.insert(to);
        }
    }

    destinations & !BoardSet::from_square(them_sq)
}

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let from = game_state.pawn_of(game_state.side_to_move);
    let mut destinations = pawn_destinations(game_state);
    while let Some(to) = destinations.pop_lsb() {
        out.push(Move::pawn(from, to));
    }
}
