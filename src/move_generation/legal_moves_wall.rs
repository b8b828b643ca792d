//! Wall placement generation.
//!
//! Candidates come from set arithmetic on the blocking and anchor sets; every
//! survivor is then probed on a scratch copy of the position so that no wall
//! ever seals a pawn off from its goal row.

use crate::game_state::board_set::BoardSet;
use crate::game_state::board_tables::tables;
use crate::game_state::game_state::{horizontal_wall_span, vertical_wall_span};
use crate::game_state::{game_state::GameState, quoridor_types::*};
use crate::move_generation::legal_move_checks::both_players_have_path;

/// Anchors free of overlap and crossing, before the path check.
///
/// Returns `(horizontal, vertical)`.
pub fn wall_candidates(game_state: &GameState) -> (BoardSet, BoardSet) {
    let anchors = tables().valid_wall_anchors;

    // Both halves of the new wall must be free of same-axis walls.
    let h_block = game_state.h_wall_blocking;
    let mut horizontal = !(h_block | h_block.shift(Direction::West));
    // A vertical wall through the same crossing point forbids it; touching a
    // vertical wall's end (T-junction) does not.
    horizontal &= !game_state.v_wall_anchors;
    horizontal &= anchors;

    let v_block = game_state.v_wall_blocking;
    let mut vertical = !(v_block | v_block.shift(Direction::North));
    vertical &= !game_state.h_wall_anchors;
    vertical &= anchors;

    (horizontal, vertical)
}

pub fn generate_wall_moves(game_state: &GameState, out: &mut Vec<Move>) {
    if game_state.walls_of(game_state.side_to_move) == 0 {
        return;
    }

    let (mut horizontal, mut vertical) = wall_candidates(game_state);
    let mut probe = game_state.clone();

    while let Some(anchor) = horizontal.pop_lsb() {
        let span = horizontal_wall_span(anchor);
        probe.h_wall_blocking |= span;
        if both_players_have_path(&probe) {
            out.push(Move::horizontal_wall(anchor));
        }
        probe.h_wall_blocking ^= span;
    }

    while let Some(anchor) = vertical.pop_lsb() {
        let span = vertical_wall_span(anchor);
        probe.v_wall_blocking |= span;
        if both_players_have_path(&probe) {
            out.push(Move::vertical_wall(anchor));
        }
        probe.v_wall_blocking ^= span;
    }
}
