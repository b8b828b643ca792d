//! Wall adjacency tests and breadth-first path queries.
//!
//! Both traversals walk the orthogonal step graph minus wall-blocked edges and
//! ignore pawns. A square is marked visited when it is enqueued.

use crate::game_state::board_set::BoardSet;
use crate::game_state::board_tables::tables;
use crate::game_state::{game_state::GameState, quoridor_types::*};

/// True when a wall separates two orthogonally adjacent squares.
///
/// Non-adjacent pairs report `true`, so callers never step across them.
#[inline]
pub fn has_wall_between(game_state: &GameState, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }

    if rank_of(from) == rank_of(to) && from.abs_diff(to) == 1 {
        let west = from.min(to);
        return game_state.v_wall_blocking.contains(west);
    }

    if file_of(from) == file_of(to) && from.abs_diff(to) == BOARD_SIZE {
        let north = from.max(to);
        return game_state.h_wall_blocking.contains(north);
    }

    true
}

/// Whether any square of `goal_mask` can be reached from `start`.
pub fn has_path(game_state: &GameState, start: Square, goal_mask: BoardSet) -> bool {
    let mut visited = BoardSet::from_square(start);
    let mut to_visit = visited;

    while let Some(square) = to_visit.pop_lsb() {
        if goal_mask.contains(square) {
            return true;
        }

        let mut neighbours = tables().pawn_steps[square as usize] & !visited;
        while let Some(next) = neighbours.pop_lsb() {
            if !has_wall_between(game_state, square, next) {
                visited.insert(next);
                to_visit.insert(next);
            }
        }
    }

    false
}

/// Shortest step count from `color`'s pawn to its goal row, counted in
/// breadth-first layers. `None` when the goal row is walled off.
pub fn distance_to_goal(game_state: &GameState, color: Color) -> Option<u32> {
    let goal = tables().goal_mask[color.index()];
    let start = BoardSet::from_square(game_state.pawn_of(color));
    let mut visited = start;
    let mut layer = start;
    let mut distance = 0u32;

    while !layer.is_empty() {
        if !(layer & goal).is_empty() {
            return Some(distance);
        }

        let mut next_layer = BoardSet::EMPTY;
        while let Some(square) = layer.pop_lsb() {
            let mut neighbours = tables().pawn_steps[square as usize] & !visited;
            while let Some(next) = neighbours.pop_lsb() {
                if !has_wall_between(game_state, square, next) {
                    visited.insert(next);
                    next_layer.insert(next);
                }
            }
        }

        layer = next_layer;
        distance += 1;
    }

    None
}

/// Both pawns can still reach their goal rows.
#[inline]
pub fn both_players_have_path(game_state: &GameState) -> bool {
    let goal = &tables().goal_mask;
    [Color::White, Color::Black].into_iter().all(|c| {
        has_path(game_state, game_state.pawn_of(c), goal[c.index()])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::horizontal_wall_span;

    #[test]
    fn vertical_bit_blocks_only_east_west_step() {
        let mut game = GameState::new_game();
        let e5 = make_square(4, 4);
        game.v_wall_blocking.insert(e5);
        assert!(has_wall_between(&game, e5, e5 + 1));
        assert!(has_wall_between(&game, e5 + 1, e5));
        assert!(!has_wall_between(&game, e5, e5 + 9));
        assert!(!has_wall_between(&game, e5 - 1, e5));
    }

    #[test]
    fn horizontal_bit_blocks_step_into_its_square_from_south() {
        let mut game = GameState::new_game();
        let e5 = make_square(4, 4);
        game.h_wall_blocking.insert(e5);
        assert!(has_wall_between(&game, e5, e5 - 9));
        assert!(has_wall_between(&game, e5 - 9, e5));
        assert!(!has_wall_between(&game, e5, e5 + 9));
        assert!(!has_wall_between(&game, e5, e5 + 1));
    }

    #[test]
    fn non_adjacent_pairs_count_as_blocked() {
        let game = GameState::new_game();
        assert!(has_wall_between(&game, 8, 9));
        assert!(has_wall_between(&game, 0, 10));
        assert!(!has_wall_between(&game, 40, 40));
    }

    #[test]
    fn start_distances_are_eight() {
        let game = GameState::new_game();
        assert_eq!(distance_to_goal(&game, Color::White), Some(8));
        assert_eq!(distance_to_goal(&game, Color::Black), Some(8));
        assert!(both_players_have_path(&game));
    }

    #[test]
    fn distance_is_zero_exactly_on_goal_row() {
        let game = GameState::with_pawns(make_square(8, 2), make_square(1, 6));
        assert_eq!(distance_to_goal(&game, Color::White), Some(0));
        assert_eq!(distance_to_goal(&game, Color::Black), Some(1));
    }

    #[test]
    fn distance_detours_around_walls() {
        let mut game = GameState::new_game();
        // Walls across d2..g2 north edge force White at e1 to walk around.
        game.h_wall_blocking |= horizontal_wall_span(make_square(1, 3));
        game.h_wall_blocking |= horizontal_wall_span(make_square(1, 5));
        assert_eq!(distance_to_goal(&game, Color::White), Some(10));
    }

    #[test]
    fn sealed_row_is_unreachable() {
        let mut game = GameState::new_game();
        for file in [0, 2, 4, 6] {
            game.h_wall_blocking |= horizontal_wall_span(make_square(4, file));
        }
        game.h_wall_blocking.insert(make_square(4, 8));
        assert_eq!(distance_to_goal(&game, Color::White), None);
        assert!(!has_path(&game, game.pawn_of(Color::Black), tables().goal_mask[1]));
        assert!(!both_players_have_path(&game));
    }
}
