//! Terminal-oriented board renderer.
//!
//! Creates a plain-text board view with pawns and wall segments for
//! debugging, tests, and the command-line front end.

use crate::game_state::board_set::BoardSet;
use crate::game_state::{game_state::GameState, quoridor_types::*};

const FILE_HEADER: &str = "   a   b   c   d   e   f   g   h   i";

/// Render the board to a string, rank 9 at the top.
///
/// `W`/`B` mark the pawns, `|` a vertical wall segment east of a square and
/// `---` a horizontal wall segment south of a square.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();
    out.push_str(FILE_HEADER);
    out.push('\n');

    for rank in (0..BOARD_SIZE).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..BOARD_SIZE {
            let sq = make_square(rank, file);
            out.push(' ');
            out.push(square_glyph(game_state, sq));
            out.push(' ');
            if file + 1 < BOARD_SIZE {
                out.push(if game_state.v_wall_blocking.contains(sq) {
                    '|'
                } else {
                    ' '
                });
            }
        }
        out.push_str(" ");
        out.push(char::from(b'1' + rank));
        out.push('\n');

        if rank > 0 {
            out.push_str("  ");
            for file in 0..BOARD_SIZE {
                let sq = make_square(rank, file);
                out.push_str(if game_state.h_wall_blocking.contains(sq) {
                    "---"
                } else {
                    "   "
                });
                if file + 1 < BOARD_SIZE {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
    }

    out.push_str(FILE_HEADER);
    out.push('\n');
    out.push_str(&format!(
        "to move: {:?}  walls: W {} B {}",
        game_state.side_to_move,
        game_state.walls_of(Color::White),
        game_state.walls_of(Color::Black),
    ));

    out
}

/// Render a bare set as a 9x9 grid of `x` and `.`, rank 9 at the top.
pub fn render_board_set(set: BoardSet) -> String {
    let mut out = String::new();
    for rank in (0..BOARD_SIZE).rev() {
        for file in 0..BOARD_SIZE {
            out.push(if set.contains(make_square(rank, file)) {
                'x'
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}

fn square_glyph(game_state: &GameState, square: Square) -> char {
    if game_state.pawn_of(Color::White) == square {
        'W'
    } else if game_state.pawn_of(Color::Black) == square {
        'B'
    } else {
        '·'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_shows_both_pawns() {
        let text = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("9 "));
        assert!(lines[1].contains('B'));
        // Rank 1 sits after 8 ranks of cells and 8 wall lines.
        assert!(lines[17].starts_with("1 "));
        assert!(lines[17].contains('W'));
        assert!(!text.contains('|'));
        assert!(text.ends_with("to move: White  walls: W 10 B 10"));
    }

    #[test]
    fn walls_are_drawn() {
        let game = GameState::from_moves(&["e5h", "c3v"]).expect("legal walls");
        let text = render_game_state(&game);
        assert_eq!(text.matches('|').count(), 2);
        assert_eq!(text.matches("---").count(), 2);
    }

    #[test]
    fn board_set_grid_is_nine_by_nine() {
        let text = render_board_set(BoardSet::from_square(make_square(8, 0)));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "x........");
        assert!(lines[1..].iter().all(|l| *l == "........."));
    }
}
