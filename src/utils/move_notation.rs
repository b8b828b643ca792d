//! Text coordinates for squares and moves.
//!
//! Squares are written `a1`..`i9` (file letter, rank digit). Pawn moves are
//! the origin and destination squares run together (`e1e2`); a bare
//! destination (`e2`) is also accepted for the side to move. Walls are the
//! anchor square followed by `h` or `v` (`e5h`, `c3v`).

use std::fmt;

use crate::game_state::{game_state::GameState, quoridor_types::*};
use crate::quoridor_errors::{QuoridorErrors, QuoridorResult};

/// Convert a name such as `"e5"` to a square index.
#[inline]
pub fn name_to_square(name: &str) -> QuoridorResult<Square> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(QuoridorErrors::InvalidSquareName(name.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'i').contains(&file) || !(b'1'..=b'9').contains(&rank) {
        return Err(QuoridorErrors::InvalidSquareName(name.to_owned()));
    }

    Ok(make_square(rank - b'1', file - b'a'))
}

/// Convert an on-board square index to its name.
#[inline]
pub fn square_to_name(square: Square) -> String {
    debug_assert!((square as usize) < SQUARE_COUNT);
    let file_char = char::from(b'a' + file_of(square));
    let rank_char = char::from(b'1' + rank_of(square));
    format!("{file_char}{rank_char}")
}

pub fn move_to_notation(mv: Move) -> String {
    match mv.move_type {
        MoveType::Pawn => format!("{}{}", square_to_name(mv.from), square_to_name(mv.to)),
        MoveType::HorizontalWall => format!("{}h", square_to_name(mv.from)),
        MoveType::VerticalWall => format!("{}v", square_to_name(mv.from)),
    }
}

/// Parse move text in the context of `game_state`.
///
/// Only the shape of the move is checked here. Legality is the caller's
/// concern (see `GameState::apply_notation`).
pub fn notation_to_move(text: &str, game_state: &GameState) -> QuoridorResult<Move> {
    let trimmed = text.trim();
    let invalid = || QuoridorErrors::InvalidMoveNotation(text.to_owned());

    if !trimmed.is_ascii() {
        return Err(invalid());
    }

    match trimmed.len() {
        2 => {
            let to = name_to_square(trimmed).map_err(|_| invalid())?;
            Ok(Move::pawn(game_state.pawn_of(game_state.side_to_move), to))
        }
        3 => {
            let anchor = name_to_square(&trimmed[0..2]).map_err(|_| invalid())?;
            match trimmed.as_bytes()[2].to_ascii_lowercase() {
                b'h' => Ok(Move::horizontal_wall(anchor)),
                b'v' => Ok(Move::vertical_wall(anchor)),
                _ => Err(invalid()),
            }
        }
        4 => {
            let from = name_to_square(&trimmed[0..2]).map_err(|_| invalid())?;
            let to = name_to_square(&trimmed[2..4]).map_err(|_| invalid())?;
            Ok(Move::pawn(from, to))
        }
        _ => Err(invalid()),
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_notation(*self))
    }
}
