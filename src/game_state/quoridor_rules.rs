//! Canonical rule constants.
//!
//! Starting squares and the per-player wall stock used to set up a new game.

use crate::game_state::quoridor_types::{make_square, Square};

/// Walls each player holds at the start of a game.
pub const WALLS_PER_PLAYER: u8 = 10;

/// White starts centred on rank 1 (`e1`).
pub const WHITE_START_SQUARE: Square = make_square(0, 4);

/// Black starts centred on rank 9 (`e9`).
pub const BLACK_START_SQUARE: Square = make_square(8, 4);
