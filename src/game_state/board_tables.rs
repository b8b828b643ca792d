//! Precomputed, process-wide lookup tables.
//!
//! The tables are built once (explicitly through `init`, or lazily on first
//! use) and are read-only afterwards.

use std::sync::OnceLock;

use crate::game_state::board_set::BoardSet;
use crate::game_state::quoridor_types::*;

#[derive(Debug)]
pub struct BoardTables {
    /// Orthogonal on-board neighbours of each square.
    pub pawn_steps: [BoardSet; SQUARE_COUNT],
    /// Squares that may anchor a wall: ranks 2..=9, files a..=h.
    pub valid_wall_anchors: BoardSet,
    /// All 81 squares.
    pub valid_squares: BoardSet,
    /// Target row per colour, indexed by `Color::index`.
    pub goal_mask: [BoardSet; 2],
}

static TABLES: OnceLock<BoardTables> = OnceLock::new();

/// Build the tables now. Calling it more than once is harmless.
pub fn init() {
    let _ = tables();
}

#[inline]
pub fn tables() -> &'static BoardTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> BoardTables {
    let mut pawn_steps = [BoardSet::EMPTY; SQUARE_COUNT];
    for (square, steps) in pawn_steps.iter_mut().enumerate() {
        for direction in Direction::ALL {
            if let Some(to) = step(square as Square, direction) {
                steps.insert(to);
            }
        }
    }

    let mut valid_wall_anchors = BoardSet::EMPTY;
    for rank in 1..BOARD_SIZE {
        for file in 0..BOARD_SIZE - 1 {
            valid_wall_anchors.insert(make_square(rank, file));
        }
    }

    let mut valid_squares = BoardSet::EMPTY;
    for square in 0..SQUARE_COUNT as Square {
        valid_squares.insert(square);
    }

    let mut goal_mask = [BoardSet::EMPTY; 2];
    for file in 0..BOARD_SIZE {
        goal_mask[Color::White.index()].insert(make_square(BOARD_SIZE - 1, file));
        goal_mask[Color::Black.index()].insert(make_square(0, file));
    }

    BoardTables {
        pawn_steps,
        valid_wall_anchors,
        valid_squares,
        goal_mask,
    }
}
