//! Core incremental position representation.
//!
//! `GameState` stores both pawns, the wall stock per colour, the side to move
//! and four wall bit-sets. It is mutated in place by paired
//! `apply_move`/`undo_move` calls, which must follow strict stack order.

use std::fmt;

use crate::game_state::board_set::BoardSet;
use crate::game_state::board_tables::tables;
use crate::game_state::quoridor_rules::{BLACK_START_SQUARE, WALLS_PER_PLAYER, WHITE_START_SQUARE};
use crate::game_state::quoridor_types::*;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::quoridor_errors::{QuoridorErrors, QuoridorResult};
use crate::utils::move_notation::{move_to_notation, notation_to_move};
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    // --- Pawns, indexed by `Color::index` ---
    pub pawn: [Square; 2],

    // --- Wall stock ---
    pub walls_remaining: [u8; 2],

    pub side_to_move: Color,

    // --- Wall anchors (one bit per placed wall, T-junction detection) ---
    pub h_wall_anchors: BoardSet,
    pub v_wall_anchors: BoardSet,

    // --- Blocking bits (two per placed wall, movement tests) ---
    // A horizontal bit on `s` blocks `s <-> s - 9`.
    // A vertical bit on `s` blocks `s <-> s + 1`.
    pub h_wall_blocking: BoardSet,
    pub v_wall_blocking: BoardSet,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard start: pawns on `e1`/`e9`, ten walls each, White to move.
    pub fn new_game() -> Self {
        Self {
            pawn: [WHITE_START_SQUARE, BLACK_START_SQUARE],
            walls_remaining: [WALLS_PER_PLAYER; 2],
            side_to_move: Color::White,
            h_wall_anchors: BoardSet::EMPTY,
            v_wall_anchors: BoardSet::EMPTY,
            h_wall_blocking: BoardSet::EMPTY,
            v_wall_blocking: BoardSet::EMPTY,
        }
    }

    /// Start position with both pawns relocated. Intended for curated test
    /// and analysis positions.
    pub fn with_pawns(white: Square, black: Square) -> Self {
        debug_assert!(white != black && (white as usize) < SQUARE_COUNT);
        debug_assert!((black as usize) < SQUARE_COUNT);
        Self {
            pawn: [white, black],
            ..Self::new_game()
        }
    }

    /// Replay notation moves from the start, checking each against the
    /// legal-move list.
    pub fn from_moves(moves: &[&str]) -> QuoridorResult<Self> {
        let mut state = Self::new_game();
        for text in moves {
            state.apply_notation(text)?;
        }
        Ok(state)
    }

    /// Parse `text` and apply it if it is legal in this position.
    pub fn apply_notation(&mut self, text: &str) -> QuoridorResult<Move> {
        if self.is_terminal() {
            return Err(QuoridorErrors::GameAlreadyOver);
        }
        let mv = notation_to_move(text, self)?;
        let legal = LegalMoveGenerator.generate_legal_moves(self);
        if !legal.contains(&mv) {
            return Err(QuoridorErrors::IllegalMove(move_to_notation(mv)));
        }
        self.apply_move(mv);
        Ok(mv)
    }

    #[inline]
    pub fn pawn_of(&self, color: Color) -> Square {
        self.pawn[color.index()]
    }

    #[inline]
    pub fn walls_of(&self, color: Color) -> u8 {
        self.walls_remaining[color.index()]
    }

    /// Apply a move drawn from the current legal-move list.
    #[inline]
    pub fn apply_move(&mut self, mv: Move) {
        let us = self.side_to_move.index();
        match mv.move_type {
            MoveType::Pawn => {
                debug_assert_eq!(self.pawn[us], mv.from);
                self.pawn[us] = mv.to;
            }
            MoveType::HorizontalWall => {
                debug_assert!(self.walls_remaining[us] > 0);
                self.h_wall_anchors |= BoardSet::from_square(mv.from);
                self.h_wall_blocking |= horizontal_wall_span(mv.from);
                self.walls_remaining[us] -= 1;
            }
            MoveType::VerticalWall => {
                debug_assert!(self.walls_remaining[us] > 0);
                self.v_wall_anchors |= BoardSet::from_square(mv.from);
                self.v_wall_blocking |= vertical_wall_span(mv.from);
                self.walls_remaining[us] -= 1;
            }
        }
        self.side_to_move = !self.side_to_move;
    }

    /// Exact inverse of `apply_move` for the most recently applied move.
    #[inline]
    pub fn undo_move(&mut self, mv: Move) {
        self.side_to_move = !self.side_to_move;
        let us = self.side_to_move.index();
        match mv.move_type {
            MoveType::Pawn => {
                self.pawn[us] = mv.from;
            }
            MoveType::HorizontalWall => {
                self.h_wall_anchors ^= BoardSet::from_square(mv.from);
                self.h_wall_blocking ^= horizontal_wall_span(mv.from);
                self.walls_remaining[us] += 1;
            }
            MoveType::VerticalWall => {
                self.v_wall_anchors ^= BoardSet::from_square(mv.from);
                self.v_wall_blocking ^= vertical_wall_span(mv.from);
                self.walls_remaining[us] += 1;
            }
        }
    }

    /// True once either pawn stands in its own goal row.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    /// Colour whose pawn has reached its goal row, if any.
    pub fn winner(&self) -> Option<Color> {
        let goal = &tables().goal_mask;
        [Color::White, Color::Black]
            .into_iter()
            .find(|c| goal[c.index()].contains(self.pawn[c.index()]))
    }

    /// Total walls placed so far by both players.
    #[inline]
    pub fn walls_placed(&self) -> u32 {
        self.h_wall_anchors.count() + self.v_wall_anchors.count()
    }
}

/// Blocking bits of a horizontal wall anchored on `anchor`: the anchor and
/// its eastern neighbour.
#[inline]
pub fn horizontal_wall_span(anchor: Square) -> BoardSet {
    BoardSet::from_square(anchor) | BoardSet::from_square(anchor + 1)
}

/// Blocking bits of a vertical wall anchored on `anchor`: the anchor and
/// its southern neighbour.
#[inline]
pub fn vertical_wall_span(anchor: Square) -> BoardSet {
    BoardSet::from_square(anchor) | BoardSet::from_square(anchor - BOARD_SIZE)
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}
