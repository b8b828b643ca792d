use std::sync::Arc;
use std::thread;

use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_types::{Move, MoveType};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::quoridor_errors::{QuoridorErrors, QuoridorResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub pawn_moves: usize,
    pub horizontal_walls: usize,
    pub vertical_walls: usize,
    pub goals_reached: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.pawn_moves += rhs.pawn_moves;
        self.horizontal_walls += rhs.horizontal_walls;
        self.vertical_walls += rhs.vertical_walls;
        self.goals_reached += rhs.goals_reached;
    }

    #[inline]
    pub fn wall_moves(&self) -> usize {
        self.horizontal_walls + self.vertical_walls
    }
}

/// Perft with the standard legal generator.
pub fn perft_legal(game_state: &GameState, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, game_state, depth)
}

/// Counts leaf positions `depth` plies below `game_state`.
///
/// Positions where a pawn has already reached its goal row are not expanded.
pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }
    let mut state = game_state.clone();
    let mut total = PerftCounts::default();
    perft_recurse(generator, &mut state, depth, &mut total);
    total
}

/// Splits the root moves across one thread per move.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> QuoridorResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(game_state);
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let mut state = game_state.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            visit_move(generator_ref.as_ref(), &mut state, mv, depth, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| QuoridorErrors::EngineFailure("perft worker thread panicked".to_owned()))?;
        total.merge(local);
    }

    Ok(total)
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Vec<(Move, PerftCounts)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut state = game_state.clone();
    generator
        .generate_legal_moves(&state)
        .into_iter()
        .map(|mv| {
            let mut local = PerftCounts::default();
            visit_move(generator, &mut state, mv, depth, &mut local);
            (mv, local)
        })
        .collect()
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) {
    if state.is_terminal() {
        return;
    }
    for mv in generator.generate_legal_moves(state) {
        visit_move(generator, state, mv, depth, counts);
    }
}

fn visit_move<G: MoveGenerator + ?Sized>(
    generator: &G,
    state: &mut GameState,
    mv: Move,
    depth: u8,
    counts: &mut PerftCounts,
) {
    state.apply_move(mv);
    if depth == 1 {
        counts.nodes += 1;
        match mv.move_type {
            MoveType::Pawn => counts.pawn_moves += 1,
            MoveType::HorizontalWall => counts.horizontal_walls += 1,
            MoveType::VerticalWall => counts.vertical_walls += 1,
        }
        if state.is_terminal() {
            counts.goals_reached += 1;
        }
    } else {
        perft_recurse(generator, state, depth - 1, counts);
    }
    state.undo_move(mv);
}
