//! Iterative deepening search with negamax alpha-beta pruning.
//!
//! Implements depth-progressive search that repeatedly refines best-move
//! output under a depth limit, an optional wall-clock budget and an optional
//! external stop flag. A depth interrupted by the clock is discarded and the
//! last fully completed depth is returned.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::game_state::{game_state::GameState, quoridor_types::Move};
use crate::move_generation::move_generator::MoveGenerator;
use crate::search::board_scoring::{BoardScorer, LOSS_SCORE, WIN_SCORE};

/// Window bound strictly outside every score search can return.
const SCORE_INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub max_depth: u8,
    /// Wall-clock budget for the whole call. `None` searches to `max_depth`.
    pub movetime_ms: Option<u64>,
    /// Nodes between clock reads.
    pub clock_check_interval: u64,
    /// Polled together with the clock; setting it stops the search.
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            movetime_ms: None,
            clock_check_interval: 2048,
            stop_flag: None,
        }
    }
}

/// One completed depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationSummary {
    pub depth: u8,
    pub score: i32,
    pub best_move: Option<Move>,
    /// Cumulative over the whole call.
    pub nodes: u64,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
    /// True when a depth was abandoned because time ran out or a stop was requested.
    pub interrupted: bool,
    pub iterations: Vec<IterationSummary>,
}

/// Mutable bookkeeping shared by every node of one search call.
struct SearchContext<'a, G: MoveGenerator, S: BoardScorer> {
    generator: &'a G,
    scorer: &'a S,
    deadline: Option<Instant>,
    stop_flag: Option<&'a AtomicBool>,
    clock_check_interval: u64,
    nodes: u64,
    /// Cleared while depth 1 runs so that some move is always committed.
    interruptible: bool,
    cancelled: bool,
}

impl<G: MoveGenerator, S: BoardScorer> SearchContext<'_, G, S> {
    #[inline]
    fn poll_stop(&mut self) -> bool {
        if !self.interruptible || self.nodes % self.clock_check_interval != 0 {
            return false;
        }
        let stop_requested = self
            .stop_flag
            .is_some_and(|flag| flag.load(Ordering::Relaxed));
        let time_up = self.deadline.is_some_and(|d| Instant::now() >= d);
        if stop_requested || time_up {
            self.cancelled = true;
        }
        self.cancelled
    }

    /// Static score with mate-distance shaping.
    #[inline]
    fn leaf_score(&self, game_state: &GameState, depth: u8) -> i32 {
        let score = self.scorer.score(game_state);
        if score == WIN_SCORE {
            WIN_SCORE + i32::from(depth)
        } else if score == LOSS_SCORE {
            LOSS_SCORE - i32::from(depth)
        } else {
            score
        }
    }
}

pub fn iterative_deepening_search<G: MoveGenerator, S: BoardScorer>(
    game_state: &GameState,
    generator: &G,
    scorer: &S,
    config: &SearchConfig,
) -> SearchResult {
    let start = Instant::now();

    if config.max_depth == 0 {
        return SearchResult {
            best_move: None,
            best_score: scorer.score(game_state),
            reached_depth: 0,
            nodes: 1,
            ..SearchResult::default()
        };
    }

    let mut ctx = SearchContext {
        generator,
        scorer,
        deadline: config
            .movetime_ms
            .map(|ms| start + Duration::from_millis(ms)),
        stop_flag: config.stop_flag.as_deref(),
        clock_check_interval: config.clock_check_interval.max(1),
        nodes: 0,
        interruptible: false,
        cancelled: false,
    };

    let mut state = game_state.clone();
    let mut result = SearchResult {
        best_score: scorer.score(game_state),
        ..SearchResult::default()
    };

    for depth in 1..=config.max_depth {
        ctx.interruptible = depth > 1;
        let (best_move, best_score) = negamax_root(&mut ctx, &mut state, depth);

        if ctx.cancelled {
            debug!(
                depth,
                nodes = ctx.nodes,
                committed_depth = result.reached_depth,
                "search depth cancelled"
            );
            result.interrupted = true;
            break;
        }

        let elapsed_ms = start.elapsed().as_millis() as u64;
        result.best_move = best_move;
        result.best_score = best_score;
        result.reached_depth = depth;
        result.iterations.push(IterationSummary {
            depth,
            score: best_score,
            best_move,
            nodes: ctx.nodes,
            elapsed_ms,
        });
        debug!(
            depth,
            score = best_score,
            best_move = ?best_move,
            nodes = ctx.nodes,
            elapsed_ms,
            "search depth completed"
        );

        if best_score >= WIN_SCORE - 1 || best_score <= LOSS_SCORE + 1 {
            trace!(depth, score = best_score, "decisive score, stopping early");
            break;
        }
    }

    result.nodes = ctx.nodes;
    result.elapsed_ms = start.elapsed().as_millis() as u64;
    result
}

fn negamax_root<G: MoveGenerator, S: BoardScorer>(
    ctx: &mut SearchContext<'_, G, S>,
    state: &mut GameState,
    depth: u8,
) -> (Option<Move>, i32) {
    ctx.nodes += 1;

    if state.is_terminal() {
        return (None, ctx.leaf_score(state, depth));
    }

    let moves = ctx.generator.generate_legal_moves(state);
    if moves.is_empty() {
        return (None, ctx.leaf_score(state, depth));
    }

    let mut alpha = -SCORE_INFINITY;
    let beta = SCORE_INFINITY;
    let mut best_move = None;
    let mut best_score = -SCORE_INFINITY;

    for mv in moves {
        state.apply_move(mv);
        let score = -negamax(ctx, state, depth - 1, -beta, -alpha);
        state.undo_move(mv);

        if ctx.cancelled {
            return (None, 0);
        }

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        alpha = alpha.max(score);
    }

    (best_move, best_score)
}

fn negamax<G: MoveGenerator, S: BoardScorer>(
    ctx: &mut SearchContext<'_, G, S>,
    state: &mut GameState,
    depth: u8,
    mut alpha: i32,
    beta: i32,
) -> i32 {
    ctx.nodes += 1;
    if ctx.poll_stop() {
        return 0;
    }

    if depth == 0 || state.is_terminal() {
        return ctx.leaf_score(state, depth);
    }

    let moves = ctx.generator.generate_legal_moves(state);
    if moves.is_empty() {
        return ctx.leaf_score(state, depth);
    }

    let mut best = -SCORE_INFINITY;

    for mv in moves {
        state.apply_move(mv);
        let score = -negamax(ctx, state, depth - 1, -beta, -alpha);
        state.undo_move(mv);

        if ctx.cancelled {
            return 0;
        }

        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::horizontal_wall_span;
    use crate::game_state::quoridor_types::{make_square, Color};
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;
    use crate::search::board_scoring::DistanceRaceScorer;

    fn search(game: &GameState, config: &SearchConfig) -> SearchResult {
        iterative_deepening_search(game, &LegalMoveGenerator, &DistanceRaceScorer::default(), config)
    }

    fn fixed_depth(max_depth: u8) -> SearchConfig {
        SearchConfig {
            max_depth,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn search_depth_zero_returns_eval_only() {
        let game = GameState::new_game();
        let result = search(&game, &fixed_depth(0));
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, DistanceRaceScorer::default().score(&game));
        assert_eq!(result.reached_depth, 0);
    }

    #[test]
    fn takes_the_winning_step_at_depth_one() {
        // White on e8 with Black far away: e8e9 wins immediately.
        let game = GameState::with_pawns(make_square(7, 4), make_square(4, 0));
        let result = search(&game, &fixed_depth(4));
        assert_eq!(
            result.best_move,
            Some(Move::pawn(make_square(7, 4), make_square(8, 4)))
        );
        assert!(result.best_score >= WIN_SCORE);
        // Decisive score ends deepening after the first depth.
        assert_eq!(result.reached_depth, 1);
        assert_eq!(result.iterations.len(), 1);
    }

    #[test]
    fn prefers_the_faster_win() {
        // Black on e2 one step from its goal, White to move on e8.
        let game = GameState::with_pawns(make_square(7, 4), make_square(1, 0));
        let result = search(&game, &fixed_depth(3));
        assert_eq!(
            result.best_move,
            Some(Move::pawn(make_square(7, 4), make_square(8, 4)))
        );
    }

    #[test]
    fn search_does_not_mutate_the_input_position() {
        let game = GameState::from_moves(&["e1e2", "e9e8"]).expect("legal line");
        let copy = game.clone();
        let _ = search(&game, &fixed_depth(2));
        assert_eq!(game, copy);
    }

    #[test]
    fn depth_two_move_is_legal_and_nodes_accumulate() {
        let game = GameState::new_game();
        let result = search(&game, &fixed_depth(2));
        let legal = LegalMoveGenerator.generate_legal_moves(&game);
        let best = result.best_move.expect("a move is committed");
        assert!(legal.contains(&best));
        assert_eq!(result.reached_depth, 2);
        assert_eq!(result.iterations.len(), 2);
        assert!(result.nodes > result.iterations[0].nodes);
        assert!(!result.interrupted);
    }

    #[test]
    fn timeout_returns_last_completed_depth() {
        let game = GameState::new_game();
        let config = SearchConfig {
            max_depth: 12,
            movetime_ms: Some(30),
            clock_check_interval: 64,
            stop_flag: None,
        };
        let result = search(&game, &config);
        assert!(result.interrupted);
        assert!(result.reached_depth >= 1 && result.reached_depth < 12);

        let best = result.best_move.expect("depth one always commits");
        assert!(LegalMoveGenerator.generate_legal_moves(&game).contains(&best));

        // Search is deterministic, so the committed depth reproduces exactly.
        let replay = search(&game, &fixed_depth(result.reached_depth));
        assert_eq!(replay.best_move, result.best_move);
        assert_eq!(replay.best_score, result.best_score);
    }

    #[test]
    fn stop_flag_interrupts_after_depth_one() {
        let game = GameState::new_game();
        let flag = Arc::new(AtomicBool::new(true));
        let config = SearchConfig {
            max_depth: 6,
            movetime_ms: None,
            clock_check_interval: 1,
            stop_flag: Some(Arc::clone(&flag)),
        };
        let result = search(&game, &config);
        assert!(result.interrupted);
        assert_eq!(result.reached_depth, 1);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn boxed_in_root_returns_no_move() {
        // Pawns on a1/a2 walled into a two-square pocket, no walls left.
        let mut game = GameState::with_pawns(make_square(0, 0), make_square(1, 0));
        game.walls_remaining = [0, 0];
        game.v_wall_blocking.insert(make_square(0, 0));
        game.v_wall_blocking.insert(make_square(1, 0));
        game.h_wall_blocking |= horizontal_wall_span(make_square(2, 0));
        assert_eq!(game.side_to_move, Color::White);
        assert!(LegalMoveGenerator.generate_legal_moves(&game).is_empty());

        let result = search(&game, &fixed_depth(3));
        assert_eq!(result.best_move, None);
    }
}
