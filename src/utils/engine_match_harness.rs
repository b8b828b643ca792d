//! Minimal head-to-head engine match harness for local testing.
//!
//! This module runs two `Engine` implementations against each other from the
//! standard start (with an optional seeded random opening prefix) or from a
//! caller-provided position, until a pawn reaches its goal row, the mover has
//! no legal move, or the ply limit is hit.

use chrono::{DateTime, Utc};
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::info;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_types::{Color, Move, MoveType};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::quoridor_errors::{QuoridorErrors, QuoridorResult};
use crate::utils::move_notation::move_to_notation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteReachedGoal,
    BlackReachedGoal,
    /// The side to move had no legal move; recorded as a draw.
    NoLegalMoves,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerReachedGoal { player: PlayerId, color: Color },
    NoLegalMoves,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 0,
            opening_max_plies: 4,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match from the standard start.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> QuoridorResult<MatchResult> {
    play_engine_match_from_state_internal(
        GameState::new_game(),
        engine_white.as_mut(),
        engine_black.as_mut(),
        seed,
        config,
        true,
    )
}

/// Play a single match from a caller-provided state, skipping the random
/// opening.
pub fn play_engine_match_from_state(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    start_state: GameState,
    seed: u64,
    config: MatchConfig,
) -> QuoridorResult<MatchResult> {
    play_engine_match_from_state_internal(
        start_state,
        engine_white.as_mut(),
        engine_black.as_mut(),
        seed,
        config,
        false,
    )
}

struct MatchLog {
    opening_moves: Vec<String>,
    played_moves: Vec<String>,
    move_count: [u32; 2],
    total_time_ns: [u128; 2],
    started_at: DateTime<Utc>,
}

impl MatchLog {
    fn finish(self, outcome: MatchOutcome, final_state: GameState) -> MatchResult {
        MatchResult {
            outcome,
            final_state,
            opening_moves: self.opening_moves,
            played_moves: self.played_moves,
            white_move_count: self.move_count[Color::White.index()],
            black_move_count: self.move_count[Color::Black.index()],
            white_total_time_ns: self.total_time_ns[Color::White.index()],
            black_total_time_ns: self.total_time_ns[Color::Black.index()],
            started_at: self.started_at,
            finished_at: Utc::now(),
        }
    }
}

fn play_engine_match_from_state_internal(
    mut state: GameState,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: MatchConfig,
    apply_random_opening: bool,
) -> QuoridorResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut log = MatchLog {
        opening_moves: Vec::new(),
        played_moves: Vec::new(),
        move_count: [0; 2],
        total_time_ns: [0; 2],
        started_at: Utc::now(),
    };

    if apply_random_opening {
        log.opening_moves = apply_seeded_random_opening(
            &mut state,
            seed,
            config.opening_min_plies,
            config.opening_max_plies,
        );
    }

    let generator = LegalMoveGenerator;

    for _ in 0..config.max_plies {
        if let Some(outcome) = goal_outcome(&state) {
            return Ok(log.finish(outcome, state));
        }

        let legal_moves = generator.generate_legal_moves(&state);
        if legal_moves.is_empty() {
            return Ok(log.finish(MatchOutcome::NoLegalMoves, state));
        }

        let mover = state.side_to_move;
        let engine: &mut dyn Engine = match mover {
            Color::White => &mut *engine_white,
            Color::Black => &mut *engine_black,
        };
        let started = Instant::now();
        let out = engine.choose_move(&state, &config.go_params)?;
        let elapsed_ns = started.elapsed().as_nanos();

        log.move_count[mover.index()] = log.move_count[mover.index()].saturating_add(1);
        log.total_time_ns[mover.index()] =
            log.total_time_ns[mover.index()].saturating_add(elapsed_ns);

        let chosen = out.best_move.ok_or_else(|| {
            QuoridorErrors::EngineFailure(format!(
                "{} returned no move with {} legal moves available",
                engine.name(),
                legal_moves.len()
            ))
        })?;
        if !legal_moves.contains(&chosen) {
            return Err(QuoridorErrors::IllegalMove(move_to_notation(chosen)));
        }

        log.played_moves.push(move_to_notation(chosen));
        state.apply_move(chosen);
    }

    let outcome = goal_outcome(&state).unwrap_or(MatchOutcome::DrawMaxPlies);
    Ok(log.finish(outcome, state))
}

fn goal_outcome(state: &GameState) -> Option<MatchOutcome> {
    state.winner().map(|color| match color {
        Color::White => MatchOutcome::WhiteReachedGoal,
        Color::Black => MatchOutcome::BlackReachedGoal,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> QuoridorResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        if config.verbose {
            let (white, black) = if player1_is_white {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            info!(game = i + 1, games = config.games, seed, white, black, "series game starting");
        }

        let result = if player1_is_white {
            play_engine_match(player1_factory(), player2_factory(), seed, config.per_game.clone())?
        } else {
            play_engine_match(player2_factory(), player1_factory(), seed, config.per_game.clone())?
        };

        let (p1_color, p2_color) = if player1_is_white {
            (Color::White, Color::Black)
        } else {
            (Color::Black, Color::White)
        };
        let moves = [result.white_move_count, result.black_move_count];
        let times = [result.white_total_time_ns, result.black_total_time_ns];
        stats.player1_moves = stats.player1_moves.saturating_add(moves[p1_color.index()]);
        stats.player2_moves = stats.player2_moves.saturating_add(moves[p2_color.index()]);
        stats.player1_total_time_ns = stats
            .player1_total_time_ns
            .saturating_add(times[p1_color.index()]);
        stats.player2_total_time_ns = stats
            .player2_total_time_ns
            .saturating_add(times[p2_color.index()]);

        let winner_color = match result.outcome {
            MatchOutcome::WhiteReachedGoal => Some(Color::White),
            MatchOutcome::BlackReachedGoal => Some(Color::Black),
            MatchOutcome::NoLegalMoves | MatchOutcome::DrawMaxPlies => None,
        };
        let mapped = match winner_color {
            Some(color) if color == p1_color => {
                stats.player1_wins += 1;
                SeriesOutcome::PlayerReachedGoal {
                    player: PlayerId::Player1,
                    color,
                }
            }
            Some(color) => {
                stats.player2_wins += 1;
                SeriesOutcome::PlayerReachedGoal {
                    player: PlayerId::Player2,
                    color,
                }
            }
            None => {
                stats.draws += 1;
                if result.outcome == MatchOutcome::NoLegalMoves {
                    SeriesOutcome::NoLegalMoves
                } else {
                    SeriesOutcome::DrawMaxPlies
                }
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            info!(
                game = i + 1,
                games = config.games,
                result = ?mapped,
                plies = result.played_moves.len(),
                p1_wins = stats.player1_wins,
                p2_wins = stats.player2_wins,
                draws = stats.draws,
                "series game finished"
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

/// Random pawn steps only, so openings never spend wall stock.
fn apply_seeded_random_opening(
    state: &mut GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves = Vec::<String>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        if state.is_terminal() {
            break;
        }
        let pawn_moves: Vec<Move> = LegalMoveGenerator
            .generate_legal_moves(state)
            .into_iter()
            .filter(|m| m.move_type == MoveType::Pawn)
            .collect();
        let Some(&chosen) = pawn_moves.as_slice().choose(&mut rng) else {
            break;
        };

        opening_moves.push(move_to_notation(chosen));
        state.apply_move(chosen);
    }

    opening_moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_iterative::IterativeEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::EngineOutput;
    use crate::game_state::game_state::horizontal_wall_span;
    use crate::game_state::quoridor_types::make_square;

    struct FixedMoveEngine(Move);

    impl Engine for FixedMoveEngine {
        fn name(&self) -> &str {
            "fixed"
        }

        fn choose_move(
            &mut self,
            _game_state: &GameState,
            _params: &GoParams,
        ) -> QuoridorResult<EngineOutput> {
            Ok(EngineOutput {
                best_move: Some(self.0),
                ..EngineOutput::default()
            })
        }
    }

    fn assert_outcome_matches_state(result: &MatchResult) {
        match result.outcome {
            MatchOutcome::WhiteReachedGoal => {
                assert_eq!(result.final_state.winner(), Some(Color::White))
            }
            MatchOutcome::BlackReachedGoal => {
                assert_eq!(result.final_state.winner(), Some(Color::Black))
            }
            MatchOutcome::NoLegalMoves | MatchOutcome::DrawMaxPlies => {
                assert_eq!(result.final_state.winner(), None)
            }
        }
        assert_eq!(
            (result.white_move_count + result.black_move_count) as usize,
            result.played_moves.len()
        );
        assert!(result.finished_at >= result.started_at);
    }

    #[test]
    fn engine_match_harness_runs_random_vs_iterative() {
        let result = play_engine_match(
            Box::new(RandomEngine::with_seed(5)),
            Box::new(IterativeEngine::new(1)),
            42,
            MatchConfig {
                max_plies: 60,
                opening_min_plies: 2,
                opening_max_plies: 4,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");

        assert!(result.opening_moves.len() >= 2);
        assert!(!result.played_moves.is_empty());
        assert_outcome_matches_state(&result);
    }

    #[test]
    fn match_ends_when_a_pawn_arrives() {
        // White on e8 steps straight onto its goal row.
        let start = GameState::with_pawns(make_square(7, 4), make_square(4, 0));
        let result = play_engine_match_from_state(
            Box::new(IterativeEngine::new(1)),
            Box::new(RandomEngine::with_seed(1)),
            start,
            0,
            MatchConfig::default(),
        )
        .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::WhiteReachedGoal);
        assert_eq!(result.played_moves, vec!["e8e9".to_owned()]);
        assert!(result.opening_moves.is_empty());
    }

    #[test]
    fn boxed_in_mover_ends_with_no_legal_moves() {
        let mut start = GameState::with_pawns(make_square(0, 0), make_square(1, 0));
        start.walls_remaining = [0, 0];
        start.v_wall_blocking.insert(make_square(0, 0));
        start.v_wall_blocking.insert(make_square(1, 0));
        start.h_wall_blocking |= horizontal_wall_span(make_square(2, 0));

        let result = play_engine_match_from_state(
            Box::new(RandomEngine::with_seed(1)),
            Box::new(RandomEngine::with_seed(2)),
            start,
            0,
            MatchConfig::default(),
        )
        .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::NoLegalMoves);
        assert!(result.played_moves.is_empty());
    }

    #[test]
    fn illegal_engine_move_is_an_error() {
        let illegal = Move::pawn(make_square(0, 4), make_square(2, 4));
        let err = play_engine_match(
            Box::new(FixedMoveEngine(illegal)),
            Box::new(RandomEngine::with_seed(1)),
            0,
            MatchConfig {
                opening_min_plies: 0,
                opening_max_plies: 0,
                ..MatchConfig::default()
            },
        )
        .expect_err("e1e3 is not legal");
        assert_eq!(err, QuoridorErrors::IllegalMove("e1e3".to_owned()));
    }

    #[test]
    fn engine_match_series_aggregates_results() {
        let stats = play_engine_match_series(
            || Box::new(IterativeEngine::new(1)),
            || Box::new(RandomEngine::with_seed(9)),
            MatchSeriesConfig {
                games: 3,
                base_seed: 777,
                per_game: MatchConfig {
                    max_plies: 24,
                    opening_min_plies: 0,
                    opening_max_plies: 2,
                    ..MatchConfig::default()
                },
                verbose: false,
            },
        )
        .expect("series should run");

        assert_eq!(stats.games, 3);
        assert_eq!(stats.outcomes.len(), 3);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 3);
        assert!(stats.player1_moves > 0);
        assert!(stats.overall_avg_move_time_ms >= 0.0);
        assert!(stats.report().starts_with("games=3 "));
    }
}
