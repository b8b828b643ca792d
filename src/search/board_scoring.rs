//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.

use crate::game_state::{game_state::GameState, quoridor_types::*};
use crate::move_generation::legal_move_checks::distance_to_goal;

/// Score of a position whose side to move has already reached its goal.
pub const WIN_SCORE: i32 = 100_000;
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Stand-in distance for a pawn with no path. Longer than any real path.
const UNREACHABLE_DISTANCE: i32 = SQUARE_COUNT as i32 + 1;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Tunable weights for `DistanceRaceScorer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    /// Per step of goal-distance difference.
    pub distance: i32,
    /// Flat bonus for having the move.
    pub tempo: i32,
    /// Per wall of stock difference while the mover is still far from goal.
    pub wall_far: i32,
    /// Per wall of stock difference once the mover is close.
    pub wall_near: i32,
    /// Mover distances at or below this use `wall_near`.
    pub wall_near_threshold: i32,
    /// Per file of closeness to the centre file.
    pub centrality: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            distance: 50,
            tempo: 10,
            wall_far: 10,
            wall_near: 2,
            wall_near_threshold: 4,
            centrality: 2,
        }
    }
}

/// Goal-distance race with wall stock, tempo and centrality terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceRaceScorer {
    pub weights: EvalWeights,
}

impl BoardScorer for DistanceRaceScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let us = game_state.side_to_move;
        let them = !us;

        let my_dist = goal_distance(game_state, us);
        let opp_dist = goal_distance(game_state, them);

        if my_dist == 0 {
            return WIN_SCORE;
        }
        if opp_dist == 0 {
            return LOSS_SCORE;
        }

        let w = &self.weights;
        let mut score = (opp_dist - my_dist) * w.distance;
        score += w.tempo;

        let wall_diff = i32::from(game_state.walls_of(us)) - i32::from(game_state.walls_of(them));
        let wall_weight = if my_dist > w.wall_near_threshold {
            w.wall_far
        } else {
            w.wall_near
        };
        score += wall_diff * wall_weight;

        let centre = i32::from(BOARD_SIZE / 2);
        let file = i32::from(file_of(game_state.pawn_of(us)));
        score += (centre - (centre - file).abs()) * w.centrality;

        score
    }
}

#[inline]
fn goal_distance(game_state: &GameState, color: Color) -> i32 {
    distance_to_goal(game_state, color).map_or(UNREACHABLE_DISTANCE, |d| d as i32)
}
