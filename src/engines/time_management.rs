//! Reusable time-management strategies for engine move budgeting.
//!
//! Callers pass raw clock data (`wtime/btime/winc/binc/movetime`) and the
//! engine decides the final per-move allocation based on strategy.

use crate::engines::engine_trait::GoParams;
use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_types::Color;

/// Total walls in hand below which the game is expected to end soon.
const FEW_WALLS_LEFT: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeManagementStrategy {
    /// Fixed rule: spend 1/20th of remaining clock.
    Fraction20,
    /// Clock, increment, and remaining wall stock.
    Adaptive,
}

/// Fill in `movetime_ms` from the mover's clock when it is not given.
pub fn resolve_go_params(
    game_state: &GameState,
    params: &GoParams,
    strategy: TimeManagementStrategy,
) -> GoParams {
    if params.movetime_ms.is_some() {
        return params.clone();
    }

    let mut resolved = params.clone();
    let (remaining_opt, inc_opt) = match game_state.side_to_move {
        Color::White => (params.wtime_ms, params.winc_ms),
        Color::Black => (params.btime_ms, params.binc_ms),
    };

    if let Some(remaining) = remaining_opt {
        resolved.movetime_ms = Some(match strategy {
            TimeManagementStrategy::Fraction20 => (remaining / 20).max(1),
            TimeManagementStrategy::Adaptive => adaptive_budget_ms(game_state, remaining, inc_opt),
        });
    }

    resolved
}

fn adaptive_budget_ms(game_state: &GameState, remaining_ms: u64, inc_ms: Option<u64>) -> u64 {
    let walls_in_hand = game_state.walls_of(Color::White) + game_state.walls_of(Color::Black);
    let expected_moves_left = if walls_in_hand < FEW_WALLS_LEFT { 12 } else { 20 };

    let base = remaining_ms / expected_moves_left;
    let inc_bonus = inc_ms.unwrap_or(0).saturating_mul(3) / 4;
    let target = base.saturating_add(inc_bonus);

    let max_budget = (remaining_ms / 4).max(1);
    let min_budget = 5.min(max_budget);
    target.clamp(min_budget, max_budget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_movetime_wins() {
        let params = GoParams {
            movetime_ms: Some(250),
            wtime_ms: Some(60_000),
            ..GoParams::default()
        };
        let resolved = resolve_go_params(
            &GameState::new_game(),
            &params,
            TimeManagementStrategy::Adaptive,
        );
        assert_eq!(resolved.movetime_ms, Some(250));
    }

    #[test]
    fn uses_the_movers_clock() {
        let params = GoParams {
            wtime_ms: Some(10_000),
            btime_ms: Some(2_000),
            ..GoParams::default()
        };
        let mut game = GameState::new_game();
        let white = resolve_go_params(&game, &params, TimeManagementStrategy::Fraction20);
        assert_eq!(white.movetime_ms, Some(500));
        game.side_to_move = Color::Black;
        let black = resolve_go_params(&game, &params, TimeManagementStrategy::Fraction20);
        assert_eq!(black.movetime_ms, Some(100));
    }

    #[test]
    fn adaptive_adds_increment_and_shortens_horizon_late() {
        let params = GoParams {
            wtime_ms: Some(12_000),
            winc_ms: Some(400),
            ..GoParams::default()
        };
        let mut game = GameState::new_game();
        let early = resolve_go_params(&game, &params, TimeManagementStrategy::Adaptive);
        assert_eq!(early.movetime_ms, Some(600 + 300));

        game.walls_remaining = [2, 1];
        let late = resolve_go_params(&game, &params, TimeManagementStrategy::Adaptive);
        assert_eq!(late.movetime_ms, Some(1_000 + 300));
    }

    #[test]
    fn tiny_clock_never_exceeds_a_quarter() {
        let params = GoParams {
            wtime_ms: Some(12),
            ..GoParams::default()
        };
        let resolved = resolve_go_params(
            &GameState::new_game(),
            &params,
            TimeManagementStrategy::Adaptive,
        );
        assert_eq!(resolved.movetime_ms, Some(3));
    }

    #[test]
    fn no_clock_means_no_budget() {
        let resolved = resolve_go_params(
            &GameState::new_game(),
            &GoParams::default(),
            TimeManagementStrategy::Adaptive,
        );
        assert_eq!(resolved.movetime_ms, None);
    }
}
