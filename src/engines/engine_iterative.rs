use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::engines::time_management::{resolve_go_params, TimeManagementStrategy};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::quoridor_errors::{QuoridorErrors, QuoridorResult};
use crate::search::board_scoring::DistanceRaceScorer;
use crate::search::iterative_deepening::{iterative_deepening_search, SearchConfig};
use crate::utils::move_notation::move_to_notation;

pub struct IterativeEngine {
    default_depth: u8,
    clock_check_interval: u64,
    move_generator: LegalMoveGenerator,
    scorer: DistanceRaceScorer,
    time_strategy: TimeManagementStrategy,
    stop_flag: Option<Arc<AtomicBool>>,
}

impl IterativeEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            default_depth,
            clock_check_interval: SearchConfig::default().clock_check_interval,
            move_generator: LegalMoveGenerator,
            scorer: DistanceRaceScorer::default(),
            time_strategy: TimeManagementStrategy::Adaptive,
            stop_flag: None,
        }
    }

    /// Shared flag that interrupts a running `choose_move` from another thread.
    pub fn set_stop_flag(&mut self, flag: Arc<AtomicBool>) {
        self.stop_flag = Some(flag);
    }
}

impl Engine for IterativeEngine {
    fn name(&self) -> &str {
        "Quoridor Iterative"
    }

    fn set_option(&mut self, name: &str, value: &str) -> QuoridorResult<()> {
        let parse_err = || QuoridorErrors::EngineFailure(format!("invalid value for {name}: {value}"));
        match name.to_ascii_lowercase().as_str() {
            "depth" => self.default_depth = value.parse().map_err(|_| parse_err())?,
            "clockcheckinterval" => {
                self.clock_check_interval = value.parse().map_err(|_| parse_err())?
            }
            "timestrategy" => {
                self.time_strategy = match value.to_ascii_lowercase().as_str() {
                    "fraction20" => TimeManagementStrategy::Fraction20,
                    "adaptive" => TimeManagementStrategy::Adaptive,
                    _ => return Err(parse_err()),
                }
            }
            _ => {
                return Err(QuoridorErrors::EngineFailure(format!(
                    "unknown option: {name}"
                )))
            }
        }
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> QuoridorResult<EngineOutput> {
        let resolved = resolve_go_params(game_state, params, self.time_strategy);
        let config = SearchConfig {
            max_depth: resolved.depth.unwrap_or(self.default_depth).max(1),
            movetime_ms: resolved.movetime_ms,
            clock_check_interval: self.clock_check_interval,
            stop_flag: self.stop_flag.clone(),
        };

        let result =
            iterative_deepening_search(game_state, &self.move_generator, &self.scorer, &config);

        let mut out = EngineOutput {
            best_move: result.best_move,
            score: Some(result.best_score),
            info_lines: Vec::with_capacity(result.iterations.len() + 1),
        };
        for it in &result.iterations {
            let pv = it.best_move.map(move_to_notation).unwrap_or_default();
            out.info_lines.push(format!(
                "info depth {} score {} nodes {} time {} pv {}",
                it.depth, it.score, it.nodes, it.elapsed_ms, pv
            ));
        }
        if result.interrupted {
            out.info_lines.push(format!(
                "info string iterative_engine interrupted after depth {} of {}",
                result.reached_depth, config.max_depth
            ));
        }

        debug!(
            best_move = ?result.best_move,
            score = result.best_score,
            depth = result.reached_depth,
            nodes = result.nodes,
            elapsed_ms = result.elapsed_ms,
            "iterative engine chose move"
        );

        Ok(out)
    }
}
