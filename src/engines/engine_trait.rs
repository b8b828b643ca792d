//! Engine abstraction layer used by the command-line front end and the match
//! harness.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::game_state::{game_state::GameState, quoridor_types::Move};
use crate::quoridor_errors::QuoridorResult;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
    pub wtime_ms: Option<u64>,
    pub btime_ms: Option<u64>,
    pub winc_ms: Option<u64>,
    pub binc_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// Side-to-move score when the engine searched.
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> QuoridorResult<()> {
        Ok(())
    }

    /// Pick a move for the side to move. `best_move` is `None` when the
    /// position has no legal moves or a pawn already stands on its goal row.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> QuoridorResult<EngineOutput>;
}
