//! Crate root module declarations for the Quoridor engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod quoridor_errors;

pub mod game_state {
    pub mod board_set;
    pub mod board_tables;
    pub mod game_state;
    pub mod quoridor_rules;
    pub mod quoridor_types;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_pawn;
    pub mod legal_moves_wall;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod iterative_deepening;
}

pub mod engines {
    pub mod engine_iterative;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod time_management;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod move_notation;
    pub mod render_game_state;
}
