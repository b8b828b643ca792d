//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --games 20 --verbose`

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quoridor_engine::engines::engine_iterative::IterativeEngine;
use quoridor_engine::engines::engine_trait::Engine;
use quoridor_engine::quoridor_errors::QuoridorResult;
use quoridor_engine::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Parser, Debug)]
#[command(about = "Run a seeded engine-vs-engine series")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: u16,
    #[arg(long, default_value_t = 1234)]
    seed: u64,
    #[arg(long, default_value_t = 3)]
    player1_depth: u8,
    #[arg(long, default_value_t = 2)]
    player2_depth: u8,
    #[arg(long, default_value_t = 200)]
    max_plies: u16,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> QuoridorResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let (d1, d2) = (args.player1_depth, args.player2_depth);

    let player1 = move || Box::new(IterativeEngine::new(d1)) as Box<dyn Engine>;
    let player2 = move || Box::new(IterativeEngine::new(d2)) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: args.games,
            base_seed: args.seed,
            per_game: MatchConfig {
                max_plies: args.max_plies,
                opening_min_plies: 2,
                opening_max_plies: 6,
                ..MatchConfig::default()
            },
            verbose: args.verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
