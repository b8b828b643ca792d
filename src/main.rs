//! Command-line front end: engine games, single searches and perft.
//!
//! Logging goes to stderr and is controlled through `RUST_LOG`.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use quoridor_engine::engines::engine_iterative::IterativeEngine;
use quoridor_engine::engines::engine_random::RandomEngine;
use quoridor_engine::engines::engine_trait::{Engine, GoParams};
use quoridor_engine::game_state::board_tables;
use quoridor_engine::game_state::game_state::GameState;
use quoridor_engine::game_state::quoridor_types::Color;
use quoridor_engine::move_generation::legal_move_generator::LegalMoveGenerator;
use quoridor_engine::move_generation::move_generator::MoveGenerator;
use quoridor_engine::move_generation::perft::{perft_divide, perft_legal};
use quoridor_engine::quoridor_errors::{QuoridorErrors, QuoridorResult};
use quoridor_engine::utils::move_notation::move_to_notation;

#[derive(Parser, Debug)]
#[command(name = "quoridor", version, about = "Quoridor engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game from the start, engine vs engine or human vs engine.
    Play {
        #[arg(long, value_enum, default_value_t = EngineKind::Iterative)]
        white: EngineKind,
        #[arg(long, value_enum, default_value_t = EngineKind::Iterative)]
        black: EngineKind,
        /// Colour played from stdin instead of by an engine.
        #[arg(long, value_enum)]
        human: Option<Side>,
        #[arg(long, default_value_t = 3)]
        depth: u8,
        #[arg(long)]
        movetime_ms: Option<u64>,
        #[arg(long, default_value_t = 200)]
        max_plies: u16,
    },
    /// Search one position given as moves from the start.
    Search {
        /// Moves such as `e1e2 e9e8 e5h`.
        #[arg(num_args = 0..)]
        moves: Vec<String>,
        #[arg(long, default_value_t = 4)]
        depth: u8,
        #[arg(long)]
        movetime_ms: Option<u64>,
    },
    /// Count leaf positions of the legal move tree.
    Perft {
        #[arg(long, default_value_t = 2)]
        depth: u8,
        #[arg(num_args = 0..)]
        moves: Vec<String>,
        /// Print per-move counts at the root.
        #[arg(long)]
        divide: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EngineKind {
    Iterative,
    Random,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn main() -> QuoridorResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    board_tables::init();

    match Cli::parse().command {
        Command::Play {
            white,
            black,
            human,
            depth,
            movetime_ms,
            max_plies,
        } => run_play(white, black, human.map(Color::from), depth, movetime_ms, max_plies),
        Command::Search {
            moves,
            depth,
            movetime_ms,
        } => run_search(&moves, depth, movetime_ms),
        Command::Perft {
            depth,
            moves,
            divide,
        } => run_perft(&moves, depth, divide),
    }
}

fn build_engine(kind: EngineKind, depth: u8) -> Box<dyn Engine> {
    match kind {
        EngineKind::Iterative => Box::new(IterativeEngine::new(depth)),
        EngineKind::Random => Box::new(RandomEngine::new()),
    }
}

fn position_from_args(moves: &[String]) -> QuoridorResult<GameState> {
    let texts: Vec<&str> = moves.iter().map(String::as_str).collect();
    GameState::from_moves(&texts)
}

fn run_play(
    white: EngineKind,
    black: EngineKind,
    human: Option<Color>,
    depth: u8,
    movetime_ms: Option<u64>,
    max_plies: u16,
) -> QuoridorResult<()> {
    let mut engines = [build_engine(white, depth), build_engine(black, depth)];
    let params = GoParams {
        movetime_ms,
        ..GoParams::default()
    };
    let mut state = GameState::new_game();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{state}\n");
    let mut ply = 0u16;
    while ply < max_plies {
        if let Some(winner) = state.winner() {
            println!("{winner:?} reached the goal row after {ply} plies");
            return Ok(());
        }
        if LegalMoveGenerator.generate_legal_moves(&state).is_empty() {
            println!("{:?} has no legal moves", state.side_to_move);
            return Ok(());
        }

        let mover = state.side_to_move;
        if human == Some(mover) {
            print!("{mover:?} move> ");
            io::stdout().flush().ok();
            let Some(line) = lines.next() else {
                println!();
                return Ok(());
            };
            let line = line?;
            match state.apply_notation(&line) {
                Ok(mv) => info!(ply, mover = ?mover, mv = %mv, "human move"),
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            }
        } else {
            let out = engines[mover.index()].choose_move(&state, &params)?;
            for line in &out.info_lines {
                println!("{line}");
            }
            let mv = out.best_move.ok_or(QuoridorErrors::NoLegalMoves)?;
            println!("{mover:?} plays {mv}");
            state.apply_move(mv);
        }
        ply += 1;
        println!("{state}\n");
    }

    match state.winner() {
        Some(winner) => println!("{winner:?} reached the goal row"),
        None => println!("no result after {max_plies} plies"),
    }
    Ok(())
}

fn run_search(moves: &[String], depth: u8, movetime_ms: Option<u64>) -> QuoridorResult<()> {
    let state = position_from_args(moves)?;
    println!("{state}\n");

    let mut engine = IterativeEngine::new(depth);
    let out = engine.choose_move(
        &state,
        &GoParams {
            depth: Some(depth),
            movetime_ms,
            ..GoParams::default()
        },
    )?;
    for line in &out.info_lines {
        println!("{line}");
    }
    match out.best_move {
        Some(mv) => println!("bestmove {mv}"),
        None => println!("bestmove (none)"),
    }
    Ok(())
}

fn run_perft(moves: &[String], depth: u8, divide: bool) -> QuoridorResult<()> {
    let state = position_from_args(moves)?;

    if divide {
        for (mv, counts) in perft_divide(&LegalMoveGenerator, &state, depth) {
            println!("{}: {}", move_to_notation(mv), counts.nodes);
        }
    }

    let counts = perft_legal(&state, depth);
    println!(
        "perft {depth}: nodes {} pawn {} walls {} (h {} v {}) goals {}",
        counts.nodes,
        counts.pawn_moves,
        counts.wall_moves(),
        counts.horizontal_walls,
        counts.vertical_walls,
        counts.goals_reached
    );
    Ok(())
}
