//! Errors used throughout the Quoridor engine.
//!
//! `QuoridorErrors` is the single error type returned by notation parsing,
//! checked move application, the engines and the match harness. Hot paths
//! (move generation, search, apply/undo) are infallible and never produce
//! one of these.

/// Unified error type for the engine.
///
/// Parsing variants carry the offending text so front ends can echo it back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoridorErrors {
    /// A square name outside `a1`..`i9`.
    #[error("invalid square name: {0}")]
    InvalidSquareName(String),

    /// Text that is neither a pawn move (`e1e2`) nor a wall (`e5h`, `e5v`).
    #[error("invalid move notation: {0}")]
    InvalidMoveNotation(String),

    /// A well-formed move that is not in the legal list for the position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// The side to move has nothing to play.
    #[error("no legal moves available")]
    NoLegalMoves,

    /// A move was offered after a pawn already reached its goal row.
    #[error("game is already over")]
    GameAlreadyOver,

    /// An engine or worker thread failed to produce a result.
    #[error("engine failure: {0}")]
    EngineFailure(String),

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for QuoridorErrors {
    fn from(err: std::io::Error) -> Self {
        QuoridorErrors::Io(err.to_string())
    }
}

/// Result alias for fallible engine operations.
pub type QuoridorResult<T> = Result<T, QuoridorErrors>;
