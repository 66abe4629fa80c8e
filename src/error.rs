//! Error types for the rules engine.
//!
//! Only caller mistakes surface as errors: malformed placements or squares,
//! and moves that are not in the legal set. An empty square, an empty move
//! list or a missing king are ordinary results, not errors.

use crate::board::{Color, Position};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("no piece on {0}")]
    EmptySquare(Position),

    #[error("it is {expected}'s turn, the piece belongs to {found}")]
    WrongTurn { expected: Color, found: Color },

    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Position, to: Position },
}

pub type ChessResult<T> = Result<T, ChessError>;
