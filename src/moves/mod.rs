//! Per-piece move generation.
//!
//! Every piece exposes two generators:
//! - [`Piece::attack_moves`]: the squares the piece threatens, with no regard
//!   for its own king. It never calls back into the legality filter, so it
//!   always terminates.
//! - [`Piece::legal_moves`]: the pseudo-legal candidates, each trial-applied
//!   on a cloned board and kept only if the mover's king is not attacked
//!   afterwards. The attack check only uses the opponent's attack generators.

mod leaper;
mod pawn;
mod slider;

use std::fmt;

use serde::Serialize;

use crate::board::{Board, Piece, PieceKind, Position};
use crate::rules;
use crate::utils::{self, ALL_DIRECTIONS, DIAGONALS, ORTHOGONALS};

/// A proposal to move `piece` from `from` to `to`. It has no effect until
/// applied. `castle` is reserved and never set by the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub piece: Piece,
    pub from: Position,
    pub to: Position,
    pub castle: bool,
}

impl Move {
    pub fn new(piece: Piece, to: Position) -> Self {
        Self {
            piece,
            from: piece.position,
            to,
            castle: false,
        }
    }

    /// The piece standing on the destination, if any.
    pub fn captured<'a>(&self, board: &'a Board) -> Option<&'a Piece> {
        board
            .piece_at(self.to)
            .filter(|target| target.color != self.piece.color)
    }
}

// Notazione coordinate, es. "e2e4"
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl Piece {
    /// Squares this piece threatens, without the king-safety filter.
    pub fn attack_moves(&self, board: &Board) -> Vec<Move> {
        let mut out = Vec::with_capacity(16);
        match self.kind {
            PieceKind::Pawn => pawn::generate_captures(self, board, &mut out),
            PieceKind::Knight => {
                leaper::generate_leaps(self, board, utils::knight_targets(self.position), &mut out)
            }
            PieceKind::Bishop => slider::generate_rays(self, board, &DIAGONALS, &mut out),
            PieceKind::Rook => slider::generate_rays(self, board, &ORTHOGONALS, &mut out),
            PieceKind::Queen => slider::generate_rays(self, board, &ALL_DIRECTIONS, &mut out),
            PieceKind::King => {
                leaper::generate_leaps(self, board, utils::king_targets(self.position), &mut out)
            }
        }
        out
    }

    /// Shape and occupancy rules only; the mover's king may be left attacked.
    pub fn pseudo_moves(&self, board: &Board) -> Vec<Move> {
        match self.kind {
            PieceKind::Pawn => {
                let mut out = Vec::with_capacity(4);
                pawn::generate_pushes(self, board, &mut out);
                pawn::generate_captures(self, board, &mut out);
                out
            }
            _ => self.attack_moves(board),
        }
    }

    /// Pseudo-legal moves that do not leave this piece's king attacked.
    pub fn legal_moves(&self, board: &Board) -> Vec<Move> {
        self.pseudo_moves(board)
            .into_iter()
            .filter(|mv| rules::leaves_king_safe(board, mv))
            .collect()
    }
}
