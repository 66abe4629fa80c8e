//! Game orchestrator: board, side to move and turn counter.
//!
//! `GameState` is a value. Applying a move returns a new state with a new
//! board; the previous state, and the board it holds, stay untouched. This is
//! the only place where the side to move changes.

use serde::Serialize;

use crate::board::{Board, Color, Position};
use crate::error::{ChessError, ChessResult};
use crate::moves::Move;
use crate::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Active,
    /// The side to move has no legal move. Checkmate and stalemate are not
    /// told apart here; ask [`GameState::is_in_check`] for that.
    NoLegalMoves,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active: Color,
    turn: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), Color::White)
    }

    pub fn from_board(board: Board, active: Color) -> Self {
        Self {
            board,
            active,
            turn: 0,
        }
    }

    /// Load a placement; white moves first whatever the trailer says.
    pub fn from_placement(placement: &str) -> ChessResult<Self> {
        Ok(Self::from_board(load_position(placement)?, Color::White))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_color(&self) -> Color {
        self.active
    }

    /// Number of moves applied since this game was set up.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn legal_moves(&self, pos: Position) -> Vec<Move> {
        legal_moves(&self.board, pos)
    }

    /// Every legal move of the side to move.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        self.board
            .pieces_of(self.active)
            .flat_map(|piece| piece.legal_moves(&self.board))
            .collect()
    }

    pub fn has_legal_moves(&self) -> bool {
        self.board
            .pieces_of(self.active)
            .any(|piece| !piece.legal_moves(&self.board).is_empty())
    }

    pub fn status(&self) -> GameStatus {
        if self.has_legal_moves() {
            GameStatus::Active
        } else {
            GameStatus::NoLegalMoves
        }
    }

    /// Whether the side to move is in check.
    pub fn is_in_check(&self) -> bool {
        rules::is_king_in_check(&self.board, self.active)
    }

    /// The legal move from `from` to `to`, if there is one.
    pub fn find_move(&self, from: Position, to: Position) -> Option<Move> {
        self.legal_moves(from).into_iter().find(|mv| mv.to == to)
    }

    /// Apply `mv` and hand back the resulting state.
    ///
    /// The move must belong to the side to move and be one of the legal
    /// moves of the piece on its origin; otherwise `self` is left as it is
    /// and a typed error is returned.
    pub fn apply_move(&self, mv: &Move) -> ChessResult<GameState> {
        let piece = *self
            .board
            .piece_at(mv.from)
            .ok_or(ChessError::EmptySquare(mv.from))?;
        if piece.color != self.active {
            tracing::warn!(%mv, active = %self.active, "move rejected: wrong side");
            return Err(ChessError::WrongTurn {
                expected: self.active,
                found: piece.color,
            });
        }

        let is_legal = piece.kind == mv.piece.kind
            && piece.color == mv.piece.color
            && piece
                .legal_moves(&self.board)
                .iter()
                .any(|legal| legal.to == mv.to);
        if !is_legal {
            tracing::warn!(%mv, "move rejected: not in the legal set");
            return Err(ChessError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }

        Ok(self.advance(&Move::new(piece, mv.to)))
    }

    // Nessuna validazione: solo per mosse già prese dal set legale
    pub(crate) fn advance(&self, mv: &Move) -> GameState {
        let next = GameState {
            board: rules::simulate_move(&self.board, mv),
            active: !self.active,
            turn: self.turn + 1,
        };
        tracing::debug!(%mv, turn = next.turn, next = %next.active, "move applied");
        next
    }
}

/// The canonical 32-piece starting board.
pub fn new_standard_position() -> Board {
    Board::standard()
}

/// Board from a placement string; see [`Board::from_placement`].
pub fn load_position(placement: &str) -> ChessResult<Board> {
    Board::from_placement(placement)
}

/// Legal moves of the piece on `pos`; empty when the square is empty.
pub fn legal_moves(board: &Board, pos: Position) -> Vec<Move> {
    board
        .piece_at(pos)
        .map(|piece| piece.legal_moves(board))
        .unwrap_or_default()
}

pub fn is_in_check(board: &Board, color: Color) -> bool {
    rules::is_king_in_check(board, color)
}

pub fn apply_move(state: &GameState, mv: &Move) -> ChessResult<GameState> {
    state.apply_move(mv)
}
