//! Scacchiera: a chess rules engine.
//!
//! Legal move generation per piece, check detection and copy-on-write move
//! application. Rendering, input handling and opponents live outside and
//! only call into the entry points re-exported here.

pub mod board;
pub mod console;
pub mod error;
pub mod game;
pub mod moves;
pub mod perft;
pub mod rules;
pub mod utils;

pub use board::{Board, Color, Piece, PieceKind, Position, START_PLACEMENT};
pub use error::{ChessError, ChessResult};
pub use game::{
    apply_move, is_in_check, legal_moves, load_position, new_standard_position, GameState,
    GameStatus,
};
pub use moves::Move;

pub fn init() {
    utils::init_attack_tables();
}
