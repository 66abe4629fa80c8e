// Knight and king: fixed target sets from the precomputed tables.
// Own pieces block a single target; enemy pieces can be captured.

use super::Move;
use crate::board::{Board, Piece};
use crate::utils;

pub(super) fn generate_leaps(piece: &Piece, board: &Board, targets: u64, out: &mut Vec<Move>) {
    for to in utils::squares(targets) {
        match board.piece_at(to) {
            Some(occupant) if piece.is_same_color(occupant) => {}
            _ => out.push(Move::new(*piece, to)),
        }
    }
}
