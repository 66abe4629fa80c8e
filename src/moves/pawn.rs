// Pawn generation: pushes only onto empty cells, captures only onto enemies.
// No en passant, no promotion.

use super::Move;
use crate::board::{Board, Piece};

pub(super) fn generate_pushes(pawn: &Piece, board: &Board, out: &mut Vec<Move>) {
    let dir = pawn.color.pawn_direction();
    let Some(single) = pawn.position.offset(0, dir) else {
        return;
    };
    if !board.is_empty(single) {
        return;
    }
    out.push(Move::new(*pawn, single));

    // Double step gated by has_moved alone, not by the starting rank
    if pawn.has_moved {
        return;
    }
    if let Some(double) = single.offset(0, dir) {
        if board.is_empty(double) {
            out.push(Move::new(*pawn, double));
        }
    }
}

pub(super) fn generate_captures(pawn: &Piece, board: &Board, out: &mut Vec<Move>) {
    let dir = pawn.color.pawn_direction();
    for dx in [-1, 1] {
        let Some(to) = pawn.position.offset(dx, dir) else {
            continue;
        };
        if let Some(target) = board.piece_at(to) {
            if !pawn.is_same_color(target) {
                out.push(Move::new(*pawn, to));
            }
        }
    }
}
