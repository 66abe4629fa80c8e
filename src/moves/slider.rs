// Ray casting for bishop, rook and queen.

use super::Move;
use crate::board::{Board, Piece};

/// Walk each direction one step at a time until the edge or an occupied
/// cell. An enemy on that cell is included and ends the ray; an own piece
/// ends it without being included.
pub(super) fn generate_rays(
    piece: &Piece,
    board: &Board,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(dx, dy) in directions {
        let mut cursor = piece.position;
        while let Some(next) = cursor.offset(dx, dy) {
            match board.piece_at(next) {
                None => {
                    out.push(Move::new(*piece, next));
                    cursor = next;
                }
                Some(occupant) => {
                    if !piece.is_same_color(occupant) {
                        out.push(Move::new(*piece, next));
                    }
                    break;
                }
            }
        }
    }
}
