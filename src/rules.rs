//! Legality filter and check detection.
//!
//! Everything here works on a cloned board: the input board is never
//! mutated. Attack detection only uses [`Piece::attack_moves`], never the
//! legal generators, which is what keeps legal generation from recursing.

use crate::board::{Board, Color, Position};
use crate::moves::Move;

/// Trial-apply `mv` on a copy of `board`.
///
/// The moving piece's copy is relocated to the destination (replacing any
/// captured piece), the origin is cleared and the has-moved flag is set for
/// pawns, rooks and kings.
pub fn simulate_move(board: &Board, mv: &Move) -> Board {
    let mut next = board.clone();
    let mover = next.take(mv.from).unwrap_or(mv.piece);
    next.put(mover.moved_to(mv.to));
    next
}

/// Every attack move of every `attacker` piece.
pub fn attack_moves(board: &Board, attacker: Color) -> Vec<Move> {
    board
        .pieces_of(attacker)
        .flat_map(|piece| piece.attack_moves(board))
        .collect()
}

pub fn is_square_attacked(board: &Board, target: Position, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|piece| piece.attack_moves(board).iter().any(|mv| mv.to == target))
}

/// Whether `color`'s king is attacked by the opponent.
///
/// A board without a king of `color` reports "not in check" so that
/// incomplete sandbox positions stay usable.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.king_position(color) {
        Some(king) => is_square_attacked(board, king, !color),
        None => {
            tracing::trace!(%color, "no king on board, treating as not in check");
            false
        }
    }
}

/// King-safety test for a single candidate.
pub fn leaves_king_safe(board: &Board, mv: &Move) -> bool {
    let after = simulate_move(board, mv);
    let safe = !is_king_in_check(&after, mv.piece.color);
    if !safe {
        tracing::trace!(%mv, "candidate rejected: own king left attacked");
    }
    safe
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    fn sq(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    #[test]
    fn simulate_does_not_touch_input() {
        let board = Board::standard();
        let pawn = *board.piece_at(sq("e2")).unwrap();
        let after = simulate_move(&board, &Move::new(pawn, sq("e4")));

        assert_eq!(board, Board::standard());
        assert!(after.is_empty(sq("e2")));
        let moved = after.piece_at(sq("e4")).unwrap();
        assert_eq!(moved.position, sq("e4"));
        assert!(moved.has_moved);
    }

    #[test]
    fn simulate_replaces_captured_piece() {
        let board = Board::from_placement("4k3/8/8/8/8/3p4/4P3/4K3").unwrap();
        let pawn = *board.piece_at(sq("e2")).unwrap();
        let after = simulate_move(&board, &Move::new(pawn, sq("d3")));
        assert_eq!(after.count(), board.count() - 1);
        assert_eq!(after.piece_at(sq("d3")).unwrap().color, Color::White);
    }

    #[test]
    fn rook_gives_check_along_open_file() {
        let board = Board::from_placement("4r3/8/8/8/8/8/8/4K3").unwrap();
        assert!(is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
    }

    #[test]
    fn blocked_ray_gives_no_check() {
        let board = Board::from_placement("4r3/8/8/8/8/8/4N3/4K3").unwrap();
        assert!(!is_king_in_check(&board, Color::White));
        assert!(is_square_attacked(&board, sq("e2"), Color::Black));
    }

    #[test]
    fn pawn_attacks_diagonally_only() {
        let board = Board::from_placement("8/8/8/8/8/8/3p4/4K3").unwrap();
        assert!(is_king_in_check(&board, Color::White));
        let board = Board::from_placement("8/8/8/8/8/8/4p3/4K3").unwrap();
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let board = Board::from_placement("4k3/8/8/8/8/8/8/4R3").unwrap();
        assert!(!is_king_in_check(&board, Color::White));
        assert!(is_king_in_check(&board, Color::Black));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_file() {
        let board = Board::from_placement("4r3/8/8/8/8/8/4B3/4K3").unwrap();
        let bishop = *board.piece_at(sq("e2")).unwrap();
        assert_eq!(bishop.kind, PieceKind::Bishop);
        assert!(!bishop.pseudo_moves(&board).is_empty());
        assert!(bishop.legal_moves(&board).is_empty());
    }
}
