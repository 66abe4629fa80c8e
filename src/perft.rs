//! Perft: count the leaves of the legal move tree. Used to check move
//! generation against a reference implementation.

use crate::game::GameState;
use crate::moves::Move;

pub fn perft(state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = state.all_legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|mv| perft(&state.advance(mv), depth - 1))
        .sum()
}

/// Per-root-move breakdown of [`perft`], in generation order.
pub fn divide(state: &GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    state
        .all_legal_moves()
        .into_iter()
        .map(|mv| {
            let nodes = perft(&state.advance(&mv), depth - 1);
            (mv, nodes)
        })
        .collect()
}
