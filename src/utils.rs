// Offset tables and bit helpers shared by the move generators.
// Square masks use the board index (x + y * 8), not a1 = 0.

use std::sync::OnceLock;

use crate::board::Position;

// Direction deltas (dx, dy) for ray casting; y grows towards rank 1
pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

// Bit operations
#[inline]
pub fn pop_lsb(bb: &mut u64) -> Option<usize> {
    if *bb == 0 {
        return None;
    }
    let lsb = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    Some(lsb)
}

pub struct BitIter {
    bb: u64,
}

impl Iterator for BitIter {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        pop_lsb(&mut self.bb)
    }
}

#[inline]
pub fn iter_bits(bb: u64) -> BitIter {
    BitIter { bb }
}

/// Iterate the squares set in `mask`.
#[inline]
pub fn squares(mask: u64) -> impl Iterator<Item = Position> {
    iter_bits(mask).filter_map(Position::from_index)
}

// Tabelle precalcolate dei salti, OnceLock per la thread safety
static KNIGHT_TARGETS: OnceLock<[u64; 64]> = OnceLock::new();
static KING_TARGETS: OnceLock<[u64; 64]> = OnceLock::new();

fn build_targets(offsets: &[(i8, i8); 8]) -> [u64; 64] {
    let mut targets = [0u64; 64];
    for from in Position::all() {
        let mut mask = 0u64;
        for &(dx, dy) in offsets {
            if let Some(to) = from.offset(dx, dy) {
                mask |= 1u64 << to.index();
            }
        }
        targets[from.index()] = mask;
    }
    targets
}

pub fn init_attack_tables() {
    KNIGHT_TARGETS.get_or_init(|| build_targets(&KNIGHT_OFFSETS));
    KING_TARGETS.get_or_init(|| build_targets(&KING_OFFSETS));
}

/// In-bounds knight destinations from `from`, as a square mask.
#[inline]
pub fn knight_targets(from: Position) -> u64 {
    KNIGHT_TARGETS.get_or_init(|| build_targets(&KNIGHT_OFFSETS))[from.index()]
}

/// In-bounds king destinations from `from`, as a square mask.
#[inline]
pub fn king_targets(from: Position) -> u64 {
    KING_TARGETS.get_or_init(|| build_targets(&KING_OFFSETS))[from.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_and_centre_target_counts() {
        let a8 = Position::from_algebraic("a8").unwrap();
        let d4 = Position::from_algebraic("d4").unwrap();
        assert_eq!(knight_targets(a8).count_ones(), 2);
        assert_eq!(knight_targets(d4).count_ones(), 8);
        assert_eq!(king_targets(a8).count_ones(), 3);
        assert_eq!(king_targets(d4).count_ones(), 8);
    }

    #[test]
    fn squares_iterates_in_index_order() {
        let mask = (1u64 << 0) | (1u64 << 63);
        let got: Vec<String> = squares(mask).map(|p| p.to_algebraic()).collect();
        assert_eq!(got, vec!["a8", "h1"]);
    }
}
