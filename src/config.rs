//! Board geometry shared by every engine module.

use crate::engine::types::PieceKind;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i32 = 8;

/// Back-rank piece order from column 0 to column 7, identical for both sides.
pub const BACK_RANK: [PieceKind; BOARD_SIZE as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_rank_spans_the_board() {
        assert_eq!(BOARD_SIZE, 8);
        assert_eq!(BACK_RANK.len(), BOARD_SIZE as usize);
    }

    #[test]
    fn back_rank_is_mirrored_except_royals() {
        assert_eq!(BACK_RANK[0], BACK_RANK[7]);
        assert_eq!(BACK_RANK[1], BACK_RANK[6]);
        assert_eq!(BACK_RANK[2], BACK_RANK[5]);
        assert_eq!(BACK_RANK[3], PieceKind::Queen);
        assert_eq!(BACK_RANK[4], PieceKind::King);
        assert!(BACK_RANK.iter().all(|k| !k.is_pawn()));
    }
}
