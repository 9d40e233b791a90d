//! Candidate move generation.
//!
//! Each piece kind walks the board from its square: pawns step and capture,
//! knights and kings jump to fixed offsets, bishops, rooks and queens cast
//! rays until something blocks them. Candidates are geometric only; nothing
//! here checks whether the mover's king ends up attacked.

use tracing::trace;

use crate::engine::board::Board;
use crate::engine::directions::{
    ALL_DIRECTIONS, DIAGONALS, Direction, KNIGHT_LEAPS, ORTHOGONALS,
};
use crate::engine::types::{ChessError, Move, PawnState, Piece, PieceKind, Player, Square};

// =========================================================================
// Public API
// =========================================================================

impl Piece {
    /// Squares this piece may move to on `board`.
    ///
    /// The piece is located by identity and the board's copy of it is used,
    /// so pawn flags are current even if `self` is a stale clone.
    pub fn available_moves(&self, board: &Board) -> Result<Vec<Square>, ChessError> {
        let from = board.find_piece(self.id())?;
        board.available_moves_at(from)
    }
}

/// Squares `piece`, standing on `from`, may move to. Empty if `from` is
/// off the board.
pub fn available_moves(board: &Board, from: Square, piece: &Piece) -> Vec<Square> {
    let mut moves = Vec::new();
    if !board.in_bounds(from) {
        return moves;
    }
    let owner = piece.owner();
    match piece.kind() {
        PieceKind::Pawn(state) => pawn_moves(board, from, owner, state, &mut moves),
        PieceKind::Knight => step_moves(board, from, owner, &KNIGHT_LEAPS, &mut moves),
        PieceKind::Bishop => ray_moves(board, from, owner, &DIAGONALS, &mut moves),
        PieceKind::Rook => ray_moves(board, from, owner, &ORTHOGONALS, &mut moves),
        PieceKind::Queen => ray_moves(board, from, owner, &ALL_DIRECTIONS, &mut moves),
        PieceKind::King => step_moves(board, from, owner, &ALL_DIRECTIONS, &mut moves),
    }
    trace!(%from, piece = %piece, count = moves.len(), "generated moves");
    moves
}

/// Every candidate move of the side to move, pieces taken in row-major order.
pub fn side_moves(board: &Board) -> Vec<Move> {
    let us = board.side_to_move();
    board
        .pieces()
        .filter(|(_, piece)| piece.owner() == us)
        .flat_map(|(from, piece)| {
            available_moves(board, from, piece)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

// =========================================================================
// Pawn moves
// =========================================================================

fn pawn_moves(board: &Board, from: Square, us: Player, state: PawnState, moves: &mut Vec<Square>) {
    let forward = us.forward();

    // --- Single and double push ---
    let one = from.offset(forward);
    if board.is_empty(one) {
        moves.push(one);
        let two = one.offset(forward);
        if !state.has_moved && board.is_empty(two) {
            moves.push(two);
        }
    }

    for side in [Direction::WEST, Direction::EAST] {
        let target = from.offset(forward.combined(side));

        // --- Capture ---
        if board.can_take(target, us) {
            moves.push(target);
            continue;
        }

        // --- En passant ---
        if board.is_empty(target)
            && board
                .occupant(from.offset(side))
                .is_some_and(|p| p.owner() != us && p.just_double_stepped())
        {
            moves.push(target);
        }
    }
}

// =========================================================================
// Stepping pieces (knight, king)
// =========================================================================

fn step_moves(board: &Board, from: Square, us: Player, offsets: &[Direction], moves: &mut Vec<Square>) {
    moves.extend(
        offsets
            .iter()
            .map(|&dir| from.offset(dir))
            .filter(|&to| board.is_empty(to) || board.can_take(to, us)),
    );
}

// =========================================================================
// Sliding pieces (bishop, rook, queen)
// =========================================================================

fn ray_moves(board: &Board, from: Square, us: Player, dirs: &[Direction], moves: &mut Vec<Square>) {
    for &dir in dirs {
        let mut to = from.offset(dir);
        loop {
            if board.is_empty(to) {
                moves.push(to);
            } else {
                if board.can_take(to, us) {
                    moves.push(to);
                }
                break;
            }
            to = to.offset(dir);
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, row: i32, col: i32, piece: Piece) -> Piece {
        board.set_piece(Square::at(row, col), Some(piece.clone())).unwrap();
        piece
    }

    #[test]
    fn piece_off_board_is_not_found() {
        let board = Board::empty();
        let rook = Piece::rook(Player::White);
        assert_eq!(rook.available_moves(&board), Err(ChessError::NotFound(rook.id())));
    }

    #[test]
    fn off_board_origin_has_no_moves() {
        let board = Board::empty();
        let origins = [
            Square::at(i32::MAX, 0),
            Square::at(0, i32::MIN),
            Square::at(i32::MIN, i32::MAX),
            Square::at(8, 3),
            Square::at(-1, -1),
        ];
        let pieces = [
            Piece::pawn(Player::White),
            Piece::pawn(Player::Black),
            Piece::knight(Player::White),
            Piece::bishop(Player::Black),
            Piece::rook(Player::White),
            Piece::queen(Player::Black),
            Piece::king(Player::White),
        ];
        for from in origins {
            for piece in &pieces {
                assert!(available_moves(&board, from, piece).is_empty(), "{piece} at {from}");
            }
        }
    }

    #[test]
    fn lone_rook_sees_fourteen_squares() {
        let mut board = Board::empty();
        let rook = place(&mut board, 3, 3, Piece::rook(Player::White));
        let moves = rook.available_moves(&board).unwrap();
        assert_eq!(moves.len(), 14);
        assert!(moves.iter().all(|s| s.row == 3 || s.col == 3));
    }

    #[test]
    fn lone_queen_in_centre() {
        let mut board = Board::empty();
        let queen = place(&mut board, 3, 3, Piece::queen(Player::Black));
        // 14 orthogonal + 13 diagonal from d4.
        assert_eq!(queen.available_moves(&board).unwrap().len(), 27);
    }

    #[test]
    fn ray_stops_at_board_edge() {
        let mut board = Board::empty();
        let bishop = place(&mut board, 7, 2, Piece::bishop(Player::White));
        let moves = bishop.available_moves(&board).unwrap();
        assert!(moves.iter().all(|&s| board.in_bounds(s)));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn king_in_corner_has_three_steps() {
        let mut board = Board::empty();
        let king = place(&mut board, 0, 0, Piece::king(Player::White));
        let mut moves = king.available_moves(&board).unwrap();
        moves.sort();
        assert_eq!(moves, vec![Square::at(0, 1), Square::at(1, 0), Square::at(1, 1)]);
    }

    #[test]
    fn knight_in_corner_has_two_leaps() {
        let mut board = Board::empty();
        let knight = place(&mut board, 7, 7, Piece::knight(Player::Black));
        let mut moves = knight.available_moves(&board).unwrap();
        moves.sort();
        assert_eq!(moves, vec![Square::at(5, 6), Square::at(6, 5)]);
    }

    #[test]
    fn pawn_blocked_directly_has_no_push() {
        let mut board = Board::empty();
        let pawn = place(&mut board, 1, 4, Piece::pawn(Player::White));
        place(&mut board, 2, 4, Piece::knight(Player::Black));
        assert!(pawn.available_moves(&board).unwrap().is_empty());
    }

    #[test]
    fn pawn_on_last_row_has_no_moves() {
        let mut board = Board::empty();
        let pawn = place(&mut board, 7, 4, Piece::pawn(Player::White));
        assert!(pawn.available_moves(&board).unwrap().is_empty());
    }

    #[test]
    fn side_moves_only_for_side_to_move() {
        let mut board = Board::empty();
        place(&mut board, 0, 0, Piece::king(Player::White));
        place(&mut board, 7, 7, Piece::king(Player::Black));

        let white = side_moves(&board);
        assert_eq!(white.len(), 3);
        assert!(white.iter().all(|m| m.from == Square::at(0, 0)));

        board.move_piece(Square::at(0, 0), Square::at(0, 1)).unwrap();
        let black = side_moves(&board);
        assert_eq!(black.len(), 3);
        assert!(black.iter().all(|m| m.from == Square::at(7, 7)));
    }
}
