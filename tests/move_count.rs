//! Move counting from the starting position.
//!
//! Leaf counts of a full move-tree walk (perft). Up to depth 3 no move can
//! leave a king attacked and no en-passant or promotion can arise, so the
//! geometric candidates match the published legal counts.
//!
//! Reference: <https://www.chessprogramming.org/Perft_Results>

use chess_core::engine::movegen::side_moves;
use chess_core::engine::{Board, PieceKind, Player, Square};

/// Recursive perft: count leaf nodes at `depth`.
fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = side_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0u64;
    for mv in moves {
        let mut child = board.clone();
        child.move_piece(mv.from, mv.to).unwrap();
        nodes += perft(&child, depth - 1);
    }
    nodes
}

#[test]
fn perft_start_depth_1() {
    let board = Board::at_starting_position();
    assert_eq!(perft(&board, 1), 20);
}

#[test]
fn perft_start_depth_2() {
    let board = Board::at_starting_position();
    assert_eq!(perft(&board, 2), 400);
}

#[test]
fn perft_start_depth_3() {
    let board = Board::at_starting_position();
    assert_eq!(perft(&board, 3), 8_902);
}

#[test]
fn starting_moves_come_from_pawns_and_knights() {
    let board = Board::at_starting_position();
    for (square, piece) in board.pieces() {
        let count = board.available_moves_at(square).unwrap().len();
        let expected = match piece.kind() {
            PieceKind::Pawn(_) => 2,
            PieceKind::Knight => 2,
            _ => 0,
        };
        assert_eq!(count, expected, "{piece} on {square}");
    }
}

#[test]
fn black_replies_mirror_white_openings() {
    let mut board = Board::at_starting_position();
    board.move_piece(Square::at(1, 4), Square::at(3, 4)).unwrap();
    assert_eq!(board.side_to_move(), Player::Black);

    let replies = side_moves(&board);
    assert_eq!(replies.len(), 20);
    assert!(replies.iter().all(|m| m.from.row >= 6));
}
