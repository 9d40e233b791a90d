//! Chess position model: an 8×8 board of pieces and, per piece kind, the
//! squares it may move to.
//!
//! ```
//! use chess_core::engine::{Board, Piece, Player, Square};
//!
//! let mut board = Board::empty();
//! let knight = Piece::knight(Player::White);
//! board.set_piece(Square::at(3, 4), Some(knight.clone())).unwrap();
//!
//! let moves = knight.available_moves(&board).unwrap();
//! assert_eq!(moves.len(), 8);
//!
//! board.move_piece(Square::at(3, 4), moves[0]).unwrap();
//! assert_eq!(board.side_to_move(), Player::Black);
//! ```

pub mod config;
pub mod engine;
