//! Mailbox chess board.
//!
//! `Board` stores an 8×8 grid of optional pieces indexed `[row][col]` and the
//! side to move. It is a "dumb" board: [`Board::move_piece`] executes any
//! relocation it is given, and only the en-passant side effect and the pawn
//! flag bookkeeping make it chess-aware.

use tracing::debug;

use crate::config::{BACK_RANK, BOARD_SIZE};
use crate::engine::movegen;
use crate::engine::types::{ChessError, Piece, PieceId, Player, Relocation, Square};

type Grid = [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// The board and the pieces on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
    side_to_move: Player,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Board {
    /// A board with no pieces, White to move.
    pub fn empty() -> Self {
        Board {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| None)),
            side_to_move: Player::White,
        }
    }

    /// The standard 32-piece starting layout, White to move.
    pub fn at_starting_position() -> Self {
        let mut board = Self::empty();
        for player in [Player::White, Player::Black] {
            let back = player.back_row() as usize;
            let pawns = player.pawn_row() as usize;
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                board.cells[back][col] = Some(Piece::new(kind, player));
                board.cells[pawns][col] = Some(Piece::pawn(player));
            }
        }
        board
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Is `square` on the board?
    #[inline]
    pub fn in_bounds(&self, square: Square) -> bool {
        (0..BOARD_SIZE).contains(&square.row) && (0..BOARD_SIZE).contains(&square.col)
    }

    /// Whose turn it is.
    #[inline]
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    /// The occupant of `square`.
    pub fn get_piece(&self, square: Square) -> Result<Option<&Piece>, ChessError> {
        let (row, col) = self.index(square)?;
        Ok(self.cells[row][col].as_ref())
    }

    /// Mutable access to the occupant of `square`.
    pub fn get_piece_mut(&mut self, square: Square) -> Result<Option<&mut Piece>, ChessError> {
        let (row, col) = self.index(square)?;
        Ok(self.cells[row][col].as_mut())
    }

    /// Is `square` on the board and unoccupied?
    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.index(square)
            .is_ok_and(|(row, col)| self.cells[row][col].is_none())
    }

    /// Is `square` on the board and held by a piece `mover` may capture?
    #[inline]
    pub fn can_take(&self, square: Square, mover: Player) -> bool {
        self.occupant(square).is_some_and(|p| p.owner() != mover)
    }

    /// Locate a piece by identity, scanning rows then columns upward.
    pub fn find_piece(&self, id: PieceId) -> Result<Square, ChessError> {
        self.pieces()
            .find(|(_, piece)| piece.id() == id)
            .map(|(square, _)| square)
            .ok_or(ChessError::NotFound(id))
    }

    /// All occupied squares with their pieces, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.as_ref()
                    .map(|piece| (Square::at(row as i32, col as i32), piece))
            })
        })
    }

    /// Candidate destinations for whatever stands on `square`.
    ///
    /// Empty when the square is unoccupied.
    pub fn available_moves_at(&self, square: Square) -> Result<Vec<Square>, ChessError> {
        Ok(match self.get_piece(square)? {
            Some(piece) => movegen::available_moves(self, square, piece),
            None => Vec::new(),
        })
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Write a cell directly, returning what was there. No chess validation.
    pub fn set_piece(
        &mut self,
        square: Square,
        piece: Option<Piece>,
    ) -> Result<Option<Piece>, ChessError> {
        let (row, col) = self.index(square)?;
        Ok(std::mem::replace(&mut self.cells[row][col], piece))
    }

    /// Relocate the piece on `from` to `to` and pass the turn.
    ///
    /// Any geometry is accepted. A pawn of the side to move stepping one
    /// square diagonally onto an empty square captures an opposing pawn
    /// beside its origin if that pawn's double step was the previous
    /// relocation. The side to move flips once per call, even when `from`
    /// is empty. Returns the captured piece, if any.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<Piece>, ChessError> {
        let (from_row, from_col) = self.index(from)?;
        let (to_row, to_col) = self.index(to)?;
        let relocation = Relocation::new(from, to);

        let en_passant_victim = self.en_passant_victim(&relocation);
        self.clear_double_steps();

        let mut captured = None;
        if let Some(victim) = en_passant_victim {
            captured = self.set_piece(victim, None)?;
            debug!(%from, %to, %victim, "en passant capture");
        }

        if let Some(mut mover) = self.cells[from_row][from_col].take() {
            mover.record_relocation(&relocation);
            debug!(%from, %to, piece = %mover, "relocating piece");
            if let Some(taken) = self.cells[to_row][to_col].replace(mover) {
                captured = Some(taken);
            }
        } else {
            debug!(%from, %to, "no piece to relocate");
        }

        self.side_to_move = self.side_to_move.opponent();
        Ok(captured)
    }

    /// Look a piece up by identity, then [`move_piece`](Self::move_piece) it.
    pub fn move_piece_by_id(&mut self, id: PieceId, to: Square) -> Result<Option<Piece>, ChessError> {
        let from = self.find_piece(id)?;
        self.move_piece(from, to)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn index(&self, square: Square) -> Result<(usize, usize), ChessError> {
        if self.in_bounds(square) {
            Ok((square.row as usize, square.col as usize))
        } else {
            Err(ChessError::OutOfRange(square))
        }
    }

    /// Total read: off-board squares hold nothing.
    pub(crate) fn occupant(&self, square: Square) -> Option<&Piece> {
        self.index(square)
            .ok()
            .and_then(|(row, col)| self.cells[row][col].as_ref())
    }

    /// The square of the pawn an en-passant relocation would capture.
    fn en_passant_victim(&self, relocation: &Relocation) -> Option<Square> {
        let mover = self.occupant(relocation.from)?;
        if mover.owner() != self.side_to_move
            || !mover.kind().is_pawn()
            || !relocation.is_single_diagonal()
            || !self.is_empty(relocation.to)
        {
            return None;
        }
        let beside = relocation.beside_origin();
        self.occupant(beside)
            .filter(|p| p.owner() != mover.owner() && p.just_double_stepped())
            .map(|_| beside)
    }

    fn clear_double_steps(&mut self) {
        for piece in self.cells.iter_mut().flatten().flatten() {
            piece.clear_double_step();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
