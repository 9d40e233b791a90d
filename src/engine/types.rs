use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::config::BOARD_SIZE;
use crate::engine::directions::Direction;

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// The two sides in a chess game. White moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// The other side.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Direction a pawn of this side advances in.
    #[inline]
    pub const fn forward(self) -> Direction {
        match self {
            Player::White => Direction::NORTH,
            Player::Black => Direction::SOUTH,
        }
    }

    /// Row holding this side's pieces in the starting layout.
    #[inline]
    pub const fn back_row(self) -> i32 {
        match self {
            Player::White => 0,
            Player::Black => BOARD_SIZE - 1,
        }
    }

    /// Row holding this side's pawns in the starting layout.
    #[inline]
    pub const fn pawn_row(self) -> i32 {
        match self {
            Player::White => 1,
            Player::Black => BOARD_SIZE - 2,
        }
    }
}

impl std::ops::Not for Player {
    type Output = Self;
    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "white"),
            Player::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A (row, column) coordinate.
///
/// Coordinates are unbounded; whether a square lies on the board is decided
/// by [`Board::in_bounds`](super::board::Board::in_bounds).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    #[inline]
    pub const fn at(row: i32, col: i32) -> Self {
        Square { row, col }
    }

    /// The square `dir` away from this one. Coordinates saturate at the
    /// `i32` limits.
    #[inline]
    pub const fn offset(self, dir: Direction) -> Self {
        Square::at(
            self.row.saturating_add(dir.d_row),
            self.col.saturating_add(dir.d_col),
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Move / Relocation
// ---------------------------------------------------------------------------

/// A candidate move: origin and destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Metadata of a relocation being executed, handed to the moving piece so it
/// can update its own state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Relocation {
    pub from: Square,
    pub to: Square,
}

impl Relocation {
    pub fn new(from: Square, to: Square) -> Self {
        Relocation { from, to }
    }

    #[inline]
    pub fn row_delta(&self) -> i32 {
        self.to.row - self.from.row
    }

    #[inline]
    pub fn col_delta(&self) -> i32 {
        self.to.col - self.from.col
    }

    /// Exactly one row and one column.
    #[inline]
    pub fn is_single_diagonal(&self) -> bool {
        self.row_delta().abs() == 1 && self.col_delta().abs() == 1
    }

    /// The square beside the origin, on the side the move leans toward.
    /// This is where a pawn captured en passant stands.
    #[inline]
    pub fn beside_origin(&self) -> Square {
        Square::at(self.from.row, self.to.col)
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

static NEXT_PIECE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a piece, fixed for its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(u64);

impl PieceId {
    fn next() -> Self {
        PieceId(NEXT_PIECE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-pawn history flags, written only when the pawn is relocated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PawnState {
    /// Set by the pawn's first relocation and never cleared.
    pub has_moved: bool,
    /// Set when the most recent relocation on the board was this pawn
    /// advancing two rows.
    pub just_double_stepped: bool,
}

/// The six piece kinds. Only pawns carry state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn(PawnState),
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// A pawn that has never moved.
    pub const PAWN: PieceKind = PieceKind::Pawn(PawnState {
        has_moved: false,
        just_double_stepped: false,
    });

    #[inline]
    pub const fn is_pawn(self) -> bool {
        matches!(self, PieceKind::Pawn(_))
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn(_) => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A piece on (or destined for) a board.
///
/// A piece does not know its square; [`Board::find_piece`] recovers it from
/// the identity.
///
/// [`Board::find_piece`]: super::board::Board::find_piece
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    id: PieceId,
    owner: Player,
    kind: PieceKind,
}

impl Piece {
    /// Create a piece with a fresh identity.
    pub fn new(kind: PieceKind, owner: Player) -> Self {
        Piece {
            id: PieceId::next(),
            owner,
            kind,
        }
    }

    pub fn pawn(owner: Player) -> Self {
        Self::new(PieceKind::PAWN, owner)
    }

    pub fn knight(owner: Player) -> Self {
        Self::new(PieceKind::Knight, owner)
    }

    pub fn bishop(owner: Player) -> Self {
        Self::new(PieceKind::Bishop, owner)
    }

    pub fn rook(owner: Player) -> Self {
        Self::new(PieceKind::Rook, owner)
    }

    pub fn queen(owner: Player) -> Self {
        Self::new(PieceKind::Queen, owner)
    }

    pub fn king(owner: Player) -> Self {
        Self::new(PieceKind::King, owner)
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn owner(&self) -> Player {
        self.owner
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Pawn flags, or `None` for every other kind.
    #[inline]
    pub fn pawn_state(&self) -> Option<PawnState> {
        match self.kind {
            PieceKind::Pawn(state) => Some(state),
            _ => None,
        }
    }

    /// Mutable pawn flags, for staging positions by hand.
    #[inline]
    pub fn pawn_state_mut(&mut self) -> Option<&mut PawnState> {
        match &mut self.kind {
            PieceKind::Pawn(state) => Some(state),
            _ => None,
        }
    }

    /// True for a pawn whose double step was the last relocation on its board.
    #[inline]
    pub fn just_double_stepped(&self) -> bool {
        self.pawn_state().is_some_and(|s| s.just_double_stepped)
    }

    /// Apply the piece-local side effects of being relocated.
    ///
    /// Pawns become "moved" for good; the double-step flag is recomputed from
    /// this relocation alone. Other kinds are unaffected.
    pub fn record_relocation(&mut self, relocation: &Relocation) {
        if let PieceKind::Pawn(state) = &mut self.kind {
            state.has_moved = true;
            state.just_double_stepped = relocation.row_delta().abs() == 2;
        }
    }

    /// Forget a double step once another relocation has happened.
    #[inline]
    pub(crate) fn clear_double_step(&mut self) {
        if let PieceKind::Pawn(state) = &mut self.kind {
            state.just_double_stepped = false;
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.owner, self.kind)
    }
}

// ---------------------------------------------------------------------------
// ChessError
// ---------------------------------------------------------------------------

/// Domain errors for the board and move generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("piece {0} is not on the board")]
    NotFound(PieceId),

    #[error("square {0} is outside the board")]
    OutOfRange(Square),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
