//! Offset vocabulary for stepping and sliding pieces.
//!
//! "North" is toward increasing row (White's forward direction), "east" is
//! toward increasing column.

use serde::{Deserialize, Serialize};

/// A (row, column) offset applied to a [`Square`](super::types::Square).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub d_row: i32,
    pub d_col: i32,
}

impl Direction {
    pub const NORTH: Direction = Direction::new(1, 0);
    pub const SOUTH: Direction = Direction::new(-1, 0);
    pub const EAST: Direction = Direction::new(0, 1);
    pub const WEST: Direction = Direction::new(0, -1);

    pub const NORTH_EAST: Direction = Direction::new(1, 1);
    pub const NORTH_WEST: Direction = Direction::new(1, -1);
    pub const SOUTH_EAST: Direction = Direction::new(-1, 1);
    pub const SOUTH_WEST: Direction = Direction::new(-1, -1);

    #[inline]
    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Direction { d_row, d_col }
    }

    /// Sum of two offsets.
    #[inline]
    pub const fn combined(self, other: Direction) -> Self {
        Direction::new(self.d_row + other.d_row, self.d_col + other.d_col)
    }
}

/// Rook rays.
pub const ORTHOGONALS: [Direction; 4] = [
    Direction::NORTH,
    Direction::SOUTH,
    Direction::EAST,
    Direction::WEST,
];

/// Bishop rays.
pub const DIAGONALS: [Direction; 4] = [
    Direction::NORTH_EAST,
    Direction::NORTH_WEST,
    Direction::SOUTH_EAST,
    Direction::SOUTH_WEST,
];

/// Queen rays and king steps.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::NORTH,
    Direction::SOUTH,
    Direction::EAST,
    Direction::WEST,
    Direction::NORTH_EAST,
    Direction::NORTH_WEST,
    Direction::SOUTH_EAST,
    Direction::SOUTH_WEST,
];

/// The eight knight leaps.
pub const KNIGHT_LEAPS: [Direction; 8] = [
    Direction::new(2, -1),
    Direction::new(2, 1),
    Direction::new(1, 2),
    Direction::new(-1, 2),
    Direction::new(-2, -1),
    Direction::new(-2, 1),
    Direction::new(1, -2),
    Direction::new(-1, -2),
];
