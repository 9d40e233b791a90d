pub mod board;
pub mod directions;
pub mod movegen;
pub mod types;

pub use board::Board;
pub use directions::Direction;
pub use movegen::{available_moves, side_moves};
pub use types::*;
