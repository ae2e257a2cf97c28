//! Chess board representation and legal move generation.
//!
//! Uses bitboards (with an auxiliary mailbox for O(1) point queries) for
//! position representation, and a do/undo move stack rather than a history
//! of cloned positions. Supports the full core chess rules: castling, en
//! passant, and promotion.
//!
//! # Example
//! ```
//! use chess_core::board::Board;
//!
//! let mut board = Board::starting();
//! let moves = board.generate_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod builder;
mod error;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use state::Board;
pub use types::{Bitboard, CastlingRights, Color, Move, MoveFlag, MoveList, MoveListIntoIter, Piece, Square};

pub(crate) use types::{
    bit_for_square, castle_bit, file_to_index, rank_to_index, CASTLE_BLACK_K, CASTLE_BLACK_Q,
    CASTLE_WHITE_K, CASTLE_WHITE_Q, MAX_MOVES, PROMOTION_PIECES,
};
