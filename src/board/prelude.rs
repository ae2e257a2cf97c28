//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_core::board::prelude::*;
//! ```

pub use super::{
    Bitboard, Board, BoardBuilder, CastlingRights, Color, FenError, Move, MoveFlag, MoveList,
    MoveParseError, Piece, Square, SquareError,
};
