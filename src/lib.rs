//! Bitboard-based chess position representation and legal move generation.
//!
//! This crate is the hard core a UCI engine or GUI sits on top of: a
//! `Board` that tracks piece placement, side to move, castling rights, the
//! en-passant target, and the halfmove/fullmove counters; a move generator
//! producing only legal moves; and a do/undo move stack with no history
//! cloning. It has no search, no evaluation, and no protocol layer — those
//! are external collaborators built on this API.
//!
//! # Example
//! ```
//! use chess_core::board::Board;
//!
//! let mut board = Board::starting();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let mut mv = board.parse_move("e2e4").unwrap();
//! board.do_move(&mut mv);
//! assert_eq!(board.side_to_move(), chess_core::board::Color::Black);
//! board.undo_move(mv);
//! assert_eq!(board.to_fen(), Board::starting().to_fen());
//! ```

pub mod board;
