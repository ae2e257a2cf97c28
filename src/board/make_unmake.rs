//! Do/undo a move on a `Board`.
//!
//! `do_move` mutates the position and stamps the move with everything
//! `undo_move` needs to reverse it — no separate history stack.

use super::{bit_for_square, castle_bit, Board, Color, Move, Piece, Square};

impl Board {
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = bit_for_square(sq).0;
        self.pieces[color.index()][piece.index()].0 |= bit;
        self.occupied[color.index()].0 |= bit;
        self.all_occupied.0 |= bit;
        self.mailbox[sq.as_index()] = Some((color, piece));
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = bit_for_square(sq).0;
        self.pieces[color.index()][piece.index()].0 &= !bit;
        self.occupied[color.index()].0 &= !bit;
        self.all_occupied.0 &= !bit;
        self.mailbox[sq.as_index()] = None;
    }

    pub(crate) fn has_castling_right(&self, color: Color, kingside: bool) -> bool {
        self.castling_rights & castle_bit(color, if kingside { 'K' } else { 'Q' }) != 0
    }

    fn clear_castling_right(&mut self, color: Color, kingside: bool) {
        self.castling_rights &= !castle_bit(color, if kingside { 'K' } else { 'Q' });
    }

    /// Clears the rights a move structurally invalidates: a king move clears
    /// both of its side's rights; a rook move or capture on a1/h1/a8/h8
    /// clears that side's corresponding right. Rights only ever clear —
    /// nothing re-enables one.
    fn update_castling_rights(&mut self, m: Move, moving_piece: Piece, color: Color) {
        if moving_piece == Piece::King {
            self.clear_castling_right(color, true);
            self.clear_castling_right(color, false);
        } else if moving_piece == Piece::Rook {
            let home_rank = if color == Color::White { 0 } else { 7 };
            if m.from() == Square::new(home_rank, 0) {
                self.clear_castling_right(color, false);
            } else if m.from() == Square::new(home_rank, 7) {
                self.clear_castling_right(color, true);
            }
        }

        let opponent = color.opponent();
        let opp_home_rank = if opponent == Color::White { 0 } else { 7 };
        if m.to() == Square::new(opp_home_rank, 0) {
            self.clear_castling_right(opponent, false);
        } else if m.to() == Square::new(opp_home_rank, 7) {
            self.clear_castling_right(opponent, true);
        }
    }

    fn execute_castle(&mut self, m: Move, color: Color) {
        self.set_piece(m.to(), color, Piece::King);
        let (rook_from_file, rook_to_file) = if m.to().file() == 6 { (7, 5) } else { (0, 3) };
        let rank = m.to().rank();
        let rook_from = Square::new(rank, rook_from_file);
        let rook_to = Square::new(rank, rook_to_file);
        self.remove_piece(rook_from, color, Piece::Rook);
        self.set_piece(rook_to, color, Piece::Rook);
    }

    fn undo_castle(&mut self, m: Move, color: Color) {
        self.remove_piece(m.to(), color, Piece::King);
        self.set_piece(m.from(), color, Piece::King);
        let (rook_from_file, rook_to_file) = if m.to().file() == 6 { (7, 5) } else { (0, 3) };
        let rank = m.to().rank();
        let rook_from = Square::new(rank, rook_from_file);
        let rook_to = Square::new(rank, rook_to_file);
        self.remove_piece(rook_to, color, Piece::Rook);
        self.set_piece(rook_from, color, Piece::Rook);
    }

    fn en_passant_capture_square(m: Move, color: Color) -> Square {
        let capture_rank = if color == Color::White {
            m.to().rank() - 1
        } else {
            m.to().rank() + 1
        };
        Square::new(capture_rank, m.to().file())
    }

    /// Executes `m` on the position, stamping it with the undo information
    /// `undo_move` will need. The move must be pseudo-legal for the side to
    /// move; this does not check legality (no own-king-in-check filtering).
    pub fn do_move(&mut self, m: &mut Move) {
        let prior_castling = self.castling_rights();
        let prior_en_passant = self.en_passant_target;
        let prior_halfmove_clock = self.halfmove_clock;

        let color = self.side_to_move();
        let (_, moving_piece) = self
            .piece_at(m.from())
            .expect("do_move: source square is empty");

        let captured = if m.is_en_passant_capture() {
            let capture_sq = Self::en_passant_capture_square(*m, color);
            let captured = self.piece_at(capture_sq).map(|(_, p)| p);
            self.remove_piece(capture_sq, color.opponent(), Piece::Pawn);
            captured
        } else if m.is_castle() {
            None
        } else {
            let captured = self.piece_at(m.to()).map(|(_, p)| p);
            if let Some(captured_piece) = captured {
                self.remove_piece(m.to(), color.opponent(), captured_piece);
            }
            captured
        };

        self.remove_piece(m.from(), color, moving_piece);

        if m.is_castle() {
            self.execute_castle(*m, color);
        } else {
            let placed = m.promotion_piece().unwrap_or(moving_piece);
            self.set_piece(m.to(), color, placed);
        }

        self.update_castling_rights(*m, moving_piece, color);

        self.en_passant_target = None;
        if m.is_double_pawn_push() {
            let ep_rank = (m.from().rank() + m.to().rank()) / 2;
            self.en_passant_target = Some(Square::new(ep_rank, m.from().file()));
        }

        if moving_piece == Piece::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.white_to_move = !self.white_to_move;

        m.stamp_undo(prior_castling, prior_en_passant, prior_halfmove_clock, captured);
    }

    /// Reverses a move previously executed with `do_move`. `m` must be the
    /// same (stamped) record returned from the matching `do_move` call.
    pub fn undo_move(&mut self, m: Move) {
        self.white_to_move = !self.white_to_move;
        let color = self.side_to_move();
        if color == Color::Black {
            self.fullmove_number -= 1;
        }

        self.castling_rights = m.prior_castling().as_u8();
        self.en_passant_target = m.prior_en_passant();
        self.halfmove_clock = m.prior_halfmove_clock();

        if m.is_castle() {
            self.undo_castle(m, color);
            return;
        }

        let (_, piece_at_to) = self
            .piece_at(m.to())
            .expect("undo_move: destination square is empty");
        self.remove_piece(m.to(), color, piece_at_to);

        let restored_piece = if m.is_promotion() { Piece::Pawn } else { piece_at_to };
        self.set_piece(m.from(), color, restored_piece);

        if m.is_en_passant_capture() {
            if let Some(captured) = m.captured_piece() {
                let capture_sq = Self::en_passant_capture_square(m, color);
                self.set_piece(capture_sq, color.opponent(), captured);
            }
        } else if let Some(captured) = m.captured_piece() {
            self.set_piece(m.to(), color.opponent(), captured);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn do_undo_round_trips_starting_position() {
        let mut board = Board::starting();
        let before = board.to_fen();
        let mut m = Move::double_pawn_push(Square::new(1, 4), Square::new(3, 4));
        board.do_move(&mut m);
        assert_ne!(board.to_fen(), before);
        board.undo_move(m);
        assert_eq!(board.to_fen(), before);
    }

    #[test]
    fn castling_clears_both_rights_for_the_mover() {
        let mut board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let mut m = Move::short_castle(Square::new(0, 4), Square::new(0, 6));
        board.do_move(&mut m);
        assert!(!board.has_castling_right(Color::White, true));
        assert!(!board.has_castling_right(Color::White, false));
        assert!(board.has_castling_right(Color::Black, true));
        board.undo_move(m);
        assert!(board.has_castling_right(Color::White, true));
        assert!(board.has_castling_right(Color::White, false));
    }

    #[test]
    fn rook_capture_on_home_square_clears_opponent_right() {
        let mut board =
            Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let mut m = Move::silent(Square::new(0, 0), Square::new(7, 0));
        board.do_move(&mut m);
        assert!(!board.has_castling_right(Color::Black, false));
        board.check_invariants();
        assert_eq!(
            board.piece_at(Square::new(7, 0)),
            Some((Color::White, Piece::Rook))
        );
        assert!(!board.is_square_attacked(Square::new(3, 0), Color::Black));
        board.undo_move(m);
        assert!(board.has_castling_right(Color::Black, false));
        board.check_invariants();
    }
}
