use super::super::{Board, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        let dir: isize = if color == Color::White { 1 } else { -1 };
        let start_rank = if color == Color::White { 1 } else { 6 };
        let promotion_rank = if color == Color::White { 7 } else { 0 };

        let r = from.rank() as isize;
        let f = from.file() as isize;
        let forward_r = r + dir;

        if (0..8).contains(&forward_r) {
            let forward_sq = Square::new(forward_r as usize, f as usize);
            if self.is_empty(forward_sq) {
                if forward_sq.rank() == promotion_rank {
                    for &promo in &PROMOTION_PIECES {
                        moves.push(Move::promotion(from, forward_sq, promo));
                    }
                } else {
                    moves.push(Move::silent(from, forward_sq));
                    if r == start_rank as isize {
                        let double_r = r + 2 * dir;
                        let double_sq = Square::new(double_r as usize, f as usize);
                        if self.is_empty(double_sq) {
                            moves.push(Move::double_pawn_push(from, double_sq));
                        }
                    }
                }
            }

            for df in [-1isize, 1] {
                let capture_f = f + df;
                if !(0..8).contains(&capture_f) {
                    continue;
                }
                let target = Square::new(forward_r as usize, capture_f as usize);
                if let Some((target_color, _)) = self.piece_at(target) {
                    if target_color != color {
                        if target.rank() == promotion_rank {
                            for &promo in &PROMOTION_PIECES {
                                moves.push(Move::promotion(from, target, promo));
                            }
                        } else {
                            moves.push(Move::silent(from, target));
                        }
                    }
                } else if Some(target) == self.en_passant_target {
                    moves.push(Move::en_passant_capture(from, target));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_emits_all_four_pieces() {
        let mut board = Board::try_from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").unwrap();
        let mut moves = MoveList::new();
        board.generate_pawn_moves(Square::new(6, 0), &mut moves);
        assert_eq!(moves.len(), 4);
        for &piece in &PROMOTION_PIECES {
            assert!(moves
                .contains(Square::new(6, 0), Square::new(7, 0), Some(piece))
                .is_some());
        }
    }

    #[test]
    fn en_passant_target_produces_ep_capture() {
        let board = Board::try_from_fen("8/8/8/3pP3/8/8/8/k6K w - d6 0 1").unwrap();
        let mut moves = MoveList::new();
        board.generate_pawn_moves(Square::new(4, 4), &mut moves);
        let ep = moves.contains(Square::new(4, 4), Square::new(5, 3), None);
        assert!(ep.is_some());
        assert!(ep.unwrap().is_en_passant_capture());
    }
}
