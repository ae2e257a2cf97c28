//! Legal move generation.
//!
//! Generation itself is pseudo-legal per piece type (see `pawns`, `knights`,
//! `kings`, `sliders`); `generate_moves` filters to legal moves by doing
//! each pseudo-legal move, checking whether the mover's own king is in
//! check, and undoing it. This is the only legality filter in the crate —
//! no move generator here reasons about pins or discovered checks directly.

mod kings;
mod knights;
mod pawns;
mod sliders;

use self::sliders::SliderType;
use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    fn generate_pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move();
        let c_idx = color.index();

        for from in self.pieces[c_idx][Piece::Pawn.index()].iter() {
            self.generate_pawn_moves(from, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::Knight.index()].iter() {
            self.generate_knight_moves(from, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::Bishop.index()].iter() {
            self.generate_slider_moves(from, SliderType::Bishop, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::Rook.index()].iter() {
            self.generate_slider_moves(from, SliderType::Rook, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::Queen.index()].iter() {
            self.generate_slider_moves(from, SliderType::Queen, &mut moves);
        }
        for from in self.pieces[c_idx][Piece::King.index()].iter() {
            self.generate_king_moves(from, &mut moves);
        }
        moves
    }

    /// All pseudo-legal moves for the side to move, before own-king-in-check
    /// filtering. Exposed for callers (e.g. perft divide, UCI layers) that
    /// want to filter or order moves themselves.
    #[must_use]
    pub fn generate_pseudo_moves(&self) -> MoveList {
        self.generate_pseudo_legal_moves()
    }

    /// All legal moves for the side to move.
    #[must_use]
    pub fn generate_moves(&mut self) -> MoveList {
        let mover = self.side_to_move();
        let opponent = mover.opponent();
        let pseudo = self.generate_pseudo_legal_moves();
        let mut legal = MoveList::new();

        for &m in &pseudo {
            if m.is_castle() {
                let king_start = m.from();
                let king_mid = Square::new(m.from().rank(), (m.from().file() + m.to().file()) / 2);
                let king_end = m.to();
                if self.is_square_attacked(king_start, opponent)
                    || self.is_square_attacked(king_mid, opponent)
                    || self.is_square_attacked(king_end, opponent)
                {
                    continue;
                }
            }

            let mut m = m;
            self.do_move(&mut m);
            let still_legal = !self.is_in_check(mover);
            self.undo_move(m);
            if still_legal {
                legal.push(m);
            }
        }
        legal
    }

    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        let color = self.side_to_move();
        self.is_in_check(color) && self.generate_moves().is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        let color = self.side_to_move();
        !self.is_in_check(color) && self.generate_moves().is_empty()
    }

    /// Recursive legal-move count to depth `depth`, used to validate move
    /// generation (castling, en passant, promotion, check-filtering) against
    /// known node counts.
    #[must_use]
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0u64;
        for &m in &moves {
            let mut m = m;
            self.do_move(&mut m);
            nodes += self.perft(depth - 1);
            self.undo_move(m);
        }
        #[cfg(feature = "logging")]
        log::trace!("perft depth {depth}: {nodes} nodes");
        nodes
    }

    /// Per-root-move leaf counts at `depth - 1`, in generation order — the
    /// building block for a perft-divide comparison against a reference
    /// engine when the aggregate count disagrees.
    #[must_use]
    pub fn perft_divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        let moves = self.generate_moves();
        let mut result = Vec::with_capacity(moves.len());
        for &m in &moves {
            let mut m = m;
            self.do_move(&mut m);
            let nodes = if depth <= 1 { 1 } else { self.perft(depth - 1) };
            self.undo_move(m);
            result.push((m, nodes));
        }
        result
    }
}
