use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{Bitboard, Board, Move, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        let own_occ = self.occupied[color.index()].0;
        let targets = Bitboard(KNIGHT_ATTACKS[from.as_index()] & !own_occ);

        for to in targets.iter() {
            moves.push(Move::silent(from, to));
        }
    }
}
