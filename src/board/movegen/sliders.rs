use super::super::attack_tables::slider_attacks;
use super::super::{Bitboard, Board, Move, MoveList, Square};

/// Which sliding directions to combine for a piece's attack set.
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl Board {
    pub(crate) fn generate_slider_moves(&self, from: Square, slider: SliderType, moves: &mut MoveList) {
        let color = self.side_to_move();
        let own_occ = self.occupied[color.index()].0;
        let from_idx = from.as_index();
        let occ = self.all_occupied.0;

        let targets = match slider {
            SliderType::Bishop => slider_attacks(from_idx, occ, true),
            SliderType::Rook => slider_attacks(from_idx, occ, false),
            SliderType::Queen => slider_attacks(from_idx, occ, false) | slider_attacks(from_idx, occ, true),
        } & !own_occ;

        for to in Bitboard(targets).iter() {
            moves.push(Move::silent(from, to));
        }
    }
}
