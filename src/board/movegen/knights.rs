use super::super::attacks::KNIGHT_OFFSETS;
use super::super::types::{ColoredPiece, Coordinate, Move};
use super::super::Board;

impl Board {
    pub(crate) fn generate_knight_moves(
        &self,
        from: Coordinate,
        knight: ColoredPiece,
        moves: &mut Vec<Move>,
    ) {
        for offset in KNIGHT_OFFSETS {
            let to = from + offset;
            if self.can_land_on(to, knight) {
                moves.push(self.create_move(from, to, knight));
            }
        }
    }
}
