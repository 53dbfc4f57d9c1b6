use super::super::types::{ColoredPiece, Coordinate, Move, SquareState};
use super::super::Board;

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Coordinate,
        pawn: ColoredPiece,
        moves: &mut Vec<Move>,
    ) {
        let color = pawn.color;
        let dir = color.pawn_direction();

        let one = from + Coordinate::new(0, dir);
        if self.piece_at(one).is_empty() {
            moves.push(self.create_move(from, one, pawn));

            let two = one + Coordinate::new(0, dir);
            if from.row() == color.pawn_start_rank() && self.piece_at(two).is_empty() {
                moves.push(self.create_move(from, two, pawn));
            }
        }

        for side in [-1, 1] {
            let to = from + Coordinate::new(side, dir);
            if self.color_at(to) == SquareState::Occupied(color.opponent()) {
                moves.push(self.create_move(from, to, pawn));
            }
        }
    }
}
