use super::super::attacks::KING_OFFSETS;
use super::super::types::{ColoredPiece, Coordinate, Move, Piece};
use super::super::Board;

impl Board {
    pub(crate) fn generate_king_moves(
        &self,
        from: Coordinate,
        king: ColoredPiece,
        moves: &mut Vec<Move>,
    ) {
        for offset in KING_OFFSETS {
            let to = from + offset;
            if self.can_land_on(to, king) {
                moves.push(self.create_move(from, to, king));
            }
        }
        self.generate_castling_moves(from, king, moves);
    }

    /// Castles for either color. The landing square is left to the self-check filter.
    fn generate_castling_moves(&self, from: Coordinate, king: ColoredPiece, moves: &mut Vec<Move>) {
        let color = king.color;
        let rank = color.back_rank();
        if from != Coordinate::new(4, rank) {
            return;
        }

        let enemy = color.opponent();
        let at = |column| Coordinate::new(column, rank);
        let is_empty = |column| self.get(at(column)).is_none();
        let own_rook = |column| self.get(at(column)) == Some(ColoredPiece::new(color, Piece::Rook));
        let safe = |column| !self.is_attacked(at(column), enemy);

        if self.castling.has(color, true)
            && is_empty(5)
            && is_empty(6)
            && own_rook(7)
            && safe(4)
            && safe(5)
        {
            moves.push(Move::new(from, at(6), king, None));
        }
        if self.castling.has(color, false)
            && is_empty(1)
            && is_empty(2)
            && is_empty(3)
            && own_rook(0)
            && safe(4)
            && safe(3)
        {
            moves.push(Move::new(from, at(2), king, None));
        }
    }
}
