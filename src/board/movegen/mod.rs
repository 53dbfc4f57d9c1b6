mod kings;
mod knights;
mod pawns;
mod sliders;

use super::types::{Color, ColoredPiece, Coordinate, Move, Piece, SquareState};
use super::Board;

impl Board {
    /// Legal moves of the piece on `from`; empty when the square is empty or off-board.
    ///
    /// Takes `&mut self` because every candidate is tried on the board and reverted.
    pub fn legal_moves_from(&mut self, from: Coordinate) -> Vec<Move> {
        let Some(piece) = self.piece_at(from).occupant() else {
            return Vec::new();
        };
        let mut moves = Vec::new();
        self.generate_piece_moves(from, piece, &mut moves);
        self.retain_legal(piece.color, &mut moves);
        moves
    }

    /// Legal moves of every piece of `color`, squares visited A1 first, row by row.
    pub fn legal_moves_for(&mut self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        let own: Vec<(Coordinate, ColoredPiece)> =
            self.pieces().filter(|(_, cp)| cp.color == color).collect();
        for (from, piece) in own {
            self.generate_piece_moves(from, piece, &mut moves);
        }
        self.retain_legal(color, &mut moves);
        moves
    }

    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_in_check(color) && self.legal_moves_for(color).is_empty()
    }

    pub fn is_stalemate(&mut self, color: Color) -> bool {
        !self.is_in_check(color) && self.legal_moves_for(color).is_empty()
    }

    /// Drop candidates that leave `color`'s king attacked.
    fn retain_legal(&mut self, color: Color, moves: &mut Vec<Move>) {
        moves.retain(|&mv| {
            let probe = self.scoped_move(mv);
            !probe.is_in_check(color)
        });
    }

    fn generate_piece_moves(&self, from: Coordinate, piece: ColoredPiece, moves: &mut Vec<Move>) {
        match piece.piece {
            Piece::Pawn => self.generate_pawn_moves(from, piece, moves),
            Piece::Knight => self.generate_knight_moves(from, piece, moves),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.generate_sliding_moves(from, piece, moves);
            }
            Piece::King => self.generate_king_moves(from, piece, moves),
        }
    }

    /// Candidate from `from` to `to`, capturing whatever stands on `to`.
    fn create_move(&self, from: Coordinate, to: Coordinate, piece: ColoredPiece) -> Move {
        Move::new(from, to, piece, self.get(to))
    }

    /// Whether `piece` may step onto `to`: on the board and empty or enemy-held.
    fn can_land_on(&self, to: Coordinate, piece: ColoredPiece) -> bool {
        match self.color_at(to) {
            SquareState::OffBoard => false,
            SquareState::Empty => true,
            SquareState::Occupied(owner) => owner != piece.color,
        }
    }
}
