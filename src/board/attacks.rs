//! Square attack detection.

use super::types::{Color, ColoredPiece, Coordinate, Piece};
use super::Board;

pub(crate) const ORTHOGONAL: [Coordinate; 4] = [
    Coordinate::new(0, 1),
    Coordinate::new(1, 0),
    Coordinate::new(0, -1),
    Coordinate::new(-1, 0),
];

pub(crate) const DIAGONAL: [Coordinate; 4] = [
    Coordinate::new(1, 1),
    Coordinate::new(1, -1),
    Coordinate::new(-1, -1),
    Coordinate::new(-1, 1),
];

pub(crate) const KNIGHT_OFFSETS: [Coordinate; 8] = [
    Coordinate::new(1, 2),
    Coordinate::new(2, 1),
    Coordinate::new(2, -1),
    Coordinate::new(1, -2),
    Coordinate::new(-1, -2),
    Coordinate::new(-2, -1),
    Coordinate::new(-2, 1),
    Coordinate::new(-1, 2),
];

pub(crate) const KING_OFFSETS: [Coordinate; 8] = [
    Coordinate::new(0, 1),
    Coordinate::new(1, 1),
    Coordinate::new(1, 0),
    Coordinate::new(1, -1),
    Coordinate::new(0, -1),
    Coordinate::new(-1, -1),
    Coordinate::new(-1, 0),
    Coordinate::new(-1, 1),
];

impl Board {
    /// Whether any piece of `by` attacks `target`. Does not consider pins.
    #[must_use]
    pub fn is_attacked(&self, target: Coordinate, by: Color) -> bool {
        let holds = |sq: Coordinate, piece: Piece| {
            sq.is_on_board() && self.get(sq) == Some(ColoredPiece::new(by, piece))
        };

        // Pawns capture forward, so an attacker sits one step behind the target.
        let behind = -by.pawn_direction();
        if holds(target + Coordinate::new(-1, behind), Piece::Pawn)
            || holds(target + Coordinate::new(1, behind), Piece::Pawn)
        {
            return true;
        }

        if KNIGHT_OFFSETS
            .iter()
            .any(|&offset| holds(target + offset, Piece::Knight))
        {
            return true;
        }

        if KING_OFFSETS
            .iter()
            .any(|&offset| holds(target + offset, Piece::King))
        {
            return true;
        }

        self.slider_attacks(target, by, &ORTHOGONAL, Piece::attacks_straight)
            || self.slider_attacks(target, by, &DIAGONAL, Piece::attacks_diagonally)
    }

    /// Whether `attacker` gives check to the other color's king.
    ///
    /// # Panics
    /// Panics if the defending king is missing.
    #[must_use]
    pub fn is_checked_by(&self, attacker: Color) -> bool {
        self.is_attacked(self.king_square(attacker.opponent()), attacker)
    }

    /// Whether `color`'s own king is attacked.
    #[inline]
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_checked_by(color.opponent())
    }

    /// Whether a ray from `target` first meets a `by` piece that `fits` the ray.
    fn slider_attacks(
        &self,
        target: Coordinate,
        by: Color,
        directions: &[Coordinate],
        fits: fn(Piece) -> bool,
    ) -> bool {
        directions.iter().any(|&dir| {
            matches!(
                self.first_piece_along(target, dir),
                Some((_, cp)) if cp.color == by && fits(cp.piece)
            )
        })
    }

    /// First occupied square reached walking from `origin` (exclusive) along `direction`.
    pub(crate) fn first_piece_along(
        &self,
        origin: Coordinate,
        direction: Coordinate,
    ) -> Option<(Coordinate, ColoredPiece)> {
        let mut sq = origin;
        loop {
            sq.translate(direction);
            if !sq.is_on_board() {
                return None;
            }
            if let Some(cp) = self.get(sq) {
                return Some((sq, cp));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    fn sq(column: i8, row: i8) -> Coordinate {
        Coordinate::new(column, row)
    }

    fn kings_with(pieces: &[(Coordinate, Color, Piece)]) -> Board {
        let mut builder = BoardBuilder::new()
            .piece(sq(7, 0), Color::White, Piece::King)
            .piece(sq(7, 7), Color::Black, Piece::King);
        for &(square, color, piece) in pieces {
            builder = builder.piece(square, color, piece);
        }
        builder.no_castling_rights().build().unwrap()
    }

    #[test]
    fn test_pawn_attack_direction_depends_on_color() {
        let board = kings_with(&[
            (sq(3, 3), Color::White, Piece::Pawn),
            (sq(3, 5), Color::Black, Piece::Pawn),
        ]);
        // White pawn on d4 hits c5 and e5, not c3.
        assert!(board.is_attacked(sq(2, 4), Color::White));
        assert!(board.is_attacked(sq(4, 4), Color::White));
        assert!(!board.is_attacked(sq(2, 2), Color::White));
        // Black pawn on d6 hits c5 and e5 downwards, not the squares above.
        assert!(board.is_attacked(sq(2, 4), Color::Black));
        assert!(!board.is_attacked(sq(2, 6), Color::Black));
        // Straight ahead is never a pawn attack.
        assert!(!board.is_attacked(sq(3, 4), Color::White));
    }

    #[test]
    fn test_slider_blocked_by_first_piece() {
        let board = kings_with(&[
            (sq(0, 0), Color::Black, Piece::Rook),
            (sq(0, 3), Color::White, Piece::Knight),
        ]);
        assert!(board.is_attacked(sq(0, 2), Color::Black));
        assert!(board.is_attacked(sq(0, 3), Color::Black));
        assert!(!board.is_attacked(sq(0, 5), Color::Black));
        assert!(board.is_attacked(sq(5, 0), Color::Black));
    }

    #[test]
    fn test_slider_ray_must_fit_piece() {
        let board = kings_with(&[(sq(2, 2), Color::Black, Piece::Bishop)]);
        assert!(board.is_attacked(sq(4, 4), Color::Black));
        assert!(!board.is_attacked(sq(2, 5), Color::Black));

        let board = kings_with(&[(sq(2, 2), Color::Black, Piece::Queen)]);
        assert!(board.is_attacked(sq(4, 4), Color::Black));
        assert!(board.is_attacked(sq(2, 5), Color::Black));
    }

    #[test]
    fn test_knight_and_king_offsets() {
        let board = kings_with(&[(sq(3, 3), Color::White, Piece::Knight)]);
        assert!(board.is_attacked(sq(4, 5), Color::White));
        assert!(board.is_attacked(sq(1, 2), Color::White));
        assert!(!board.is_attacked(sq(4, 4), Color::White));

        // The black king on h8 covers g7.
        assert!(board.is_attacked(sq(6, 6), Color::Black));
        assert!(!board.is_attacked(sq(5, 5), Color::Black));
    }

    #[test]
    fn test_check_queries() {
        let board = kings_with(&[(sq(7, 4), Color::Black, Piece::Rook)]);
        assert!(board.is_checked_by(Color::Black));
        assert!(board.is_in_check(Color::White));
        assert!(!board.is_in_check(Color::Black));
        assert!(!Board::starting().is_in_check(Color::White));
    }
}
