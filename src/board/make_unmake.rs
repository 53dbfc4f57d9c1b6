use std::ops::{Deref, DerefMut};

use super::types::{Color, ColoredPiece, Coordinate, Move, Piece};
use super::Board;

impl Board {
    /// Apply a move in place.
    ///
    /// A pawn landing on its last rank becomes a queen of its color. A castling king move
    /// also carries its rook across.
    pub fn apply_move(&mut self, mv: Move) {
        let moved = mv.moved();
        let placed = if mv.is_promotion() {
            ColoredPiece::new(moved.color, Piece::Queen)
        } else {
            moved
        };
        self.set_field(mv.from(), None);
        self.set_field(mv.to(), Some(placed));

        if let Some(rook_leg) = mv.castle_rook_leg() {
            self.apply_move(rook_leg);
        }
    }

    /// Exactly undo [`Board::apply_move`] for the same move.
    pub fn revert_move(&mut self, mv: Move) {
        self.set_field(mv.to(), mv.captured());
        self.set_field(mv.from(), Some(mv.moved()));

        if let Some(rook_leg) = mv.castle_rook_leg() {
            self.revert_move(rook_leg);
        }
    }

    /// Clear the castling rights a real move forfeits.
    ///
    /// A king move clears both rights of its color. Any move starting or ending on a rook
    /// home corner clears that corner's right, whichever side made it.
    pub fn revoke_castling_rights(&mut self, mv: &Move) {
        if mv.moved().piece == Piece::King {
            self.castling.remove_all(mv.color());
        }
        for color in Color::BOTH {
            let rank = color.back_rank();
            for (column, short) in [(7, true), (0, false)] {
                let corner = Coordinate::new(column, rank);
                if mv.from() == corner || mv.to() == corner {
                    self.castling.remove(color, short);
                }
            }
        }
    }

    /// Apply `mv` and return a guard that reverts it when dropped.
    pub fn scoped_move(&mut self, mv: Move) -> AppliedMove<'_> {
        AppliedMove::new(self, mv)
    }
}

/// A move held applied on a borrowed board for the guard's lifetime.
///
/// Dereferences to the board so nested positions can be explored through it.
pub struct AppliedMove<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl<'a> AppliedMove<'a> {
    pub fn new(board: &'a mut Board, mv: Move) -> Self {
        board.apply_move(mv);
        AppliedMove { board, mv }
    }

    #[must_use]
    pub fn applied(&self) -> Move {
        self.mv
    }
}

impl Deref for AppliedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for AppliedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        self.board.revert_move(self.mv);
    }
}
