//! Move type.

use std::fmt;

use super::coordinate::Coordinate;
use super::piece::{Color, ColoredPiece, Piece};

/// A move as the pair of square changes it makes.
///
/// Origin: `moved` -> empty. Destination: `captured` (or empty) -> `moved`.
/// Reapplying both old values undoes the move; promotion and castling are
/// handled by the board when applying and reverting.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    from: Coordinate,
    to: Coordinate,
    moved: ColoredPiece,
    captured: Option<ColoredPiece>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(
        from: Coordinate,
        to: Coordinate,
        moved: ColoredPiece,
        captured: Option<ColoredPiece>,
    ) -> Self {
        Move {
            from,
            to,
            moved,
            captured,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Coordinate {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Coordinate {
        self.to
    }

    /// The piece standing on the origin before the move
    #[inline]
    #[must_use]
    pub const fn moved(self) -> ColoredPiece {
        self.moved
    }

    /// The piece standing on the destination before the move
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<ColoredPiece> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.moved.color
    }

    /// Returns true if this is a pawn move onto its last rank
    #[must_use]
    pub fn is_promotion(self) -> bool {
        self.moved.piece == Piece::Pawn && self.to.row() == self.moved.color.pawn_promotion_rank()
    }

    /// The rook leg paired with this move when it is a castle, `None` otherwise.
    ///
    /// A castle is a king move from its home square two columns along its back rank;
    /// the rook goes from the corner to the square the king passed over.
    #[must_use]
    pub fn castle_rook_leg(self) -> Option<Move> {
        if self.moved.piece != Piece::King {
            return None;
        }
        let rank = self.moved.color.back_rank();
        if self.from != Coordinate::new(4, rank) || self.to.row() != rank {
            return None;
        }
        let (rook_from, rook_to) = match self.to.column() {
            6 => (7, 5),
            2 => (0, 3),
            _ => return None,
        };
        Some(Move::new(
            Coordinate::new(rook_from, rank),
            Coordinate::new(rook_to, rank),
            ColoredPiece::new(self.moved.color, Piece::Rook),
            None,
        ))
    }

    #[inline]
    #[must_use]
    pub fn is_castle(self) -> bool {
        self.castle_rook_leg().is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.from, self.to)
    }
}
