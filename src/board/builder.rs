//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece instead of filling a snapshot grid.
//!
//! # Example
//! ```
//! use minimax_chess::board::{BoardBuilder, Color, Coordinate, Piece};
//!
//! let board = BoardBuilder::new()
//!     .piece(Coordinate::new(4, 0), Color::White, Piece::King)
//!     .piece(Coordinate::new(4, 7), Color::Black, Piece::King)
//!     .piece(Coordinate::new(0, 1), Color::White, Piece::Pawn)
//!     .no_castling_rights()
//!     .build()
//!     .unwrap();
//! assert_eq!(board.king_square(Color::Black), Coordinate::new(4, 7));
//! ```

use super::error::BoardError;
use super::snapshot::BoardSnapshot;
use super::types::{CastlingRights, Color, ColoredPiece, Coordinate, Piece};
use super::Board;

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Coordinate, ColoredPiece)>,
    castling: CastlingRights,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder with every castling right set.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            castling: CastlingRights::all(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let snapshot = BoardSnapshot::starting();
        let mut builder = Self::new();
        for sq in Coordinate::all() {
            if let Some(cp) = snapshot.squares[sq.row() as usize][sq.column() as usize] {
                builder.pieces.push((sq, cp));
            }
        }
        builder
    }

    /// Place a piece on the board, replacing whatever stood there.
    ///
    /// Off-board squares make [`BoardBuilder::build`] fail with [`BoardError::OffBoard`].
    #[must_use]
    pub fn piece(mut self, square: Coordinate, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, ColoredPiece::new(color, piece)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Coordinate) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::none();
        self
    }

    /// Build the board, checking that every piece is on the board and each color has
    /// exactly one king.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut snapshot = BoardSnapshot::empty();
        snapshot.castling = self.castling;
        for (square, cp) in self.pieces {
            if !square.is_on_board() {
                return Err(BoardError::OffBoard { square });
            }
            snapshot.squares[square.row() as usize][square.column() as usize] = Some(cp);
        }
        Board::from_snapshot(&snapshot)
    }
}
