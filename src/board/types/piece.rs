//! Piece, color and square-content types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::BoardError;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Material value in tenths of a pawn: pawn 10, minor 30, rook 50, queen 90.
    ///
    /// The king is never captured in a legal game and is worth nothing here.
    #[inline]
    #[must_use]
    pub const fn material(self) -> i32 {
        match self {
            Piece::Pawn => 10,
            Piece::Knight | Piece::Bishop => 30,
            Piece::Rook => 50,
            Piece::Queen => 90,
            Piece::King => 0,
        }
    }

    /// Returns true if this piece can attack diagonally (Bishop, Queen)
    #[inline]
    #[must_use]
    pub const fn attacks_diagonally(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Queen)
    }

    /// Returns true if this piece can attack along ranks/files (Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn attacks_straight(self) -> bool {
        matches!(self, Piece::Rook | Piece::Queen)
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors (White first)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_promotion_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece together with its owner.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColoredPiece {
    pub color: Color,
    pub piece: Piece,
}

impl ColoredPiece {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, piece: Piece) -> Self {
        ColoredPiece { color, piece }
    }

    /// Character with case based on color (uppercase for White)
    #[must_use]
    pub fn to_char(self) -> char {
        let c = self.piece.to_char();
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

/// Content of a board query: off-board, an empty square, or a piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceCode {
    Invalid,
    Empty,
    Occupied(ColoredPiece),
}

// Numeric wire encoding: 0 invalid, 1 empty, then pawn/rook/knight/bishop/queen/king
// for White (2..=7) and Black (8..=13).
const WIRE_ORDER: [Piece; 6] = [
    Piece::Pawn,
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
];

impl PieceCode {
    #[inline]
    #[must_use]
    pub const fn piece(color: Color, piece: Piece) -> Self {
        PieceCode::Occupied(ColoredPiece::new(color, piece))
    }

    /// The piece on the square, if any.
    #[inline]
    #[must_use]
    pub const fn occupant(self) -> Option<ColoredPiece> {
        match self {
            PieceCode::Occupied(cp) => Some(cp),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, PieceCode::Empty)
    }

    /// Classify the code by owner.
    #[inline]
    #[must_use]
    pub const fn state(self) -> SquareState {
        match self {
            PieceCode::Invalid => SquareState::OffBoard,
            PieceCode::Empty => SquareState::Empty,
            PieceCode::Occupied(cp) => SquareState::Occupied(cp.color),
        }
    }

    /// Numeric code compatible with the host's integer board encoding.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            PieceCode::Invalid => 0,
            PieceCode::Empty => 1,
            PieceCode::Occupied(cp) => {
                let offset = match cp.color {
                    Color::White => 2,
                    Color::Black => 8,
                };
                let idx = WIRE_ORDER
                    .iter()
                    .position(|&p| p == cp.piece)
                    .unwrap_or_default();
                offset + idx as u8
            }
        }
    }
}

impl From<Option<ColoredPiece>> for PieceCode {
    fn from(content: Option<ColoredPiece>) -> Self {
        content.map_or(PieceCode::Empty, PieceCode::Occupied)
    }
}

impl TryFrom<u8> for PieceCode {
    type Error = BoardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(PieceCode::Invalid),
            1 => Ok(PieceCode::Empty),
            2..=7 => Ok(PieceCode::piece(
                Color::White,
                WIRE_ORDER[(code - 2) as usize],
            )),
            8..=13 => Ok(PieceCode::piece(
                Color::Black,
                WIRE_ORDER[(code - 8) as usize],
            )),
            _ => Err(BoardError::InvalidPieceCode { code }),
        }
    }
}

/// Ownership classification of a square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SquareState {
    OffBoard,
    Empty,
    Occupied(Color),
}
