//! Error types for board construction and game play.

use std::fmt;

use super::types::{Color, Coordinate};

/// Error type for malformed positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A color does not have exactly one king
    KingCount { color: Color, found: usize },
    /// Numeric square code outside the host encoding, or the invalid code used as content
    InvalidPieceCode { code: u8 },
    /// A piece was placed outside the board
    OffBoard { square: Coordinate },
    /// The side not on move is in check, so its king could be captured
    KingCapturable { color: Color },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::KingCount { color, found } => {
                write!(f, "{color} must have exactly one king, found {found}")
            }
            BoardError::InvalidPieceCode { code } => {
                write!(f, "Invalid piece code {code}")
            }
            BoardError::OffBoard { square } => write!(f, "Square {square} is off the board"),
            BoardError::KingCapturable { color } => {
                write!(f, "{color} is in check but not on move")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for rejected moves in a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Origin square holds no piece
    NoPiece { square: Coordinate },
    /// Origin piece belongs to the side not on move
    WrongSide { square: Coordinate, expected: Color },
    /// No legal move connects the two squares
    IllegalMove { from: Coordinate, to: Coordinate },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPiece { square } => write!(f, "No piece on {square}"),
            MoveError::WrongSide { square, expected } => {
                write!(f, "Piece on {square} does not belong to {expected}")
            }
            MoveError::IllegalMove { from, to } => {
                write!(f, "Illegal move {from}→{to}")
            }
        }
    }
}

impl std::error::Error for MoveError {}
