//! Plain position payload exchanged with the host.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::types::{CastlingRights, Color, ColoredPiece, Piece, PieceCode};

/// Squares and castling rights of a position.
///
/// `squares` is indexed `[row][column]`, row 0 being rank 1. This is the layout the
/// host sends; [`Board`](super::Board) converts it on construction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardSnapshot {
    pub squares: [[Option<ColoredPiece>; 8]; 8],
    #[cfg_attr(feature = "serde", serde(default))]
    pub castling: CastlingRights,
}

impl BoardSnapshot {
    /// A snapshot with no pieces and every castling right set.
    #[must_use]
    pub fn empty() -> Self {
        BoardSnapshot {
            squares: [[None; 8]; 8],
            castling: CastlingRights::all(),
        }
    }

    /// The standard initial position.
    #[must_use]
    pub fn starting() -> Self {
        const BACK_RANK: [Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];

        let mut snapshot = Self::empty();
        for color in Color::BOTH {
            let back = color.back_rank() as usize;
            let pawns = color.pawn_start_rank() as usize;
            for (column, &piece) in BACK_RANK.iter().enumerate() {
                snapshot.squares[back][column] = Some(ColoredPiece::new(color, piece));
                snapshot.squares[pawns][column] = Some(ColoredPiece::new(color, Piece::Pawn));
            }
        }
        snapshot
    }

    /// Build from the host's numeric square codes, indexed `[row][column]`.
    ///
    /// Code 0 (off-board) is rejected as square content.
    pub fn from_codes(codes: &[[u8; 8]; 8], castling: CastlingRights) -> Result<Self, BoardError> {
        let mut squares = [[None; 8]; 8];
        for (row, row_codes) in codes.iter().enumerate() {
            for (column, &code) in row_codes.iter().enumerate() {
                squares[row][column] = match PieceCode::try_from(code)? {
                    PieceCode::Invalid => return Err(BoardError::InvalidPieceCode { code }),
                    PieceCode::Empty => None,
                    PieceCode::Occupied(cp) => Some(cp),
                };
            }
        }
        Ok(BoardSnapshot { squares, castling })
    }

    /// Numeric square codes, indexed `[row][column]`.
    #[must_use]
    pub fn to_codes(&self) -> [[u8; 8]; 8] {
        let mut codes = [[0; 8]; 8];
        for (row, row_squares) in self.squares.iter().enumerate() {
            for (column, &content) in row_squares.iter().enumerate() {
                codes[row][column] = PieceCode::from(content).code();
            }
        }
        codes
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self::starting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_layout() {
        let snapshot = BoardSnapshot::starting();
        assert_eq!(
            snapshot.squares[0][4],
            Some(ColoredPiece::new(Color::White, Piece::King))
        );
        assert_eq!(
            snapshot.squares[7][3],
            Some(ColoredPiece::new(Color::Black, Piece::Queen))
        );
        assert_eq!(
            snapshot.squares[6][0],
            Some(ColoredPiece::new(Color::Black, Piece::Pawn))
        );
        assert!(snapshot.squares[3].iter().all(Option::is_none));
    }

    #[test]
    fn test_codes_survive_conversion() {
        let snapshot = BoardSnapshot::starting();
        let codes = snapshot.to_codes();
        assert_eq!(codes[0][0], 3); // white rook
        assert_eq!(codes[7][4], 13); // black king
        assert_eq!(codes[4][4], 1);
        let back = BoardSnapshot::from_codes(&codes, CastlingRights::all()).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_invalid_code_rejected_as_content() {
        let mut codes = [[1u8; 8]; 8];
        codes[2][5] = 0;
        assert_eq!(
            BoardSnapshot::from_codes(&codes, CastlingRights::all()),
            Err(BoardError::InvalidPieceCode { code: 0 })
        );

        codes[2][5] = 99;
        assert_eq!(
            BoardSnapshot::from_codes(&codes, CastlingRights::all()),
            Err(BoardError::InvalidPieceCode { code: 99 })
        );
    }
}
