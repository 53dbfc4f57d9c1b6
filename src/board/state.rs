use std::fmt;

use super::error::BoardError;
use super::snapshot::BoardSnapshot;
use super::types::{CastlingRights, Color, ColoredPiece, Coordinate, Piece, PieceCode, SquareState};

/// Mailbox board: one slot per square plus castling rights.
///
/// Internally indexed `[column][row]`. A board built through [`Board::from_snapshot`] or
/// [`BoardBuilder`](super::BoardBuilder) holds exactly one king per color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<ColoredPiece>; 8]; 8],
    pub(crate) castling: CastlingRights,
}

impl Board {
    /// The standard initial position with every castling right.
    #[must_use]
    pub fn starting() -> Self {
        Board::from_snapshot_unchecked(&BoardSnapshot::starting())
    }

    /// Build a board from a host snapshot, checking that each color has one king.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, BoardError> {
        let board = Board::from_snapshot_unchecked(snapshot);
        board.validate_kings()?;
        Ok(board)
    }

    fn from_snapshot_unchecked(snapshot: &BoardSnapshot) -> Self {
        let mut squares = [[None; 8]; 8];
        for (row, row_squares) in snapshot.squares.iter().enumerate() {
            for (column, &content) in row_squares.iter().enumerate() {
                squares[column][row] = content;
            }
        }
        Board {
            squares,
            castling: snapshot.castling,
        }
    }

    fn validate_kings(&self) -> Result<(), BoardError> {
        for color in Color::BOTH {
            let found = self
                .pieces()
                .filter(|(_, cp)| *cp == ColoredPiece::new(color, Piece::King))
                .count();
            if found != 1 {
                return Err(BoardError::KingCount { color, found });
            }
        }
        Ok(())
    }

    /// Convert back to the host layout.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snapshot = BoardSnapshot::empty();
        for sq in Coordinate::all() {
            snapshot.squares[sq.row() as usize][sq.column() as usize] = self.get(sq);
        }
        snapshot.castling = self.castling;
        snapshot
    }

    /// Content of a square; [`PieceCode::Invalid`] when off-board.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Coordinate) -> PieceCode {
        if square.is_on_board() {
            PieceCode::from(self.get(square))
        } else {
            PieceCode::Invalid
        }
    }

    /// Owner of a square's content.
    #[inline]
    #[must_use]
    pub fn color_at(&self, square: Coordinate) -> SquareState {
        self.piece_at(square).state()
    }

    /// Overwrite a square. Performs no legality checking.
    ///
    /// # Panics
    /// Panics if `square` is off-board.
    #[inline]
    pub fn set_field(&mut self, square: Coordinate, content: Option<ColoredPiece>) {
        assert!(square.is_on_board(), "set_field off board: {square}");
        self.squares[square.column() as usize][square.row() as usize] = content;
    }

    #[inline]
    pub(crate) fn get(&self, square: Coordinate) -> Option<ColoredPiece> {
        self.squares[square.column() as usize][square.row() as usize]
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Occupied squares with their pieces, A1 first, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, ColoredPiece)> + '_ {
        Coordinate::all().filter_map(move |sq| self.get(sq).map(|cp| (sq, cp)))
    }

    /// Square of `color`'s king.
    ///
    /// # Panics
    /// Panics if the king is missing, which only happens after the board was
    /// corrupted through [`Board::set_field`].
    #[must_use]
    pub fn king_square(&self, color: Color) -> Coordinate {
        let king = ColoredPiece::new(color, Piece::King);
        match self.pieces().find(|(_, cp)| *cp == king) {
            Some((sq, _)) => sq,
            None => panic!("{} king not found", color.to_string().to_lowercase()),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{} ", row + 1)?;
            for column in 0..8 {
                let c = self
                    .get(Coordinate::new(column, row))
                    .map_or('.', ColoredPiece::to_char);
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
