//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_unmake.rs` - Apply/revert correctness, promotion, scoped moves
//! - `movegen.rs` - Legal move counts and per-piece generation
//! - `castling.rs` - Castling generation and rights revocation
//! - `search.rs` - Move scoring and root selection
//! - `proptest.rs` - Property-based tests

mod search;

use crate::board::{
    Board, BoardBuilder, BoardSnapshot, CastlingRights, Color, ColoredPiece, Coordinate, Move,
    Piece,
};

pub(super) fn sq(column: i8, row: i8) -> Coordinate {
    Coordinate::new(column, row)
}

/// Board with kings on `white_king` and `black_king`, the given pieces, and no castling rights.
pub(super) fn position(
    white_king: Coordinate,
    black_king: Coordinate,
    pieces: &[(Coordinate, Color, Piece)],
) -> Board {
    let mut builder = BoardBuilder::new()
        .piece(white_king, Color::White, Piece::King)
        .piece(black_king, Color::Black, Piece::King)
        .no_castling_rights();
    for &(square, color, piece) in pieces {
        builder = builder.piece(square, color, piece);
    }
    builder.build().unwrap()
}

pub(super) fn find_move(board: &mut Board, from: Coordinate, to: Coordinate) -> Move {
    board
        .legal_moves_from(from)
        .into_iter()
        .find(|mv| mv.to() == to)
        .expect("Expected move not found")
}

pub(super) fn has_move(board: &mut Board, from: Coordinate, to: Coordinate) -> bool {
    board.legal_moves_from(from).iter().any(|mv| mv.to() == to)
}

/// Board from the piece-placement field of a FEN record, rank 8 first.
pub(super) fn from_placement(placement: &str, castling: CastlingRights) -> Board {
    let mut snapshot = BoardSnapshot::empty();
    snapshot.castling = castling;
    for (i, rank) in placement.split('/').enumerate() {
        let row = 7 - i;
        let mut column = 0;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                column += skip as usize;
                continue;
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let piece = match c.to_ascii_lowercase() {
                'p' => Piece::Pawn,
                'n' => Piece::Knight,
                'b' => Piece::Bishop,
                'r' => Piece::Rook,
                'q' => Piece::Queen,
                'k' => Piece::King,
                other => panic!("unexpected piece char {other}"),
            };
            snapshot.squares[row][column] = Some(ColoredPiece::new(color, piece));
            column += 1;
        }
    }
    Board::from_snapshot(&snapshot).unwrap()
}

/// Leaf count of the legal move tree `depth` plies deep.
pub(super) fn perft(board: &mut Board, color: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = board.legal_moves_for(color);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mv| {
            let mut applied = board.scoped_move(mv);
            perft(&mut applied, color.opponent(), depth - 1)
        })
        .sum()
}
