use crate::board::types::{Color, ColoredPiece, Move, Piece};

/// Bonus for a quiet black pawn move landing left of the f file.
const PAWN_ADVANCE_BONUS: i32 = 1;
const ADVANCE_COLUMN_LIMIT: i8 = 5;

/// Static score of a single move, from `engine_color`'s point of view.
///
/// Material is counted from Black's side (taking a white piece scores its value, taking a
/// black piece scores minus its value) and negated when the engine plays White.
#[must_use]
pub fn evaluate_move(mv: &Move, engine_color: Color) -> i32 {
    let black_view = match mv.captured() {
        Some(ColoredPiece {
            color: Color::White,
            piece,
        }) => piece.material(),
        Some(ColoredPiece {
            color: Color::Black,
            piece,
        }) => -piece.material(),
        None if mv.moved() == ColoredPiece::new(Color::Black, Piece::Pawn)
            && mv.to().column() < ADVANCE_COLUMN_LIMIT =>
        {
            PAWN_ADVANCE_BONUS
        }
        None => 0,
    };

    match engine_color {
        Color::Black => black_view,
        Color::White => -black_view,
    }
}
