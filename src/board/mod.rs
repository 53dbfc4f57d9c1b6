//! Chess board representation and game logic.
//!
//! Uses an 8×8 mailbox with explicit piece colors. Supports castling for both
//! colors, pawn double steps and promotion to a queen. En passant is not modelled.
//!
//! # Example
//! ```
//! use minimax_chess::board::{Board, Color};
//!
//! let mut board = Board::starting();
//! let moves = board.legal_moves_for(Color::White);
//! assert_eq!(moves.len(), 20);
//! ```

mod attacks;
mod builder;
mod error;
mod make_unmake;
mod movegen;
mod search;
mod snapshot;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BoardError, MoveError};
pub use make_unmake::AppliedMove;
pub use snapshot::BoardSnapshot;
pub use state::Board;
pub use types::{
    CastlingRights, Color, ColoredPiece, Coordinate, Move, Piece, PieceCode, SquareState,
};

// Public API - search functions and configuration
pub use search::{
    evaluate_move, find_best_move, search_tree, SearchConfig, SearchNode, SearchResult,
};
