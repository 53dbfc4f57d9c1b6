//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Coordinate` - board position / direction vector
//! - `Piece`, `Color`, `ColoredPiece` - piece identity
//! - `PieceCode`, `SquareState` - results of board queries
//! - `Move` - a move as a pair of square changes
//! - `CastlingRights` - castling state

mod castling;
mod coordinate;
mod moves;
mod piece;

pub use castling::CastlingRights;
pub use coordinate::Coordinate;
pub use moves::Move;
pub use piece::{Color, ColoredPiece, Piece, PieceCode, SquareState};
