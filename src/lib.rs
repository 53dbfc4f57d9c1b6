pub mod board;
pub mod engine;

pub use board::{Board, Color, Coordinate, Move, Piece};
pub use engine::{Game, SearchEvent, SearchRequest, SearchWorker};
