//! Host-facing layer around the search.
//!
//! This module provides the request/response protocol a host uses to ask for a move,
//! a worker that answers requests on its own thread, and a game session that keeps
//! the side to move and castling rights up to date between moves.

mod game;
mod protocol;
mod worker;

pub use game::{Game, GameStatus};
pub use protocol::{run_search, SearchEvent, SearchRequest};
pub use worker::{SearchWorker, WorkerError};
