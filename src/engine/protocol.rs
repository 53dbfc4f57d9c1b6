//! Request/response messages between a host and the search.
//!
//! A request carries a position snapshot and search settings. The response is zero or
//! more progress events followed by exactly one terminal event.

use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    find_best_move, Board, BoardError, BoardSnapshot, Color, Coordinate, SearchConfig,
    SearchResult,
};

/// Search request sent by the host
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchRequest {
    pub snapshot: BoardSnapshot,
    /// Maximum search depth in plies
    pub depth: u32,
    /// Side the engine moves for
    pub engine_color: Color,
    /// Seed for the tie-break; `None` draws from system entropy
    pub seed: Option<u64>,
}

impl SearchRequest {
    /// Request with the default depth for Black to move.
    #[must_use]
    pub fn new(snapshot: BoardSnapshot) -> Self {
        let defaults = SearchConfig::default();
        SearchRequest {
            snapshot,
            depth: defaults.max_depth,
            engine_color: defaults.engine_color,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_engine_color(mut self, color: Color) -> Self {
        self.engine_color = color;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.depth,
            engine_color: self.engine_color,
        }
    }

    /// Board for the snapshot, validated for a search by `engine_color`.
    ///
    /// Besides the king count, the side not on move must not be in check: its king
    /// would be capturable and the search has no position without it.
    pub fn board(&self) -> Result<Board, BoardError> {
        let board = Board::from_snapshot(&self.snapshot)?;
        if board.is_checked_by(self.engine_color) {
            return Err(BoardError::KingCapturable {
                color: self.engine_color.opponent(),
            });
        }
        Ok(board)
    }
}

/// Message emitted while answering a request
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchEvent {
    /// Share of root moves explored, in `(0, 1]`
    Progress(f64),
    /// The engine's move; the host rebuilds the full move on its own board
    Moved { from: Coordinate, to: Coordinate },
    /// The engine side has no legal move
    NoMove,
}

impl SearchEvent {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SearchEvent::Progress(_))
    }
}

/// Answer `request`, reporting every event to `emit`.
///
/// A position [`SearchRequest::board`] rejects produces an error and no events.
pub fn run_search(
    request: &SearchRequest,
    emit: &mut dyn FnMut(SearchEvent),
) -> Result<SearchResult, BoardError> {
    let board = request.board()?;
    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let result = find_best_move(&board, &request.config(), &mut rng, |fraction| {
        emit(SearchEvent::Progress(fraction));
    });

    emit(match result.best_move {
        Some(mv) => SearchEvent::Moved {
            from: mv.from(),
            to: mv.to(),
        },
        None => SearchEvent::NoMove,
    });
    log::debug!(
        "answered request at depth {} with {:?} after {} nodes",
        request.depth,
        result.best_move.map(|mv| mv.to_string()),
        result.nodes
    );
    Ok(result)
}
