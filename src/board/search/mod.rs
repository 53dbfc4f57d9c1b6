//! Fixed-depth minimax search.
//!
//! Features:
//! - Full-width tree to a configured depth, no pruning
//! - Static score per move from captured material
//! - Depth-alternating max/min fold
//! - Random choice among equally scored root moves

mod eval;
mod node;
mod params;

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Board, Move};
pub use eval::evaluate_move;
pub use node::SearchNode;
pub use params::SearchConfig;

/// Result of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move; `None` when the engine side has no legal move
    pub best_move: Option<Move>,
    /// Score of the chosen move, 0 without one
    pub score: i32,
    /// Nodes built below the root
    pub nodes: u64,
}

/// Build the search tree for `config.engine_color` to move.
///
/// The caller's board is not touched; the search runs on a private copy. `progress`
/// receives the explored share of root moves after each one completes. Among root
/// children with the highest score, one is picked with `rng` and recorded as the root's
/// move and value.
///
/// # Panics
/// Panics if the side not on move is already in check, since a king capture leaves a
/// board without that king. [`SearchRequest::board`](crate::engine::SearchRequest::board)
/// rejects such positions.
pub fn search_tree<R, F>(
    board: &Board,
    config: &SearchConfig,
    rng: &mut R,
    mut progress: F,
) -> SearchNode
where
    R: Rng + ?Sized,
    F: FnMut(f64),
{
    let started = Instant::now();
    let max_depth = config.effective_depth();
    let engine_color = config.engine_color;
    let mut board = board.clone();
    let mut root = SearchNode::root(engine_color);

    let candidates = board.legal_moves_for(engine_color);
    let total = candidates.len();
    log::debug!("searching {total} root moves for {engine_color} to depth {max_depth}");

    for (i, mv) in candidates.into_iter().enumerate() {
        let child = SearchNode::expand(&mut board, mv, 1, max_depth, engine_color);
        log::trace!("root move {mv} scored {}", child.value);
        root.children.push(child);
        progress((i + 1) as f64 / total as f64);
    }

    let best_value = root.children.iter().map(SearchNode::value).max();
    if let Some(best_value) = best_value {
        let tied: Vec<&SearchNode> = root
            .children
            .iter()
            .filter(|child| child.value == best_value)
            .collect();
        if let Some(chosen) = tied.choose(rng) {
            root.mv = chosen.mv;
            root.value = chosen.value;
            if let Some(mv) = chosen.mv {
                log::debug!("chose {mv} of {} best moves scoring {best_value}", tied.len());
            }
        }
    }

    log::debug!(
        "search built {} nodes in {:?}",
        root.descendant_count(),
        started.elapsed()
    );
    root
}

/// Choose a move for `config.engine_color`.
///
/// # Example
/// ```
/// use minimax_chess::board::{Board, SearchConfig};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let board = Board::starting();
/// let mut rng = StdRng::seed_from_u64(7);
/// let result = minimax_chess::board::find_best_move(
///     &board,
///     &SearchConfig::with_depth(1),
///     &mut rng,
///     |_| {},
/// );
/// assert!(result.best_move.is_some());
/// assert_eq!(result.nodes, 20);
/// ```
pub fn find_best_move<R, F>(
    board: &Board,
    config: &SearchConfig,
    rng: &mut R,
    progress: F,
) -> SearchResult
where
    R: Rng + ?Sized,
    F: FnMut(f64),
{
    let root = search_tree(board, config, rng, progress);
    SearchResult {
        best_move: root.mv(),
        score: root.value(),
        nodes: root.descendant_count(),
    }
}
