use crate::board::types::{Color, Move};
use crate::board::Board;

use super::eval::evaluate_move;

/// One position of the search tree.
///
/// The root has no move until a choice is made; every other node carries the move that
/// produced it and the score of that move plus the minimax fold of its replies.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub(super) mv: Option<Move>,
    pub(super) value: i32,
    pub(super) depth: u32,
    pub(super) side_to_move: Color,
    pub(super) children: Vec<SearchNode>,
}

impl SearchNode {
    #[must_use]
    pub fn mv(&self) -> Option<Move> {
        self.mv
    }

    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Color whose replies form this node's children.
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn children(&self) -> &[SearchNode] {
        &self.children
    }

    /// Number of nodes below this one.
    #[must_use]
    pub fn descendant_count(&self) -> u64 {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    pub(super) fn root(engine_color: Color) -> Self {
        SearchNode {
            mv: None,
            value: 0,
            depth: 0,
            side_to_move: engine_color,
            children: Vec::new(),
        }
    }

    /// Build the subtree under `mv`, played from a node at `depth - 1`.
    ///
    /// The board is shared down the recursion and is back in its entry state on return.
    pub(super) fn expand(
        board: &mut Board,
        mv: Move,
        depth: u32,
        max_depth: u32,
        engine_color: Color,
    ) -> Self {
        let side_to_move = mv.color().opponent();
        let mut value = evaluate_move(&mv, engine_color);
        let mut children = Vec::new();

        let mut applied = board.scoped_move(mv);
        if depth < max_depth {
            for reply in applied.legal_moves_for(side_to_move) {
                children.push(SearchNode::expand(
                    &mut applied,
                    reply,
                    depth + 1,
                    max_depth,
                    engine_color,
                ));
            }
            value += minimax(depth, &children);
        }
        drop(applied);

        SearchNode {
            mv: Some(mv),
            value,
            depth,
            side_to_move,
            children,
        }
    }
}

/// Even depths take the best child, odd depths the worst; no children folds to 0.
fn minimax(depth: u32, children: &[SearchNode]) -> i32 {
    let scores = children.iter().map(|child| child.value);
    let folded = if depth % 2 == 0 {
        scores.max()
    } else {
        scores.min()
    };
    folded.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: i32) -> SearchNode {
        SearchNode {
            value,
            depth: 3,
            ..SearchNode::root(Color::Black)
        }
    }

    #[test]
    fn test_minimax_alternates_by_depth() {
        let children = [leaf(-4), leaf(7), leaf(2)];
        assert_eq!(minimax(2, &children), 7);
        assert_eq!(minimax(1, &children), -4);
    }

    #[test]
    fn test_minimax_without_children_is_zero() {
        assert_eq!(minimax(1, &[]), 0);
        assert_eq!(minimax(2, &[]), 0);
    }

    #[test]
    fn test_descendant_count() {
        let mut root = SearchNode::root(Color::Black);
        let mut child = leaf(0);
        child.children = vec![leaf(1), leaf(2)];
        root.children = vec![child, leaf(3)];
        assert_eq!(root.descendant_count(), 4);
    }
}
