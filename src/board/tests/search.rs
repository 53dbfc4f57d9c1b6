//! Search tests.

use super::{position, sq};
use crate::board::{
    find_best_move, search_tree, Board, Color, Piece, SearchConfig, SearchResult,
};
use rand::prelude::*;

fn search(board: &Board, max_depth: u32, engine_color: Color, seed: u64) -> SearchResult {
    let config = SearchConfig {
        max_depth,
        engine_color,
    };
    let mut rng = StdRng::seed_from_u64(seed);
    find_best_move(board, &config, &mut rng, |_| {})
}

#[test]
fn test_single_capture_chosen_at_depth_one() {
    let board = position(
        sq(7, 0),
        sq(0, 7),
        &[
            (sq(3, 7), Color::Black, Piece::Rook),
            (sq(3, 1), Color::White, Piece::Pawn),
        ],
    );
    let result = search(&board, 1, Color::Black, 1);
    let best = result.best_move.unwrap();
    assert_eq!(best.from(), sq(3, 7));
    assert_eq!(best.to(), sq(3, 1));
    assert_eq!(result.score, 10);
}

#[test]
fn test_hanging_queen_taken_at_default_depth() {
    let board = position(
        sq(7, 0),
        sq(0, 7),
        &[
            (sq(3, 7), Color::Black, Piece::Rook),
            (sq(3, 1), Color::White, Piece::Queen),
        ],
    );
    let result = search(&board, 3, Color::Black, 2);
    let best = result.best_move.unwrap();
    assert_eq!(best.to(), sq(3, 1));
    assert!(result.score >= 40);
}

#[test]
fn test_white_engine_scores_its_own_captures() {
    let board = position(
        sq(7, 0),
        sq(0, 7),
        &[
            (sq(3, 0), Color::White, Piece::Rook),
            (sq(3, 6), Color::Black, Piece::Knight),
        ],
    );
    let result = search(&board, 1, Color::White, 3);
    assert_eq!(result.best_move.unwrap().to(), sq(3, 6));
    assert_eq!(result.score, 30);
}

#[test]
fn test_defended_pawn_refused_at_depth_two() {
    let pieces = [
        (sq(3, 7), Color::Black, Piece::Queen),
        (sq(3, 3), Color::White, Piece::Pawn),
        (sq(4, 2), Color::White, Piece::Pawn),
    ];
    let board = position(sq(7, 0), sq(0, 7), &pieces);

    let greedy = search(&board, 1, Color::Black, 4);
    assert_eq!(greedy.best_move.unwrap().to(), sq(3, 3));

    let careful = search(&board, 2, Color::Black, 4);
    assert_ne!(careful.best_move.unwrap().to(), sq(3, 3));
    assert_eq!(careful.score, 0);
}

#[test]
fn test_no_move_when_checkmated_or_stalemated() {
    let mated = position(
        sq(0, 0),
        sq(7, 7),
        &[
            (sq(0, 7), Color::White, Piece::Rook),
            (sq(6, 6), Color::Black, Piece::Pawn),
            (sq(7, 6), Color::Black, Piece::Pawn),
        ],
    );
    let result = search(&mated, 3, Color::Black, 5);
    assert_eq!(result.best_move, None);
    assert_eq!(result.nodes, 0);
    assert!(mated.is_checked_by(Color::White));

    let stalled = position(sq(0, 0), sq(7, 7), &[(sq(6, 5), Color::White, Piece::Queen)]);
    let result = search(&stalled, 3, Color::Black, 5);
    assert_eq!(result.best_move, None);
    assert!(!stalled.is_checked_by(Color::White));
}

#[test]
fn test_tie_break_is_seeded() {
    let board = Board::starting();
    let first = search(&board, 1, Color::Black, 42);
    let again = search(&board, 1, Color::Black, 42);
    assert_eq!(first, again);

    // Ten quiet pawn moves on the a-e files share the top score.
    let best = first.best_move.unwrap();
    assert_eq!(best.moved().piece, Piece::Pawn);
    assert!(best.to().column() < 5);
    assert_eq!(first.score, 1);

    let distinct: std::collections::HashSet<_> = (0..40)
        .filter_map(|seed| search(&board, 1, Color::Black, seed).best_move)
        .collect();
    assert!(distinct.len() > 1);
    assert!(distinct.iter().all(|mv| mv.to().column() < 5));
}

#[test]
fn test_progress_reported_per_root_move() {
    let board = Board::starting();
    let mut rng = StdRng::seed_from_u64(6);
    let mut reports = Vec::new();
    let config = SearchConfig::with_depth(1);
    find_best_move(&board, &config, &mut rng, |fraction| reports.push(fraction));

    assert_eq!(reports.len(), 20);
    assert!(reports.windows(2).all(|w| w[0] < w[1]));
    assert!((reports[0] - 0.05).abs() < 1e-9);
    assert!((reports[19] - 1.0).abs() < 1e-9);
}

#[test]
fn test_tree_shape_and_depth_zero() {
    let board = Board::starting();
    let mut rng = StdRng::seed_from_u64(7);
    let root = search_tree(&board, &SearchConfig::with_depth(2), &mut rng, |_| {});
    assert_eq!(root.depth(), 0);
    assert_eq!(root.side_to_move(), Color::Black);
    assert_eq!(root.children().len(), 20);
    for child in root.children() {
        assert_eq!(child.depth(), 1);
        assert_eq!(child.side_to_move(), Color::White);
        assert_eq!(child.children().len(), 20);
        assert!(child.children().iter().all(|c| c.children().is_empty()));
    }
    assert_eq!(root.descendant_count(), 420);

    let shallow = search(&board, 0, Color::Black, 8);
    assert_eq!(shallow.nodes, 20);
}

#[test]
fn test_root_records_a_top_scoring_child() {
    let board = position(
        sq(7, 0),
        sq(0, 7),
        &[
            (sq(3, 4), Color::Black, Piece::Knight),
            (sq(4, 2), Color::White, Piece::Queen),
            (sq(2, 2), Color::White, Piece::Queen),
        ],
    );
    let mut rng = StdRng::seed_from_u64(12);
    let root = search_tree(&board, &SearchConfig::with_depth(1), &mut rng, |_| {});

    let chosen = root.mv().unwrap();
    let top: Vec<_> = root
        .children()
        .iter()
        .filter(|child| child.value() == root.value())
        .filter_map(|child| child.mv())
        .collect();
    assert_eq!(root.value(), 90);
    assert_eq!(top.len(), 2);
    assert!(top.contains(&chosen));
    assert!(chosen.is_capture());
}
