//! Game session: a board, the side to move and the moves played so far.

use rand::Rng;

use crate::board::{
    find_best_move, Board, Color, Coordinate, Move, MoveError, SearchConfig, SquareState,
};

/// Outcome of the position for the side to move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard initial position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::starting(), Color::White)
    }

    #[must_use]
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        self.board.legal_moves_for(self.side_to_move)
    }

    /// Play the legal move from `from` to `to` for the side to move.
    pub fn play(&mut self, from: Coordinate, to: Coordinate) -> Result<Move, MoveError> {
        match self.board.color_at(from) {
            SquareState::OffBoard | SquareState::Empty => {
                return Err(MoveError::NoPiece { square: from });
            }
            SquareState::Occupied(owner) if owner != self.side_to_move => {
                return Err(MoveError::WrongSide {
                    square: from,
                    expected: self.side_to_move,
                });
            }
            SquareState::Occupied(_) => {}
        }

        let mv = self
            .board
            .legal_moves_from(from)
            .into_iter()
            .find(|mv| mv.to() == to)
            .ok_or(MoveError::IllegalMove { from, to })?;
        self.commit(mv);
        Ok(mv)
    }

    /// Search for the side to move and play the chosen move.
    ///
    /// `config.engine_color` is ignored; the engine always moves for the side to move.
    /// Returns `None` when that side has no legal move.
    pub fn engine_move<R: Rng + ?Sized>(
        &mut self,
        config: &SearchConfig,
        rng: &mut R,
    ) -> Option<Move> {
        let config = SearchConfig {
            engine_color: self.side_to_move,
            ..config.clone()
        };
        let result = find_best_move(&self.board, &config, rng, |_| {});
        let mv = result.best_move?;
        log::debug!(
            "{} plays {mv} (score {}, {} nodes)",
            self.side_to_move,
            result.score,
            result.nodes
        );
        self.commit(mv);
        Some(mv)
    }

    pub fn status(&mut self) -> GameStatus {
        let color = self.side_to_move;
        if !self.legal_moves().is_empty() {
            GameStatus::Ongoing
        } else if self.board.is_in_check(color) {
            GameStatus::Checkmate {
                winner: color.opponent(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    fn commit(&mut self, mv: Move) {
        self.board.apply_move(mv);
        self.board.revoke_castling_rights(&mv);
        self.history.push(mv);
        self.side_to_move = self.side_to_move.opponent();
    }
}
