use super::super::attacks::{DIAGONAL, ORTHOGONAL};
use super::super::types::{ColoredPiece, Coordinate, Move};
use super::super::Board;

impl Board {
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Coordinate,
        slider: ColoredPiece,
        moves: &mut Vec<Move>,
    ) {
        let straight = slider.piece.attacks_straight().then_some(&ORTHOGONAL[..]);
        let diagonal = slider.piece.attacks_diagonally().then_some(&DIAGONAL[..]);

        for &dir in straight.into_iter().chain(diagonal).flatten() {
            let mut to = from;
            loop {
                to.translate(dir);
                if !to.is_on_board() {
                    break;
                }
                match self.get(to) {
                    None => moves.push(self.create_move(from, to, slider)),
                    Some(blocker) => {
                        if blocker.color != slider.color {
                            moves.push(self.create_move(from, to, slider));
                        }
                        break;
                    }
                }
            }
        }
    }
}
