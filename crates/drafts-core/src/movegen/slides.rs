//! Single-step diagonal slides.

use crate::board::Board;
use crate::draughts_move::{Move, MoveList};
use crate::piece::Piece;
use crate::square::Square;

use super::directions;

/// Push a slide for every direction of `piece` whose neighbouring square is on the grid and empty.
pub(super) fn gen_slides(board: &Board, piece: Piece, from: Square, list: &mut MoveList) {
    for &(dx, dy) in directions(piece, board.layout()) {
        if let Some(to) = from.offset(dx, dy)
            && board.is_empty(to)
        {
            list.push(Move::Slide { to });
        }
    }
}
