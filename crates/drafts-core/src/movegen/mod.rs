//! Legal move generation.

mod jumps;
mod policy;
mod slides;

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::draughts_move::MoveList;
use crate::layout::Layout;
use crate::piece::Piece;
use crate::square::Square;

use self::jumps::gen_jumps;
use self::slides::gen_slides;

pub use self::policy::CapturePolicy;

/// Diagonal steps toward lower rows.
const TOWARD_LOW_ROWS: [(i32, i32); 2] = [(-1, -1), (1, -1)];
/// Diagonal steps toward higher rows.
const TOWARD_HIGH_ROWS: [(i32, i32); 2] = [(-1, 1), (1, 1)];
/// All four diagonal steps.
const ALL_DIAGONALS: [(i32, i32); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

/// Return the diagonal steps `piece` may move and jump along.
fn directions(piece: Piece, layout: Layout) -> &'static [(i32, i32)] {
    if piece.is_king() {
        &ALL_DIAGONALS
    } else if layout.forward(piece.color()) > 0 {
        &TOWARD_HIGH_ROWS
    } else {
        &TOWARD_LOW_ROWS
    }
}

/// Generate every move `piece` standing on `from` can make: all slides,
/// then every jump chain of every length.
///
/// The caller passes the piece that stands on `from`. If the square holds
/// anything else the list is empty.
pub fn legal_moves(board: &Board, piece: Piece, from: Square) -> MoveList {
    let mut list = MoveList::new();
    if board.piece_at(from) != Some(piece) {
        trace!(%from, ?piece, "no such piece on square, no moves");
        return list;
    }

    gen_slides(board, piece, from, &mut list);
    gen_jumps(board, piece, from, &mut list);

    trace!(%from, ?piece, count = list.len(), "generated moves");
    list
}

/// Generate the moves of every piece of `color`, in square order.
///
/// Pieces without a move are included with an empty list.
pub fn side_moves(board: &Board, color: Color) -> Vec<(Square, MoveList)> {
    board
        .pieces()
        .filter(|(_, piece)| piece.color() == color)
        .map(|(sq, piece)| (sq, legal_moves(board, piece, sq)))
        .collect()
}

/// Generate the moves of the piece on `from` as offered under `policy`.
///
/// `Maximal` looks at every piece of the same color, so a piece may end
/// up with no moves while another piece has a longer capture.
pub fn policy_moves(board: &Board, from: Square, policy: CapturePolicy) -> MoveList {
    let Some(piece) = board.piece_at(from) else {
        return MoveList::new();
    };
    let mut list = legal_moves(board, piece, from);
    if policy == CapturePolicy::Optional {
        return list;
    }

    let side_max = side_moves(board, piece.color())
        .iter()
        .map(|(_, moves)| moves.max_captures())
        .max()
        .unwrap_or(0);
    policy.restrict(&mut list, side_max);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draughts_move::Move;
    use crate::layout::Layout;

    fn sq(x: u8, y: u8) -> Square {
        Square::new(x, y)
    }

    #[test]
    fn starting_black_man_has_two_slides() {
        let board = Board::starting_position(Layout::default());
        let moves = legal_moves(&board, Piece::BLACK_MAN, sq(1, 6));
        assert_eq!(
            moves.as_slice(),
            &[Move::Slide { to: sq(0, 5) }, Move::Slide { to: sq(2, 5) }]
        );
    }

    #[test]
    fn back_row_men_are_blocked_at_start() {
        let board = Board::starting_position(Layout::default());
        assert!(legal_moves(&board, Piece::BLACK_MAN, sq(0, 9)).is_empty());
        assert!(legal_moves(&board, Piece::WHITE_MAN, sq(1, 0)).is_empty());
    }

    #[test]
    fn mismatched_piece_yields_nothing() {
        let board = Board::starting_position(Layout::default());
        assert!(legal_moves(&board, Piece::WHITE_MAN, sq(1, 6)).is_empty());
        assert!(legal_moves(&board, Piece::BLACK_MAN, sq(0, 5)).is_empty());
    }

    #[test]
    fn slides_and_jumps_together() {
        let mut board = Board::empty(Layout::default());
        board.set_piece(sq(4, 4), Some(Piece::BLACK_MAN));
        board.set_piece(sq(5, 3), Some(Piece::WHITE_MAN));
        let moves = legal_moves(&board, Piece::BLACK_MAN, sq(4, 4));
        assert_eq!(
            moves.as_slice(),
            &[
                Move::Slide { to: sq(3, 3) },
                Move::Jump {
                    captures: vec![sq(5, 3)],
                    landings: vec![sq(6, 2)],
                },
            ]
        );
    }

    #[test]
    fn swapped_layout_reverses_men() {
        let layout = Layout::new(Color::Black, Color::White);
        let board = Board::starting_position(layout);
        let moves = legal_moves(&board, Piece::BLACK_MAN, sq(0, 3));
        assert_eq!(moves.as_slice(), &[Move::Slide { to: sq(1, 4) }]);
    }

    #[test]
    fn start_position_side_moves() {
        let board = Board::starting_position(Layout::default());
        let side = side_moves(&board, Color::Black);
        assert_eq!(side.len(), 20);
        let total: usize = side.iter().map(|(_, moves)| moves.len()).sum();
        assert_eq!(total, 9);
    }

    #[test]
    fn maximal_policy_prefers_longest_chain_on_side() {
        let mut board = Board::empty(Layout::default());
        // Black man at (2,8) has a two-jump chain; black man at (8,8) only slides.
        board.set_piece(sq(2, 8), Some(Piece::BLACK_MAN));
        board.set_piece(sq(3, 7), Some(Piece::WHITE_MAN));
        board.set_piece(sq(5, 5), Some(Piece::WHITE_MAN));
        board.set_piece(sq(8, 8), Some(Piece::BLACK_MAN));

        let optional = policy_moves(&board, sq(8, 8), CapturePolicy::Optional);
        assert_eq!(optional.len(), 2);
        assert!(policy_moves(&board, sq(8, 8), CapturePolicy::Maximal).is_empty());

        let chain = policy_moves(&board, sq(2, 8), CapturePolicy::Maximal);
        assert_eq!(
            chain.as_slice(),
            &[Move::Jump {
                captures: vec![sq(3, 7), sq(5, 5)],
                landings: vec![sq(4, 6), sq(6, 4)],
            }]
        );
    }
}
