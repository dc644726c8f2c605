//! Depth-first search for jump chains.

use crate::board::Board;
use crate::draughts_move::{Move, MoveList};
use crate::piece::Piece;
use crate::square::Square;

use super::directions;

/// Push every jump chain available to `piece` standing on `origin`.
///
/// Each prefix of a chain is pushed as its own move, before its longer
/// continuations. Captured pieces stay on the board during the search.
pub(super) fn gen_jumps(board: &Board, piece: Piece, origin: Square, list: &mut MoveList) {
    extend_chain(board, piece, origin, origin, &[], &[], list);
}

/// Try every single jump from `from`, given the chain so far.
///
/// A landing is rejected when it is the origin or an earlier landing of this
/// chain, and a piece may be jumped at most once per chain. Each accepted
/// branch owns fresh copies of the history.
fn extend_chain(
    board: &Board,
    piece: Piece,
    origin: Square,
    from: Square,
    captures: &[Square],
    landings: &[Square],
    list: &mut MoveList,
) {
    let them = piece.color().flip();

    for &(dx, dy) in directions(piece, board.layout()) {
        let (Some(over), Some(landing)) = (from.offset(dx, dy), from.offset(2 * dx, 2 * dy)) else {
            continue;
        };
        if landing == origin || !board.is_empty(landing) {
            continue;
        }
        if board.color_at(over) != Some(them) {
            continue;
        }
        if landings.contains(&landing) || captures.contains(&over) {
            continue;
        }

        let mut branch_captures = captures.to_vec();
        branch_captures.push(over);
        let mut branch_landings = landings.to_vec();
        branch_landings.push(landing);

        list.push(Move::Jump {
            captures: branch_captures.clone(),
            landings: branch_landings.clone(),
        });
        extend_chain(board, piece, origin, landing, &branch_captures, &branch_landings, list);
    }
}

#[cfg(test)]
mod tests {
    use super::gen_jumps;
    use crate::board::Board;
    use crate::draughts_move::{Move, MoveList};
    use crate::piece::Piece;
    use crate::square::Square;

    fn board_with(pieces: &[(u8, u8, Piece)]) -> Board {
        let mut board = Board::empty(Default::default());
        for &(x, y, piece) in pieces {
            board.set_piece(Square::new(x, y), Some(piece));
        }
        board
    }

    fn jumps(board: &Board, from: Square) -> MoveList {
        let mut list = MoveList::new();
        let piece = board.piece_at(from).unwrap();
        gen_jumps(board, piece, from, &mut list);
        list
    }

    fn jump(captures: &[(u8, u8)], landings: &[(u8, u8)]) -> Move {
        Move::Jump {
            captures: captures.iter().map(|&(x, y)| Square::new(x, y)).collect(),
            landings: landings.iter().map(|&(x, y)| Square::new(x, y)).collect(),
        }
    }

    #[test]
    fn no_jump_over_own_piece() {
        let board = board_with(&[(4, 4, Piece::WHITE_MAN), (5, 5, Piece::WHITE_MAN)]);
        assert!(jumps(&board, Square::new(4, 4)).is_empty());
    }

    #[test]
    fn no_jump_onto_occupied_square() {
        let board = board_with(&[
            (4, 4, Piece::WHITE_MAN),
            (5, 5, Piece::BLACK_MAN),
            (6, 6, Piece::BLACK_MAN),
        ]);
        assert!(jumps(&board, Square::new(4, 4)).is_empty());
    }

    #[test]
    fn man_does_not_jump_backwards() {
        // White men move toward higher rows; the black man sits behind.
        let board = board_with(&[(4, 4, Piece::WHITE_MAN), (5, 3, Piece::BLACK_MAN)]);
        assert!(jumps(&board, Square::new(4, 4)).is_empty());
    }

    #[test]
    fn chain_emits_every_prefix() {
        let board = board_with(&[
            (2, 2, Piece::WHITE_MAN),
            (3, 3, Piece::BLACK_MAN),
            (5, 5, Piece::BLACK_MAN),
        ]);
        let list = jumps(&board, Square::new(2, 2));
        assert_eq!(
            list.as_slice(),
            &[
                jump(&[(3, 3)], &[(4, 4)]),
                jump(&[(3, 3), (5, 5)], &[(4, 4), (6, 6)]),
            ]
        );
    }

    #[test]
    fn branches_do_not_share_history() {
        // From (4,4) a white man can continue left over (3,5) or right over (5,5).
        let board = board_with(&[
            (2, 2, Piece::WHITE_MAN),
            (3, 3, Piece::BLACK_MAN),
            (3, 5, Piece::BLACK_MAN),
            (5, 5, Piece::BLACK_MAN),
        ]);
        let list = jumps(&board, Square::new(2, 2));
        assert_eq!(list.len(), 3);
        assert!(list.contains(&jump(&[(3, 3), (3, 5)], &[(4, 4), (2, 6)])));
        assert!(list.contains(&jump(&[(3, 3), (5, 5)], &[(4, 4), (6, 6)])));
    }

    #[test]
    fn king_loop_never_returns_to_origin_or_rejumps() {
        // Four black men around (4,4): a king at (3,3) can circle back toward its start.
        let board = board_with(&[
            (3, 3, Piece::WHITE_KING),
            (4, 4, Piece::BLACK_MAN),
            (6, 4, Piece::BLACK_MAN),
            (6, 2, Piece::BLACK_MAN),
            (4, 2, Piece::BLACK_MAN),
        ]);
        let origin = Square::new(3, 3);
        let list = jumps(&board, origin);
        assert!(!list.is_empty());
        for mv in &list {
            let Move::Jump { captures, landings } = mv else {
                panic!("expected only jumps, got {mv}");
            };
            assert_eq!(captures.len(), landings.len());
            assert!(!landings.contains(&origin), "chain {mv} revisits origin");
            for (i, landing) in landings.iter().enumerate() {
                assert!(!landings[..i].contains(landing), "chain {mv} revisits {landing}");
            }
            for (i, captured) in captures.iter().enumerate() {
                assert!(!captures[..i].contains(captured), "chain {mv} jumps {captured} twice");
            }
        }
    }
}
