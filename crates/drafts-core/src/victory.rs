//! Turn order and the win condition.

use std::fmt;

use tracing::{debug, info};

use crate::color::Color;
use crate::game::GameState;

/// The result of checking for a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinResult {
    /// Both sides still have pieces.
    None,
    /// White has no pieces left.
    BlackWins,
    /// Black has no pieces left.
    WhiteWins,
}

impl WinResult {
    /// Return the winning color, if any.
    pub const fn winner(self) -> Option<Color> {
        match self {
            WinResult::None => None,
            WinResult::BlackWins => Some(Color::Black),
            WinResult::WhiteWins => Some(Color::White),
        }
    }
}

impl fmt::Display for WinResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinResult::None => write!(f, "no winner"),
            WinResult::BlackWins => write!(f, "black wins"),
            WinResult::WhiteWins => write!(f, "white wins"),
        }
    }
}

impl GameState {
    /// Return the winner by counting each side's pieces on the board.
    ///
    /// A side with no pieces left has lost. An empty board has no winner.
    pub fn winner(&self) -> WinResult {
        let board = self.board();
        match (board.count(Color::White), board.count(Color::Black)) {
            (0, 0) => WinResult::None,
            (0, _) => WinResult::BlackWins,
            (_, 0) => WinResult::WhiteWins,
            _ => WinResult::None,
        }
    }

    /// Check for a winner and mark the game over when one is found.
    pub fn check_victory(&mut self) -> WinResult {
        let result = self.winner();
        if result != WinResult::None {
            info!(%result, "game over");
            self.set_over();
        }
        result
    }

    /// Hand the move to the other side.
    pub fn advance_turn(&mut self) {
        let next = self.turn().flip();
        debug!(to_move = %next.name(), "turn advanced");
        self.set_turn(next);
    }
}

#[cfg(test)]
mod tests {
    use super::WinResult;
    use crate::board::Board;
    use crate::color::Color;
    use crate::game::GameState;
    use crate::layout::Layout;
    use crate::piece::Piece;
    use crate::square::Square;

    fn state_with(pieces: &[(u8, u8, Piece)]) -> GameState {
        let mut board = Board::empty(Layout::default());
        for &(x, y, piece) in pieces {
            board.set_piece(Square::new(x, y), Some(piece));
        }
        GameState::from_board(board, Color::Black)
    }

    #[test]
    fn no_winner_at_start() {
        let mut state = GameState::default();
        assert_eq!(state.check_victory(), WinResult::None);
        assert!(!state.is_over());
    }

    #[test]
    fn black_wins_when_white_is_gone() {
        let mut state = state_with(&[(1, 6, Piece::BLACK_MAN)]);
        assert_eq!(state.check_victory(), WinResult::BlackWins);
        assert!(state.is_over());
    }

    #[test]
    fn white_wins_when_black_is_gone() {
        let mut state = state_with(&[(1, 0, Piece::WHITE_KING)]);
        assert_eq!(state.check_victory(), WinResult::WhiteWins);
        assert!(state.is_over());
    }

    #[test]
    fn kings_count_as_pieces() {
        let mut state = state_with(&[(1, 0, Piece::WHITE_KING), (2, 9, Piece::BLACK_KING)]);
        assert_eq!(state.check_victory(), WinResult::None);
    }

    #[test]
    fn empty_board_has_no_winner() {
        let mut state = state_with(&[]);
        assert_eq!(state.check_victory(), WinResult::None);
        assert!(!state.is_over());
    }

    #[test]
    fn advance_turn_alternates() {
        let mut state = GameState::default();
        assert_eq!(state.turn(), Color::Black);
        state.advance_turn();
        assert_eq!(state.turn(), Color::White);
        state.advance_turn();
        assert_eq!(state.turn(), Color::Black);
    }

    #[test]
    fn winner_accessors() {
        assert_eq!(WinResult::BlackWins.winner(), Some(Color::Black));
        assert_eq!(WinResult::None.winner(), None);
        assert_eq!(WinResult::WhiteWins.to_string(), "white wins");
    }
}
