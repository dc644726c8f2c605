//! Game state: the board, whose turn it is, capture tallies, and whether the game is over.

use crate::board::Board;
use crate::color::Color;
use crate::draughts_move::MoveList;
use crate::error::DiagramError;
use crate::layout::Layout;
use crate::movegen::legal_moves;
use crate::square::Square;

/// Number of pieces of each color removed from the board so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureCounts {
    counts: [u32; Color::COUNT],
}

impl CaptureCounts {
    /// Return how many pieces of `color` have been captured.
    #[inline]
    pub fn count(self, color: Color) -> u32 {
        self.counts[color.index()]
    }
}

/// The complete state of one game.
///
/// Each game owns its own state; nothing is shared between games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Color,
    captures: CaptureCounts,
    over: bool,
}

impl GameState {
    /// Start a game from the standard position for `layout`.
    pub fn new(layout: Layout) -> GameState {
        GameState::from_board(Board::starting_position(layout), layout.first_to_move)
    }

    /// Start a game from an arbitrary board with `turn` to move.
    pub fn from_board(board: Board, turn: Color) -> GameState {
        GameState {
            board,
            turn,
            captures: CaptureCounts::default(),
            over: false,
        }
    }

    /// Start a game from a game diagram (placement plus optional side to move).
    pub fn from_diagram(diagram: &str, layout: Layout) -> Result<GameState, DiagramError> {
        let (board, turn) = Board::from_game_diagram(diagram, layout)?;
        Ok(GameState::from_board(board, turn))
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Return the side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Return the capture tallies.
    #[inline]
    pub fn captures(&self) -> CaptureCounts {
        self.captures
    }

    /// Return `true` once a winner has been found.
    #[inline]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Generate every move of the piece on `from`; empty if the square is empty.
    pub fn legal_moves(&self, from: Square) -> MoveList {
        match self.board.piece_at(from) {
            Some(piece) => legal_moves(&self.board, piece, from),
            None => MoveList::new(),
        }
    }

    #[inline]
    pub(crate) fn record_capture(&mut self, color: Color) {
        self.captures.counts[color.index()] += 1;
    }

    #[inline]
    pub(crate) fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    #[inline]
    pub(crate) fn set_over(&mut self) {
        self.over = true;
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(Layout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::color::Color;
    use crate::diagram::STARTING_DIAGRAM;
    use crate::layout::Layout;
    use crate::square::Square;

    #[test]
    fn new_game_defaults() {
        let state = GameState::new(Layout::default());
        assert_eq!(state.turn(), Color::Black);
        assert_eq!(state.captures().count(Color::White), 0);
        assert_eq!(state.captures().count(Color::Black), 0);
        assert!(!state.is_over());
        assert_eq!(state.board().occupied_count(), 40);
    }

    #[test]
    fn first_mover_follows_layout() {
        let state = GameState::new(Layout::new(Color::White, Color::White));
        assert_eq!(state.turn(), Color::White);
    }

    #[test]
    fn from_diagram_matches_new() {
        let parsed = GameState::from_diagram(STARTING_DIAGRAM, Layout::default()).unwrap();
        assert_eq!(parsed, GameState::default());
    }

    #[test]
    fn legal_moves_on_empty_square() {
        let state = GameState::default();
        assert!(state.legal_moves(Square::new(0, 5)).is_empty());
        assert_eq!(state.legal_moves(Square::new(1, 6)).len(), 2);
    }

    #[test]
    fn games_are_independent() {
        let mut first = GameState::default();
        let second = GameState::default();
        first.record_capture(Color::White);
        assert_eq!(first.captures().count(Color::White), 1);
        assert_eq!(second.captures().count(Color::White), 0);
    }
}
