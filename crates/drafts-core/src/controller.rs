//! Turn-by-turn orchestration: select a piece, choose one of its moves, apply it.

use tracing::{debug, info};

use crate::draughts_move::{Move, MoveList};
use crate::error::{EngineError, SelectionReason};
use crate::game::GameState;
use crate::layout::Layout;
use crate::make_move::Applied;
use crate::movegen::{CapturePolicy, policy_moves};
use crate::square::Square;
use crate::victory::WinResult;

/// Where the controller is in the current turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the side to move to pick one of its pieces.
    AwaitingSelection,
    /// A piece is picked up and its moves have been offered.
    AwaitingMoveChoice {
        /// Square of the selected piece.
        from: Square,
        /// Moves offered for it.
        moves: MoveList,
    },
    /// The game is decided. No further input is accepted.
    Over(WinResult),
}

/// The result of a completed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// What the move changed on the board.
    pub applied: Applied,
    /// The winner check after the move.
    pub result: WinResult,
}

/// Drives one game: the only owner of its [`GameState`].
///
/// Every rejected call leaves both the state and the phase unchanged.
#[derive(Debug, Clone)]
pub struct Controller {
    state: GameState,
    phase: Phase,
    policy: CapturePolicy,
}

impl Controller {
    /// Start a new game from the standard position.
    pub fn new(layout: Layout, policy: CapturePolicy) -> Controller {
        info!(low_rows = %layout.low_rows.name(), first = %layout.first_to_move.name(), %policy, "new game");
        Controller::from_state(GameState::new(layout), policy)
    }

    /// Take over an existing game.
    pub fn from_state(state: GameState, policy: CapturePolicy) -> Controller {
        let phase = if state.is_over() {
            Phase::Over(state.winner())
        } else {
            Phase::AwaitingSelection
        };
        Controller {
            state,
            phase,
            policy,
        }
    }

    /// Return the game state.
    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Return the current phase.
    #[inline]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Return the capture policy moves are offered under.
    #[inline]
    pub fn policy(&self) -> CapturePolicy {
        self.policy
    }

    /// Return the winner check result: `WinResult::None` while play continues.
    pub fn outcome(&self) -> WinResult {
        match self.phase {
            Phase::Over(result) => result,
            _ => WinResult::None,
        }
    }

    /// Return the square and offered moves of the selected piece, if any.
    pub fn selection(&self) -> Option<(Square, &MoveList)> {
        match &self.phase {
            Phase::AwaitingMoveChoice { from, moves } => Some((*from, moves)),
            _ => None,
        }
    }

    /// Return `true` if the side to move has at least one move on offer.
    pub fn has_moves(&self) -> bool {
        self.movable_pieces().next().is_some()
    }

    /// Iterate over the squares of the side to move that have a move on offer.
    pub fn movable_pieces(&self) -> impl Iterator<Item = Square> + '_ {
        let board = self.state.board();
        let policy = self.policy;
        board
            .squares_of(self.state.turn())
            .filter(move |&sq| !policy_moves(board, sq, policy).is_empty())
    }

    /// Pick up the piece on `square` and return the moves offered for it.
    ///
    /// Selecting while another piece is picked up replaces that selection.
    pub fn select(&mut self, square: Square) -> Result<MoveList, EngineError> {
        if matches!(self.phase, Phase::Over(_)) {
            return Err(EngineError::GameOver);
        }

        let to_move = self.state.turn();
        let reason = match self.state.board().color_at(square) {
            None => Some(SelectionReason::Empty),
            Some(found) if found != to_move => Some(SelectionReason::WrongColor { found, to_move }),
            Some(_) => None,
        };
        if let Some(reason) = reason {
            debug!(%square, %reason, "selection rejected");
            return Err(EngineError::InvalidSelection { square, reason });
        }

        let moves = policy_moves(self.state.board(), square, self.policy);
        debug!(%square, offered = moves.len(), "piece selected");
        self.phase = Phase::AwaitingMoveChoice {
            from: square,
            moves: moves.clone(),
        };
        Ok(moves)
    }

    /// Put the selected piece back down without moving it.
    pub fn cancel(&mut self) {
        if matches!(self.phase, Phase::AwaitingMoveChoice { .. }) {
            self.phase = Phase::AwaitingSelection;
        }
    }

    /// Play `mv` for the selected piece.
    ///
    /// The move must be one of those offered by the last [`select`](Self::select).
    pub fn choose(&mut self, mv: &Move) -> Result<Outcome, EngineError> {
        let from = match &self.phase {
            Phase::Over(_) => return Err(EngineError::GameOver),
            Phase::AwaitingSelection => return Err(EngineError::NoSelection),
            Phase::AwaitingMoveChoice { from, moves } => {
                if !moves.contains(mv) {
                    debug!(%from, %mv, "move not on offer");
                    return Err(EngineError::InvalidMove { from: *from });
                }
                *from
            }
        };

        let applied = self.state.apply_move(from, mv);
        debug_assert!(applied.is_ok(), "offered move failed to apply: {applied:?}");
        let applied = applied?;

        let result = self.state.check_victory();
        if result == WinResult::None {
            self.state.advance_turn();
            self.phase = Phase::AwaitingSelection;
        } else {
            self.phase = Phase::Over(result);
        }
        Ok(Outcome { applied, result })
    }

    /// Play the `index`-th offered move (zero-based).
    pub fn choose_index(&mut self, index: usize) -> Result<Outcome, EngineError> {
        let mv = match &self.phase {
            Phase::Over(_) => return Err(EngineError::GameOver),
            Phase::AwaitingMoveChoice { from, moves } => match moves.as_slice().get(index) {
                Some(mv) => mv.clone(),
                None => return Err(EngineError::InvalidMove { from: *from }),
            },
            Phase::AwaitingSelection => return Err(EngineError::NoSelection),
        };
        self.choose(&mv)
    }
}

impl Default for Controller {
    fn default() -> Self {
        Controller::new(Layout::default(), CapturePolicy::default())
    }
}
