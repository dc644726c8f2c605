//! Error types for diagram parsing and engine calls.

use std::fmt;

use crate::color::Color;
use crate::square::Square;

/// Why a square could not be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    /// No piece stands on the square.
    Empty,
    /// The piece belongs to the side not on move.
    WrongColor {
        /// Color of the piece on the square.
        found: Color,
        /// Color of the side to move.
        to_move: Color,
    },
}

impl fmt::Display for SelectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionReason::Empty => write!(f, "square is empty"),
            SelectionReason::WrongColor { found, to_move } => write!(
                f,
                "piece is {}, but {} is to move",
                found.name(),
                to_move.name()
            ),
        }
    }
}

/// Errors returned by the engine's public operations.
///
/// Every error leaves the game state exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The selected square does not hold a piece of the side to move.
    #[error("invalid selection at {square}: {reason}")]
    InvalidSelection {
        /// The square that was selected.
        square: Square,
        /// Why it was rejected.
        reason: SelectionReason,
    },
    /// The move is not among the legal moves last produced for that square.
    #[error("invalid move for the piece at {from}")]
    InvalidMove {
        /// The square of the selected piece.
        from: Square,
    },
    /// A move was chosen before any piece was selected.
    #[error("no piece is selected")]
    NoSelection,
    /// A move was applied that does not fit the board it was applied to.
    #[error("precondition violated applying a move from {from}: {reason}")]
    PreconditionViolation {
        /// The source square passed to the applicator.
        from: Square,
        /// What did not hold.
        reason: &'static str,
    },
    /// The game has already been decided.
    #[error("the game is over")]
    GameOver,
}

/// Errors that occur when parsing a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagramError {
    /// The placement does not have exactly 10 rows.
    #[error("expected 10 rows in diagram, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row does not describe exactly 10 cells.
    #[error("row {row} describes {length} cells, expected 10")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move token is not "w" or "b".
    #[error("invalid side to move: \"{found}\"")]
    InvalidSideToMove {
        /// The invalid token.
        found: String,
    },
    /// Extra fields follow the side-to-move token.
    #[error("unexpected trailing field: \"{found}\"")]
    TrailingField {
        /// The first unexpected field.
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{DiagramError, EngineError, SelectionReason};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn engine_error_display() {
        let err = EngineError::InvalidSelection {
            square: Square::new(2, 3),
            reason: SelectionReason::WrongColor {
                found: Color::White,
                to_move: Color::Black,
            },
        };
        assert_eq!(
            format!("{err}"),
            "invalid selection at (2,3): piece is white, but black is to move"
        );
    }

    #[test]
    fn empty_selection_display() {
        let err = EngineError::InvalidSelection {
            square: Square::new(0, 0),
            reason: SelectionReason::Empty,
        };
        assert_eq!(format!("{err}"), "invalid selection at (0,0): square is empty");
    }

    #[test]
    fn diagram_error_display() {
        let err = DiagramError::WrongRowCount { found: 8 };
        assert_eq!(format!("{err}"), "expected 10 rows in diagram, found 8");
    }
}
