//! Move application: relocation, capture removal, and promotion.

use tracing::debug;

use crate::board::Board;
use crate::draughts_move::Move;
use crate::error::EngineError;
use crate::game::GameState;
use crate::movegen::legal_moves;
use crate::piece::Piece;
use crate::square::Square;

/// What applying a move changed on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// The piece as it stood on the source square.
    pub moved: Piece,
    /// The pieces removed, in capture order.
    pub captured: Vec<Piece>,
    /// The square the piece ended on.
    pub dest: Square,
    /// Whether the piece was crowned on arrival.
    pub promoted: bool,
}

impl Board {
    /// Apply `mv` for the piece on `from`, mutating the board in place.
    ///
    /// `mv` must come from [`legal_moves`] for this piece on this board.
    /// Moves that do not even fit the board's contents are rejected with
    /// [`EngineError::PreconditionViolation`] before anything changes; full
    /// legality is only asserted in debug builds.
    pub fn apply_move(&mut self, from: Square, mv: &Move) -> Result<Applied, EngineError> {
        let moved = self.check_applicable(from, mv)?;
        debug_assert!(
            legal_moves(self, moved, from).contains(mv),
            "{mv} is not a legal move for {moved:?} on {from}"
        );

        let mut captured = Vec::with_capacity(mv.capture_count());
        for &sq in mv.captures() {
            if let Some(piece) = self.take_piece(sq) {
                captured.push(piece);
            }
        }

        let dest = mv.dest();
        self.take_piece(from);
        let promoted = !moved.is_king() && dest.y() == self.layout().promotion_row(moved.color());
        let placed = if promoted { moved.promoted() } else { moved };
        self.set_piece(dest, Some(placed));

        Ok(Applied {
            moved,
            captured,
            dest,
            promoted,
        })
    }

    /// Check that `mv` fits the board: a piece on `from`, empty landings one
    /// diagonal step (or jump) apart, and opposing pieces on every capture.
    fn check_applicable(&self, from: Square, mv: &Move) -> Result<Piece, EngineError> {
        let violation = |reason| EngineError::PreconditionViolation { from, reason };

        let piece = self.piece_at(from).ok_or(violation("source square is empty"))?;

        match mv {
            Move::Slide { to } => {
                if !is_step(from, *to, 1) {
                    return Err(violation("slide is not a single diagonal step"));
                }
                if !self.is_empty(*to) {
                    return Err(violation("slide destination is occupied"));
                }
            }
            Move::Jump { captures, landings } => {
                if captures.is_empty() || captures.len() != landings.len() {
                    return Err(violation("jump captures and landings differ in length"));
                }
                let mut at = from;
                for (i, (&over, &landing)) in captures.iter().zip(landings).enumerate() {
                    if !is_step(at, landing, 2) || midpoint(at, landing) != over {
                        return Err(violation("jump step is not over the captured square"));
                    }
                    if !self.is_empty(landing) || landing == from || landings[..i].contains(&landing) {
                        return Err(violation("jump landing is occupied or revisited"));
                    }
                    if self.color_at(over) != Some(piece.color().flip()) || captures[..i].contains(&over) {
                        return Err(violation("captured square does not hold an opposing piece"));
                    }
                    at = landing;
                }
            }
        }
        Ok(piece)
    }
}

/// Return `true` if `to` is exactly `distance` diagonal steps from `from`.
fn is_step(from: Square, to: Square, distance: u8) -> bool {
    from.x().abs_diff(to.x()) == distance && from.y().abs_diff(to.y()) == distance
}

/// Return the square halfway between two squares two diagonal steps apart.
fn midpoint(a: Square, b: Square) -> Square {
    Square::new((a.x() + b.x()) / 2, (a.y() + b.y()) / 2)
}

impl GameState {
    /// Apply `mv` for the piece on `from` and tally its captures.
    ///
    /// Does not check whose turn it is and does not advance the turn; the
    /// controller does both.
    pub fn apply_move(&mut self, from: Square, mv: &Move) -> Result<Applied, EngineError> {
        let applied = self.board_mut().apply_move(from, mv)?;
        for piece in &applied.captured {
            self.record_capture(piece.color());
        }
        debug!(
            %from,
            dest = %applied.dest,
            captured = applied.captured.len(),
            promoted = applied.promoted,
            "applied move"
        );
        Ok(applied)
    }
}
