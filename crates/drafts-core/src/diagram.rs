//! Text diagram parsing and serialization for [`Board`].
//!
//! A diagram lists the ten rows from row 0 to row 9, separated by `/`.
//! Each row has ten cells: `.` for an empty square, `w`/`b` for white and
//! black men, `W`/`B` for kings. A game diagram may add a side-to-move
//! token after a space.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::DiagramError;
use crate::layout::Layout;
use crate::piece::Piece;
use crate::square::{BOARD_SIZE, Square};

/// The diagram of the standard starting position under the default layout.
pub const STARTING_DIAGRAM: &str = concat!(
    ".w.w.w.w.w/w.w.w.w.w./.w.w.w.w.w/w.w.w.w.w./",
    "........../........../",
    ".b.b.b.b.b/b.b.b.b.b./.b.b.b.b.b/b.b.b.b.b.",
);

impl Board {
    /// Parse a piece placement diagram onto a board oriented by `layout`.
    pub fn from_diagram(placement: &str, layout: Layout) -> Result<Board, DiagramError> {
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(DiagramError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty(layout);
        for (y, row) in rows.iter().enumerate() {
            let length = row.chars().count();
            if length != BOARD_SIZE as usize {
                return Err(DiagramError::BadRowLength { row: y, length });
            }
            for (x, c) in row.chars().enumerate() {
                if c == '.' {
                    continue;
                }
                let piece =
                    Piece::from_diagram_char(c).ok_or(DiagramError::InvalidPieceChar { character: c })?;
                board.set_piece(Square::new(x as u8, y as u8), Some(piece));
            }
        }
        Ok(board)
    }

    /// Parse a game diagram: a placement optionally followed by a side-to-move token.
    ///
    /// Without a token, the layout's opening color is to move.
    pub fn from_game_diagram(diagram: &str, layout: Layout) -> Result<(Board, Color), DiagramError> {
        let mut fields = diagram.split_whitespace();
        let placement = fields.next().unwrap_or_default();
        let board = Board::from_diagram(placement, layout)?;

        let turn = match fields.next() {
            Some(token) => Color::from_token(token).ok_or_else(|| DiagramError::InvalidSideToMove {
                found: token.to_string(),
            })?,
            None => layout.first_to_move,
        };

        if let Some(extra) = fields.next() {
            return Err(DiagramError::TrailingField {
                found: extra.to_string(),
            });
        }
        Ok((board, turn))
    }
}

impl FromStr for Board {
    type Err = DiagramError;

    fn from_str(diagram: &str) -> Result<Board, DiagramError> {
        Board::from_diagram(diagram.trim(), Layout::default())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            if y > 0 {
                write!(f, "/")?;
            }
            for x in 0..BOARD_SIZE {
                match self.piece_at(Square::new(x, y)) {
                    Some(piece) => write!(f, "{}", piece.diagram_char())?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
