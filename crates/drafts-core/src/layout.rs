//! Starting layout: which color sets up on which side of the board.

use crate::color::Color;
use crate::square::BOARD_SIZE;

/// Number of rows each side fills at the start of a game.
pub const HOME_ROWS: u8 = 4;

/// Which color starts on rows 0-3 and which color opens the game.
///
/// The other color starts on rows 6-9. A color's men advance away from
/// their home rows and promote on the far edge, so both directions are
/// fixed once the layout is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    /// The color filling rows 0-3.
    pub low_rows: Color,
    /// The color that makes the first move.
    pub first_to_move: Color,
}

impl Layout {
    /// Create a layout.
    pub const fn new(low_rows: Color, first_to_move: Color) -> Layout {
        Layout {
            low_rows,
            first_to_move,
        }
    }

    /// Return the row step (+1 or -1) that moves a man of `color` forward.
    #[inline]
    pub const fn forward(self, color: Color) -> i32 {
        if color as u8 == self.low_rows as u8 {
            1
        } else {
            -1
        }
    }

    /// Return the row on which a man of `color` is promoted.
    #[inline]
    pub const fn promotion_row(self, color: Color) -> u8 {
        if color as u8 == self.low_rows as u8 {
            BOARD_SIZE - 1
        } else {
            0
        }
    }

    /// Return the color that starts on row `y`, or `None` for the empty middle rows.
    pub const fn home_color(self, y: u8) -> Option<Color> {
        if y < HOME_ROWS {
            Some(self.low_rows)
        } else if y >= BOARD_SIZE - HOME_ROWS {
            Some(self.low_rows.flip())
        } else {
            None
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::new(Color::White, Color::Black)
    }
}
