//! Board positions on the 10x10 grid.

use std::fmt;

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 10;

/// A position on the board, encoded as a `u8` index.
///
/// Index = y * 10 + x, so (0,0) = 0, (9,0) = 9, ..., (9,9) = 99.
/// Row 0 is drawn at the top.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 100;

    /// Create a square from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both coordinates are on the grid.
    #[inline]
    pub const fn new(x: u8, y: u8) -> Square {
        debug_assert!(x < BOARD_SIZE && y < BOARD_SIZE);
        Square(y * BOARD_SIZE + x)
    }

    /// Create a square from coordinates, returning `None` if off the grid.
    #[inline]
    pub fn from_coords(x: i32, y: i32) -> Option<Square> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Square::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if (index as usize) < Square::COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Return the zero-based index (0..99).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the column.
    #[inline]
    pub const fn x(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Return the row.
    #[inline]
    pub const fn y(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Return `true` for the dark squares that pieces stand on in a legal game.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.x() + self.y()) % 2 == 1
    }

    /// Step `dx` columns and `dy` rows, returning `None` when that leaves the grid.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Square> {
        Square::from_coords(self.x() as i32 + dx, self.y() as i32 + dy)
    }

    /// Iterate over all 100 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..Square::COUNT as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x(), self.y())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square{}", self)
    }
}
