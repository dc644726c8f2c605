//! The draughts board: cell contents of the 10x10 grid.

use std::fmt;

use crate::color::Color;
use crate::layout::Layout;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::{BOARD_SIZE, Square};

/// Cell contents of the 10x10 grid, plus the layout that orients it.
///
/// The layout decides which way each color's men move and where they
/// promote; it never changes after the board is created.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Contents of each square, indexed by [`Square::index()`].
    cells: [Option<Piece>; Square::COUNT],
    /// Orientation of the two sides.
    layout: Layout,
}

impl Board {
    /// Return a board with no pieces on it.
    pub fn empty(layout: Layout) -> Board {
        Board {
            cells: [None; Square::COUNT],
            layout,
        }
    }

    /// Return the standard starting position for `layout`: men on every
    /// dark square of each side's four home rows, middle rows empty.
    pub fn starting_position(layout: Layout) -> Board {
        let mut board = Board::empty(layout);
        for sq in Square::all().filter(|sq| sq.is_dark()) {
            if let Some(color) = layout.home_color(sq.y()) {
                board.cells[sq.index()] = Some(Piece::new(PieceKind::Man, color));
            }
        }
        board
    }

    /// Return the layout this board is oriented by.
    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(Piece::color)
    }

    /// Return `true` if the given square holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Place `piece` on `sq`, or clear the square with `None`.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece;
    }

    /// Remove and return the piece on `sq`.
    #[inline]
    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }

    /// Iterate over every occupied square with its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the squares holding pieces of `color`.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.color() == color)
            .map(|(sq, _)| sq)
    }

    /// Count the pieces of `color`, men and kings alike.
    pub fn count(&self, color: Color) -> usize {
        self.squares_of(color).count()
    }

    /// Count every piece on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position(Layout::default())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a 10x10 grid with coordinates.
///
/// Row 0 is printed at the top. Light squares are blank, empty dark
/// squares are dots.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        write!(f, "  ")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {x}")?;
        }
        writeln!(f)?;
        for y in 0..BOARD_SIZE {
            write!(f, "{y} ")?;
            for x in 0..BOARD_SIZE {
                let sq = Square::new(x, y);
                let c = match board.piece_at(sq) {
                    Some(piece) => piece.diagram_char(),
                    None if sq.is_dark() => '.',
                    None => ' ',
                };
                write!(f, " {c}")?;
            }
            if y + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::layout::Layout;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn starting_position_counts() {
        let board = Board::starting_position(Layout::default());
        assert_eq!(board.count(Color::White), 20);
        assert_eq!(board.count(Color::Black), 20);
        assert_eq!(board.occupied_count(), 40);
    }

    #[test]
    fn starting_position_only_dark_squares() {
        let board = Board::default();
        for (sq, _) in board.pieces() {
            assert!(sq.is_dark(), "piece on light square {sq}");
        }
    }

    #[test]
    fn starting_position_rows() {
        let board = Board::default();
        assert_eq!(board.piece_at(Square::new(1, 0)), Some(Piece::WHITE_MAN));
        assert_eq!(board.piece_at(Square::new(0, 3)), Some(Piece::WHITE_MAN));
        assert_eq!(board.piece_at(Square::new(1, 6)), Some(Piece::BLACK_MAN));
        assert_eq!(board.piece_at(Square::new(0, 9)), Some(Piece::BLACK_MAN));
        assert!(board.is_empty(Square::new(1, 4)));
        assert!(board.is_empty(Square::new(0, 5)));
    }

    #[test]
    fn swapped_layout_swaps_colors() {
        let board = Board::starting_position(Layout::new(Color::Black, Color::White));
        assert_eq!(board.color_at(Square::new(1, 0)), Some(Color::Black));
        assert_eq!(board.color_at(Square::new(1, 6)), Some(Color::White));
    }

    #[test]
    fn set_and_take_piece() {
        let mut board = Board::empty(Layout::default());
        let sq = Square::new(4, 5);
        board.set_piece(sq, Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(sq), Some(Piece::WHITE_KING));
        assert_eq!(board.take_piece(sq), Some(Piece::WHITE_KING));
        assert!(board.is_empty(sq));
    }

    #[test]
    fn pretty_print() {
        let board = Board::default();
        let output = format!("{}", board.pretty());
        assert!(output.starts_with("   0 1 2 3 4 5 6 7 8 9"));
        assert!(output.contains("0    w   w   w   w   w"));
        assert!(output.contains("5  .   .   .   .   . "));
        assert_eq!(output.lines().count(), 11);
    }
}
