//! Piece ranks: men and kings.

use std::fmt;

/// The rank of a piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    /// Moves and captures along its two forward diagonals only.
    Man = 0,
    /// Moves and captures along all four diagonals.
    King = 1,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 2;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 2] = [PieceKind::Man, PieceKind::King];

    /// Return the index (0 for Man, 1 for King).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Man => write!(f, "man"),
            PieceKind::King => write!(f, "king"),
        }
    }
}
