//! Colored draughts piece, bit-packed into a single byte.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored piece, bit-packed into a single byte.
///
/// Bit layout:
/// - bit 0: [`PieceKind`] (0 = Man, 1 = King)
/// - bit 1: [`Color`] (0 = White, 1 = Black)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// Number of distinct pieces.
    pub const COUNT: usize = 4;

    /// White man. Raw value: 0.
    pub const WHITE_MAN: Piece = Piece::new(PieceKind::Man, Color::White);
    /// White king. Raw value: 1.
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);
    /// Black man. Raw value: 2.
    pub const BLACK_MAN: Piece = Piece::new(PieceKind::Man, Color::Black);
    /// Black king. Raw value: 3.
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// All pieces in raw-value order.
    pub const ALL: [Piece; 4] = [
        Self::WHITE_MAN,
        Self::WHITE_KING,
        Self::BLACK_MAN,
        Self::BLACK_KING,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece((color as u8) << 1 | (kind as u8))
    }

    /// Parse a diagram character: `w`/`W` for white, `b`/`B` for black,
    /// uppercase for kings.
    pub fn from_diagram_char(c: char) -> Option<Piece> {
        let color = match c.to_ascii_lowercase() {
            'w' => Color::White,
            'b' => Color::Black,
            _ => return None,
        };
        let kind = if c.is_ascii_uppercase() {
            PieceKind::King
        } else {
            PieceKind::Man
        };
        Some(Piece::new(kind, color))
    }

    /// Return the piece kind (bit 0).
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 & 0x01 {
            0 => PieceKind::Man,
            _ => PieceKind::King,
        }
    }

    /// Return the color (bit 1).
    #[inline]
    pub const fn color(self) -> Color {
        match self.0 >> 1 {
            0 => Color::White,
            _ => Color::Black,
        }
    }

    /// Return `true` if this piece is a king.
    #[inline]
    pub const fn is_king(self) -> bool {
        self.0 & 0x01 == 1
    }

    /// Return the same-colored king. Kings are returned unchanged.
    #[inline]
    pub const fn promoted(self) -> Piece {
        Piece(self.0 | 0x01)
    }

    /// Return the raw bit-packed byte (0-3).
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Return the diagram character for this piece.
    pub fn diagram_char(self) -> char {
        let base = match self.color() {
            Color::White => 'w',
            Color::Black => 'b',
        };
        if self.is_king() {
            base.to_ascii_uppercase()
        } else {
            base
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagram_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color() {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = match self.kind() {
            PieceKind::Man => 'M',
            PieceKind::King => 'K',
        };
        write!(f, "{color_prefix}{kind_char}")
    }
}
