//! Piece colors.

use std::fmt;
use std::ops::Not;

/// The color of a piece and of the side that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Return the lowercase English name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    /// Parse a diagram side-to-move token (`"w"` or `"b"`).
    pub fn from_token(token: &str) -> Option<Color> {
        match token {
            "w" => Some(Color::White),
            "b" => Some(Color::Black),
            _ => None,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "w"),
            Color::Black => write!(f, "b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::White);
        assert_eq!(!!Color::White, Color::White);
    }

    #[test]
    fn token_matches_display() {
        for color in Color::ALL {
            assert_eq!(Color::from_token(&color.to_string()), Some(color));
        }
        assert_eq!(Color::from_token("x"), None);
        assert_eq!(Color::from_token("white"), None);
    }

    #[test]
    fn names() {
        assert_eq!(Color::White.name(), "white");
        assert_eq!(Color::Black.name(), "black");
    }

    #[test]
    fn all_and_count() {
        assert_eq!(Color::ALL.len(), Color::COUNT);
        assert_eq!(Color::ALL[Color::Black.index()], Color::Black);
    }
}
