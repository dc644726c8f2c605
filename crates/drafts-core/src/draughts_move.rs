//! Draughts move representation.

use std::fmt;

use crate::square::Square;

/// A move of one piece, relative to the square it starts on.
///
/// A jump chain records, for each single jump, the square of the piece
/// jumped over (`captures[i]`) and the square landed on (`landings[i]`).
/// Both sequences always have the same non-zero length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    /// One diagonal step onto an empty square.
    Slide {
        /// Destination square.
        to: Square,
    },
    /// One or more consecutive jumps over opposing pieces.
    Jump {
        /// Squares of the jumped pieces, in jump order.
        captures: Vec<Square>,
        /// Squares landed on, in jump order.
        landings: Vec<Square>,
    },
}

impl Move {
    /// Return the square the piece ends on.
    ///
    /// # Panics
    ///
    /// Panics on a jump with no landings, which the generator never produces.
    pub fn dest(&self) -> Square {
        match self {
            Move::Slide { to } => *to,
            Move::Jump { landings, .. } => *landings.last().expect("jump has at least one landing"),
        }
    }

    /// Return the squares of captured pieces (empty for a slide).
    pub fn captures(&self) -> &[Square] {
        match self {
            Move::Slide { .. } => &[],
            Move::Jump { captures, .. } => captures,
        }
    }

    /// Return the number of pieces this move captures.
    #[inline]
    pub fn capture_count(&self) -> usize {
        self.captures().len()
    }

    /// Return `true` if this is a jump chain.
    #[inline]
    pub fn is_jump(&self) -> bool {
        matches!(self, Move::Jump { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Slide { to } => write!(f, "slide to {to}"),
            Move::Jump { captures, landings } => {
                write!(f, "jump")?;
                for (captured, landing) in captures.iter().zip(landings) {
                    write!(f, " x{captured} {landing}")?;
                }
                Ok(())
            }
        }
    }
}

/// The legal moves of one piece, in generation order: slides first, then
/// jump chains depth-first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList { moves: Vec::new() }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Return `true` if `mv` is in the list.
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Return `true` if any move in the list is a jump chain.
    pub fn has_jump(&self) -> bool {
        self.moves.iter().any(Move::is_jump)
    }

    /// Return the largest number of captures of any move in the list.
    pub fn max_captures(&self) -> usize {
        self.moves.iter().map(Move::capture_count).max().unwrap_or(0)
    }

    /// Keep only the moves for which `keep` returns `true`.
    pub fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }

    /// Iterate over the moves.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveList};
    use crate::square::Square;

    fn two_jump() -> Move {
        Move::Jump {
            captures: vec![Square::new(3, 3), Square::new(5, 5)],
            landings: vec![Square::new(4, 4), Square::new(6, 6)],
        }
    }

    #[test]
    fn dest_and_captures() {
        let slide = Move::Slide { to: Square::new(0, 5) };
        assert_eq!(slide.dest(), Square::new(0, 5));
        assert_eq!(slide.capture_count(), 0);
        assert!(!slide.is_jump());

        let jump = two_jump();
        assert_eq!(jump.dest(), Square::new(6, 6));
        assert_eq!(jump.capture_count(), 2);
        assert!(jump.is_jump());
    }

    #[test]
    fn display() {
        assert_eq!(Move::Slide { to: Square::new(2, 5) }.to_string(), "slide to (2,5)");
        assert_eq!(two_jump().to_string(), "jump x(3,3) (4,4) x(5,5) (6,6)");
    }

    #[test]
    fn list_queries() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        assert_eq!(list.max_captures(), 0);

        list.push(Move::Slide { to: Square::new(2, 5) });
        list.push(two_jump());
        assert_eq!(list.len(), 2);
        assert!(list.has_jump());
        assert_eq!(list.max_captures(), 2);
        assert!(list.contains(&two_jump()));
        assert_eq!(list[0], Move::Slide { to: Square::new(2, 5) });

        list.retain(Move::is_jump);
        assert_eq!(list.len(), 1);
    }
}
