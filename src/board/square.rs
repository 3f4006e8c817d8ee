use std::fmt;

use super::color::Color;
use super::piece::Piece;

/// Occupancy of a single grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Square {
    Empty,
    Occupied(Piece, Color),
}

impl Square {
    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }

    pub fn piece(&self) -> Option<(Piece, Color)> {
        match self {
            Square::Empty => None,
            Square::Occupied(piece, color) => Some((*piece, *color)),
        }
    }

    pub fn is_color(&self, color: Color) -> bool {
        matches!(self, Square::Occupied(_, c) if *c == color)
    }
}

impl Default for Square {
    fn default() -> Self {
        Square::Empty
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty => write!(f, "."),
            Square::Occupied(piece, color) => write!(f, "{}", piece.to_fen(*color)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_color() {
        let square = Square::Occupied(Piece::Rook, Color::White);
        assert!(square.is_color(Color::White));
        assert!(!square.is_color(Color::Black));
        assert!(!Square::Empty.is_color(Color::White));
        assert!(!Square::Empty.is_color(Color::Black));
    }

    #[test]
    fn test_piece() {
        assert_eq!(None, Square::Empty.piece());
        assert_eq!(
            Some((Piece::King, Color::Black)),
            Square::Occupied(Piece::King, Color::Black).piece()
        );
    }
}
