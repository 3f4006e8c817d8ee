use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::coordinate::Coordinate;
use crate::board::square::Square;
use crate::board::Board;

/// A transition between two squares, captured against a specific board
/// snapshot. The occupants of both squares are recorded at construction time
/// so that the move can be undone later without consulting any other state.
#[derive(Clone, Copy)]
pub struct Move {
    start: Coordinate,
    end: Coordinate,
    moved_piece: Square,
    captured_piece: Square,
}

impl Move {
    pub fn new(start: Coordinate, end: Coordinate, board: &Board) -> Self {
        Self {
            start,
            end,
            moved_piece: board.get(start),
            captured_piece: board.get(end),
        }
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    pub fn moved_piece(&self) -> Square {
        self.moved_piece
    }

    pub fn captured_piece(&self) -> Square {
        self.captured_piece
    }

    /// Derived identity, computed from the start and end coordinates only.
    /// Uniquely identifies the (start, end) pair but not the pieces involved.
    pub fn identity_key(&self) -> u16 {
        self.start.row() as u16 * 1000
            + self.start.col() as u16 * 100
            + self.end.row() as u16 * 10
            + self.end.col() as u16
    }

    /// The 4-character from+to algebraic string, e.g. "e2e4".
    pub fn notation(&self) -> String {
        format!("{}{}", self.start.to_algebraic(), self.end.to_algebraic())
    }
}

/// Move equality is coordinate-only: two moves with the same start and end
/// squares compare equal regardless of which pieces they recorded. This is
/// sufficient while every (start, end) pair denotes at most one move; it will
/// need revisiting once promotion moves require disambiguation by promoted
/// piece type.
impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.identity_key() == other.identity_key()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity_key().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let capture_msg = match self.captured_piece.piece() {
            Some((piece, color)) => format!(" (captures {})", piece.to_fen(color)),
            None => "".to_string(),
        };
        write!(f, "move {}{}", self.notation(), capture_msg)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}
