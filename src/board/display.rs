use std::fmt;

use super::coordinate::Coordinate;
use super::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                write!(f, " {}", self.get(Coordinate::new(row, col)))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")
    }
}

/// Builds a board from an 8x8 piece diagram written from White's
/// perspective, top row first (rank 8 down to rank 1). Piece characters use
/// FEN letters; `.` marks an empty square. The side to move defaults to
/// White; use `set_turn` afterwards if Black is to move.
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 64 squares
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        // The diagram reads top-to-bottom from rank 8, which is exactly the
        // grid's row order, so the character index maps straight to (row, col).
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let (piece, color) = $crate::board::piece::Piece::from_fen(c)
                    .expect("Invalid character in chess position");
                let row = (i / 8) as u8;
                let col = (i % 8) as u8;
                board
                    .put($crate::board::coordinate::Coordinate::new(row, col), piece, color)
                    .unwrap();
            }
        }
        board
    }};
}
