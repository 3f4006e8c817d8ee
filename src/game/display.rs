use std::fmt::Write;

use termion::{clear, cursor};

use crate::board::coordinate::Coordinate;
use crate::board::Board;
use crate::chess_move::Move;

/// Buffered terminal renderer for the interactive modes.
pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All)
            .expect("writing to a string buffer should not fail");
    }

    pub fn render_game_state(&mut self, board: &Board, last_move: Option<&Move>) {
        self.clear();

        // Board header
        self.buffer.push_str("    a   b   c   d   e   f   g   h\n");
        self.buffer
            .push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        // Board squares, rank 8 at the top
        for row in 0..8u8 {
            let rank = 8 - row;
            self.buffer.push_str(&format!("{} │", rank));
            for col in 0..8u8 {
                let square = board.get(Coordinate::new(row, col));
                let square_str = match square.piece() {
                    Some((piece, color)) => piece.to_unicode_piece_char(color).to_string(),
                    None => if (row + col) % 2 == 0 { " " } else { "·" }.to_string(),
                };
                self.buffer.push_str(&format!(" {} │", square_str));
            }
            self.buffer.push_str(&format!(" {}\n", rank));

            if row < 7 {
                self.buffer
                    .push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            } else {
                self.buffer
                    .push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
            }
        }

        // Board footer
        self.buffer.push_str("    a   b   c   d   e   f   g   h\n\n");

        if let Some(chess_move) = last_move {
            self.buffer.push_str(&format!("last: {}\n", chess_move));
        }
        self.buffer
            .push_str(&format!("{} to move\n", board.turn()));
    }
}
