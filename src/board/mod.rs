pub mod color;
pub mod coordinate;
pub mod error;
pub mod piece;
pub mod square;

mod display;

#[cfg(test)]
mod tests;

use color::Color;
use coordinate::Coordinate;
use error::BoardError;
use piece::Piece;
use square::Square;

use crate::chess_move::Move;
use crate::chess_position;
use crate::move_generator::{ChessMoveList, MoveGenerator};

/// The authoritative game state: an 8x8 grid of squares, the side to move,
/// and the ordered log of applied moves that supports undo.
///
/// The board enforces geometry only. Legality beyond geometry (check,
/// castling, promotion, and so on) is the caller's concern.
#[derive(Clone)]
pub struct Board {
    grid: [[Square; 8]; 8],
    turn: Color,
    move_log: Vec<Move>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            grid: [[Square::Empty; 8]; 8],
            turn: Color::White,
            move_log: Vec::new(),
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        chess_position! {
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBNR
        }
    }

    pub fn get(&self, coord: Coordinate) -> Square {
        self.grid[coord.row() as usize][coord.col() as usize]
    }

    pub fn put(&mut self, coord: Coordinate, piece: Piece, color: Color) -> Result<(), BoardError> {
        if !self.get(coord).is_empty() {
            return Err(BoardError::SquareOccupied);
        }
        self.set(coord, Square::Occupied(piece, color));
        Ok(())
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) -> Color {
        self.turn = turn;
        turn
    }

    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Executes the move mechanically: empties the start square, writes the
    /// recorded moved piece to the end square, logs the move, and passes the
    /// turn. No legality check is performed; callers must have validated the
    /// move against `valid_moves` first.
    pub fn apply_move(&mut self, chess_move: Move) {
        self.set(chess_move.start(), Square::Empty);
        self.set(chess_move.end(), chess_move.moved_piece());
        self.move_log.push(chess_move);
        self.toggle_turn();
    }

    /// Reverses the most recent applied move, restoring both squares from
    /// the move's snapshots and passing the turn back. A no-op on an empty
    /// log. Exact inverse of the corresponding `apply_move`.
    pub fn undo_move(&mut self) -> Option<Move> {
        let chess_move = self.move_log.pop()?;
        self.set(chess_move.start(), chess_move.moved_piece());
        self.set(chess_move.end(), chess_move.captured_piece());
        self.toggle_turn();
        Some(chess_move)
    }

    /// The moves the side to move may play. Currently pseudo-legal only:
    /// moves that leave the mover's own king in check are not yet filtered
    /// out.
    pub fn valid_moves(&self) -> ChessMoveList {
        self.all_possible_moves()
    }

    /// All pseudo-legal moves for the side to move, ignoring checks.
    pub fn all_possible_moves(&self) -> ChessMoveList {
        MoveGenerator::new().generate_moves(self)
    }

    fn set(&mut self, coord: Coordinate, square: Square) {
        self.grid[coord.row() as usize][coord.col() as usize] = square;
    }

    fn toggle_turn(&mut self) -> Color {
        self.turn = self.turn.opposite();
        self.turn
    }
}
