use log::debug;
use thiserror::Error;

use crate::board::coordinate::Coordinate;
use crate::board::Board;
use crate::chess_move::Move;
use crate::move_generator::{ChessMoveList, MoveGenerator};

#[derive(Error, Debug)]
pub enum GameError {
    #[error("that is not a valid move")]
    InvalidMove,
}

/// Represents the state and control of a chess game: one board, the move
/// generator, and a cached valid-move list that is recomputed after every
/// successful apply or undo.
pub struct Game {
    board: Board,
    move_generator: MoveGenerator,
    valid_moves: ChessMoveList,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::starting_position())
    }

    pub fn from_board(board: Board) -> Self {
        let move_generator = MoveGenerator::new();
        let valid_moves = move_generator.generate_moves(&board);
        Self {
            board,
            move_generator,
            valid_moves,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn valid_moves(&self) -> &ChessMoveList {
        &self.valid_moves
    }

    /// Builds a candidate move from the two selected coordinates against the
    /// current board and applies it iff it is a member of the cached
    /// valid-move list. Rejected candidates leave the game untouched.
    pub fn try_move(&mut self, start: Coordinate, end: Coordinate) -> Result<Move, GameError> {
        let candidate = Move::new(start, end, &self.board);
        if !self.valid_moves.contains(&candidate) {
            debug!("rejected candidate {}", candidate);
            return Err(GameError::InvalidMove);
        }
        self.board.apply_move(candidate);
        self.refresh_valid_moves();
        Ok(candidate)
    }

    /// Undoes the most recent move, if any, and refreshes the cached
    /// valid-move list.
    pub fn undo(&mut self) -> Option<Move> {
        let undone = self.board.undo_move()?;
        self.refresh_valid_moves();
        Some(undone)
    }

    fn refresh_valid_moves(&mut self) {
        self.valid_moves = self.move_generator.generate_moves(&self.board);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;
    use crate::board::coordinate::*;

    #[test]
    fn test_try_move_applies_valid_moves() {
        let mut game = Game::new();
        let applied = game.try_move(E2, E4).unwrap();
        assert_eq!("e2e4", applied.notation());
        assert_eq!(Color::Black, game.board().turn());
        assert_eq!(1, game.board().move_log().len());
    }

    #[test]
    fn test_try_move_rejects_invalid_moves() {
        let mut game = Game::new();
        // a rook move through its own pawn
        assert!(game.try_move(A1, A4).is_err());
        // an opponent's piece
        assert!(game.try_move(E7, E5).is_err());
        assert_eq!(Color::White, game.board().turn());
        assert!(game.board().move_log().is_empty());
    }

    #[test]
    fn test_cached_moves_refresh_after_apply_and_undo() {
        let mut game = Game::new();
        let white_openers = game.valid_moves().clone();

        game.try_move(E2, E4).unwrap();
        for chess_move in game.valid_moves().iter() {
            assert!(chess_move.moved_piece().is_color(Color::Black));
        }

        game.undo().unwrap();
        assert_eq!(&white_openers, game.valid_moves());
    }

    #[test]
    fn test_undo_without_history() {
        let mut game = Game::new();
        assert!(game.undo().is_none());
        assert_eq!(Color::White, game.board().turn());
    }
}
