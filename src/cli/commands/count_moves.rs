//! Count-moves command - walk the pseudo-legal move tree.

use std::time::Instant;

use chesskit::board::Board;
use chesskit::move_generator::MoveGenerator;
use log::debug;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CountMovesArgs {
    #[structopt(long = "depth", default_value = "4")]
    pub depth: u8,
}

impl Command for CountMovesArgs {
    fn execute(self) {
        let mut board = Board::starting_position();
        let generator = MoveGenerator::new();

        let started_at = Instant::now();
        let count = count_moves(&mut board, &generator, self.depth);
        let elapsed = started_at.elapsed();

        println!(
            "depth {}: {} moves in {:?}",
            self.depth, count, elapsed
        );
    }
}

/// Counts the leaves of the pseudo-legal move tree by applying and undoing
/// every move in sequence. Doubles as a deep exercise of the apply/undo
/// round-trip.
fn count_moves(board: &mut Board, generator: &MoveGenerator, depth: u8) -> usize {
    let candidates = generator.generate_moves(board);
    if depth <= 1 {
        return candidates.len();
    }

    let mut count = 0;
    for chess_move in candidates {
        board.apply_move(chess_move);
        count += count_moves(board, generator, depth - 1);
        board.undo_move();
        debug!("counted through {}", chess_move);
    }
    count
}
