//! Watch command - both sides play random valid moves.

use std::thread;
use std::time::Duration;

use chesskit::game::display::GameDisplay;
use chesskit::game::Game;
use rand::seq::SliceRandom;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long = "plies", default_value = "40")]
    pub plies: u32,
    #[structopt(long = "delay-ms", default_value = "250")]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let mut game = Game::new();
        let mut display = GameDisplay::new();
        let mut rng = rand::thread_rng();

        for _ in 0..self.plies {
            let chosen = match game.valid_moves().choose(&mut rng) {
                Some(chess_move) => *chess_move,
                None => break,
            };
            game.try_move(chosen.start(), chosen.end())
                .expect("a generated move should be accepted");

            display.render_game_state(game.board(), game.board().last_move());
            print!("{}", display.buffer());
            thread::sleep(Duration::from_millis(self.delay_ms));
        }
    }
}
