//! Pvp command - play a game against another human.

use chesskit::game::display::GameDisplay;
use chesskit::game::Game;
use chesskit::input_handler::{self, PlayerInput};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {}

impl Command for PvpArgs {
    fn execute(self) {
        let mut game = Game::new();
        let mut display = GameDisplay::new();
        render(&mut display, &game);

        loop {
            println!("Enter a move like e2e4, or undo/new/quit:");

            let input = match input_handler::read_player_input() {
                Ok(input) => input,
                Err(error) => {
                    println!("{}", error);
                    continue;
                }
            };

            match input {
                PlayerInput::Move { from, to } => match game.try_move(from, to) {
                    Ok(_applied) => render(&mut display, &game),
                    Err(error) => println!("{}", error),
                },
                PlayerInput::Undo => match game.undo() {
                    Some(_undone) => render(&mut display, &game),
                    None => println!("nothing to undo"),
                },
                PlayerInput::NewGame => {
                    game = Game::new();
                    render(&mut display, &game);
                }
                PlayerInput::Quit => break,
            }
        }
    }
}

fn render(display: &mut GameDisplay, game: &Game) {
    display.render_game_state(game.board(), game.board().last_move());
    print!("{}", display.buffer());
}
