use structopt::StructOpt;

mod cli;

use cli::commands::Command;
use cli::Chesskit;

fn main() {
    env_logger::init();
    Chesskit::from_args().execute();
}
