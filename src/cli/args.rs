//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{count_moves::CountMovesArgs, pvp::PvpArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(name = "chesskit", about = "A mailbox chess game-state engine ♛")]
pub enum Chesskit {
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine. Moves are entered as coordinate pairs (e.g. `e2e4`); `undo` takes back the last move, `new` starts over, `quit` exits."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch both sides play uniformly random valid moves for a bounded number of plies (default: 40). A demo and smoke-test mode."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "count-moves",
        about = "Walk the pseudo-legal move tree from the starting position to the given `--depth` (default: 4) using apply/undo, and report the number of leaf moves and the time it took."
    )]
    CountMoves(CountMovesArgs),
}

impl crate::cli::commands::Command for Chesskit {
    fn execute(self) {
        match self {
            Self::Pvp(cmd) => cmd.execute(),
            Self::Watch(cmd) => cmd.execute(),
            Self::CountMoves(cmd) => cmd.execute(),
        }
    }
}
