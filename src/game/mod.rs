pub mod display;
pub mod game;

pub use game::{Game, GameError};
