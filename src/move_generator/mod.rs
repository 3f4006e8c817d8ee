pub mod generator;

pub use generator::{ChessMoveList, MoveGenerator};
