use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("cannot put a piece on a square that is already occupied")]
    SquareOccupied,
}
