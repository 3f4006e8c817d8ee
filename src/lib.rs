pub mod board;
pub mod chess_move;
pub mod game;
pub mod input_handler;
pub mod move_generator;
