//! Player input parsing for the interactive modes.

use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::coordinate::Coordinate;

static COORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-h][1-8])([a-h][1-8])$").expect("COORD_RE regex should be valid"));

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
}

#[derive(Debug, PartialEq)]
pub enum PlayerInput {
    Move { from: Coordinate, to: Coordinate },
    Undo,
    NewGame,
    Quit,
}

impl FromStr for PlayerInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        match trimmed.as_str() {
            "undo" | "u" => return Ok(PlayerInput::Undo),
            "new" => return Ok(PlayerInput::NewGame),
            "quit" | "q" => return Ok(PlayerInput::Quit),
            _ => (),
        }

        if let Some(caps) = COORD_RE.captures(&trimmed) {
            let from = Coordinate::from_algebraic(caps.get(1).map_or("", |m| m.as_str()));
            let to = Coordinate::from_algebraic(caps.get(2).map_or("", |m| m.as_str()));
            return Ok(PlayerInput::Move { from, to });
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

pub fn read_player_input() -> Result<PlayerInput, InputError> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(_n) => input.parse(),
        Err(error) => Err(InputError::IOError {
            error: error.to_string(),
        }),
    }
}
