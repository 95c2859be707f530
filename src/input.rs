//! Commands read by the driver, one per line
//!
//! - `x y`: pointer at pixel `(x, y)`
//! - `n x y`: pointer at normalized position `(x, y)` of the window
//! - `-` or an empty line: no pointer detected
//! - `r`: reset the game
//! - `q`: quit

use thiserror::Error;

use crate::{config::Layout, geometry::Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Latest pointer sample, `None` when no pointer is detected
    Pointer(Option<Point>),
    Reset,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid coordinate {0:?}")]
    Coordinate(String),
    #[error("Normalized coordinate {0} outside of [0, 1]")]
    OutOfRange(f32),
    #[error("Unrecognized command {0:?}")]
    Unknown(String),
}

fn pixel(token: &str) -> Result<i32, InputError> {
    token
        .parse()
        .map_err(|_| InputError::Coordinate(token.to_string()))
}

fn normalized(token: &str) -> Result<f32, InputError> {
    let value: f32 = token
        .parse()
        .map_err(|_| InputError::Coordinate(token.to_string()))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange(value))
    }
}

/// Parses a line of input, normalized coordinates are scaled to the window of `layout`
pub fn parse_command(line: &str, layout: &Layout) -> Result<Command, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens[..] {
        [] | ["-"] => Ok(Command::Pointer(None)),
        ["r"] => Ok(Command::Reset),
        ["q"] => Ok(Command::Quit),
        ["n", x, y] => Ok(Command::Pointer(Some(Point::from_normalized(
            normalized(x)?,
            normalized(y)?,
            layout.window_width,
            layout.window_height,
        )))),
        [x, y] => Ok(Command::Pointer(Some(Point::new(pixel(x)?, pixel(y)?)))),
        _ => Err(InputError::Unknown(line.trim().to_string())),
    }
}
