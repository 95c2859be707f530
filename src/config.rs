use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Point;

/// Default delay before the opponent plays
pub const DEFAULT_OPPONENT_DELAY: Duration = Duration::from_millis(700);

/// Screen placement of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Top-left corner of the board
    pub board_origin: Point,
    /// Side of the square board
    pub board_size: i32,
    pub window_width: i32,
    pub window_height: i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            board_origin: Point::new(10, 10),
            board_size: 580,
            // Taller than wide to fit the status text below the board
            window_width: 600,
            window_height: 680,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub layout: Layout,
    /// Time the opponent waits before playing
    pub opponent_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            opponent_delay: DEFAULT_OPPONENT_DELAY,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board of size {0} is too small to hold 3x3 cells")]
    BoardTooSmall(i32),
    #[error("Board at {origin:?} of size {size} does not fit in a {width}x{height} window")]
    BoardOutsideWindow {
        origin: Point,
        size: i32,
        width: i32,
        height: i32,
    },
}

impl Layout {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 3 {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }

        let Point { x, y } = self.board_origin;
        if x < 0
            || y < 0
            || x + self.board_size > self.window_width
            || y + self.board_size > self.window_height
        {
            return Err(ConfigError::BoardOutsideWindow {
                origin: self.board_origin,
                size: self.board_size,
                width: self.window_width,
                height: self.window_height,
            });
        }

        Ok(())
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Settings::default().validate(), Ok(()));
        assert_eq!(Settings::default().opponent_delay, Duration::from_millis(700));
    }

    #[test]
    fn tiny_board_is_rejected() {
        let layout = Layout {
            board_size: 2,
            ..Layout::default()
        };
        assert_eq!(layout.validate(), Err(ConfigError::BoardTooSmall(2)));
    }

    #[test]
    fn board_must_fit_in_window() {
        let layout = Layout {
            board_origin: Point::new(30, 10),
            ..Layout::default()
        };
        assert_matches!(layout.validate(), Err(ConfigError::BoardOutsideWindow { size: 580, .. }));

        let layout = Layout {
            board_origin: Point::new(-1, 10),
            ..Layout::default()
        };
        assert_matches!(layout.validate(), Err(ConfigError::BoardOutsideWindow { .. }));
    }
}
