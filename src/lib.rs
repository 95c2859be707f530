//! Tic-Tac-Toe controlled by a tracked fingertip
//!

/// Game state machine, board and opponent
pub mod tictactoe;

/// Pixel to cell mapping
pub mod geometry;

/// Board layout and game settings
pub mod config;

/// Draw commands
pub mod render;

/// Frame output
pub mod display;

/// Driver input commands
pub mod input;

/// Tick rate statistics
pub mod timing;
