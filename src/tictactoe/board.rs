use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

use itertools::iproduct;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side length of the board
pub const BOARD_LENGTH: usize = 3;

/// Board index: `[row, col]`
pub type CellIdx = [usize; 2];

/// Marks placed on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Human player, always moves first
    #[serde(rename = "x")]
    Cross,
    /// Computer opponent
    #[serde(rename = "o")]
    Nought,
}

impl Mark {
    pub fn opposite(&self) -> Self {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Cross => write!(f, "X"),
            Mark::Nought => write!(f, "O"),
        }
    }
}

/// Board cell
/// `None`: Empty cell
/// `Some(mark)`: Cell marked with `mark`
pub type Cell = Option<Mark>;

/// Errors that can occur when accessing the board
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BoardError {
    #[error("Cell {0:?} outside of the board")]
    InvalidCell(CellIdx),
    #[error("Cell {0:?} is already occupied")]
    CellOccupied(CellIdx),
}

/// 3x3 board, row-major
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board([[Cell; BOARD_LENGTH]; BOARD_LENGTH]);

impl Index<CellIdx> for Board {
    type Output = Cell;

    fn index(&self, [row, col]: CellIdx) -> &Self::Output {
        assert!(
            row < BOARD_LENGTH && col < BOARD_LENGTH,
            "Index out of bounds: [{row}, {col}]"
        );
        &self.0[row][col]
    }
}

impl IndexMut<CellIdx> for Board {
    fn index_mut(&mut self, [row, col]: CellIdx) -> &mut Self::Output {
        assert!(
            row < BOARD_LENGTH && col < BOARD_LENGTH,
            "Index out of bounds: [{row}, {col}]"
        );
        &mut self.0[row][col]
    }
}

impl Board {
    /// New empty board
    pub fn new() -> Self {
        Self([[None; BOARD_LENGTH]; BOARD_LENGTH])
    }

    /// Board with the given cells, bypassing turn order
    pub fn from_rows(rows: [[Cell; BOARD_LENGTH]; BOARD_LENGTH]) -> Self {
        Self(rows)
    }

    /// Rows of the board
    pub fn rows(&self) -> &[[Cell; BOARD_LENGTH]; BOARD_LENGTH] {
        &self.0
    }

    fn check_bounds([row, col]: CellIdx) -> Result<(), BoardError> {
        if row < BOARD_LENGTH && col < BOARD_LENGTH {
            Ok(())
        } else {
            Err(BoardError::InvalidCell([row, col]))
        }
    }

    /// Returns the content of the cell at `idx`
    pub fn get(&self, idx: CellIdx) -> Result<Cell, BoardError> {
        Self::check_bounds(idx)?;
        Ok(self[idx])
    }

    /// Marks an empty cell
    pub fn set(&mut self, idx: CellIdx, mark: Mark) -> Result<(), BoardError> {
        Self::check_bounds(idx)?;
        let cell = &mut self[idx];
        match cell {
            Some(_) => Err(BoardError::CellOccupied(idx)),
            None => {
                *cell = Some(mark);
                Ok(())
            }
        }
    }

    /// Whether every cell is marked
    pub fn is_full(&self) -> bool {
        self.0.iter().all(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Indices of the empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<CellIdx> {
        iproduct!(0..BOARD_LENGTH, 0..BOARD_LENGTH)
            .map(|(row, col)| [row, col])
            .filter(|&idx| self[idx].is_none())
            .collect()
    }

    /// Number of cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        self.0
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(mark))
            .count()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.0 {
            for cell in row {
                match cell {
                    Some(mark) => write!(f, "{mark} ")?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
