//! Mapping between pixel coordinates and board cells

use serde::{Deserialize, Serialize};

use crate::tictactoe::board::{BOARD_LENGTH, CellIdx};

/// Pixel coordinate in the renderer's space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel coordinate of a position normalized to `[0, 1]` over a frame of `width` x `height`
    pub fn from_normalized(nx: f32, ny: f32, width: i32, height: i32) -> Self {
        Self {
            x: (nx * width as f32) as i32,
            y: (ny * height as f32) as i32,
        }
    }

    pub const fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Side of a cell for a board of side `board_size`
pub const fn cell_size(board_size: i32) -> i32 {
    board_size / BOARD_LENGTH as i32
}

/// Cell containing `point` on a square board anchored at `origin`
///
/// Returns `None` outside of `[origin, origin + size)` on either axis.
/// Binning is floor based; when `size` is not a multiple of 3 the leftover
/// pixels belong to the last row/column.
pub fn map(point: Point, origin: Point, size: i32) -> Option<CellIdx> {
    let cell = cell_size(size);
    if cell == 0 {
        return None;
    }

    let dx = point.x.checked_sub(origin.x)?;
    let dy = point.y.checked_sub(origin.y)?;
    if !(0..size).contains(&dx) || !(0..size).contains(&dy) {
        return None;
    }

    let last = BOARD_LENGTH - 1;
    let col = ((dx / cell) as usize).min(last);
    let row = ((dy / cell) as usize).min(last);
    Some([row, col])
}

/// Pixel center of a cell
pub fn cell_center([row, col]: CellIdx, origin: Point, size: i32) -> Point {
    let cell = cell_size(size);
    origin.offset(
        col as i32 * cell + cell / 2,
        row as i32 * cell + cell / 2,
    )
}
