//! Draw commands for an external renderer
//!
//! Nothing here touches pixels: the board and overlays are described as data and
//! the renderer decides how to draw them.

use serde::Serialize;

use crate::{
    config::Layout,
    geometry::{self, Point},
    tictactoe::{
        Phase, Snapshot,
        board::{BOARD_LENGTH, Board, CellIdx, Mark},
    },
};

/// Half-extent of the X strokes and radius of the O circle
const MARK_EXTENT: i32 = 40;
const MARK_THICKNESS: i32 = 5;
const GRID_THICKNESS: i32 = 3;
const POINTER_RADIUS: i32 = 12;

/// Gap between the bottom of the board and the status baseline
const STATUS_OFFSET: i32 = 50;
const HINT_MARGIN: i32 = 10;
const HINT_BOTTOM_OFFSET: i32 = 20;

pub const HINT_TEXT: &str = "Press 'r' to replay | 'q' to quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const LIGHT_GRAY: Rgb = Rgb(200, 200, 200);
}

impl Mark {
    pub const fn color(&self) -> Rgb {
        match self {
            Mark::Cross => Rgb::RED,
            Mark::Nought => Rgb::GREEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum DrawCommand {
    /// Separator between rows or columns
    GridLine {
        from: Point,
        to: Point,
        color: Rgb,
        thickness: i32,
    },
    /// X drawn as two diagonal strokes, O as a circle, of half-size `extent` around `center`
    Mark {
        cell: CellIdx,
        mark: Mark,
        center: Point,
        extent: i32,
        color: Rgb,
        thickness: i32,
    },
    /// Filled disc at the tracked pointer
    Pointer {
        center: Point,
        radius: i32,
        color: Rgb,
    },
    Text {
        anchor: Point,
        text: String,
        scale: f32,
        color: Rgb,
        thickness: i32,
    },
}

/// Grid and marks of the board
pub fn render_board(board: &Board, layout: &Layout) -> Vec<DrawCommand> {
    let Layout {
        board_origin: origin,
        board_size: size,
        ..
    } = *layout;
    let cell = geometry::cell_size(size);

    let grid = (1..BOARD_LENGTH as i32).flat_map(|i| {
        [
            // Horizontal
            DrawCommand::GridLine {
                from: origin.offset(0, i * cell),
                to: origin.offset(size, i * cell),
                color: Rgb::WHITE,
                thickness: GRID_THICKNESS,
            },
            // Vertical
            DrawCommand::GridLine {
                from: origin.offset(i * cell, 0),
                to: origin.offset(i * cell, size),
                color: Rgb::WHITE,
                thickness: GRID_THICKNESS,
            },
        ]
    });

    let marks = board.rows().iter().enumerate().flat_map(move |(row, cells)| {
        cells.iter().enumerate().filter_map(move |(col, cell)| {
            let mark = (*cell)?;
            Some(DrawCommand::Mark {
                cell: [row, col],
                mark,
                center: geometry::cell_center([row, col], origin, size),
                extent: MARK_EXTENT,
                color: mark.color(),
                thickness: MARK_THICKNESS,
            })
        })
    });

    grid.chain(marks).collect()
}

/// Everything drawn on top of the camera frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    #[serde(flatten)]
    pub snapshot: Snapshot,
    pub commands: Vec<DrawCommand>,
}

/// Board, pointer marker and texts for one frame
///
/// The pointer is only shown while the human is expected to move.
pub fn render_frame(snapshot: &Snapshot, pointer: Option<Point>, layout: &Layout) -> Frame {
    let mut commands = render_board(&snapshot.board, layout);

    if let (Phase::AwaitingHumanMove, Some(center)) = (snapshot.phase, pointer) {
        commands.push(DrawCommand::Pointer {
            center,
            radius: POINTER_RADIUS,
            color: Rgb::BLUE,
        });
    }

    commands.push(DrawCommand::Text {
        anchor: layout
            .board_origin
            .offset(0, layout.board_size + STATUS_OFFSET),
        text: snapshot.status.clone(),
        scale: 1.0,
        color: Rgb::YELLOW,
        thickness: 3,
    });
    commands.push(DrawCommand::Text {
        anchor: Point::new(HINT_MARGIN, layout.window_height - HINT_BOTTOM_OFFSET),
        text: HINT_TEXT.to_string(),
        scale: 0.6,
        color: Rgb::LIGHT_GRAY,
        thickness: 1,
    });

    Frame {
        snapshot: snapshot.clone(),
        commands,
    }
}
