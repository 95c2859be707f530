//! Win and draw detection

use serde::{Deserialize, Serialize};

use super::{
    Outcome,
    board::{Board, Mark},
};

/// Line of three cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Line {
    Row(usize),
    Column(usize),
    /// (0, 0) to (2, 2)
    Diagonal,
    /// (0, 2) to (2, 0)
    AntiDiagonal,
}

impl Line {
    /// All lines, in the order they are checked
    pub const ALL: [Line; 8] = [
        Line::Row(0),
        Line::Row(1),
        Line::Row(2),
        Line::Column(0),
        Line::Column(1),
        Line::Column(2),
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// Indices of the cells in the line
    pub fn cells(&self) -> [[usize; 2]; 3] {
        match *self {
            Line::Row(row) => [[row, 0], [row, 1], [row, 2]],
            Line::Column(col) => [[0, col], [1, col], [2, col]],
            Line::Diagonal => [[0, 0], [1, 1], [2, 2]],
            Line::AntiDiagonal => [[0, 2], [1, 1], [2, 0]],
        }
    }
}

pub fn all_equal<T: Copy + PartialEq>(arr: &[T]) -> Option<T> {
    let mut it = arr.iter();
    let eq = it.next()?;
    if it.all(|x| x == eq) { Some(*eq) } else { None }
}

/// First complete line on the board: rows, then columns, then diagonals
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    Line::ALL.into_iter().find_map(|line| {
        let cells = line.cells().map(|idx| board[idx]);
        match all_equal(&cells) {
            Some(Some(mark)) => Some((line, mark)),
            _ => None,
        }
    })
}

/// Checks the board for a win or draw condition
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some((line, mark)) = winning_line(board) {
        log::debug!("Winner found in {line:?}: {mark}");
        return Some(Outcome::Winner { mark });
    }

    if board.is_full() {
        log::debug!("Board full without a line: draw");
        return Some(Outcome::Draw);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Mark> = Some(Mark::Cross);
    const O: Option<Mark> = Some(Mark::Nought);
    const E: Option<Mark> = None;

    #[test]
    fn empty_board_continues() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn every_line_wins() {
        for line in Line::ALL {
            let mut board = Board::new();
            for idx in line.cells() {
                board.set(idx, Mark::Nought).unwrap();
            }
            assert_eq!(winning_line(&board), Some((line, Mark::Nought)));
            assert_eq!(evaluate(&board), Some(Outcome::Winner { mark: Mark::Nought }));
        }
    }

    #[test]
    fn incomplete_line_is_not_a_win() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn rows_and_columns_are_checked_before_diagonals() {
        let board = Board::from_rows([[O, O, O], [X, O, X], [X, X, O]]);
        assert_eq!(winning_line(&board), Some((Line::Row(0), Mark::Nought)));

        let board = Board::from_rows([[X, O, O], [X, X, O], [X, O, X]]);
        assert_eq!(winning_line(&board), Some((Line::Column(0), Mark::Cross)));
    }

    #[test]
    fn first_matching_line_reports_its_winner() {
        // Row 0 for X and row 2 for O
        let board = Board::from_rows([[X, X, X], [E, E, E], [O, O, O]]);
        assert_eq!(evaluate(&board), Some(Outcome::Winner { mark: Mark::Cross }));
        // Column 0 and anti-diagonal
        let board = Board::from_rows([[X, E, X], [X, X, E], [X, O, O]]);
        assert_eq!(winning_line(&board), Some((Line::Column(0), Mark::Cross)));
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
        assert!(board.is_full());
        assert_eq!(winning_line(&board), None);
        assert_eq!(evaluate(&board), Some(Outcome::Draw));
    }

    #[test]
    fn win_on_last_cell_is_not_a_draw() {
        let board = Board::from_rows([[X, O, X], [O, X, O], [O, X, X]]);
        assert!(board.is_full());
        assert_eq!(evaluate(&board), Some(Outcome::Winner { mark: Mark::Cross }));
    }
}
