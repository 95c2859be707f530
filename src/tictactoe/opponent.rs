use rand::{Rng, seq::IndexedRandom};
use thiserror::Error;

use super::board::{Board, CellIdx};

/// Opponent asked to move on a full board
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("No moves available on a full board")]
pub struct NoMovesAvailable;

/// Picks an empty cell uniformly at random
///
/// The board is left untouched, the caller applies the move.
pub fn select<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<CellIdx, NoMovesAvailable> {
    board
        .empty_cells()
        .choose(rng)
        .copied()
        .ok_or(NoMovesAvailable)
}

/// Automated player
pub trait Agent {
    /// Select a cell based on the current state of the board
    fn select_move(&mut self, board: &Board) -> Result<CellIdx, NoMovesAvailable>;
}

/// Agent playing uniformly random moves
#[derive(Debug, Clone)]
pub struct RandomAgent<R> {
    rng: R,
}

impl<R: Rng> RandomAgent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn select_move(&mut self, board: &Board) -> Result<CellIdx, NoMovesAvailable> {
        select(board, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    use super::*;
    use crate::tictactoe::board::Mark;

    const TRIALS: usize = 90_000;

    #[test]
    fn full_board_has_no_moves() {
        let mut board = Board::new();
        for (i, idx) in board.empty_cells().into_iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::Cross } else { Mark::Nought };
            board.set(idx, mark).unwrap();
        }
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        assert_eq!(select(&board, &mut rng), Err(NoMovesAvailable));
    }

    #[test]
    fn only_empty_cells_are_selected() {
        let mut board = Board::new();
        board.set([0, 0], Mark::Cross).unwrap();
        board.set([1, 1], Mark::Nought).unwrap();
        board.set([2, 2], Mark::Cross).unwrap();
        let before = board;

        let mut agent = RandomAgent::new(Xoshiro256PlusPlus::seed_from_u64(7));
        for _ in 0..1000 {
            let idx = agent.select_move(&board).unwrap();
            assert_eq!(board[idx], None);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn last_empty_cell_is_always_selected() {
        let mut board = Board::new();
        for idx in board.empty_cells().into_iter().take(8) {
            board.set(idx, Mark::Nought).unwrap();
        }
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        assert_eq!(select(&board, &mut rng), Ok([2, 2]));
    }

    #[test]
    fn selection_is_uniform() {
        let board = Board::new();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        let mut counts: HashMap<CellIdx, usize> = HashMap::new();
        for _ in 0..TRIALS {
            *counts.entry(select(&board, &mut rng).unwrap()).or_default() += 1;
        }

        let expected = TRIALS / 9;
        assert_eq!(counts.len(), 9);
        for (idx, count) in counts {
            // Standard deviation is about 95 for this sample size
            assert!(
                count.abs_diff(expected) < expected / 20,
                "Cell {idx:?} selected {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn same_seed_same_moves() {
        let board = Board::new();
        let mut a = RandomAgent::new(Xoshiro256PlusPlus::seed_from_u64(11));
        let mut b = RandomAgent::new(Xoshiro256PlusPlus::seed_from_u64(11));
        for _ in 0..100 {
            assert_eq!(a.select_move(&board), b.select_move(&board));
        }
    }
}
