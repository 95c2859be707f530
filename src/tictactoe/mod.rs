//! Tic-Tac-Toe
//! The human places crosses by hovering a pointer over the board, the computer answers with noughts

use std::{fmt::Display, time::Instant};

use serde::{Deserialize, Serialize};

use crate::{
    config::{ConfigError, Settings},
    geometry::{self, Point},
};

/// 3x3 board of marks
pub mod board;

/// Automated opponent
pub mod opponent;

/// Win and draw detection
pub mod rules;

use board::{Board, CellIdx, Mark};
use opponent::Agent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Outcome {
    Winner { mark: Mark },
    Draw,
}

/// Stage of the turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    AwaitingHumanMove,
    AwaitingOpponentMove,
    Finished(Outcome),
}

impl Phase {
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }
}

/// Status message shown to the player
impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingHumanMove => write!(f, "Your Turn"),
            Phase::AwaitingOpponentMove => write!(f, "Computer's Turn"),
            Phase::Finished(Outcome::Draw) => write!(f, "Game Over: Draw!"),
            Phase::Finished(Outcome::Winner { mark }) => write!(f, "Game Over: {mark} Wins!"),
        }
    }
}

pub fn status_text(phase: Phase) -> String {
    phase.to_string()
}

/// Move accepted on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub mark: Mark,
    pub cell: CellIdx,
}

/// State of the game after a tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub outcome: Option<Outcome>,
    pub board: Board,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingHuman,
    /// Opponent plays once the delay has elapsed since `since`
    AwaitingOpponent { since: Instant },
    Finished(Outcome),
}

#[derive(Debug)]
pub struct Game<A> {
    /// Board state
    board: Board,
    /// Turn state
    state: State,
    /// The human already placed a mark during the current pointer presence
    drawn: bool,
    /// Moves played since the last reset
    history: Vec<Move>,
    settings: Settings,
    opponent: A,
}

impl<A> Game<A> {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::AwaitingHuman => Phase::AwaitingHumanMove,
            State::AwaitingOpponent { .. } => Phase::AwaitingOpponentMove,
            State::Finished(outcome) => Phase::Finished(outcome),
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.phase().outcome()
    }

    pub fn status(&self) -> String {
        status_text(self.phase())
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether the current pointer presence already placed a mark
    pub fn is_debounced(&self) -> bool {
        self.drawn
    }

    pub fn snapshot(&self) -> Snapshot {
        let phase = self.phase();
        Snapshot {
            phase,
            outcome: phase.outcome(),
            board: self.board,
            status: status_text(phase),
        }
    }

    /// Back to an empty board with the human to play
    pub fn reset(&mut self) {
        log::info!("Game reset");
        self.board = Board::new();
        self.state = State::AwaitingHuman;
        self.drawn = false;
        self.history.clear();
    }
}

impl<A: Agent> Game<A> {
    pub fn new(settings: Settings, opponent: A) -> Result<Self, ConfigError> {
        settings.validate()?;
        log::info!("New game");
        Ok(Self {
            board: Board::new(),
            state: State::AwaitingHuman,
            drawn: false,
            history: Vec::new(),
            settings,
            opponent,
        })
    }

    /// Advances the game with the pointer sample of the current frame
    pub fn tick(&mut self, pointer: Option<Point>, now: Instant) -> Snapshot {
        match self.state {
            State::AwaitingHuman => self.human_turn(pointer, now),
            State::AwaitingOpponent { since } => {
                if now.saturating_duration_since(since) > self.settings.opponent_delay {
                    self.opponent_turn();
                }
            }
            State::Finished(_) => {}
        }
        self.snapshot()
    }

    fn human_turn(&mut self, pointer: Option<Point>, now: Instant) {
        let Some(point) = pointer else {
            self.drawn = false;
            return;
        };
        if self.drawn {
            return;
        }

        let layout = &self.settings.layout;
        let Some(idx) = geometry::map(point, layout.board_origin, layout.board_size) else {
            log::trace!("Pointer {point:?} outside of the board");
            return;
        };
        if self.board[idx].is_some() {
            log::trace!("Pointer over occupied cell {idx:?}");
            return;
        }

        self.play(idx, Mark::Cross);
        self.drawn = true;
        self.state = match rules::evaluate(&self.board) {
            Some(outcome) => self.finish(outcome),
            None => State::AwaitingOpponent { since: now },
        };
    }

    fn opponent_turn(&mut self) {
        let idx = self
            .opponent
            .select_move(&self.board)
            .unwrap_or_else(|e| panic!("Opponent cannot play on an unfinished game: {e}"));

        self.play(idx, Mark::Nought);
        self.drawn = false;
        self.state = match rules::evaluate(&self.board) {
            Some(outcome) => self.finish(outcome),
            None => State::AwaitingHuman,
        };
    }

    fn play(&mut self, idx: CellIdx, mark: Mark) {
        if let Err(e) = self.board.set(idx, mark) {
            panic!("Invalid move by {mark}: {e}");
        }
        self.history.push(Move { mark, cell: idx });
        log::debug!("{mark} played at {idx:?}");

        // Human always opens
        debug_assert!(
            (0..=1).contains(
                &(self.board.count(Mark::Cross) as isize - self.board.count(Mark::Nought) as isize)
            ),
            "Unbalanced board:\n{}",
            self.board
        );
    }

    fn finish(&self, outcome: Outcome) -> State {
        log::info!(
            "Game finished after {n} moves: {outcome:?}",
            n = self.history.len()
        );
        State::Finished(outcome)
    }
}

impl<A> Display for Game<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.board, self.phase())
    }
}
