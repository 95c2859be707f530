#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use fingertip_tictactoe::{
    config::Settings,
    geometry::{self, Point},
    tictactoe::{
        Game, Snapshot,
        board::{Board, CellIdx},
        opponent::{Agent, NoMovesAvailable},
    },
};

/// Opponent playing a fixed list of cells
#[derive(Debug)]
pub struct ScriptedAgent(Vec<CellIdx>);

impl ScriptedAgent {
    pub fn new(cells: &[CellIdx]) -> Self {
        Self(cells.to_vec())
    }
}

impl Agent for ScriptedAgent {
    fn select_move(&mut self, _board: &Board) -> Result<CellIdx, NoMovesAvailable> {
        if self.0.is_empty() {
            return Err(NoMovesAvailable);
        }
        Ok(self.0.remove(0))
    }
}

/// Monotonic clock advanced by hand
pub struct ManualClock {
    now: Instant,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn advance(&mut self, secs: f64) -> Instant {
        self.now += Duration::from_secs_f64(secs);
        self.now
    }
}

/// Pointer at the center of a cell for the default layout
pub fn pointer_at(idx: CellIdx) -> Option<Point> {
    let layout = Settings::default().layout;
    Some(geometry::cell_center(
        idx,
        layout.board_origin,
        layout.board_size,
    ))
}

/// Human hovers over `idx`, lifts the finger, then waits long enough for the opponent
pub fn human_turn<A: Agent>(game: &mut Game<A>, clock: &mut ManualClock, idx: CellIdx) -> Snapshot {
    game.tick(pointer_at(idx), clock.now());
    game.tick(None, clock.now());
    clock.advance(1.0);
    game.tick(None, clock.now())
}

/// Runs the driver binary with the given arguments, feeding `input` in chunks
///
/// Each chunk is written after the pause that precedes it.
pub fn run_driver(args: &[&str], input: &[(Duration, &str)]) -> Result<Output> {
    let path = env!("CARGO_BIN_EXE_fingertip-tictactoe");
    let mut process = Command::new(path)
        .args(args)
        .env("RUST_LOG", "debug")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .context("Failed to spawn driver")?;

    {
        let mut stdin = process
            .stdin
            .take()
            .ok_or(anyhow!("Driver stdin not captured"))?;
        for (pause, chunk) in input {
            thread::sleep(*pause);
            stdin
                .write_all(chunk.as_bytes())
                .context("Failed to write to driver")?;
            stdin.flush()?;
        }
    }

    process
        .wait_with_output()
        .context("Failed to wait for driver")
}

/// JSON frames written by the driver
pub fn frames(output: &Output) -> Result<Vec<serde_json::Value>> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).with_context(|| format!("Invalid frame: {line}")))
        .collect()
}
