use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    time::{self, MissedTickBehavior},
};

use fingertip_tictactoe::{
    config::{Layout, Settings},
    display::{self, Format, Renderer},
    geometry::Point,
    input::{self, Command},
    render::{self, Frame},
    tictactoe::{Game, opponent::RandomAgent},
    timing::TickTimer,
};

/// Ticks between two tick rate reports
const TIMER_TICKS: usize = 256;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "fingertip-tictactoe", version, about)]
struct Args {
    /// Seed of the opponent's random moves
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds the opponent waits before playing
    #[arg(long, value_name = "SECONDS", default_value_t = 0.7)]
    opponent_delay: f64,

    /// Horizontal position of the board
    #[arg(long, value_name = "PIXELS", default_value_t = 10)]
    board_x: i32,

    /// Vertical position of the board
    #[arg(long, value_name = "PIXELS", default_value_t = 10)]
    board_y: i32,

    /// Side of the board
    #[arg(long, value_name = "PIXELS", default_value_t = 580)]
    board_size: i32,

    /// Window width
    #[arg(long, value_name = "PIXELS", default_value_t = 600)]
    width: i32,

    /// Window height
    #[arg(long, value_name = "PIXELS", default_value_t = 680)]
    height: i32,

    /// Ticks per second while waiting for input
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        if !self.opponent_delay.is_finite() || self.opponent_delay < 0.0 {
            bail!("Invalid opponent delay: {}", self.opponent_delay);
        }
        Ok(Settings {
            layout: Layout {
                board_origin: Point::new(self.board_x, self.board_y),
                board_size: self.board_size,
                window_width: self.width,
                window_height: self.height,
            },
            opponent_delay: Duration::from_secs_f64(self.opponent_delay),
        })
    }
}

/// Ticks the game and presents the frame if it changed
struct Driver {
    game: Game<RandomAgent<Xoshiro256PlusPlus>>,
    renderer: Box<dyn Renderer>,
    /// Latest pointer sample, kept until the next input line
    pointer: Option<Point>,
    last_frame: Option<Frame>,
    timer: TickTimer<TIMER_TICKS>,
}

impl Driver {
    fn tick(&mut self) -> Result<()> {
        let snapshot = self.game.tick(self.pointer, Instant::now());
        let frame = render::render_frame(&snapshot, self.pointer, &self.game.settings().layout);

        self.timer.on_trigger(|timer| {
            log::trace!("Ticks per second: {rate:.1}", rate = timer.ticks_rate());
        });

        if self.last_frame.as_ref() != Some(&frame) {
            self.renderer.present(&frame)?;
            self.last_frame = Some(frame);
        }
        Ok(())
    }

    /// Applies a command, returns `false` to quit
    fn handle(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Pointer(pointer) => self.pointer = pointer,
            Command::Reset => {
                self.game.reset();
                self.pointer = None;
            }
            Command::Quit => return Ok(false),
        }
        self.tick()?;
        Ok(true)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();
    log::debug!("Command line arguments: {args:?}");

    let settings = args.settings()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Opponent seed: {seed}");

    let game = Game::new(
        settings,
        RandomAgent::new(Xoshiro256PlusPlus::seed_from_u64(seed)),
    )
    .context("Invalid settings")?;

    let mut driver = Driver {
        game,
        renderer: display::renderer(args.format, std::io::stdout()),
        pointer: None,
        last_frame: None,
        timer: TickTimer::new(),
    };

    // Initial frame
    driver.tick()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut interval = time::interval(Duration::from_secs(1) / args.fps.max(1));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    log::info!("End of input");
                    break;
                };
                match input::parse_command(&line, &driver.game.settings().layout) {
                    Ok(command) => {
                        log::trace!("Command: {command:?}");
                        if !driver.handle(command)? {
                            log::info!("Quit requested");
                            break;
                        }
                    }
                    Err(e) => log::warn!("Ignoring input: {e}"),
                }
            }
            _ = interval.tick() => driver.tick()?,
        }
    }

    log::debug!("Final state:\n{game}", game = driver.game);
    Ok(())
}
