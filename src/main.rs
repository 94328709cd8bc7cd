//! Terminal snake runner (default binary).
//!
//! Reads keys with crossterm, advances the game on a fixed tick and renders
//! through the framebuffer-based terminal view.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use tui_snake::core::{Game, GameConfig, GameSnapshot};
use tui_snake::input::{key_to_direction, should_quit, TurnBuffer};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_GROWTH_SPEED, DEFAULT_SNAKE_LENGTH,
    TICK_MS,
};

#[derive(Parser, Debug)]
#[command(name = "tui-snake", about = "Turn-based terminal snake")]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: u16,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: u16,

    /// Starting snake length
    #[arg(long, default_value_t = DEFAULT_SNAKE_LENGTH)]
    length: u16,

    /// An apple spawns on one tick in N
    #[arg(long, default_value_t = DEFAULT_GROWTH_SPEED)]
    growth_speed: u32,

    /// Seed for apple placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self, seed: u64) -> GameConfig {
        GameConfig::default()
            .with_board(self.width, self.height)
            .with_snake_length(self.length)
            .with_growth_speed(self.growth_speed)
            .with_seed(seed)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = args.config(seed);
    let game = Game::from_config(&config).context("invalid game configuration")?;
    info!(
        "starting {}x{} game, length {}, growth speed {}, seed {}",
        config.width, config.height, config.snake_length, config.growth_speed, seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();

    let game = result?;
    if game.is_over() {
        println!("Game over! Score: {}", game.score());
    } else {
        println!("Score: {}", game.score());
    }
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, log_config, file)?;
    Ok(())
}

/// Play until the quit key; returns the last game state.
fn run(term: &mut TerminalRenderer, mut game: Game) -> Result<Game> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut turns = TurnBuffer::new();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit at score {}", game.score());
                        return Ok(game);
                    }
                    if let Some(direction) = key_to_direction(key) {
                        if turns.push(direction, game.snake().direction()) {
                            debug!("queued turn {}", direction);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if !game.is_over() {
                game = game.update(turns.pop());
                if game.is_over() {
                    info!("game over, score {}", game.score());
                    turns.clear();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_a_valid_game() {
        let args = Args::try_parse_from(["tui-snake"]).unwrap();
        let config = args.config(7);
        assert_eq!(config, GameConfig::default().with_seed(7));
        assert!(Game::from_config(&config).is_ok());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "tui-snake",
            "--width",
            "30",
            "--height",
            "15",
            "--length",
            "3",
            "--growth-speed",
            "4",
            "--seed",
            "99",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(99));

        let config = args.config(99);
        assert_eq!((config.width, config.height), (30, 15));
        assert_eq!(config.snake_length, 3);
        assert_eq!(config.growth_speed, 4);
    }

    #[test]
    fn zero_growth_speed_is_rejected() {
        let args = Args::try_parse_from(["tui-snake", "--growth-speed", "0"]).unwrap();
        assert!(Game::from_config(&args.config(1)).is_err());
    }
}
