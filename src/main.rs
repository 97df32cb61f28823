use std::fs::File;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{LevelFilter, error, info};
use simplelog::{Config, WriteLogger};
use torus_snake::config::Settings;
use torus_snake::game::GameState;
use torus_snake::input::GameInput;
use torus_snake::renderer::{Palette, RenderOptions};
use torus_snake::terminal_runtime::{TerminalSession, restore_terminal};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON settings file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Number of food items on the board.
    #[arg(long)]
    food: Option<usize>,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path.
    #[arg(long = "log-file", default_value = "torus-snake.log")]
    log_file: PathBuf,

    /// Log at debug level and mark the real segment cells on screen.
    #[arg(long)]
    debug: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), File::create(&cli.log_file)?)
        .map_err(io::Error::other)?;

    let settings = resolve_settings(&cli)?;
    info!("starting with {settings:?}");

    install_panic_hook();
    let options = RenderOptions {
        debug_overlay: cli.debug,
    };
    let result = run(settings, cli.seed, options);
    if let Err(error) = &result {
        error!("host loop failed: {error}");
    }
    result
}

fn resolve_settings(cli: &Cli) -> io::Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path).map_err(io::Error::other)?,
        None => Settings::default(),
    };

    if let Some(width) = cli.width {
        settings.grid_width = width;
    }
    if let Some(height) = cli.height {
        settings.grid_height = height;
    }
    if let Some(food) = cli.food {
        settings.food_spawn_count = food;
    }

    settings.validate().map_err(io::Error::other)
}

fn new_session(settings: Settings, seed: Option<u64>) -> io::Result<GameState> {
    let state = match seed {
        Some(seed) => GameState::new_with_seed(settings, seed),
        None => GameState::new(settings),
    };
    state.map_err(io::Error::other)
}

fn run(settings: Settings, seed: Option<u64>, options: RenderOptions) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let palette = Palette::default();
    let mut state = new_session(settings, seed)?;

    loop {
        // Input for this frame is queued before the tick decision.
        match session.poll_input(FRAME_INTERVAL)? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Restart) if state.is_game_over() => {
                state = new_session(settings, seed)?;
            }
            Some(GameInput::Direction(direction)) => state.push_direction(Some(direction)),
            Some(GameInput::Restart) | None => {}
        }

        let now = Instant::now();
        state.update(now);
        session.draw(&state.snapshot(now), &palette, options)?;
    }

    info!("quit with score {}", state.score);
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
