use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use draw_poker::config::GameConfig;
use draw_poker::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::fs::File;
use std::io::{self, IsTerminal, Stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Five-card draw video poker in the terminal.
#[derive(Debug, Parser)]
#[command(name = "draw-poker", version)]
struct Args {
    /// Seed for reproducible shuffles
    #[arg(long)]
    seed: Option<u64>,
    /// Write debug logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// UI refresh interval in milliseconds
    #[arg(long, default_value_t = 250)]
    tick_ms: u64,
}

impl Args {
    fn config(&self) -> GameConfig {
        match self.seed {
            Some(seed) => GameConfig::default().with_seed(seed),
            None => GameConfig::default(),
        }
    }
}

fn init_logging(path: &Path) -> io::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::WriteLogger::init(log::LevelFilter::Debug, config, File::create(path)?)
        .map_err(io::Error::other)
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }
    if !io::stdout().is_terminal() {
        println!(
            "draw-poker requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            draw_poker::VERSION
        );
        return Ok(());
    }
    let mut terminal = setup_terminal()?;
    let mut app = AppState::new(args.config());
    log::info!("starting session {}", app.session());

    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(args.tick_ms));

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
