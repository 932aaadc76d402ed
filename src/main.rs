//! Ludus: sign up, set up a profile and pick your favourite board games,
//! all in the terminal.
//!
//! Everything typed stays in memory and is gone when the program exits.
//! Run with `--print-config` to dump the default configuration file.

mod app;
mod config;
mod core;
mod ui;

use std::fs::File;
use std::io::{self, stderr};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::EnvFilter;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::config::AppConfig;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Board-game meetup onboarding, in your terminal")]
struct Cli {
    /// Read configuration from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Don't capture the mouse.
    #[arg(long = "no-mouse")]
    no_mouse: bool,

    /// Write logs to this file (filter with `RUST_LOG`).
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the default configuration file and exit.
    #[arg(long = "print-config")]
    print_config: bool,
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            // Only emits when RUST_LOG is set; the TUI owns the screen.
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default().serialise());
        return Ok(());
    }

    init_tracing(cli.log_file.as_ref())?;

    let config = AppConfig::load(cli.config.as_deref())?;
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut state = AppState::new(config);
    let mouse = !cli.no_mouse;

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen)?;
    if mouse {
        execute!(stderr_handle, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state, tick_rate).await;

    // ── teardown ──────────────────────────────────────────────
    // Always restore the terminal, even if the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    tracing::info!(screen = state.screen().key(), "exiting");
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    state: &mut AppState,
    tick_rate: Duration,
) -> Result<()> {
    let mut events = spawn_event_reader(tick_rate);

    loop {
        let mut drawn_area = Rect::default();
        terminal.draw(|frame| {
            drawn_area = frame.area();
            ui::screens::draw(frame, state);
        })?;
        state.terminal_area = drawn_area;

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(state, k),
            AppEvent::Mouse(m) => handler::handle_mouse(state, m),
            AppEvent::Resize(w, h) => state.terminal_area = Rect::new(0, 0, w, h),
            AppEvent::Tick => {}
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
