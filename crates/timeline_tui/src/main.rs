//! Terminal UI for timeline tic-tac-toe.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod settings;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::{App, Control};
use cli::Cli;
use settings::Settings;
use terminal::Tui;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;
    initialize_tracing(&settings)?;

    info!(?settings, "Starting timeline TUI");

    terminal::install_panic_hook();
    let res = terminal::with_terminal(|tui| run_app(tui, App::new(&settings)));

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Timeline TUI exited");
    res
}

/// Logs go to a file so they do not interfere with the TUI.
fn initialize_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Draw, wait for one key, apply it. One state change per event.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Press && app.handle_key(key.code) == Control::Quit {
            info!("User quit");
            return Ok(());
        }
    }
}
