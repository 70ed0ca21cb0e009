//! Raw-mode terminal setup and guaranteed teardown.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::warn;

/// Terminal type the event loop draws to.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs a cleanup closure once when dropped, including during unwinding.
pub struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    /// Arms the guard.
    pub fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Leaves raw mode and the alternate screen. Safe to call more than once.
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

fn restore_or_log() {
    if let Err(e) = restore_terminal() {
        warn!(error = %e, "Failed to restore terminal");
    }
}

/// Restores the terminal before the default hook prints a panic message.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_or_log();
        previous(info);
    }));
}

/// Enters raw mode and the alternate screen, then runs `body` on the terminal.
///
/// The terminal is restored on every exit path: success, error, a failure
/// partway through setup, or a panic in `body`.
pub fn with_terminal<T>(body: impl FnOnce(&mut Tui) -> Result<T>) -> Result<T> {
    enable_raw_mode()?;
    let _guard = RestoreGuard::new(restore_or_log);

    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    body(&mut terminal)
}
