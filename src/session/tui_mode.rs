//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::config::get_log_path;
use crate::logging::{LogTarget, init_logging};
use crate::print_cmd_warn;
use crate::ui;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::error::Error;
use std::io::{self, Write};

/// Raw mode, alternate screen and mouse capture for as long as it lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, dropping the guard undoes whatever was entered.
        let guard = TerminalGuard;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal(&mut io::stdout()) {
            warn!("Failed to restore the terminal: {}", e);
        }
    }
}

/// Leave raw mode, the alternate screen and mouse capture, and show the cursor.
///
/// Every step runs even when an earlier one fails; the first error is returned.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}

/// Runs the application in TUI mode
///
/// This function handles:
/// 1. File logging, so log output does not draw over the dashboard
/// 2. Terminal setup, and its restoration on every exit path
/// 3. UI application initialization and execution
pub async fn run_tui_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    let log_path = get_log_path()?;
    init_logging(LogTarget::File(&log_path), session.log_level.as_deref())?;

    if let Some(warning) = &session.config_warning {
        warn!("{}", warning);
        print_cmd_warn!("Using default settings", "{}", warning);
    }

    let ui_config = session.ui_config;
    print_session_starting(ui_config.role, &ui_config.user_name);
    info!("TUI session started, logging to {}", log_path.display());

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = ui::App::new(ui_config);
    let result = ui::run(&mut terminal, app).await;

    drop(guard);
    result?;

    info!("TUI session ended");
    print_session_exit_success();
    Ok(())
}
