//! Snapshot mode execution
//!
//! Renders a single dashboard frame off-screen and prints it as plain text.

use super::SessionData;
use crate::error::SessionError;
use crate::logging::{LogTarget, init_logging};
use crate::model::TabId;
use crate::navigation::position;
use crate::ui::dashboard::{Dashboard, DashboardEvent};
use log::{debug, warn};
use ratatui::{Terminal, backend::TestBackend};
use std::error::Error;

/// What to show before the frame is captured.
#[derive(Debug, Clone, Default)]
pub struct SnapshotOptions {
    pub tab: Option<TabId>,
    pub open_chat: Option<String>,
    pub width: u16,
    pub height: u16,
}

/// Build a dashboard for `session` and drive it to the requested view.
pub fn prepare_dashboard(
    session: &SessionData,
    options: &SnapshotOptions,
) -> Result<Dashboard, SessionError> {
    let mut dashboard = Dashboard::new(&session.ui_config);
    let role = session.ui_config.role;

    if let Some(patient_id) = &options.open_chat {
        if !dashboard.data().queue.iter().any(|e| &e.id == patient_id) {
            return Err(SessionError::UnknownPatient(patient_id.clone()));
        }
        dashboard.apply(DashboardEvent::OpenChat(patient_id.clone()));
    }

    if let Some(tab) = options.tab {
        if position(role, tab).is_none() {
            return Err(SessionError::TabNotAvailable { tab, role });
        }
        dashboard.apply(DashboardEvent::TabChange(tab));
    }

    Ok(dashboard)
}

/// Render one frame of `dashboard` into text, one line per terminal row.
pub fn render_snapshot(
    dashboard: &Dashboard,
    width: u16,
    height: u16,
) -> Result<String, std::io::Error> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| dashboard.render(f))?;

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        let mut line = String::new();
        for x in 0..buffer.area.width {
            line.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}

/// Runs the application in snapshot mode, printing the frame to stdout.
pub fn run_snapshot_mode(
    session: SessionData,
    options: SnapshotOptions,
) -> Result<(), Box<dyn Error>> {
    if let Err(e) = init_logging(LogTarget::Stderr, session.log_level.as_deref()) {
        warn!("Logging unavailable: {}", e);
    }
    if let Some(warning) = &session.config_warning {
        warn!("{}", warning);
    }
    debug!(
        "Rendering {}x{} snapshot for {}",
        options.width, options.height, session.ui_config.role
    );

    let dashboard = prepare_dashboard(&session, &options)?;
    debug!("Snapshot shows the {} tab", dashboard.active_tab());
    print!("{}", render_snapshot(&dashboard, options.width, options.height)?);
    Ok(())
}
