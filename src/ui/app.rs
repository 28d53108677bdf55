//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::{INPUT_POLL_MS, SPLASH_DURATION_SECS};
use crate::model::UserRole;
use crate::ui::dashboard::{Dashboard, Flow};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use log::info;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub role: UserRole,
    pub user_name: String,
    pub unread_notifications: u32,
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(
        role: UserRole,
        user_name: String,
        unread_notifications: u32,
        with_background_color: bool,
    ) -> Self {
        Self {
            role,
            user_name,
            unread_notifications,
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The clinic dashboard.
    Dashboard(Box<Dashboard>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(ui_config: UIConfig) -> Self {
        Self {
            current_screen: Screen::Splash,
            ui_config,
        }
    }

    fn show_dashboard(&mut self) {
        info!(
            "Opening dashboard for {} ({})",
            self.ui_config.user_name, self.ui_config.role
        );
        self.current_screen = Screen::Dashboard(Box::new(Dashboard::new(&self.ui_config)));
    }
}

fn is_ctrl_c(key: &event::KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(SPLASH_DURATION_SECS);

    // UI event loop
    loop {
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.show_dashboard();
                continue;
            }
        }

        if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            continue;
        }

        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);

        match event::read()? {
            Event::Key(key) => {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if let Screen::Dashboard(dashboard) = &mut app.current_screen {
                    if dashboard.handle_key(key, area) == Flow::Quit {
                        info!("Quit requested");
                        return Ok(());
                    }
                    continue;
                }

                if is_ctrl_c(&key) || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(());
                }
                // Any other key skips the splash screen
                app.show_dashboard();
            }
            Event::Mouse(mouse) => {
                if let Screen::Dashboard(dashboard) = &mut app.current_screen {
                    dashboard.handle_mouse(mouse, area);
                }
            }
            // Resizes are picked up by the next draw
            _ => {}
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(dashboard) => dashboard.render(f),
    }
}
