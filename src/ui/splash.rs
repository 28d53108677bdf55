//! Splash screen rendering module.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const LOGO_NAME: &str = r#"
 ███╗   ███╗ ███████╗ ██████╗  ██╗  ██████╗ ██╗  ██╗  █████╗  ████████╗
 ████╗ ████║ ██╔════╝ ██╔══██╗ ██║ ██╔════╝ ██║  ██║ ██╔══██╗ ╚══██╔══╝
 ██╔████╔██║ █████╗   ██║  ██║ ██║ ██║      ███████║ ███████║    ██║
 ██║╚██╔╝██║ ██╔══╝   ██║  ██║ ██║ ██║      ██╔══██║ ██╔══██║    ██║
 ██║ ╚═╝ ██║ ███████╗ ██████╔╝ ██║ ╚██████╗ ██║  ██║ ██║  ██║    ██║
 ╚═╝     ╚═╝ ╚══════╝ ╚═════╝  ╚═╝  ╚═════╝ ╚═╝  ╚═╝ ╚═╝  ╚═╝    ╚═╝
"#;

pub fn render_splash(f: &mut Frame) {
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| {
            Line::from(Span::styled(
                line,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Omnichannel patient service",
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(Span::styled(
        format!("Version {}", env!("CARGO_PKG_VERSION")),
        Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to continue",
        Style::default().fg(Color::DarkGray),
    )));

    let logo_height = lines.len() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(logo_height),
            Constraint::Fill(1),
        ])
        .split(f.area());

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        rows[1],
    );
}
