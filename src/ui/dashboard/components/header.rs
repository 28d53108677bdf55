//! Dashboard header component
//!
//! Renders the page title for the active tab and the role's quick actions

use crate::model::{TabId, UserRole};
use crate::navigation::label_of;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Title and subtitle for the page shown on `tab`.
pub fn page_title(role: UserRole, tab: TabId) -> (String, &'static str) {
    match (tab, role) {
        (TabId::Dashboard, UserRole::Manager) => (
            "Management Dashboard".to_string(),
            "Overview of the team and service performance",
        ),
        (TabId::Dashboard, UserRole::Attendant) => (
            "My Dashboard".to_string(),
            "Your conversations and waiting patients",
        ),
        (TabId::Chat, _) => (
            "Conversations".to_string(),
            "Reply to patients across every channel",
        ),
        (tab, _) => (label_of(tab).to_string(), "Clinic workspace"),
    }
}

fn action_spans(role: UserRole) -> Vec<Span<'static>> {
    let hint = Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::styled("[Today]", hint)];
    if role == UserRole::Manager {
        spans.push(Span::raw(" "));
        spans.push(Span::styled("[Reports]", hint));
    }
    spans
}

/// Render the page header.
pub fn render_header(f: &mut Frame, area: Rect, role: UserRole, tab: TabId) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(20)])
        .split(inner);

    let (title, subtitle) = page_title(role, tab);
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, Style::default().fg(Color::DarkGray))),
    ]);
    f.render_widget(title, chunks[0]);

    if tab == TabId::Dashboard {
        let actions = Paragraph::new(Line::from(action_spans(role)).right_aligned());
        f.render_widget(actions, chunks[1]);
    }
}
