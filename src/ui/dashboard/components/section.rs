//! Placeholder page for tabs without a dedicated view

use crate::model::TabId;
use crate::navigation::label_of;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_section(f: &mut Frame, area: Rect, tab: TabId) {
    let label = label_of(tab);
    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            label,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "This section has no content yet",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(label.to_uppercase())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(body, area);
}
