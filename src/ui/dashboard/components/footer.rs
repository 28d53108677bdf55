//! Dashboard footer component
//!
//! Renders key hints for the focused component

use super::super::state::Focus;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn key_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Sidebar => "[Q] Quit | [Tab] Focus | [↑↓] Move | [Enter] Open | [1-9] Tab",
        Focus::Queue => "[Q] Quit | [Tab] Focus | [↑↓] Move | [Enter] Chat | [A] Assign",
        Focus::ChatInput => "[Esc] Leave input | [Enter] Send | [Ctrl+C] Quit",
    }
}

/// Render footer.
pub fn render_footer(f: &mut Frame, area: Rect, focus: Focus) {
    let footer = Paragraph::new(key_hints(focus))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
