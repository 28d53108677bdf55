//! Insight cards beside the patient queue
//!
//! Channel activity for everyone, the attendant ranking for managers.

use super::super::utils::channel_tag;
use crate::model::{Channel, UserRole};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

fn card(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
}

fn channel_color(channel: Channel) -> Color {
    match channel {
        Channel::WhatsApp => Color::Green,
        Channel::Messenger => Color::Blue,
        Channel::Instagram => Color::Magenta,
        Channel::Email => Color::Yellow,
        Channel::Phone => Color::Gray,
    }
}

fn render_channel_activity(f: &mut Frame, area: Rect, activity: &[(Channel, u8)]) {
    let block = card("MOST ACTIVE CHANNELS");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1); activity.len()];
    constraints.push(Constraint::Fill(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for ((channel, share), row) in activity.iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(channel_color(*channel)))
            .percent(u16::from(*share).min(100))
            .label(format!("{} {} {}%", channel_tag(*channel), channel.label(), share));
        f.render_widget(gauge, *row);
    }
}

fn render_top_attendants(f: &mut Frame, area: Rect, ranking: &[(&str, u32)]) {
    let lines: Vec<Line> = ranking
        .iter()
        .enumerate()
        .map(|(rank, (name, handled))| {
            Line::from(vec![
                Span::styled(
                    format!("{}. ", rank + 1),
                    Style::default().fg(Color::LightYellow),
                ),
                Span::styled(
                    *name,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} conversations", handled),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).block(card("TOP ATTENDANTS")), area);
}

/// Render the insight column for `role`.
pub fn render_insights(
    f: &mut Frame,
    area: Rect,
    role: UserRole,
    activity: &[(Channel, u8)],
    ranking: &[(&str, u32)],
) {
    if role != UserRole::Manager {
        render_channel_activity(f, area, activity);
        return;
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(activity.len() as u16 + 2),
            Constraint::Fill(1),
        ])
        .split(area);
    render_channel_activity(f, chunks[0], activity);
    render_top_attendants(f, chunks[1], ranking);
}
