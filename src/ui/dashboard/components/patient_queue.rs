//! Patient queue component
//!
//! Renders waiting conversations in the order the caller supplies them.
//! A row activation opens the chat; the inner assign control assigns the
//! patient and does not also open the chat.

use super::super::utils::{channel_tag, format_wait_time, hit, priority_color, truncate};
use super::status_indicator::{IndicatorSize, StatusIndicator};
use crate::consts::cli_consts::layout::QUEUE_ROW_HEIGHT;
use crate::model::{PresenceStatus, QueueEntry};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

pub const ASSIGN_LABEL: &str = "[Assign]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueEvent {
    OpenChat(String),
    AssignPatient(String),
}

pub struct PatientQueue<'a> {
    queue: &'a [QueueEntry],
    /// Presence lookup for the dot next to each name.
    presence: Box<dyn Fn(&str) -> PresenceStatus + 'a>,
    cursor: Option<usize>,
    focused: bool,
}

impl<'a> PatientQueue<'a> {
    pub fn new(queue: &'a [QueueEntry]) -> Self {
        Self {
            queue,
            presence: Box::new(|_| PresenceStatus::Online),
            cursor: None,
            focused: false,
        }
    }

    pub fn presence(mut self, lookup: impl Fn(&str) -> PresenceStatus + 'a) -> Self {
        self.presence = Box::new(lookup);
        self
    }

    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Row activation for the entry at `index`.
    pub fn open(&self, index: usize) -> Option<QueueEvent> {
        self.queue
            .get(index)
            .map(|entry| QueueEvent::OpenChat(entry.id.clone()))
    }

    /// Assign control of the entry at `index`.
    pub fn assign(&self, index: usize) -> Option<QueueEvent> {
        self.queue
            .get(index)
            .map(|entry| QueueEvent::AssignPatient(entry.id.clone()))
    }

    /// Event for a click at (`column`, `row`) when the queue is drawn in `area`.
    ///
    /// The assign control is tested first and wins: a click on it never
    /// also opens the chat. Rows are scrolled exactly as they are rendered.
    pub fn handle_click(&self, area: Rect, column: u16, row: u16) -> Option<QueueEvent> {
        let inner = Self::block(self.queue.len(), self.focused).inner(area);
        let first = self.first_visible(inner);
        for (slot, index) in (first..self.queue.len()).enumerate() {
            let Some(row_area) = Self::row_area(inner, slot) else {
                break;
            };
            if hit(Self::assign_area(row_area), column, row) {
                return self.assign(index);
            }
            if hit(row_area, column, row) {
                return self.open(index);
            }
        }
        None
    }

    fn block(count: usize, focused: bool) -> Block<'static> {
        let border = if focused { Color::LightYellow } else { Color::Cyan };
        Block::default()
            .title("PATIENT QUEUE")
            .title_top(Line::from(format!(" {} patients ", count)).right_aligned())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
    }

    /// Number of whole rows that fit in `inner`.
    pub fn visible_rows(inner: Rect) -> usize {
        (inner.height / QUEUE_ROW_HEIGHT) as usize
    }

    /// Index of the first entry drawn in `inner`. The cursor row is kept
    /// on screen by scrolling it to the last visible slot.
    pub fn first_visible(&self, inner: Rect) -> usize {
        let visible = Self::visible_rows(inner).max(1);
        match self.cursor {
            Some(cursor) if cursor >= visible => {
                (cursor + 1 - visible).min(self.queue.len().saturating_sub(visible))
            }
            _ => 0,
        }
    }

    /// Area of the row in visible `slot`, or `None` once rows no longer fit.
    pub fn row_area(inner: Rect, slot: usize) -> Option<Rect> {
        let offset = (slot as u16).checked_mul(QUEUE_ROW_HEIGHT)?;
        if offset.saturating_add(QUEUE_ROW_HEIGHT) > inner.height {
            return None;
        }
        Some(Rect {
            x: inner.x,
            y: inner.y + offset,
            width: inner.width,
            height: QUEUE_ROW_HEIGHT,
        })
    }

    /// The assign control: right end of a row's first line.
    pub fn assign_area(row_area: Rect) -> Rect {
        let width = (ASSIGN_LABEL.len() as u16).min(row_area.width);
        Rect {
            x: row_area.x + row_area.width - width,
            y: row_area.y,
            width,
            height: 1,
        }
    }

    fn render_row(&self, index: usize, entry: &QueueEntry, area: Rect, buf: &mut Buffer) {
        let selected = self.focused && self.cursor == Some(index);
        let row_style = if selected {
            Style::default().bg(Color::Rgb(32, 40, 48))
        } else {
            Style::default()
        };
        buf.set_style(area, row_style);

        let assign_area = Self::assign_area(area);
        let unread = if entry.unread_count > 0 {
            format!(" {} ", entry.unread_count)
        } else {
            String::new()
        };
        let name_width = (area.width as usize)
            .saturating_sub(ASSIGN_LABEL.len() + unread.len() + 2 + 4 + 10);

        let mut first = vec![
            Span::raw(if selected { "›" } else { " " }),
            StatusIndicator::new((self.presence)(&entry.id))
                .size(IndicatorSize::Small)
                .span(),
            Span::raw(" "),
            Span::styled(
                truncate(&entry.name, name_width),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ", channel_tag(entry.channel)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("[{}]", entry.priority),
                Style::default().fg(priority_color(entry.priority)),
            ),
        ];
        if !unread.is_empty() {
            let used: usize = first.iter().map(|s| s.width()).sum();
            let gap = (area.width as usize)
                .saturating_sub(used + unread.len() + ASSIGN_LABEL.len() + 1);
            first.push(Span::raw(" ".repeat(gap)));
            first.push(Span::styled(
                unread,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let mut details = vec![Span::styled(
            format!("   ◷ {}", format_wait_time(entry.wait_minutes)),
            Style::default().fg(Color::DarkGray),
        )];
        if let Some(assignee) = &entry.assigned_to {
            details.push(Span::styled(
                format!("   ☺ {}", assignee),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let lines = vec![
            Line::from(first),
            Line::from(Span::styled(
                format!(
                    "   {}",
                    truncate(&entry.last_message, (area.width as usize).saturating_sub(3))
                ),
                Style::default().fg(Color::Gray),
            )),
            Line::from(details),
        ];
        Paragraph::new(lines).render(area, buf);

        Paragraph::new(Span::styled(
            ASSIGN_LABEL,
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ))
        .render(assign_area, buf);
    }
}

impl Widget for PatientQueue<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Self::block(self.queue.len(), self.focused);
        let inner = block.inner(area);
        let first = self.first_visible(inner);
        let last = (first + Self::visible_rows(inner)).min(self.queue.len());
        if last > first && (first > 0 || last < self.queue.len()) {
            block = block.title_bottom(
                Line::from(format!(" {}-{} of {} ", first + 1, last, self.queue.len()))
                    .right_aligned(),
            );
        }
        block.render(area, buf);

        if self.queue.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No patients waiting",
                Style::default().fg(Color::DarkGray),
            )))
            .render(inner, buf);
            return;
        }

        for (slot, (index, entry)) in self.queue.iter().enumerate().skip(first).enumerate() {
            let Some(row_area) = Self::row_area(inner, slot) else {
                break;
            };
            self.render_row(index, entry, row_area, buf);
        }
    }
}
