//! Chat interface component
//!
//! Renders the message thread for one patient and the draft input. The
//! draft is component-local; sent messages are not appended to the thread,
//! the caller owns that list.

use super::super::utils::{format_time, hit, truncate};
use super::status_indicator::{IndicatorSize, StatusIndicator};
use crate::consts::cli_consts::layout::{CHAT_HEADER_HEIGHT, CHAT_INPUT_HEIGHT};
use crate::model::{Message, Patient, Sender};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

pub const SEND_LABEL: &str = "[Send]";
const PLACEHOLDER: &str = "Type your message...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Send(String),
}

/// Clickable parts of the chat panel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChatTarget {
    Input,
    Send,
}

/// The uncommitted draft being composed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatInput {
    draft: String,
}

impl ChatInput {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[cfg(test)]
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn push(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    /// Emits the draft and clears it, unless it is blank after trimming.
    pub fn submit(&mut self) -> Option<ChatEvent> {
        if self.draft.trim().is_empty() {
            return None;
        }
        Some(ChatEvent::Send(std::mem::take(&mut self.draft)))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<ChatEvent> {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.backspace();
                None
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.push(c);
                None
            }
            _ => None,
        }
    }
}

pub struct ChatInterface<'a> {
    patient: &'a Patient,
    messages: &'a [Message],
    draft: &'a str,
    focused: bool,
}

impl<'a> ChatInterface<'a> {
    pub fn new(patient: &'a Patient, messages: &'a [Message], draft: &'a str) -> Self {
        Self {
            patient,
            messages,
            draft,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Header, thread and input areas.
    fn areas(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CHAT_HEADER_HEIGHT),
                Constraint::Fill(1),
                Constraint::Length(CHAT_INPUT_HEIGHT),
            ])
            .split(area);
        (chunks[0], chunks[1], chunks[2])
    }

    fn input_block(focused: bool) -> Block<'static> {
        let border = if focused { Color::LightYellow } else { Color::Cyan };
        Block::default()
            .title("MESSAGE")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
    }

    /// The send control: right end of the input line.
    pub fn send_area(area: Rect) -> Rect {
        let (_, _, input) = Self::areas(area);
        Self::send_area_in(Self::input_block(false).inner(input))
    }

    /// Which control, if any, a click at (`column`, `row`) lands on.
    pub fn click_target(area: Rect, column: u16, row: u16) -> Option<ChatTarget> {
        if hit(Self::send_area(area), column, row) {
            return Some(ChatTarget::Send);
        }
        let (_, _, input) = Self::areas(area);
        hit(input, column, row).then_some(ChatTarget::Input)
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let patient = self.patient;
        let mut details = vec![Span::styled(
            patient.channel.label(),
            Style::default().fg(Color::Gray),
        )];
        if let Some(last_seen) = &patient.last_seen {
            details.push(Span::styled(
                format!("  ◷ Last seen: {}", format_time(last_seen)),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    patient.name.as_str(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                StatusIndicator::new(patient.status)
                    .size(IndicatorSize::Large)
                    .span(),
            ]),
            Line::from(details),
        ];
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_thread(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("CONVERSATION")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let bubble_width = ((inner.width as usize) * 7 / 10).max(1);
        let mut lines = Vec::new();
        for message in self.messages {
            let (alignment, style) = match message.sender {
                Sender::Agent => (Alignment::Left, Style::default().fg(Color::White)),
                Sender::Patient => (Alignment::Right, Style::default().fg(Color::LightCyan)),
            };
            lines.push(
                Line::from(Span::styled(
                    truncate(&message.content, bubble_width),
                    style,
                ))
                .alignment(alignment),
            );
            lines.push(
                Line::from(Span::styled(
                    format_time(&message.timestamp),
                    Style::default().fg(Color::DarkGray),
                ))
                .alignment(alignment),
            );
            lines.push(Line::from(""));
        }

        // Keep the newest messages in view.
        let offset = (lines.len() as u16).saturating_sub(inner.height);
        Paragraph::new(lines)
            .scroll((offset, 0))
            .render(inner, buf);
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let block = Self::input_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let text_width = (inner.width as usize).saturating_sub(SEND_LABEL.len() + 1);
        let draft_line = if self.draft.is_empty() && !self.focused {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            // Show the tail of long drafts so the caret stays visible.
            let chars: Vec<char> = self.draft.chars().collect();
            let visible = text_width.saturating_sub(1);
            let start = chars.len().saturating_sub(visible);
            let tail: String = chars[start..].iter().collect();
            let mut spans = vec![Span::styled(tail, Style::default().fg(Color::White))];
            if self.focused {
                spans.push(Span::styled(
                    "▏",
                    Style::default().fg(Color::LightYellow),
                ));
            }
            Line::from(spans)
        };
        Paragraph::new(draft_line).render(inner, buf);

        Paragraph::new(Span::styled(
            SEND_LABEL,
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ))
        .render(Self::send_area_in(inner), buf);
    }

    fn send_area_in(inner: Rect) -> Rect {
        let width = (SEND_LABEL.len() as u16).min(inner.width);
        Rect {
            x: inner.x + inner.width - width,
            y: inner.y,
            width,
            height: inner.height.min(1),
        }
    }
}

impl Widget for ChatInterface<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (header, thread, input) = Self::areas(area);
        self.render_header(header, buf);
        self.render_thread(thread, buf);
        self.render_input(input, buf);
    }
}

/// Shown in place of the chat when no patient is selected.
pub struct NoConversation;

impl Widget for NoConversation {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No conversation open",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Select a patient from the queue to start chatting",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("CHAT")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .render(area, buf);
    }
}
